//! Weather Risk Rules
//!
//! Core value types shared by the whole pipeline and the deterministic
//! rule table used as the floor for every risk assessment.
//!
//! Units are fixed across the workspace: wind in knots, visibility in
//! statute miles, temperature in degrees Celsius.

mod level;
mod observation;
mod rules;

pub use level::{InvalidRiskLevel, RiskLevel};
pub use observation::Observation;
pub use rules::{evaluate, RuleEngine, RuleThresholds};
