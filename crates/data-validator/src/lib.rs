//! Observation Validation
//!
//! Range checking for weather observations arriving from callers. The risk
//! core evaluates any input mechanically; this crate is where physically
//! impossible readings get turned away.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{ValidationConfig, ValidationResult, Validator};
