//! Rule Table
//!
//! Fixed wind/visibility thresholds. Evaluated top down, first match wins:
//!
//! | condition                        | level    |
//! |----------------------------------|----------|
//! | wind > 30 kt or visibility < 5   | High     |
//! | wind > 15 kt or visibility < 10  | Moderate |
//! | otherwise                        | Low      |
//!
//! The table is total: negative, zero and non-finite inputs are evaluated
//! mechanically and never rejected here.

use crate::level::RiskLevel;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Threshold table for the rule engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleThresholds {
    /// Wind above this is High (knots)
    pub high_wind: f64,
    /// Visibility below this is High (statute miles)
    pub high_visibility: f64,
    /// Wind above this is Moderate (knots)
    pub moderate_wind: f64,
    /// Visibility below this is Moderate (statute miles)
    pub moderate_visibility: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            high_wind: 30.0,
            high_visibility: 5.0,
            moderate_wind: 15.0,
            moderate_visibility: 10.0,
        }
    }
}

/// Deterministic rule evaluator
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    thresholds: RuleThresholds,
}

impl RuleEngine {
    /// Create a rule engine with a custom threshold table
    pub fn new(thresholds: RuleThresholds) -> Self {
        Self { thresholds }
    }

    /// Classify wind and visibility. Temperature plays no part in the rules.
    pub fn evaluate(&self, wind: f64, visibility: f64) -> RiskLevel {
        let t = &self.thresholds;

        let level = if wind > t.high_wind || visibility < t.high_visibility {
            RiskLevel::High
        } else if wind > t.moderate_wind || visibility < t.moderate_visibility {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        };

        debug!("Rule evaluation: wind={} vis={} -> {}", wind, visibility, level);
        level
    }

    /// Get the threshold table
    pub fn thresholds(&self) -> &RuleThresholds {
        &self.thresholds
    }
}

/// Evaluate with the default threshold table
pub fn evaluate(wind: f64, visibility: f64) -> RiskLevel {
    RuleEngine::default().evaluate(wind, visibility)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wind_triggers_high() {
        assert_eq!(evaluate(35.0, 8.0), RiskLevel::High);
    }

    #[test]
    fn test_wind_triggers_moderate() {
        assert_eq!(evaluate(20.0, 12.0), RiskLevel::Moderate);
    }

    #[test]
    fn test_calm_and_clear_is_low() {
        assert_eq!(evaluate(10.0, 12.0), RiskLevel::Low);
    }

    #[test]
    fn test_visibility_triggers_high_despite_low_wind() {
        assert_eq!(evaluate(5.0, 4.0), RiskLevel::High);
    }

    #[test]
    fn test_boundaries_are_exclusive() {
        assert_eq!(evaluate(30.0, 10.0), RiskLevel::Moderate);
        assert_eq!(evaluate(15.0, 10.0), RiskLevel::Low);
        assert_eq!(evaluate(0.0, 5.0), RiskLevel::Moderate);
    }

    #[test]
    fn test_out_of_range_inputs_are_evaluated() {
        assert_eq!(evaluate(-10.0, 20.0), RiskLevel::Low);
        assert_eq!(evaluate(0.0, -1.0), RiskLevel::High);
        assert_eq!(evaluate(f64::NAN, f64::NAN), RiskLevel::Low);
        assert_eq!(evaluate(f64::INFINITY, 20.0), RiskLevel::High);
    }

    #[test]
    fn test_custom_thresholds() {
        let engine = RuleEngine::new(RuleThresholds {
            high_wind: 25.0,
            ..Default::default()
        });
        assert_eq!(engine.evaluate(28.0, 12.0), RiskLevel::High);
        assert_eq!(evaluate(28.0, 12.0), RiskLevel::Moderate);
    }

    proptest! {
        #[test]
        fn prop_strong_wind_is_high(wind in 30.0001f64..1.0e6, vis in -1.0e6f64..1.0e6) {
            prop_assert_eq!(evaluate(wind, vis), RiskLevel::High);
        }

        #[test]
        fn prop_poor_visibility_is_high(wind in -1.0e6f64..1.0e6, vis in -1.0e6f64..4.9999) {
            prop_assert_eq!(evaluate(wind, vis), RiskLevel::High);
        }

        #[test]
        fn prop_fresh_wind_clear_sky_is_moderate(wind in 15.0f64..=30.0, vis in 10.0f64..1.0e6) {
            prop_assume!(wind > 15.0);
            prop_assert_eq!(evaluate(wind, vis), RiskLevel::Moderate);
        }

        #[test]
        fn prop_light_wind_depends_on_visibility(wind in -1.0e6f64..=15.0, vis in 5.0f64..1.0e6) {
            let expected = if vis >= 10.0 { RiskLevel::Low } else { RiskLevel::Moderate };
            prop_assert_eq!(evaluate(wind, vis), expected);
        }
    }
}
