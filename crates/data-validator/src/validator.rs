//! Data Validator for Range Checking

use crate::error::ValidationError;
use risk_rules::Observation;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Whether validation runs at all
    pub enabled: bool,
    /// Wind valid range (knots)
    pub wind_range: (f64, f64),
    /// Visibility valid range (statute miles)
    pub visibility_range: (f64, f64),
    /// Temperature valid range (°C)
    pub temperature_range: (f64, f64),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            wind_range: (0.0, 250.0),
            visibility_range: (0.0, 100.0),
            temperature_range: (-90.0, 60.0),
        }
    }
}

impl ValidationConfig {
    /// Skip validation entirely
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}

/// Result of validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether all values are valid
    pub valid: bool,
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Number of fields validated
    pub fields_checked: usize,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid(fields_checked: usize) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            fields_checked,
        }
    }

    /// Create an invalid result with errors
    pub fn invalid(errors: Vec<ValidationError>, fields_checked: usize) -> Self {
        Self {
            valid: false,
            errors,
            fields_checked,
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            return write!(f, "{} fields valid", self.fields_checked);
        }
        let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        f.write_str(&messages.join("; "))
    }
}

/// Data validator for weather observations
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a single value against a range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), ValidationError> {
        if !value.is_finite() {
            Err(ValidationError::NotFinite(field))
        } else if value < range.0 || value > range.1 {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Validate wind speed
    pub fn validate_wind(&self, wind: f64) -> Result<(), ValidationError> {
        self.validate_range("wind", wind, self.config.wind_range)
    }

    /// Validate visibility
    pub fn validate_visibility(&self, visibility: f64) -> Result<(), ValidationError> {
        self.validate_range("visibility", visibility, self.config.visibility_range)
    }

    /// Validate temperature
    pub fn validate_temperature(&self, temperature: f64) -> Result<(), ValidationError> {
        self.validate_range("temperature", temperature, self.config.temperature_range)
    }

    /// Validate every field, collecting all failures
    pub fn validate(&self, observation: &Observation) -> ValidationResult {
        if !self.config.enabled {
            return ValidationResult::valid(0);
        }

        let errors: Vec<ValidationError> = [
            self.validate_wind(observation.wind),
            self.validate_visibility(observation.visibility),
            self.validate_temperature(observation.temperature),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if errors.is_empty() {
            ValidationResult::valid(3)
        } else {
            debug!("Observation rejected: {} errors", errors.len());
            ValidationResult::invalid(errors, 3)
        }
    }

    /// Whether validation is switched on
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_observation() {
        let validator = Validator::default();
        let result = validator.validate(&Observation::new(12.0, 10.0, 15.0));
        assert!(result.valid);
        assert_eq!(result.fields_checked, 3);
    }

    #[test]
    fn test_negative_visibility_rejected() {
        let validator = Validator::default();
        let result = validator.validate(&Observation::new(12.0, -1.0, 15.0));
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![ValidationError::OutOfRange {
                field: "visibility",
                value: -1.0,
                min: 0.0,
                max: 100.0,
            }]
        );
    }

    #[test]
    fn test_collects_all_errors() {
        let validator = Validator::default();
        let result = validator.validate(&Observation::new(-5.0, f64::NAN, 99.0));
        assert_eq!(result.errors.len(), 3);
        assert!(result.errors.contains(&ValidationError::NotFinite("visibility")));
        assert!(result.to_string().contains("temperature"));
    }

    #[test]
    fn test_boundaries_inclusive() {
        let validator = Validator::default();
        assert!(validator.validate_wind(0.0).is_ok());
        assert!(validator.validate_wind(250.0).is_ok());
        assert!(validator.validate_temperature(-90.0).is_ok());
        assert!(validator.validate_temperature(60.1).is_err());
    }

    #[test]
    fn test_infinity_rejected() {
        let validator = Validator::default();
        assert_eq!(
            validator.validate_wind(f64::INFINITY),
            Err(ValidationError::NotFinite("wind"))
        );
    }

    #[test]
    fn test_disabled_accepts_anything() {
        let validator = Validator::new(ValidationConfig::disabled());
        assert!(!validator.is_enabled());
        assert!(validator.validate(&Observation::new(f64::NAN, -1.0, 1.0e9)).valid);
    }

    proptest! {
        #[test]
        fn prop_in_range_always_valid(
            wind in 0.0f64..=250.0,
            vis in 0.0f64..=100.0,
            temp in -90.0f64..=60.0,
        ) {
            prop_assert!(Validator::default().validate(&Observation::new(wind, vis, temp)).valid);
        }
    }
}
