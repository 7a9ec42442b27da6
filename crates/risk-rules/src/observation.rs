//! Surface Weather Observation

use serde::{Deserialize, Serialize};

/// A single weather observation, built per request and never stored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Wind speed (knots)
    pub wind: f64,
    /// Visibility (statute miles)
    pub visibility: f64,
    /// Temperature (°C)
    pub temperature: f64,
}

impl Observation {
    /// Wind used when a report carries no wind speed
    pub const DEFAULT_WIND: f64 = 0.0;
    /// Visibility used when a report carries no visibility
    pub const DEFAULT_VISIBILITY: f64 = 10.0;
    /// Temperature used when a report carries no temperature
    pub const DEFAULT_TEMPERATURE: f64 = 20.0;

    /// Create a new observation
    pub fn new(wind: f64, visibility: f64, temperature: f64) -> Self {
        Self {
            wind,
            visibility,
            temperature,
        }
    }

    /// Build an observation from optional readings, substituting calm/clear
    /// defaults for anything missing
    pub fn with_defaults(
        wind: Option<f64>,
        visibility: Option<f64>,
        temperature: Option<f64>,
    ) -> Self {
        Self {
            wind: wind.unwrap_or(Self::DEFAULT_WIND),
            visibility: visibility.unwrap_or(Self::DEFAULT_VISIBILITY),
            temperature: temperature.unwrap_or(Self::DEFAULT_TEMPERATURE),
        }
    }

    /// Model input vector in (wind, visibility, temperature) order
    pub fn features(&self) -> [f64; 3] {
        [self.wind, self.visibility, self.temperature]
    }
}

impl Default for Observation {
    fn default() -> Self {
        Self::with_defaults(None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let obs = Observation::with_defaults(Some(12.0), None, None);
        assert_eq!(obs, Observation::new(12.0, 10.0, 20.0));
    }

    #[test]
    fn test_zero_reading_is_kept() {
        let obs = Observation::with_defaults(Some(0.0), Some(0.0), Some(0.0));
        assert_eq!(obs.features(), [0.0, 0.0, 0.0]);
    }
}
