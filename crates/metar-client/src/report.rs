//! AVWX Report Decoding and Unit Normalization

use crate::error::MetarError;
use chrono::{DateTime, Utc};
use risk_rules::Observation;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Metres per statute mile
const METERS_PER_SM: f64 = 1609.344;
/// Kilometres per statute mile
const KM_PER_SM: f64 = 1.609344;
/// Knots per metre-per-second
const KT_PER_MPS: f64 = 1.943_844;
/// Kilometres-per-hour per knot
const KMH_PER_KT: f64 = 1.852;
/// Knots per mile-per-hour
const KT_PER_MPH: f64 = 0.868_976;

/// Numeric field as AVWX reports it; only the parsed value matters here
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvwxNumber {
    pub value: Option<f64>,
}

/// Timestamp field
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvwxTime {
    pub dt: Option<DateTime<Utc>>,
}

/// Units the report was issued in
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AvwxUnits {
    pub visibility: String,
    pub wind_speed: String,
    pub temperature: String,
}

impl Default for AvwxUnits {
    fn default() -> Self {
        Self {
            visibility: "sm".to_string(),
            wind_speed: "kt".to_string(),
            temperature: "C".to_string(),
        }
    }
}

/// Subset of the AVWX METAR JSON consumed by the service
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AvwxMetar {
    pub station: Option<String>,
    pub raw: Option<String>,
    pub time: Option<AvwxTime>,
    pub wind_speed: Option<AvwxNumber>,
    pub visibility: Option<AvwxNumber>,
    pub temperature: Option<AvwxNumber>,
    pub units: Option<AvwxUnits>,
}

/// Normalized report handed to the rest of the system
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetarReport {
    /// Station code
    pub station: String,
    /// Raw METAR text
    pub raw: Option<String>,
    /// Observation time
    pub observed_at: Option<DateTime<Utc>>,
    /// Normalized readings
    pub observation: Observation,
}

impl AvwxMetar {
    /// Decode a JSON body
    pub fn from_json(body: &str) -> Result<Self, MetarError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Normalize into a report.
    ///
    /// Absent or null readings take the calm/clear defaults; a reported
    /// zero is kept as zero.
    pub fn into_report(self, requested: &str) -> MetarReport {
        let units = self.units.unwrap_or_default();
        let value = |field: Option<AvwxNumber>| field.and_then(|n| n.value);

        let wind = value(self.wind_speed).map(|v| wind_to_knots(v, &units.wind_speed));
        let visibility = value(self.visibility)
            .map(|v| round_tenth(visibility_to_sm(v, &units.visibility)));
        let temperature = value(self.temperature).map(|v| temperature_to_celsius(v, &units.temperature));

        if wind.is_none() || visibility.is_none() || temperature.is_none() {
            debug!(
                "METAR for {} missing readings (wind={:?} vis={:?} temp={:?}), using defaults",
                requested, wind, visibility, temperature
            );
        }

        MetarReport {
            station: self.station.unwrap_or_else(|| requested.to_string()),
            raw: self.raw,
            observed_at: self.time.and_then(|t| t.dt),
            observation: Observation::with_defaults(wind, visibility, temperature),
        }
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn visibility_to_sm(value: f64, unit: &str) -> f64 {
    match unit.to_ascii_lowercase().as_str() {
        "sm" => value,
        "m" => value / METERS_PER_SM,
        "km" => value / KM_PER_SM,
        other => {
            warn!("Unknown visibility unit {:?}, assuming statute miles", other);
            value
        }
    }
}

fn wind_to_knots(value: f64, unit: &str) -> f64 {
    match unit.to_ascii_lowercase().as_str() {
        "kt" => value,
        "m/s" | "mps" => value * KT_PER_MPS,
        "km/h" | "kmh" | "kph" => value / KMH_PER_KT,
        "mph" => value * KT_PER_MPH,
        other => {
            warn!("Unknown wind unit {:?}, assuming knots", other);
            value
        }
    }
}

fn temperature_to_celsius(value: f64, unit: &str) -> f64 {
    match unit {
        "F" | "f" => (value - 32.0) * 5.0 / 9.0,
        "C" | "c" => value,
        other => {
            warn!("Unknown temperature unit {:?}, assuming Celsius", other);
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KJFK: &str = r#"{
        "station": "KJFK",
        "raw": "KJFK 191651Z 31012KT 10SM FEW250 18/04 A3012",
        "time": {"repr": "191651Z", "dt": "2026-10-19T16:51:00Z"},
        "wind_speed": {"repr": "12", "value": 12, "spoken": "one two"},
        "visibility": {"repr": "10", "value": 10, "spoken": "one zero"},
        "temperature": {"repr": "18", "value": 18, "spoken": "one eight"},
        "units": {"altimeter": "inHg", "altitude": "ft", "temperature": "C", "visibility": "sm", "wind_speed": "kt"}
    }"#;

    #[test]
    fn test_us_report() {
        let report = AvwxMetar::from_json(KJFK).unwrap().into_report("KJFK");
        assert_eq!(report.station, "KJFK");
        assert_eq!(report.observation, Observation::new(12.0, 10.0, 18.0));
        assert!(report.observed_at.is_some());
        assert!(report.raw.unwrap().starts_with("KJFK"));
    }

    #[test]
    fn test_null_fields_use_defaults() {
        let body = r#"{
            "station": "EGLL",
            "wind_speed": null,
            "visibility": {"repr": "CAVOK", "value": null},
            "temperature": {"value": null}
        }"#;
        let report = AvwxMetar::from_json(body).unwrap().into_report("EGLL");
        assert_eq!(report.observation, Observation::new(0.0, 10.0, 20.0));
    }

    #[test]
    fn test_zero_readings_are_kept() {
        let body = r#"{
            "wind_speed": {"value": 0},
            "visibility": {"value": 0},
            "temperature": {"value": 0}
        }"#;
        let report = AvwxMetar::from_json(body).unwrap().into_report("KSFO");
        assert_eq!(report.station, "KSFO");
        assert_eq!(report.observation, Observation::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_metric_units_are_normalized() {
        let body = r#"{
            "wind_speed": {"value": 10},
            "visibility": {"value": 4000},
            "temperature": {"value": 50},
            "units": {"visibility": "m", "wind_speed": "m/s", "temperature": "F"}
        }"#;
        let obs = AvwxMetar::from_json(body).unwrap().into_report("LFPG").observation;
        assert!((obs.wind - 19.43844).abs() < 1e-6);
        assert_eq!(obs.visibility, 2.5);
        assert!((obs.temperature - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_visibility_rounded_to_tenth() {
        let body = r#"{"visibility": {"value": 1.25}}"#;
        let obs = AvwxMetar::from_json(body).unwrap().into_report("KBOS").observation;
        assert_eq!(obs.visibility, 1.3);
    }

    #[test]
    fn test_garbage_body_is_invalid_response() {
        assert!(matches!(
            AvwxMetar::from_json("<html>Bad Gateway</html>"),
            Err(MetarError::InvalidResponse(_))
        ));
    }
}
