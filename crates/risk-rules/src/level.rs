//! Ordinal Risk Levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when an integer or label does not name a risk level
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid risk level: {0}")]
pub struct InvalidRiskLevel(pub String);

/// Ordinal weather risk level. Higher is worse.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum RiskLevel {
    /// Conditions within normal operating limits
    Low = 0,
    /// Marginal conditions, extra caution advised
    Moderate = 1,
    /// Hazardous conditions
    High = 2,
}

impl RiskLevel {
    /// All levels in ascending order
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High];

    /// Integer value (0, 1 or 2)
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<i64> for RiskLevel {
    type Error = InvalidRiskLevel;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RiskLevel::Low),
            1 => Ok(RiskLevel::Moderate),
            2 => Ok(RiskLevel::High),
            other => Err(InvalidRiskLevel(other.to_string())),
        }
    }
}

impl FromStr for RiskLevel {
    type Err = InvalidRiskLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskLevel::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidRiskLevel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::Moderate < RiskLevel::High);
        assert_eq!(RiskLevel::Low.max(RiskLevel::High), RiskLevel::High);
    }

    #[test]
    fn test_try_from_integer() {
        assert_eq!(RiskLevel::try_from(0), Ok(RiskLevel::Low));
        assert_eq!(RiskLevel::try_from(2), Ok(RiskLevel::High));
        assert!(RiskLevel::try_from(3).is_err());
        assert!(RiskLevel::try_from(-1).is_err());
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!("moderate".parse::<RiskLevel>(), Ok(RiskLevel::Moderate));
        assert_eq!(" High ".parse::<RiskLevel>(), Ok(RiskLevel::High));
        assert!("Severe".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&RiskLevel::Moderate).unwrap();
        assert_eq!(json, "\"Moderate\"");
    }
}
