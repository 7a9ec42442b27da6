//! Station Identifiers

use crate::error::MetarError;
use std::fmt;

/// Four-character ICAO station code, always upper case
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

impl StationId {
    /// Parse a user-supplied identifier (surrounding whitespace and case are ignored)
    pub fn parse(input: &str) -> Result<Self, MetarError> {
        let code = input.trim().to_ascii_uppercase();
        if code.len() == 4 && code.chars().all(|c| c.is_ascii_alphanumeric()) {
            Ok(Self(code))
        } else {
            Err(MetarError::InvalidStation(input.to_string()))
        }
    }

    /// Get the code
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(StationId::parse(" kjfk ").unwrap().as_str(), "KJFK");
    }

    #[test]
    fn test_rejects_bad_codes() {
        for bad in ["", "JFK", "KJFKX", "K/FK", "KJ K"] {
            assert!(
                matches!(StationId::parse(bad), Err(MetarError::InvalidStation(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
