//! METAR Error Types

use thiserror::Error;

/// Errors that can occur while fetching a METAR
#[derive(Debug, Error)]
pub enum MetarError {
    /// Identifier is not a station code
    #[error("Invalid ICAO code: {0:?}")]
    InvalidStation(String),

    /// Service answered with something other than 200
    #[error("Invalid ICAO code or AVWX API error (HTTP {status})")]
    Upstream { status: u16 },

    /// Request did not complete in time
    #[error("Timeout waiting for METAR after {0}ms")]
    Timeout(u64),

    /// Connection or protocol failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<serde_json::Error> for MetarError {
    fn from(err: serde_json::Error) -> Self {
        MetarError::InvalidResponse(err.to_string())
    }
}
