//! METAR Observation Client
//!
//! Fetches surface weather reports from the AVWX REST service and turns
//! them into normalized [`Observation`]s (knots, statute miles, °C).
//! Missing readings fall back to calm/clear defaults.

mod client;
mod error;
mod report;
mod station;

pub use client::{MetarClient, MetarConfig};
pub use error::MetarError;
pub use report::{AvwxMetar, MetarReport};
pub use station::StationId;

use async_trait::async_trait;

#[doc(no_inline)]
pub use risk_rules::Observation;

/// Anything that can turn a station identifier into a weather report
#[async_trait]
pub trait ObservationSource: Send + Sync {
    /// Fetch the latest report for a station
    async fn fetch(&self, station: &str) -> Result<MetarReport, MetarError>;
}
