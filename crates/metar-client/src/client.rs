//! AVWX METAR Client
//!
//! Provides async HTTPS access to the AVWX METAR endpoint.

use crate::error::MetarError;
use crate::report::{AvwxMetar, MetarReport};
use crate::station::StationId;
use crate::ObservationSource;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default timeout for METAR requests
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// METAR client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetarConfig {
    /// Service root, without trailing path
    pub base_url: String,
    /// Bearer token for the service
    pub token: Option<String>,
    /// Request timeout (milliseconds)
    pub timeout_ms: u64,
}

impl Default for MetarConfig {
    fn default() -> Self {
        Self {
            base_url: "https://avwx.rest".to_string(),
            token: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Client for the AVWX METAR endpoint
pub struct MetarClient {
    /// Configuration
    config: MetarConfig,
    /// Pooled HTTP client
    http: reqwest::Client,
}

impl MetarClient {
    /// Create a new METAR client
    pub fn new(config: MetarConfig) -> Result<Self, MetarError> {
        info!(
            "Creating METAR client for {} (timeout {}ms)",
            config.base_url, config.timeout_ms
        );
        if config.token.is_none() {
            warn!("No AVWX token configured; requests will likely be rejected");
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(concat!("avrisk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MetarError::Transport(e.to_string()))?;

        Ok(Self { config, http })
    }

    /// Endpoint for a station
    pub fn endpoint(&self, station: &StationId) -> String {
        format!(
            "{}/api/metar/{}",
            self.config.base_url.trim_end_matches('/'),
            station
        )
    }

    /// Fetch and normalize the latest METAR for a station
    pub async fn fetch_metar(&self, station: &str) -> Result<MetarReport, MetarError> {
        let station = StationId::parse(station)?;
        let url = self.endpoint(&station);
        debug!("Requesting METAR: {}", url);

        let mut request = self
            .http
            .get(&url)
            .query(&[("options", ""), ("format", "json"), ("onfail", "cache")]);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("METAR request for {} failed with HTTP {}", station, status);
            return Err(MetarError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        let report = AvwxMetar::from_json(&body)?.into_report(station.as_str());

        info!("METAR {}: {:?}", report.station, report.observation);
        Ok(report)
    }

    fn transport_error(&self, err: reqwest::Error) -> MetarError {
        if err.is_timeout() {
            MetarError::Timeout(self.config.timeout_ms)
        } else {
            MetarError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl ObservationSource for MetarClient {
    async fn fetch(&self, station: &str) -> Result<MetarReport, MetarError> {
        self.fetch_metar(station).await
    }
}
