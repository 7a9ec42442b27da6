//! METAR Routes

use axum::{
    extract::{Path, State},
    Json,
};
use metar_client::{MetarReport, ObservationSource};
use metrics::counter;
use serde::Serialize;

use crate::error::ApiError;
use crate::routes::risk::RiskResponse;
use crate::{AppState, SharedState};

/// Response for the fetch-and-assess endpoint
#[derive(Debug, Serialize)]
pub struct MetarRiskResponse {
    pub report: MetarReport,
    pub assessment: RiskResponse,
}

async fn fetch(state: &AppState, icao: &str) -> Result<MetarReport, ApiError> {
    match state.source.fetch(icao).await {
        Ok(report) => {
            counter!("avrisk_metar_fetches_total", "outcome" => "ok").increment(1);
            Ok(report)
        }
        Err(e) => {
            counter!("avrisk_metar_fetches_total", "outcome" => "error").increment(1);
            Err(e.into())
        }
    }
}

/// Get the latest observation for a station
pub async fn get_metar(
    State(state): State<SharedState>,
    Path(icao): Path<String>,
) -> Result<Json<MetarReport>, ApiError> {
    Ok(Json(fetch(&state, &icao).await?))
}

/// Fetch the latest observation for a station and assess it
pub async fn get_metar_risk(
    State(state): State<SharedState>,
    Path(icao): Path<String>,
) -> Result<Json<MetarRiskResponse>, ApiError> {
    let report = fetch(&state, &icao).await?;
    let assessment = state.assess(&report.observation)?;

    Ok(Json(MetarRiskResponse {
        report,
        assessment: assessment.into(),
    }))
}
