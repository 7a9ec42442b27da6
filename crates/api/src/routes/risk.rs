//! Risk Assessment Routes

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use risk_engine::Assessment;
use risk_rules::{Observation, RiskLevel};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::SharedState;

/// Request body for a manual assessment
#[derive(Debug, Deserialize)]
pub struct RiskRequest {
    /// Wind speed (knots)
    pub wind: f64,
    /// Visibility (statute miles)
    pub visibility: f64,
    /// Temperature (°C)
    pub temperature: f64,
}

impl From<RiskRequest> for Observation {
    fn from(req: RiskRequest) -> Self {
        Observation::new(req.wind, req.visibility, req.temperature)
    }
}

/// Assessment as returned to clients
#[derive(Debug, Serialize)]
pub struct RiskResponse {
    pub level: RiskLevel,
    pub level_value: u8,
    pub rule_level: RiskLevel,
    pub model_level: RiskLevel,
    pub observation: Observation,
}

impl From<Assessment> for RiskResponse {
    fn from(assessment: Assessment) -> Self {
        Self {
            level: assessment.level,
            level_value: assessment.level.value(),
            rule_level: assessment.rule_level,
            model_level: assessment.model_level,
            observation: assessment.observation,
        }
    }
}

/// Assess user supplied readings
pub async fn assess(
    State(state): State<SharedState>,
    body: Result<Json<RiskRequest>, JsonRejection>,
) -> Result<Json<RiskResponse>, ApiError> {
    let Json(request) = body?;
    let observation: Observation = request.into();
    let assessment = state.assess(&observation)?;
    Ok(Json(assessment.into()))
}
