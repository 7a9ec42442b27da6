//! API Error Types

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use inference_engine::InferenceError;
use metar_client::MetarError;
use risk_engine::CombineError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Errors surfaced by the API and its startup path
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid observation: {0}")]
    Validation(String),
    #[error("Invalid request body: {}", .0.body_text())]
    Body(#[from] JsonRejection),
    #[error(transparent)]
    Metar(#[from] MetarError),
    #[error(transparent)]
    Combine(#[from] CombineError),
    #[error(transparent)]
    Model(#[from] InferenceError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Metar(MetarError::InvalidStation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Metar(_) => StatusCode::BAD_GATEWAY,
            ApiError::Combine(_) | ApiError::Model(_) | ApiError::Config(_) | ApiError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            warn!("Request rejected: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
