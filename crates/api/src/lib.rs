//! Weather Risk API Server
//!
//! JSON API around the risk combiner: manual assessments, METAR-driven
//! assessments and a downloadable result report.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use data_validator::Validator;
use inference_engine::{LookupModel, OnnxModel, PredictiveModel};
use metar_client::{MetarClient, ObservationSource};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use risk_engine::{Assessment, RiskCombiner};
use risk_rules::{Observation, RuleThresholds};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_governor::GovernorLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

mod error;
pub mod rate_limit;
mod routes;
pub mod settings;

pub use error::ApiError;
pub use settings::Settings;

/// Handle to the state shared by all handlers
pub type SharedState = Arc<AppState>;

/// Application state shared across handlers.
///
/// Everything in here is read-only after startup, so no lock is needed.
pub struct AppState {
    /// Rule + model combiner
    pub combiner: RiskCombiner,
    /// Where METAR observations come from
    pub source: Arc<dyn ObservationSource>,
    /// Request observation validator
    pub validator: Validator,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: Instant,
    /// Prometheus handle, when a recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        combiner: RiskCombiner,
        source: Arc<dyn ObservationSource>,
        validator: Validator,
    ) -> Self {
        Self {
            combiner,
            source,
            validator,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: Instant::now(),
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for the `/metrics` route
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Validate, then combine rule and model estimates
    pub fn assess(&self, observation: &Observation) -> Result<Assessment, ApiError> {
        let validation = self.validator.validate(observation);
        if !validation.valid {
            return Err(ApiError::Validation(validation.to_string()));
        }

        let start = Instant::now();
        let assessment = self.combiner.assess(observation).map_err(|e| {
            counter!("avrisk_model_failures_total").increment(1);
            e
        })?;

        histogram!("avrisk_assessment_seconds").record(start.elapsed().as_secs_f64());
        counter!("avrisk_assessments_total", "level" => assessment.level.label()).increment(1);
        Ok(assessment)
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub model: String,
    pub validation: bool,
    pub thresholds: RuleThresholds,
}

/// Create the application router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/risk", post(routes::risk::assess))
        .route("/api/v1/metar/:icao", get(routes::metar::get_metar))
        .route("/api/v1/metar/:icao/risk", get(routes::metar::get_metar_risk))
        .route("/api/v1/report", get(routes::report::download))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<SharedState>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        model: state.combiner.model_name().to_string(),
        validation: state.validator.is_enabled(),
        thresholds: *state.combiner.rules().thresholds(),
    })
}

/// Prometheus exposition handler
async fn metrics_handler(State(state): State<SharedState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (StatusCode::NOT_FOUND, "metrics recorder not installed".to_string()),
    }
}

/// Initialize logging
pub fn init_logging(settings: &settings::LoggingSettings) -> Result<(), ApiError> {
    let level: Level = settings
        .level
        .parse()
        .map_err(|_| ApiError::Config(format!("invalid log level {:?}", settings.level)))?;

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);

    let result = if settings.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| ApiError::Config(format!("Failed to set tracing subscriber: {}", e)))
}

/// Install the global Prometheus recorder
pub fn install_metrics() -> Result<PrometheusHandle, ApiError> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ApiError::Config(format!("Failed to install metrics recorder: {}", e)))
}

/// Load the model, build the METAR client and validator.
///
/// A missing or corrupt model fails here, before anything is served.
pub fn build_state(settings: &Settings) -> Result<AppState, ApiError> {
    let model: Arc<dyn PredictiveModel> = if settings.model.mock {
        warn!("Model mock mode enabled: rule table only, model answers Low");
        Arc::new(LookupModel::new(0))
    } else {
        Arc::new(OnnxModel::load(&settings.model.path)?)
    };

    let source = Arc::new(MetarClient::new(settings.metar.clone())?);

    Ok(AppState::new(
        RiskCombiner::new(model),
        source,
        Validator::new(settings.validation.clone()),
    ))
}

/// Run the server
pub async fn run_server(settings: Settings) -> Result<(), ApiError> {
    let state = build_state(&settings)?.with_metrics(install_metrics()?);
    let governor = rate_limit::create_governor_config(&settings.rate_limit)?;

    let app = create_router(Arc::new(state)).layer(GovernorLayer { config: governor });

    info!("Starting API server on {}", settings.server.addr);

    let listener = tokio::net::TcpListener::bind(&settings.server.addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
