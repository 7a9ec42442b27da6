//! Weather Risk Inference Engine
//!
//! Wraps the pre-trained risk classifier behind the [`PredictiveModel`]
//! port. The production model is an ONNX export run with tract; stub
//! models stand in for it in tests and mock deployments.

mod engine;
mod stub;

pub use engine::OnnxModel;
pub use stub::{FixedModel, LookupModel};

use risk_rules::Observation;
use thiserror::Error;

/// Errors during model loading or inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Model unavailable at {path}: {reason}")]
    ModelUnavailable { path: String, reason: String },
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
    #[error("Unreadable model output: {0}")]
    UnreadableOutput(String),
}

/// Narrow port onto a trained risk model.
///
/// Implementations are immutable once built and may be called from many
/// requests at once.
pub trait PredictiveModel: Send + Sync {
    /// Short identifier for logs and health reporting
    fn name(&self) -> &str;

    /// Predict the raw ordinal class for an observation.
    ///
    /// The value is returned unchecked; callers decide what to do with
    /// anything outside 0..=2.
    fn predict(&self, observation: &Observation) -> Result<i64, InferenceError>;
}
