//! Weather Risk Combiner
//!
//! Merges the rule table with the trained model: the final level is the
//! worse of the two estimates.

mod combiner;

pub use combiner::{Assessment, RiskCombiner};

use inference_engine::InferenceError;
use thiserror::Error;

/// Errors while combining risk estimates
#[derive(Debug, Error)]
pub enum CombineError {
    #[error(transparent)]
    Inference(#[from] InferenceError),
    #[error("Model returned class {0}, expected 0, 1 or 2")]
    InvalidModelOutput(i64),
}
