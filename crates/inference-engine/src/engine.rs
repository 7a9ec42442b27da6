//! ONNX Model Implementation

use crate::{InferenceError, PredictiveModel};
use risk_rules::Observation;
use std::path::Path;
use std::time::Instant;
use tract_onnx::prelude::*;
use tracing::{debug, info};

type OnnxPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Number of input features: wind, visibility, temperature
const FEATURE_COUNT: usize = 3;

/// Risk classifier exported to ONNX.
///
/// Expects a single `float32[1, 3]` input and reads the predicted class
/// label from the first output. Integer and integral float labels are
/// both accepted.
pub struct OnnxModel {
    /// Model path
    model_path: String,
    /// Optimized, runnable plan
    plan: OnnxPlan,
}

impl OnnxModel {
    /// Load and optimize the model. Called once at startup.
    pub fn load(model_path: impl AsRef<Path>) -> Result<Self, InferenceError> {
        let path = model_path.as_ref();
        let path_str = path.display().to_string();
        info!("Loading risk model from {}", path_str);

        let unavailable = |reason: String| InferenceError::ModelUnavailable {
            path: path_str.clone(),
            reason,
        };

        if !path.is_file() {
            return Err(unavailable("file not found".to_string()));
        }

        let start = Instant::now();
        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| model.with_input_fact(0, f32::fact([1, FEATURE_COUNT]).into()))
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| unavailable(format!("{:#}", e)))?;

        info!(
            "Risk model loaded in {}ms",
            start.elapsed().as_millis()
        );

        Ok(Self {
            model_path: path_str,
            plan,
        })
    }
}

impl PredictiveModel for OnnxModel {
    fn name(&self) -> &str {
        &self.model_path
    }

    fn predict(&self, observation: &Observation) -> Result<i64, InferenceError> {
        let start = Instant::now();
        let features = observation.features().map(|v| v as f32);

        let input = Tensor::from_shape(&[1, FEATURE_COUNT], &features)
            .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?;

        let outputs = self
            .plan
            .run(tvec!(input.into()))
            .map_err(|e| InferenceError::InferenceFailed(format!("{:#}", e)))?;

        let label = outputs
            .first()
            .ok_or_else(|| InferenceError::UnreadableOutput("model produced no outputs".to_string()))?;
        let value = read_label(label)?;

        debug!(
            "Inference completed in {}us: {:?} -> {}",
            start.elapsed().as_micros(),
            observation,
            value
        );
        Ok(value)
    }
}

/// Read the first element of a label tensor as an integer class
fn read_label(label: &Tensor) -> Result<i64, InferenceError> {
    let as_float = label
        .cast_to::<f64>()
        .map_err(|e| InferenceError::UnreadableOutput(e.to_string()))?;
    let value = as_float
        .as_slice::<f64>()
        .map_err(|e| InferenceError::UnreadableOutput(e.to_string()))?
        .first()
        .copied()
        .ok_or_else(|| InferenceError::UnreadableOutput("empty label tensor".to_string()))?;

    if !value.is_finite() || value.fract() != 0.0 {
        return Err(InferenceError::UnreadableOutput(format!(
            "label {} is not an integer class",
            value
        )));
    }
    Ok(value as i64)
}
