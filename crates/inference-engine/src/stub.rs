//! Stub Models
//!
//! Deterministic stand-ins for the trained classifier.

use crate::{InferenceError, PredictiveModel};
use risk_rules::Observation;
use std::collections::HashMap;
use tracing::info;

/// Model that answers the same class for every observation
#[derive(Debug, Clone)]
pub struct FixedModel {
    class: i64,
}

impl FixedModel {
    /// Create a model that always predicts `class`. Out-of-range classes
    /// are allowed so callers can exercise output checking.
    pub fn new(class: i64) -> Self {
        Self { class }
    }
}

impl PredictiveModel for FixedModel {
    fn name(&self) -> &str {
        "fixed"
    }

    fn predict(&self, _observation: &Observation) -> Result<i64, InferenceError> {
        Ok(self.class)
    }
}

/// Lookup table keyed on whole-number (wind, visibility, temperature)
#[derive(Debug, Clone, Default)]
pub struct LookupModel {
    table: HashMap<(i64, i64, i64), i64>,
    fallback: i64,
}

impl LookupModel {
    /// Create an empty table answering `fallback` for unknown inputs
    pub fn new(fallback: i64) -> Self {
        info!("Creating lookup model (fallback class {})", fallback);
        Self {
            table: HashMap::new(),
            fallback,
        }
    }

    /// Add an entry; inputs are rounded to the nearest whole number
    pub fn with_entry(mut self, wind: f64, visibility: f64, temperature: f64, class: i64) -> Self {
        self.table
            .insert(Self::key(&Observation::new(wind, visibility, temperature)), class);
        self
    }

    /// Number of table entries
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn key(observation: &Observation) -> (i64, i64, i64) {
        (
            observation.wind.round() as i64,
            observation.visibility.round() as i64,
            observation.temperature.round() as i64,
        )
    }
}

impl PredictiveModel for LookupModel {
    fn name(&self) -> &str {
        "lookup"
    }

    fn predict(&self, observation: &Observation) -> Result<i64, InferenceError> {
        Ok(self
            .table
            .get(&Self::key(observation))
            .copied()
            .unwrap_or(self.fallback))
    }
}
