//! Risk Combiner Implementation

use crate::CombineError;
use inference_engine::PredictiveModel;
use risk_rules::{Observation, RiskLevel, RuleEngine};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of one combined assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assessment {
    /// Observation that was assessed
    pub observation: Observation,
    /// Rule table estimate
    pub rule_level: RiskLevel,
    /// Model estimate
    pub model_level: RiskLevel,
    /// Final level, never below either estimate
    pub level: RiskLevel,
}

/// Stateless combiner over a shared, read-only model
#[derive(Clone)]
pub struct RiskCombiner {
    model: Arc<dyn PredictiveModel>,
    rules: RuleEngine,
}

impl RiskCombiner {
    /// Create a combiner with the default rule table
    pub fn new(model: Arc<dyn PredictiveModel>) -> Self {
        Self::with_rules(model, RuleEngine::default())
    }

    /// Create a combiner with a custom rule engine
    pub fn with_rules(model: Arc<dyn PredictiveModel>, rules: RuleEngine) -> Self {
        info!("Creating risk combiner with model: {}", model.name());
        Self { model, rules }
    }

    /// Combine the three readings into a single risk level
    pub fn combine(
        &self,
        wind: f64,
        visibility: f64,
        temperature: f64,
    ) -> Result<RiskLevel, CombineError> {
        self.assess(&Observation::new(wind, visibility, temperature))
            .map(|assessment| assessment.level)
    }

    /// Assess an observation, keeping both component estimates
    pub fn assess(&self, observation: &Observation) -> Result<Assessment, CombineError> {
        let raw = self.model.predict(observation)?;
        let model_level = RiskLevel::try_from(raw).map_err(|_| {
            warn!("Model {} returned out-of-range class {}", self.model.name(), raw);
            CombineError::InvalidModelOutput(raw)
        })?;

        let rule_level = self.rules.evaluate(observation.wind, observation.visibility);
        let level = model_level.max(rule_level);

        debug!(
            "Assessment: rule={} model={} final={}",
            rule_level, model_level, level
        );

        Ok(Assessment {
            observation: *observation,
            rule_level,
            model_level,
            level,
        })
    }

    /// Name of the underlying model
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Rule engine forming the floor of every assessment
    pub fn rules(&self) -> &RuleEngine {
        &self.rules
    }
}
