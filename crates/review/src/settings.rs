use std::sync::{PoisonError, RwLock};

use stockrisk_core::DomainError;
use stockrisk_scoring::{EngineConfig, OperatorWeights, ScoringEngine, ScoringError};

use crate::authorize::authorize;
use crate::ledger::ReviewError;
use crate::{Permission, Role};

/// Shared, admin-gated holder of the engine configuration.
#[derive(Debug)]
pub struct ScoringSettings {
    config: RwLock<EngineConfig>,
}

impl ScoringSettings {
    pub fn new(config: EngineConfig) -> Result<Self, ScoringError> {
        config.validate()?;
        Ok(Self {
            config: RwLock::new(config),
        })
    }

    pub fn current(&self) -> EngineConfig {
        self.config.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Build an engine from the current configuration.
    pub fn engine(&self) -> Result<ScoringEngine, ScoringError> {
        ScoringEngine::new(self.current())
    }

    /// Replace the operator weights. Requires [`Permission::ConfigureScoring`].
    pub fn update_operator_weights(
        &self,
        role: Role,
        weights: OperatorWeights,
    ) -> Result<EngineConfig, ReviewError> {
        authorize(role, Permission::ConfigureScoring)?;
        weights
            .validate()
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        config.operator = weights;

        tracing::info!(
            %role,
            value_weight = weights.value_weight,
            velocity_weight = weights.velocity_weight,
            "operator weights updated"
        );
        Ok(config.clone())
    }
}
