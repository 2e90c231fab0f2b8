use thiserror::Error;

use stockrisk_core::DomainError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("invalid scoring input: {0}")]
    InvalidInput(String),

    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ScoringError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
