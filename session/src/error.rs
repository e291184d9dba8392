//! Session error types.

use deduce_conjunction::{ConfigError, SynthesisError};
use deduce_registry::RegistryError;
use thiserror::Error;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Synthesis was asked for something impossible.
    #[error("synthesis error: {0}")]
    Synthesis(#[from] SynthesisError),

    /// Registry error.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// No judgment by that name.
    #[error("unknown judgment: {name}")]
    UnknownJudgmentName { name: String },
}

impl SessionError {
    pub fn unknown_judgment_name(name: impl Into<String>) -> Self {
        Self::UnknownJudgmentName { name: name.into() }
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
