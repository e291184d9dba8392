//! Configuration for conjunction synthesis.

use deduce_core::messages::{CONJUNCTION_PREFIX, CONJUNCTION_SEPARATOR};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid synthesis config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("separator must be a single non-empty token, got {0:?}")]
    InvalidSeparator(String),
}

/// Configuration for conjunction synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Token placed between adjacent conjuncts.
    pub separator: String,
    /// Prefix of generated judgment names, as in `and[A,B]`.
    pub name_prefix: String,
    /// Run declaration checking on every synthesized judgment.
    pub validate: bool,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            separator: CONJUNCTION_SEPARATOR.to_string(),
            name_prefix: CONJUNCTION_PREFIX.to_string(),
            validate: true,
        }
    }
}

impl SynthesisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Load a configuration from JSON; missing fields take their defaults.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.check()?;
        Ok(config)
    }

    /// Check that the separator is usable as a single terminal.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.separator.is_empty() || self.separator.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidSeparator(self.separator.clone()));
        }
        Ok(())
    }
}
