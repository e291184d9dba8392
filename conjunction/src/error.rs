//! Synthesis error types.
//!
//! These are invocation errors: the caller handed over a component list that
//! can never describe a conjunction. Disagreements between well-formed
//! components are diagnostics, not errors.

use deduce_core::JudgmentId;
use deduce_registry::RegistryError;
use thiserror::Error;

/// Errors that abort a synthesis request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    /// A component handle is not in the registry.
    #[error("unknown judgment {0} in conjunction")]
    UnknownJudgment(JudgmentId),

    /// The same judgment was listed twice.
    #[error("judgment {0} appears more than once in conjunction")]
    DuplicateComponent(JudgmentId),

    /// A component has no form to conjoin.
    #[error("judgment {0} has no form to conjoin")]
    MissingForm(JudgmentId),

    /// The declaration table refused the synthesized declarations.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Result type for synthesis operations.
pub type SynthesisResult<T> = Result<T, SynthesisError>;
