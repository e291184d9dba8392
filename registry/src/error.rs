//! Registry error types.

use deduce_core::{JudgmentId, ProductionId, SyntaxId};
use thiserror::Error;

/// Errors raised when a declaration cannot be added to the table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate syntax name: {0}")]
    DuplicateSyntaxName(String),

    #[error("Duplicate judgment name: {0}")]
    DuplicateJudgmentName(String),

    #[error("Unknown syntax: {0}")]
    UnknownSyntax(SyntaxId),

    #[error("Unknown judgment: {0}")]
    UnknownJudgment(JudgmentId),

    #[error("Unknown judgment name: {0}")]
    UnknownJudgmentName(String),

    #[error("Unknown production: {0}")]
    UnknownProduction(ProductionId),

    #[error("Judgment {0} already has a production")]
    ProductionAlreadyDefined(JudgmentId),

    #[error("Judgment {0} has no production")]
    MissingProduction(JudgmentId),

    #[error("Assumption '{0}' is not a nonterminal of any declared syntax")]
    UnknownAssumption(String),

    #[error("Rule '{0}' has no conclusion")]
    MissingConclusion(String),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
