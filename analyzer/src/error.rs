//! Analyzer error types.

use deduce_core::{Diagnostic, JudgmentId, ProductionId, Severity, Span, SyntaxId};
use thiserror::Error;

/// Problems found while checking a judgment declaration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    /// The judgment handle is not in the registry.
    #[error("Unknown judgment {judgment} at line {line}, column {column}")]
    UnknownJudgment {
        judgment: JudgmentId,
        line: usize,
        column: usize,
    },

    /// A clause refers to a production that does not exist.
    #[error("Unknown production {production} at line {line}, column {column}")]
    UnknownProduction {
        production: ProductionId,
        line: usize,
        column: usize,
    },

    /// The judgment has no production.
    #[error("Judgment '{judgment}' has no form at line {line}, column {column}")]
    MissingProduction {
        judgment: String,
        line: usize,
        column: usize,
    },

    /// The judgment's production names another judgment.
    #[error("Form of judgment '{judgment}' belongs to another judgment at line {line}, column {column}")]
    ForeignProduction {
        judgment: String,
        line: usize,
        column: usize,
    },

    /// A nonterminal ranges over an undeclared syntax.
    #[error("Nonterminal '{name}' has unknown syntax {syntax} at line {line}, column {column}")]
    UnknownSyntax {
        name: String,
        syntax: SyntaxId,
        line: usize,
        column: usize,
    },

    /// The assumption marker does not occur in the form.
    #[error("Judgment '{judgment}' assumes '{name}', which is not in its form at line {line}, column {column}")]
    AssumptionNotInForm {
        judgment: String,
        name: String,
        line: usize,
        column: usize,
    },

    /// The conclusion of a rule is not an instance of the rule's judgment.
    #[error("Conclusion of rule '{rule}' is not a '{judgment}' clause at line {line}, column {column}")]
    ConclusionMismatch {
        rule: String,
        judgment: String,
        line: usize,
        column: usize,
    },

    /// A clause has a different number of elements than its production.
    #[error("Clause '{clause}' has {actual} elements, its form has {expected} at line {line}, column {column}")]
    ArityMismatch {
        clause: String,
        expected: usize,
        actual: usize,
        line: usize,
        column: usize,
    },

    /// A clause element does not match the production element at its position.
    #[error("Expected '{expected}', found '{actual}' in clause '{clause}' at line {line}, column {column}")]
    ElementMismatch {
        clause: String,
        expected: String,
        actual: String,
        line: usize,
        column: usize,
    },

    /// The same variable is used at two different syntax categories.
    #[error("Variable '{name}' is used as both {first} and {second} at line {line}, column {column}")]
    InconsistentVariable {
        name: String,
        first: String,
        second: String,
        line: usize,
        column: usize,
    },
}

impl AnalyzerError {
    pub fn unknown_judgment(judgment: JudgmentId, span: Span) -> Self {
        Self::UnknownJudgment {
            judgment,
            line: span.line,
            column: span.column,
        }
    }

    pub fn unknown_production(production: ProductionId, span: Span) -> Self {
        Self::UnknownProduction {
            production,
            line: span.line,
            column: span.column,
        }
    }

    pub fn missing_production(judgment: impl Into<String>, span: Span) -> Self {
        Self::MissingProduction {
            judgment: judgment.into(),
            line: span.line,
            column: span.column,
        }
    }

    pub fn foreign_production(judgment: impl Into<String>, span: Span) -> Self {
        Self::ForeignProduction {
            judgment: judgment.into(),
            line: span.line,
            column: span.column,
        }
    }

    pub fn unknown_syntax(name: impl Into<String>, syntax: SyntaxId, span: Span) -> Self {
        Self::UnknownSyntax {
            name: name.into(),
            syntax,
            line: span.line,
            column: span.column,
        }
    }

    pub fn assumption_not_in_form(
        judgment: impl Into<String>,
        name: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::AssumptionNotInForm {
            judgment: judgment.into(),
            name: name.into(),
            line: span.line,
            column: span.column,
        }
    }

    pub fn conclusion_mismatch(
        rule: impl Into<String>,
        judgment: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::ConclusionMismatch {
            rule: rule.into(),
            judgment: judgment.into(),
            line: span.line,
            column: span.column,
        }
    }

    pub fn arity_mismatch(clause: impl Into<String>, expected: usize, actual: usize, span: Span) -> Self {
        Self::ArityMismatch {
            clause: clause.into(),
            expected,
            actual,
            line: span.line,
            column: span.column,
        }
    }

    pub fn element_mismatch(
        clause: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::ElementMismatch {
            clause: clause.into(),
            expected: expected.into(),
            actual: actual.into(),
            line: span.line,
            column: span.column,
        }
    }

    pub fn inconsistent_variable(
        name: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::InconsistentVariable {
            name: name.into(),
            first: first.into(),
            second: second.into(),
            line: span.line,
            column: span.column,
        }
    }

    /// Dangling handles mean the table itself is broken.
    pub fn severity(&self) -> Severity {
        match self {
            Self::UnknownJudgment { .. } | Self::UnknownProduction { .. } => Severity::Fatal,
            _ => Severity::Recoverable,
        }
    }

    pub fn span(&self) -> Span {
        let (line, column) = match self {
            Self::UnknownJudgment { line, column, .. }
            | Self::UnknownProduction { line, column, .. }
            | Self::MissingProduction { line, column, .. }
            | Self::ForeignProduction { line, column, .. }
            | Self::UnknownSyntax { line, column, .. }
            | Self::AssumptionNotInForm { line, column, .. }
            | Self::ConclusionMismatch { line, column, .. }
            | Self::ArityMismatch { line, column, .. }
            | Self::ElementMismatch { line, column, .. }
            | Self::InconsistentVariable { line, column, .. } => (*line, *column),
        };
        Span::at(line, column)
    }

    /// Convert into a diagnostic for the session sink.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.to_string(), self.span(), self.severity())
    }
}
