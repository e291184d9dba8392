//! Diagnostics and the session diagnostic sink.

use crate::Span;
use std::fmt;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Checking continues; later passes may report dependent errors.
    Recoverable,
    /// The checked declaration is structurally broken.
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Recoverable => write!(f, "error"),
            Severity::Fatal => write!(f, "fatal"),
        }
    }
}

/// A user-facing diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable message.
    pub message: String,
    /// Where the problem was detected.
    pub span: Span,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, span: Span, severity: Severity) -> Self {
        Self {
            message: message.into(),
            span,
            severity,
        }
    }

    /// Create a recoverable diagnostic.
    pub fn recoverable(message: impl Into<String>, span: Span) -> Self {
        Self::new(message, span, Severity::Recoverable)
    }

    /// Create a fatal diagnostic.
    pub fn fatal(message: impl Into<String>, span: Span) -> Self {
        Self::new(message, span, Severity::Fatal)
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self.severity, Severity::Fatal)
    }

    pub fn is_recoverable(&self) -> bool {
        matches!(self.severity, Severity::Recoverable)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.span, self.severity, self.message)
    }
}

/// Append-only collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Append a recoverable diagnostic.
    pub fn report(&mut self, message: impl Into<String>, span: Span) {
        self.push(Diagnostic::recoverable(message, span));
    }

    /// Append every diagnostic of another collection, preserving order.
    pub fn extend(&mut self, other: Diagnostics) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if any diagnostic is fatal.
    pub fn has_fatal(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_fatal)
    }

    /// Get all diagnostics in the order they were reported.
    pub fn all(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn recoverable(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_recoverable())
    }

    pub fn fatal(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_fatal())
    }

    /// Count diagnostics carrying exactly this message.
    pub fn count_message(&self, message: &str) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.message == message)
            .count()
    }

    /// Remove and return everything collected so far.
    pub fn take(&mut self) -> Diagnostics {
        std::mem::take(self)
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}
