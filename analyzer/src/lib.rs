//! Deduce Analyzer
//!
//! Declaration checking against the Registry: judgment forms, assumptions
//! and the well-formedness of every introduction rule. This is the
//! validation entry point run once for each newly registered judgment.

mod analyzer;
mod error;
mod scope;

pub use analyzer::{check_all, typecheck_judgment, Analyzer};
pub use error::AnalyzerError;
pub use scope::{Scope, VarBinding};
