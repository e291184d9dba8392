//! Deduce Core Types
//!
//! This crate provides the foundational types shared by the checker:
//! - Handle types (SyntaxId, JudgmentId, ProductionId, RuleId)
//! - Source locations (Span)
//! - Syntax elements, forms and clause uses
//! - Diagnostics and the session diagnostic sink
//! - Common messages

mod diagnostic;
mod element;
mod id;
pub mod messages;
mod span;

pub use diagnostic::*;
pub use element::*;
pub use id::*;
pub use span::*;
