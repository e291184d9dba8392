//! Deduce Registry
//!
//! The program-wide declaration table: syntax categories, judgments, their
//! grammar productions and their inference rules. Unlike a frozen schema it
//! stays writable for the whole checking session, because conjunction
//! judgments are synthesized and registered while checking.

mod builder;
mod error;
mod registry;
mod types;

pub use builder::{JudgmentBuilder, RegistryBuilder, RuleBuilder, SyntaxBuilder};
pub use error::{RegistryError, RegistryResult};
pub use registry::Registry;
pub use types::*;
