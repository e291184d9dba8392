//! Deduce Conjunction
//!
//! On-demand synthesis of conjunction judgments. Given an ordered list of
//! judgments, builds a new judgment whose form is the components' forms
//! joined by a separator token and whose single rule derives all of the
//! components at once:
//!
//! ```text
//!   Gamma |- e1 : tau2      e3 value
//!   ---------------------------------- and[typing,value]
//!   Gamma |- e1 : tau2 and e3 value
//! ```
//!
//! Each distinct ordered list is synthesized at most once; later requests
//! return the same judgment handle.

mod cache;
mod config;
mod constructor;
mod context;
mod error;
mod form;
mod rename;
mod synthesizer;

pub use cache::SynthesisCache;
pub use config::{ConfigError, SynthesisConfig};
pub use constructor::{register, Construction};
pub use context::{unify, Unified};
pub use error::{SynthesisError, SynthesisResult};
pub use form::{append_conjunct, assemble, conjunction_name};
pub use rename::{Renamed, Renamer};
pub use synthesizer::{Conjunctions, Synthesis};
