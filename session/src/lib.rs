//! Deduce Session
//!
//! A checking session: the declaration table, the conjunctions synthesized
//! against it and the diagnostics reported along the way.

mod error;
mod session;

pub use error::{SessionError, SessionResult};
pub use session::{CheckSession, SessionId, SessionManager};
