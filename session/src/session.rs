//! Checking sessions.

use deduce_analyzer::check_all;
use deduce_conjunction::{Conjunctions, SynthesisConfig};
use deduce_core::{Diagnostics, JudgmentId, Span};
use deduce_registry::Registry;
use tracing::{debug, info};

use crate::error::{SessionError, SessionResult};

/// Session ID type.
pub type SessionId = u64;

/// A checking session.
///
/// The session owns its declaration table and is driven from one thread;
/// every operation that writes takes `&mut self`. Separate sessions share
/// nothing, so each synthesizes its own conjunctions.
#[derive(Debug)]
pub struct CheckSession {
    /// Unique session ID.
    id: SessionId,
    /// Declarations, including synthesized ones.
    registry: Registry,
    /// The declarations the session started with, for `reset`.
    baseline: Registry,
    /// Synthesized conjunctions.
    conjunctions: Conjunctions,
    /// Everything reported during the session, in order.
    diagnostics: Diagnostics,
    /// The trivial conjunction, seeded on creation.
    trivial: JudgmentId,
}

impl CheckSession {
    /// Create a new session over `registry`.
    ///
    /// The trivial conjunction is synthesized straight away.
    pub fn new(id: SessionId, registry: Registry, config: SynthesisConfig) -> SessionResult<Self> {
        config.check()?;

        let mut session = Self {
            id,
            baseline: registry.clone(),
            registry,
            conjunctions: Conjunctions::new(config),
            diagnostics: Diagnostics::new(),
            trivial: JudgmentId::new(0),
        };
        session.seed()?;
        info!(session = id, judgments = session.registry.judgment_count(), "session started");
        Ok(session)
    }

    /// Create a session with the default configuration.
    pub fn with_defaults(id: SessionId, registry: Registry) -> SessionResult<Self> {
        Self::new(id, registry, SynthesisConfig::default())
    }

    /// Get the session ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Get the registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &SynthesisConfig {
        self.conjunctions.config()
    }

    /// Diagnostics reported so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Drain the diagnostics reported so far.
    pub fn take_diagnostics(&mut self) -> Diagnostics {
        self.diagnostics.take()
    }

    /// Number of conjunctions synthesized, the trivial one included.
    pub fn conjunction_count(&self) -> usize {
        self.conjunctions.len()
    }

    /// The empty conjunction.
    pub fn trivial(&self) -> JudgmentId {
        self.trivial
    }

    /// Get or create the conjunction of `parts`, in order.
    ///
    /// Diagnostics found while creating it are added to the session's list.
    /// Asking again for the same list adds nothing.
    pub fn synthesize(&mut self, span: Span, parts: &[JudgmentId]) -> SessionResult<JudgmentId> {
        let synthesis = self
            .conjunctions
            .synthesize(&mut self.registry, span, parts)?;
        if synthesis.fresh {
            debug!(
                session = self.id,
                judgment = %synthesis.judgment,
                "conjunction added to session"
            );
        }
        self.diagnostics.extend(synthesis.diagnostics);
        Ok(synthesis.judgment)
    }

    /// Like [`synthesize`](Self::synthesize), naming the components.
    pub fn synthesize_named(&mut self, span: Span, names: &[&str]) -> SessionResult<JudgmentId> {
        let parts = names
            .iter()
            .map(|name| {
                self.registry
                    .judgment_id(name)
                    .ok_or_else(|| SessionError::unknown_judgment_name(*name))
            })
            .collect::<SessionResult<Vec<_>>>()?;
        self.synthesize(span, &parts)
    }

    /// Check every declaration, reporting problems to the session.
    ///
    /// Returns the number of problems found.
    pub fn check_declarations(&mut self) -> usize {
        check_all(&self.registry, &mut self.diagnostics)
    }

    /// Return to the declarations the session started with.
    ///
    /// Synthesized conjunctions and diagnostics are discarded, then the
    /// trivial conjunction is seeded again.
    pub fn reset(&mut self) -> SessionResult<()> {
        self.registry = self.baseline.clone();
        self.conjunctions.clear();
        self.diagnostics = Diagnostics::new();
        self.seed()?;
        debug!(session = self.id, "session reset");
        Ok(())
    }

    fn seed(&mut self) -> SessionResult<()> {
        let synthesis = self.conjunctions.seed_trivial(&mut self.registry)?;
        self.trivial = synthesis.judgment;
        self.diagnostics.extend(synthesis.diagnostics);
        Ok(())
    }
}

/// Session manager for handing out session IDs.
#[derive(Debug)]
pub struct SessionManager {
    /// Next session ID to assign.
    next_id: SessionId,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManager {
    /// Create a new session manager.
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Allocate a new session ID.
    pub fn alloc_id(&mut self) -> SessionId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Create a new session over its own copy of `registry`.
    pub fn create_session(
        &mut self,
        registry: &Registry,
        config: SynthesisConfig,
    ) -> SessionResult<CheckSession> {
        let id = self.alloc_id();
        CheckSession::new(id, registry.clone(), config)
    }
}
