//! Agreement of context binders and assumption markers across conjuncts.

use deduce_core::messages::{ERR_ASSUMPTIONS_MUST_AGREE, ERR_CONTEXTS_MUST_AGREE};
use deduce_core::{Diagnostics, JudgmentId, NonTerminal, Span};
use deduce_registry::Registry;
use tracing::trace;

/// The shared context and assumption chosen for a conjunction.
#[derive(Debug, Clone, Default)]
pub struct Unified {
    /// First context-carrying nonterminal seen across all component forms.
    pub context: Option<NonTerminal>,
    /// First assumption marker declared by a component.
    pub assume: Option<NonTerminal>,
    /// One diagnostic per disagreeing occurrence.
    pub diagnostics: Diagnostics,
}

impl Unified {
    /// Whether every component agreed.
    pub fn agreed(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Pick the canonical context binder and assumption marker of `parts`.
///
/// The first value seen wins. Every later value that differs from it adds a
/// diagnostic at `span`, and scanning carries on so that each disagreement is
/// reported. Handles that do not resolve, or have no form, are skipped.
pub fn unify(registry: &Registry, parts: &[JudgmentId], span: Span) -> Unified {
    let mut unified = Unified::default();

    for &part in parts {
        let Some(form) = registry.form_of(part) else {
            continue;
        };
        for nt in form
            .nonterminals()
            .filter(|nt| registry.is_context_syntax(nt.syntax))
        {
            match &unified.context {
                None => {
                    trace!(judgment = %part, context = %nt.name, "context binder chosen");
                    unified.context = Some(nt.clone());
                }
                Some(context) if context != nt => {
                    unified.diagnostics.report(ERR_CONTEXTS_MUST_AGREE, span);
                }
                Some(_) => {}
            }
        }
    }

    for &part in parts {
        let Some(assume) = registry.judgment(part).and_then(|j| j.assume.as_ref()) else {
            continue;
        };
        match &unified.assume {
            None => unified.assume = Some(assume.clone()),
            Some(canonical) if canonical != assume => {
                unified.diagnostics.report(ERR_ASSUMPTIONS_MUST_AGREE, span);
            }
            Some(_) => {}
        }
    }

    unified
}
