//! Registration of a synthesized judgment, its production and its rule.

use crate::{SynthesisError, SynthesisResult};
use deduce_analyzer::typecheck_judgment;
use deduce_core::{ClauseUse, Diagnostics, Element, Form, JudgmentId, NonTerminal, Span};
use deduce_registry::{JudgmentOrigin, Registry};
use tracing::debug;

/// Everything needed to declare one conjunction.
#[derive(Debug, Clone)]
pub struct Construction {
    /// Name of the new judgment and of its single rule.
    pub name: String,
    /// The conjoined judgments, in order.
    pub components: Box<[JudgmentId]>,
    /// Renamed elements of each component, one premise each.
    pub premises: Vec<Vec<Element>>,
    /// The merged form.
    pub form: Form,
    pub assume: Option<NonTerminal>,
    pub span: Span,
}

/// Install `construction` in the registry and return the new judgment.
///
/// The judgment is reserved first so its production can point back at it.
/// The single rule has one premise per component, stated over that
/// component's own production, and concludes the merged form. When
/// `validate` is set the new judgment is checked once, and any problem
/// found lands in `diagnostics`.
pub fn register(
    registry: &mut Registry,
    construction: Construction,
    validate: bool,
    diagnostics: &mut Diagnostics,
) -> SynthesisResult<JudgmentId> {
    let Construction {
        name,
        components,
        premises,
        form,
        assume,
        span,
    } = construction;

    // Resolve premise productions before writing anything
    let mut clauses = Vec::with_capacity(premises.len());
    for (&component, elements) in components.iter().zip(premises) {
        let production = registry
            .judgment(component)
            .ok_or(SynthesisError::UnknownJudgment(component))?
            .production
            .ok_or(SynthesisError::MissingForm(component))?;
        clauses.push(ClauseUse::new(production, elements, span));
    }

    let id = registry.reserve_judgment(name.clone(), span)?;
    let conclusion_elements = form.elements.clone();
    let production = registry.define_production(id, name.clone(), form)?;
    registry.set_assume(id, assume)?;
    registry.set_origin(id, JudgmentOrigin::Conjunction(components))?;

    let conclusion = ClauseUse::new(production, conclusion_elements, span);
    registry.add_rule(name, id, clauses, conclusion, span)?;
    debug!(judgment = %id, production = %production, "conjunction registered");

    if validate {
        typecheck_judgment(registry, id, diagnostics);
    }
    Ok(id)
}
