//! Assembly of conjunction forms.

use deduce_core::{Element, Form, JudgmentId, Span};
use deduce_registry::Registry;

/// Concatenate the parts, with one separator terminal between neighbours.
///
/// No separator precedes the first part or follows the last, so `k` parts
/// of lengths `n1..nk` give a form of `n1 + .. + nk + (k - 1)` elements and
/// no parts give the empty form.
pub fn assemble(parts: &[Vec<Element>], separator: &str, span: Span) -> Form {
    let total = parts.iter().map(Vec::len).sum::<usize>() + parts.len().saturating_sub(1);
    let mut elements = Vec::with_capacity(total);

    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            elements.push(Element::terminal(separator, span));
        }
        elements.extend(part.iter().cloned());
    }

    Form::new(elements, span)
}

/// Extend `form` with a separator and the elements of `more`.
///
/// Used when a conjunction is written out directly, e.g. when a parser meets
/// `... and ...` inside a clause.
pub fn append_conjunct(form: &mut Form, separator: &str, span: Span, more: &Form) {
    form.elements.push(Element::terminal(separator, span));
    form.elements.extend(more.elements.iter().cloned());
}

/// Name of the conjunction of `parts`, e.g. `and[typing,value]`.
pub fn conjunction_name(registry: &Registry, parts: &[JudgmentId], prefix: &str) -> String {
    let names: Vec<String> = parts
        .iter()
        .map(|&id| {
            registry
                .judgment(id)
                .map(|j| j.name.clone())
                .unwrap_or_else(|| id.to_string())
        })
        .collect();
    format!("{}[{}]", prefix, names.join(","))
}
