//! Fresh variable names for conjoined forms.
//!
//! Every component is declared in its own scope, so two components may both
//! mention `e` without meaning the same term. Before their forms are merged,
//! each nonterminal occurrence except the shared context binder receives a
//! name that no other occurrence in the conjunction uses.

use deduce_core::{Element, Form, NonTerminal, Span};
use deduce_registry::Registry;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Generator of fresh names, local to one synthesis.
#[derive(Debug, Default)]
pub struct Renamer {
    counter: u32,
    used: HashSet<String>,
}

/// Renamed vocabulary of a conjunction.
#[derive(Debug, Clone, Default)]
pub struct Renamed {
    /// Elements of each component's form, renamed, in component order.
    pub components: Vec<Vec<Element>>,
    /// First fresh name given to each original nonterminal.
    first: HashMap<NonTerminal, NonTerminal>,
}

impl Renamed {
    /// The fresh nonterminal first substituted for `original`, if any.
    pub fn renamed(&self, original: &NonTerminal) -> Option<&NonTerminal> {
        self.first.get(original)
    }

    /// Total number of elements across all components.
    pub fn element_count(&self) -> usize {
        self.components.iter().map(Vec::len).sum()
    }
}

impl Renamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a name so that it is never generated.
    pub fn reserve(&mut self, name: impl Into<String>) {
        self.used.insert(name.into());
    }

    /// Generate the next unused name over `base`.
    pub fn fresh(&mut self, base: &str) -> String {
        loop {
            self.counter += 1;
            let candidate = format!("{}{}", base, self.counter);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Rename the nonterminals of `forms`, keeping occurrences of `context`.
    ///
    /// Terminals are copied unchanged and every renamed nonterminal keeps its
    /// syntax category. New elements carry `span`.
    pub fn rename(
        mut self,
        registry: &Registry,
        forms: &[&Form],
        context: Option<&NonTerminal>,
        span: Span,
    ) -> Renamed {
        if let Some(context) = context {
            self.reserve(context.name.clone());
        }

        let mut renamed = Renamed {
            components: Vec::with_capacity(forms.len()),
            first: HashMap::new(),
        };

        for form in forms {
            let mut elements = Vec::with_capacity(form.len());
            for element in &form.elements {
                let nt = match element {
                    Element::NonTerminal(nt) if Some(nt) != context => nt,
                    other => {
                        elements.push(other.clone());
                        continue;
                    }
                };

                let base = registry
                    .syntax(nt.syntax)
                    .map(|s| s.name.as_str())
                    .unwrap_or_else(|| nt.base_name());
                let fresh = NonTerminal::new(self.fresh(base), nt.syntax, span);
                trace!(from = %nt.name, to = %fresh.name, "nonterminal renamed");

                renamed
                    .first
                    .entry(nt.clone())
                    .or_insert_with(|| fresh.clone());
                elements.push(Element::NonTerminal(fresh));
            }
            renamed.components.push(elements);
        }

        renamed
    }
}
