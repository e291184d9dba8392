//! The synthesis entry point.

use crate::{
    assemble, conjunction_name, register, unify, Construction, Renamed, Renamer, SynthesisCache,
    SynthesisConfig, SynthesisError, SynthesisResult, Unified,
};
use deduce_core::{Diagnostics, Form, JudgmentId, Span};
use deduce_registry::Registry;
use std::collections::HashSet;
use tracing::{debug, instrument, trace, warn};

/// Outcome of one synthesis request.
#[derive(Debug, Clone)]
pub struct Synthesis {
    /// The conjunction judgment.
    pub judgment: JudgmentId,
    /// Problems found while building it; always empty on a cache hit.
    pub diagnostics: Diagnostics,
    /// Whether this request created the judgment.
    pub fresh: bool,
}

/// Synthesizes conjunction judgments on demand, once per component list.
#[derive(Debug, Clone, Default)]
pub struct Conjunctions {
    config: SynthesisConfig,
    cache: SynthesisCache,
}

impl Conjunctions {
    pub fn new(config: SynthesisConfig) -> Self {
        Self {
            config,
            cache: SynthesisCache::new(),
        }
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    pub fn cache(&self) -> &SynthesisCache {
        &self.cache
    }

    /// Number of conjunctions synthesized so far, the trivial one included.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Forget every synthesized conjunction.
    ///
    /// The judgments stay in whatever registry they were written to, so the
    /// caller must reset that registry too.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Create the empty conjunction so it is available from the start.
    pub fn seed_trivial(&mut self, registry: &mut Registry) -> SynthesisResult<Synthesis> {
        self.synthesize(registry, Span::default(), &[])
    }

    /// The empty conjunction, which holds trivially.
    pub fn trivial(&mut self, registry: &mut Registry) -> SynthesisResult<JudgmentId> {
        Ok(self.synthesize(registry, Span::default(), &[])?.judgment)
    }

    /// Get or create the conjunction of `parts`, in order.
    ///
    /// A repeated request returns the judgment created the first time and
    /// reports nothing. A new request unifies the components' contexts,
    /// renames their variables apart, joins the renamed forms and registers
    /// the result with one rule.
    ///
    /// Unknown or repeated handles, and handles without a form, are rejected
    /// before the registry is touched.
    #[instrument(skip_all, fields(components = parts.len()))]
    pub fn synthesize(
        &mut self,
        registry: &mut Registry,
        span: Span,
        parts: &[JudgmentId],
    ) -> SynthesisResult<Synthesis> {
        if let Some(judgment) = self.cache.get(parts) {
            trace!(judgment = %judgment, "conjunction cache hit");
            return Ok(Synthesis {
                judgment,
                diagnostics: Diagnostics::new(),
                fresh: false,
            });
        }

        let forms = Self::component_forms(registry, parts)?;

        let (unified, renamed) = if parts.is_empty() {
            (Unified::default(), Renamed::default())
        } else {
            let unified = unify(registry, parts, span);
            let renamed =
                Renamer::new().rename(registry, &forms, unified.context.as_ref(), span);
            (unified, renamed)
        };
        let Unified {
            context,
            assume,
            mut diagnostics,
        } = unified;

        let form = assemble(&renamed.components, &self.config.separator, span);
        let assume = assume.map(|nt| {
            if Some(&nt) == context.as_ref() {
                nt
            } else {
                renamed.renamed(&nt).cloned().unwrap_or(nt)
            }
        });

        let construction = Construction {
            name: unused_name(
                registry,
                conjunction_name(registry, parts, &self.config.name_prefix),
            ),
            components: parts.into(),
            premises: renamed.components,
            form,
            assume,
            span,
        };
        let judgment = register(registry, construction, self.config.validate, &mut diagnostics)?;
        self.cache.insert(parts, judgment);

        for diagnostic in &diagnostics {
            warn!(judgment = %judgment, at = %diagnostic.span, "{}", diagnostic.message);
        }
        debug!(
            judgment = %judgment,
            diagnostics = diagnostics.len(),
            "conjunction synthesized"
        );

        Ok(Synthesis {
            judgment,
            diagnostics,
            fresh: true,
        })
    }

    /// The form of every component, checking the request on the way.
    fn component_forms<'r>(
        registry: &'r Registry,
        parts: &[JudgmentId],
    ) -> SynthesisResult<Vec<&'r Form>> {
        let mut seen = HashSet::with_capacity(parts.len());
        let mut forms = Vec::with_capacity(parts.len());
        for &part in parts {
            if !registry.contains_judgment(part) {
                return Err(SynthesisError::UnknownJudgment(part));
            }
            if !seen.insert(part) {
                return Err(SynthesisError::DuplicateComponent(part));
            }
            let form = registry
                .form_of(part)
                .ok_or(SynthesisError::MissingForm(part))?;
            forms.push(form);
        }
        Ok(forms)
    }
}

/// `base`, or `base` with the first numeric suffix no judgment is using.
///
/// Component names may contain the separator, and users may declare a
/// judgment that looks like a conjunction, so the plain name can be taken.
fn unused_name(registry: &Registry, base: String) -> String {
    if registry.judgment_id(&base).is_none() {
        return base;
    }
    let mut n = 1u32;
    loop {
        let candidate = format!("{}#{}", base, n);
        if registry.judgment_id(&candidate).is_none() {
            return candidate;
        }
        n += 1;
    }
}
