//! RegistryBuilder for declaring the program's judgments up front.

use crate::{Registry, RegistryError, RegistryResult};
use deduce_core::{ClauseUse, JudgmentId, RuleId, Span, SyntaxId};

/// Builder for populating a Registry with declared syntax, judgments and rules.
///
/// Each sub-builder writes through to the registry when `done` is called, so
/// declarations must appear after whatever they mention.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a syntax category.
    pub fn add_syntax(&mut self, name: impl Into<String>) -> SyntaxBuilder<'_> {
        SyntaxBuilder {
            builder: self,
            name: name.into(),
            context: false,
            span: Span::default(),
        }
    }

    /// Declare a judgment with its form written as whitespace-separated words.
    pub fn add_judgment(
        &mut self,
        name: impl Into<String>,
        form: impl Into<String>,
    ) -> JudgmentBuilder<'_> {
        JudgmentBuilder {
            builder: self,
            name: name.into(),
            form: form.into(),
            production_name: None,
            assume: None,
            span: Span::default(),
        }
    }

    /// Declare an introduction rule for a judgment.
    pub fn add_rule(
        &mut self,
        name: impl Into<String>,
        judgment: impl Into<String>,
    ) -> RuleBuilder<'_> {
        RuleBuilder {
            builder: self,
            name: name.into(),
            judgment: judgment.into(),
            premises: Vec::new(),
            conclusion: None,
            span: Span::default(),
        }
    }

    /// Peek at the registry built so far.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Finish and return the Registry.
    pub fn build(self) -> RegistryResult<Registry> {
        if let Some(j) = self.registry.all_judgments().find(|j| j.is_placeholder()) {
            return Err(RegistryError::MissingProduction(j.id));
        }
        Ok(self.registry)
    }
}

/// Builder for a syntax category.
pub struct SyntaxBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    name: String,
    context: bool,
    span: Span,
}

impl<'a> SyntaxBuilder<'a> {
    /// Mark the category as context-carrying.
    pub fn context(mut self) -> Self {
        self.context = true;
        self
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Finish building this syntax category.
    pub fn done(self) -> RegistryResult<SyntaxId> {
        self.builder
            .registry
            .add_syntax(self.name, self.context, self.span)
    }
}

/// Builder for a judgment.
pub struct JudgmentBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    name: String,
    form: String,
    production_name: Option<String>,
    assume: Option<String>,
    span: Span,
}

impl<'a> JudgmentBuilder<'a> {
    /// Set the nonterminal this judgment assumes.
    pub fn assumes(mut self, nonterminal: impl Into<String>) -> Self {
        self.assume = Some(nonterminal.into());
        self
    }

    /// Name the production differently from the judgment.
    pub fn production_name(mut self, name: impl Into<String>) -> Self {
        self.production_name = Some(name.into());
        self
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Finish building this judgment.
    pub fn done(self) -> RegistryResult<JudgmentId> {
        let registry = &mut self.builder.registry;

        // Resolve the assumption before touching the table
        let assume = match &self.assume {
            Some(word) => Some(
                registry
                    .nonterminal_from_text(word, self.span)
                    .ok_or_else(|| RegistryError::UnknownAssumption(word.clone()))?,
            ),
            None => None,
        };
        let form = registry.form_from_text(&self.form, self.span);

        let id = registry.reserve_judgment(self.name.clone(), self.span)?;
        let production_name = self.production_name.unwrap_or(self.name);
        registry.define_production(id, production_name, form)?;
        registry.set_assume(id, assume)?;
        Ok(id)
    }
}

/// Builder for an inference rule.
pub struct RuleBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    name: String,
    judgment: String,
    premises: Vec<(String, String)>,
    conclusion: Option<String>,
    span: Span,
}

impl<'a> RuleBuilder<'a> {
    /// Add a premise: an instance of `judgment` written as words.
    pub fn premise(mut self, judgment: impl Into<String>, clause: impl Into<String>) -> Self {
        self.premises.push((judgment.into(), clause.into()));
        self
    }

    /// Set the conclusion, an instance of the rule's own judgment.
    pub fn conclusion(mut self, clause: impl Into<String>) -> Self {
        self.conclusion = Some(clause.into());
        self
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Finish building this rule.
    pub fn done(self) -> RegistryResult<RuleId> {
        let registry = &mut self.builder.registry;
        let span = self.span;

        let judgment = registry
            .judgment_id(&self.judgment)
            .ok_or_else(|| RegistryError::UnknownJudgmentName(self.judgment.clone()))?;
        let conclusion_text = self
            .conclusion
            .ok_or_else(|| RegistryError::MissingConclusion(self.name.clone()))?;

        let mut premises = Vec::with_capacity(self.premises.len());
        for (premise_judgment, text) in &self.premises {
            let id = registry
                .judgment_id(premise_judgment)
                .ok_or_else(|| RegistryError::UnknownJudgmentName(premise_judgment.clone()))?;
            premises.push(clause_use(registry, id, text, span)?);
        }
        let conclusion = clause_use(registry, judgment, &conclusion_text, span)?;

        registry.add_rule(self.name, judgment, premises, conclusion, span)
    }
}

/// Read `text` as an instance of `judgment`'s production.
fn clause_use(
    registry: &Registry,
    judgment: JudgmentId,
    text: &str,
    span: Span,
) -> RegistryResult<ClauseUse> {
    let production = registry
        .judgment(judgment)
        .and_then(|j| j.production)
        .ok_or(RegistryError::MissingProduction(judgment))?;
    let form = registry.form_from_text(text, span);
    Ok(ClauseUse::new(production, form.elements, span))
}
