//! The Registry - the session's declaration table.

use crate::{
    JudgmentDef, JudgmentOrigin, ProductionDef, RegistryError, RegistryResult, RuleDef, SyntaxDef,
};
use deduce_core::{
    base_name, ClauseUse, Element, Form, JudgmentId, NonTerminal, ProductionId, RuleId, Span,
    SyntaxId,
};
use std::collections::HashMap;
use tracing::trace;

/// The Registry holds every declaration visible to the checker.
///
/// Definitions live in arenas indexed by their handles, so a handle handed
/// out once stays valid for the lifetime of the registry.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Syntax definitions, indexed by `SyntaxId`.
    syntaxes: Vec<SyntaxDef>,
    /// Syntax ID lookup by name.
    syntax_names: HashMap<String, SyntaxId>,

    /// Judgment definitions, indexed by `JudgmentId`.
    judgments: Vec<JudgmentDef>,
    /// Judgment ID lookup by name.
    judgment_names: HashMap<String, JudgmentId>,

    /// Productions, indexed by `ProductionId`.
    productions: Vec<ProductionDef>,

    /// Rules, indexed by `RuleId`.
    rules: Vec<RuleDef>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Syntax Lookups ====================

    /// Get a syntax definition by ID.
    pub fn syntax(&self, id: SyntaxId) -> Option<&SyntaxDef> {
        self.syntaxes.get(id.index())
    }

    /// Get a syntax definition by name.
    pub fn syntax_by_name(&self, name: &str) -> Option<&SyntaxDef> {
        self.syntax_names
            .get(name)
            .and_then(|id| self.syntaxes.get(id.index()))
    }

    /// Check whether a syntax category carries a context.
    pub fn is_context_syntax(&self, id: SyntaxId) -> bool {
        self.syntax(id).map(|s| s.context).unwrap_or(false)
    }

    /// Get the number of syntax categories.
    pub fn syntax_count(&self) -> usize {
        self.syntaxes.len()
    }

    // ==================== Judgment Lookups ====================

    /// Get a judgment definition by ID.
    pub fn judgment(&self, id: JudgmentId) -> Option<&JudgmentDef> {
        self.judgments.get(id.index())
    }

    /// Get a judgment definition by name.
    pub fn judgment_by_name(&self, name: &str) -> Option<&JudgmentDef> {
        self.judgment_names
            .get(name)
            .and_then(|id| self.judgments.get(id.index()))
    }

    /// Get a judgment ID by name.
    pub fn judgment_id(&self, name: &str) -> Option<JudgmentId> {
        self.judgment_names.get(name).copied()
    }

    /// Check whether a handle refers to a judgment of this registry.
    pub fn contains_judgment(&self, id: JudgmentId) -> bool {
        id.index() < self.judgments.len()
    }

    /// Get all judgment definitions, in allocation order.
    pub fn all_judgments(&self) -> impl Iterator<Item = &JudgmentDef> {
        self.judgments.iter()
    }

    /// Get the number of judgments.
    pub fn judgment_count(&self) -> usize {
        self.judgments.len()
    }

    /// Get the form of a judgment, if its production is installed.
    pub fn form_of(&self, id: JudgmentId) -> Option<&Form> {
        self.judgment(id)
            .and_then(|j| j.production)
            .and_then(|p| self.production(p))
            .map(|p| &p.form)
    }

    /// Get the first context-carrying nonterminal of a judgment's form.
    pub fn context_of(&self, id: JudgmentId) -> Option<&NonTerminal> {
        self.form_of(id)?
            .nonterminals()
            .find(|nt| self.is_context_syntax(nt.syntax))
    }

    // ==================== Production & Rule Lookups ====================

    /// Get a production by ID.
    pub fn production(&self, id: ProductionId) -> Option<&ProductionDef> {
        self.productions.get(id.index())
    }

    /// Get the number of productions.
    pub fn production_count(&self) -> usize {
        self.productions.len()
    }

    /// Get a rule by ID.
    pub fn rule(&self, id: RuleId) -> Option<&RuleDef> {
        self.rules.get(id.index())
    }

    /// Get all rules introducing a judgment, in declaration order.
    pub fn rules_for(&self, id: JudgmentId) -> Vec<&RuleDef> {
        self.judgment(id)
            .map(|j| j.rules.iter().filter_map(|&r| self.rule(r)).collect())
            .unwrap_or_default()
    }

    /// Get the number of rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    // ==================== Forms ====================

    /// Read a form from whitespace-separated words.
    ///
    /// A word naming a declared syntax, or whose base name does, becomes a
    /// nonterminal of that syntax; every other word is a terminal.
    pub fn form_from_text(&self, text: &str, span: Span) -> Form {
        let elements = text
            .split_whitespace()
            .map(|word| match self.syntax_of_word(word) {
                Some(syntax) => Element::nonterminal(word, syntax, span),
                None => Element::terminal(word, span),
            })
            .collect();
        Form::new(elements, span)
    }

    /// Resolve a single word as a nonterminal.
    pub fn nonterminal_from_text(&self, word: &str, span: Span) -> Option<NonTerminal> {
        self.syntax_of_word(word)
            .map(|syntax| NonTerminal::new(word, syntax, span))
    }

    /// An exact syntax name wins over a suffixed one, so `t1` is a syntax of
    /// its own when declared.
    fn syntax_of_word(&self, word: &str) -> Option<SyntaxId> {
        self.syntax_names
            .get(word)
            .or_else(|| self.syntax_names.get(base_name(word)))
            .copied()
    }

    // ==================== Writes ====================

    /// Declare a syntax category.
    pub fn add_syntax(
        &mut self,
        name: impl Into<String>,
        context: bool,
        span: Span,
    ) -> RegistryResult<SyntaxId> {
        let name = name.into();
        if self.syntax_names.contains_key(&name) {
            return Err(RegistryError::DuplicateSyntaxName(name));
        }

        let id = SyntaxId::new(self.syntaxes.len() as u32);
        let def = SyntaxDef::new(id, name.clone()).with_span(span);
        let def = if context { def.in_context() } else { def };

        self.syntax_names.insert(name, id);
        self.syntaxes.push(def);
        Ok(id)
    }

    /// Install a judgment without a production.
    ///
    /// The handle is needed before the production can name its judgment, so
    /// judgments are installed first and completed with
    /// [`define_production`](Self::define_production).
    pub fn reserve_judgment(
        &mut self,
        name: impl Into<String>,
        span: Span,
    ) -> RegistryResult<JudgmentId> {
        let name = name.into();
        if self.judgment_names.contains_key(&name) {
            return Err(RegistryError::DuplicateJudgmentName(name));
        }

        let id = JudgmentId::new(self.judgments.len() as u32);
        trace!(judgment = %id, name = %name, "judgment reserved");

        self.judgment_names.insert(name.clone(), id);
        self.judgments.push(JudgmentDef::new(id, name, span));
        Ok(id)
    }

    /// Create the production of a reserved judgment and patch it in.
    pub fn define_production(
        &mut self,
        judgment: JudgmentId,
        name: impl Into<String>,
        form: Form,
    ) -> RegistryResult<ProductionId> {
        let def = self
            .judgments
            .get(judgment.index())
            .ok_or(RegistryError::UnknownJudgment(judgment))?;
        if def.production.is_some() {
            return Err(RegistryError::ProductionAlreadyDefined(judgment));
        }
        for nt in form.nonterminals() {
            if self.syntax(nt.syntax).is_none() {
                return Err(RegistryError::UnknownSyntax(nt.syntax));
            }
        }

        let id = ProductionId::new(self.productions.len() as u32);
        self.productions.push(ProductionDef {
            id,
            name: name.into(),
            judgment,
            form,
        });
        if let Some(def) = self.judgments.get_mut(judgment.index()) {
            def.production = Some(id);
        }
        trace!(judgment = %judgment, production = %id, "production defined");
        Ok(id)
    }

    /// Set the assumption marker of a judgment.
    pub fn set_assume(
        &mut self,
        judgment: JudgmentId,
        assume: Option<NonTerminal>,
    ) -> RegistryResult<()> {
        if let Some(nt) = &assume {
            if self.syntax(nt.syntax).is_none() {
                return Err(RegistryError::UnknownSyntax(nt.syntax));
            }
        }
        let def = self
            .judgments
            .get_mut(judgment.index())
            .ok_or(RegistryError::UnknownJudgment(judgment))?;
        def.assume = assume;
        Ok(())
    }

    /// Record where a judgment came from.
    pub fn set_origin(&mut self, judgment: JudgmentId, origin: JudgmentOrigin) -> RegistryResult<()> {
        let def = self
            .judgments
            .get_mut(judgment.index())
            .ok_or(RegistryError::UnknownJudgment(judgment))?;
        def.origin = origin;
        Ok(())
    }

    /// Add an introduction rule for a judgment.
    pub fn add_rule(
        &mut self,
        name: impl Into<String>,
        judgment: JudgmentId,
        premises: Vec<ClauseUse>,
        conclusion: ClauseUse,
        span: Span,
    ) -> RegistryResult<RuleId> {
        if !self.contains_judgment(judgment) {
            return Err(RegistryError::UnknownJudgment(judgment));
        }
        for clause in premises.iter().chain(std::iter::once(&conclusion)) {
            if self.production(clause.production).is_none() {
                return Err(RegistryError::UnknownProduction(clause.production));
            }
        }

        let id = RuleId::new(self.rules.len() as u32);
        self.rules.push(RuleDef {
            id,
            name: name.into(),
            judgment,
            premises,
            conclusion,
            span,
        });
        if let Some(def) = self.judgments.get_mut(judgment.index()) {
            def.rules.push(id);
        }
        trace!(judgment = %judgment, rule = %id, "rule added");
        Ok(id)
    }
}
