//! Declaration types.

use deduce_core::{ClauseUse, Form, JudgmentId, NonTerminal, ProductionId, RuleId, Span, SyntaxId};

/// Syntax category definition.
#[derive(Debug, Clone)]
pub struct SyntaxDef {
    /// Unique identifier.
    pub id: SyntaxId,
    /// Category name; variables over it are written `name`, `name1`, `name'`...
    pub name: String,
    /// Whether this category represents an ambient context.
    pub context: bool,
    pub span: Span,
}

impl SyntaxDef {
    pub fn new(id: SyntaxId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            context: false,
            span: Span::default(),
        }
    }

    pub fn in_context(mut self) -> Self {
        self.context = true;
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// A grammar production: the surface form of one judgment.
#[derive(Debug, Clone)]
pub struct ProductionDef {
    /// Unique identifier.
    pub id: ProductionId,
    /// Production name (the judgment name unless given explicitly).
    pub name: String,
    /// The judgment this production belongs to.
    pub judgment: JudgmentId,
    pub form: Form,
}

/// Where a judgment came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum JudgmentOrigin {
    /// Written in the checked program.
    #[default]
    Declared,
    /// Synthesized as the conjunction of the listed components, in order.
    Conjunction(Box<[JudgmentId]>),
}

/// Judgment definition.
#[derive(Debug, Clone)]
pub struct JudgmentDef {
    /// Unique identifier.
    pub id: JudgmentId,
    /// Judgment name.
    pub name: String,
    /// The judgment's form. `None` only while the judgment is being installed.
    pub production: Option<ProductionId>,
    /// The nonterminal this judgment assumes, if any.
    pub assume: Option<NonTerminal>,
    /// Introduction rules, in declaration order.
    pub rules: Vec<RuleId>,
    pub origin: JudgmentOrigin,
    pub span: Span,
}

impl JudgmentDef {
    pub fn new(id: JudgmentId, name: impl Into<String>, span: Span) -> Self {
        Self {
            id,
            name: name.into(),
            production: None,
            assume: None,
            rules: Vec::new(),
            origin: JudgmentOrigin::Declared,
            span,
        }
    }

    /// Whether this judgment was synthesized rather than declared.
    pub fn is_synthesized(&self) -> bool {
        matches!(self.origin, JudgmentOrigin::Conjunction(_))
    }

    /// The conjoined components; empty for declared judgments.
    pub fn components(&self) -> &[JudgmentId] {
        match &self.origin {
            JudgmentOrigin::Declared => &[],
            JudgmentOrigin::Conjunction(parts) => parts,
        }
    }

    /// Whether the judgment is still waiting for its production.
    pub fn is_placeholder(&self) -> bool {
        self.production.is_none()
    }
}

/// Inference rule definition.
#[derive(Debug, Clone)]
pub struct RuleDef {
    /// Unique identifier.
    pub id: RuleId,
    /// Rule name.
    pub name: String,
    /// The judgment this rule introduces.
    pub judgment: JudgmentId,
    /// Premises, in order.
    pub premises: Vec<ClauseUse>,
    pub conclusion: ClauseUse,
    pub span: Span,
}

impl RuleDef {
    /// Whether this rule has no premises.
    pub fn is_axiom(&self) -> bool {
        self.premises.is_empty()
    }

    /// All clause uses of the rule, premises first.
    pub fn clauses(&self) -> impl Iterator<Item = &ClauseUse> {
        self.premises.iter().chain(std::iter::once(&self.conclusion))
    }
}
