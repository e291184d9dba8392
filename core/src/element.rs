//! Syntax elements, forms and clause uses.
//!
//! A form is the concrete surface syntax of a grammar production: an ordered
//! list of terminals and nonterminals. A clause use is a form instantiated
//! against a particular production, as it appears in a rule's premises or
//! conclusion.

use crate::{ProductionId, Span, SyntaxId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A literal token in a form.
#[derive(Debug, Clone)]
pub struct Terminal {
    /// The token text.
    pub token: String,
    /// Where the token was written (or generated).
    pub span: Span,
}

impl Terminal {
    pub fn new(token: impl Into<String>, span: Span) -> Self {
        Self {
            token: token.into(),
            span,
        }
    }
}

impl PartialEq for Terminal {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for Terminal {}

impl Hash for Terminal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.token.hash(state);
    }
}

/// A named placeholder bound to a syntax category.
///
/// Equality is declared identity: the name together with the syntax
/// category. The span takes no part in comparisons.
#[derive(Debug, Clone)]
pub struct NonTerminal {
    /// The variable name, e.g. `e1` or `Gamma'`.
    pub name: String,
    /// The syntax category this placeholder ranges over.
    pub syntax: SyntaxId,
    pub span: Span,
}

impl NonTerminal {
    pub fn new(name: impl Into<String>, syntax: SyntaxId, span: Span) -> Self {
        Self {
            name: name.into(),
            syntax,
            span,
        }
    }

    /// The name with any trailing digits, primes and underscores removed.
    ///
    /// By convention a variable `e12'` ranges over the syntax named `e`.
    pub fn base_name(&self) -> &str {
        base_name(&self.name)
    }
}

impl PartialEq for NonTerminal {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.syntax == other.syntax
    }
}

impl Eq for NonTerminal {}

impl Hash for NonTerminal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.syntax.hash(state);
    }
}

/// Strip the variable suffix (digits, primes, underscores) from a name.
pub fn base_name(name: &str) -> &str {
    let trimmed = name.trim_end_matches(|c: char| c.is_ascii_digit() || c == '\'' || c == '_');
    if trimmed.is_empty() {
        name
    } else {
        trimmed
    }
}

/// One element of a form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    Terminal(Terminal),
    NonTerminal(NonTerminal),
}

impl Element {
    pub fn terminal(token: impl Into<String>, span: Span) -> Self {
        Element::Terminal(Terminal::new(token, span))
    }

    pub fn nonterminal(name: impl Into<String>, syntax: SyntaxId, span: Span) -> Self {
        Element::NonTerminal(NonTerminal::new(name, syntax, span))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Element::Terminal(_))
    }

    pub fn is_nonterminal(&self) -> bool {
        matches!(self, Element::NonTerminal(_))
    }

    pub fn as_terminal(&self) -> Option<&Terminal> {
        match self {
            Element::Terminal(t) => Some(t),
            Element::NonTerminal(_) => None,
        }
    }

    pub fn as_nonterminal(&self) -> Option<&NonTerminal> {
        match self {
            Element::Terminal(_) => None,
            Element::NonTerminal(nt) => Some(nt),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Element::Terminal(t) => t.span,
            Element::NonTerminal(nt) => nt.span,
        }
    }
}

impl From<Terminal> for Element {
    fn from(t: Terminal) -> Self {
        Element::Terminal(t)
    }
}

impl From<NonTerminal> for Element {
    fn from(nt: NonTerminal) -> Self {
        Element::NonTerminal(nt)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Terminal(t) => write!(f, "{}", t.token),
            Element::NonTerminal(nt) => write!(f, "{}", nt.name),
        }
    }
}

/// The concrete syntax of a production.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Form {
    pub elements: Vec<Element>,
    pub span: Span,
}

impl Form {
    pub fn new(elements: Vec<Element>, span: Span) -> Self {
        Self { elements, span }
    }

    pub fn empty(span: Span) -> Self {
        Self {
            elements: Vec::new(),
            span,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All nonterminal occurrences, in order.
    pub fn nonterminals(&self) -> impl Iterator<Item = &NonTerminal> {
        self.elements.iter().filter_map(Element::as_nonterminal)
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, &self.elements)
    }
}

/// A form instantiated against a production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseUse {
    /// The production this clause is an instance of.
    pub production: ProductionId,
    pub elements: Vec<Element>,
    pub span: Span,
}

impl ClauseUse {
    pub fn new(production: ProductionId, elements: Vec<Element>, span: Span) -> Self {
        Self {
            production,
            elements,
            span,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn nonterminals(&self) -> impl Iterator<Item = &NonTerminal> {
        self.elements.iter().filter_map(Element::as_nonterminal)
    }
}

impl fmt::Display for ClauseUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, &self.elements)
    }
}

fn write_elements(f: &mut fmt::Formatter<'_>, elements: &[Element]) -> fmt::Result {
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", element)?;
    }
    Ok(())
}
