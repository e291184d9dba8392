//! Main analyzer implementation.

use crate::{AnalyzerError, Scope, VarBinding};
use deduce_core::{ClauseUse, Diagnostics, Element, JudgmentId, Span, SyntaxId};
use deduce_registry::{JudgmentDef, Registry, RuleDef};
use tracing::debug;

/// The Analyzer checks declarations for well-formedness.
///
/// Errors are accumulated rather than returned so that one pass reports
/// every problem with a judgment.
pub struct Analyzer<'r> {
    /// The declaration table.
    registry: &'r Registry,
    /// Variables of the rule being checked.
    scope: Scope,
    /// Accumulated errors (for error recovery).
    errors: Vec<AnalyzerError>,
}

impl<'r> Analyzer<'r> {
    /// Create a new analyzer with the given registry.
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            scope: Scope::new(),
            errors: Vec::new(),
        }
    }

    /// Check a judgment: its form, its assumption and each of its rules.
    ///
    /// Returns the number of errors found for this judgment.
    pub fn check_judgment(&mut self, id: JudgmentId) -> usize {
        let before = self.errors.len();

        let Some(judgment) = self.registry.judgment(id) else {
            self.errors
                .push(AnalyzerError::unknown_judgment(id, Span::default()));
            return self.errors.len() - before;
        };

        self.check_form(judgment);
        for rule in self.registry.rules_for(id) {
            self.check_rule(judgment, rule);
        }

        self.errors.len() - before
    }

    /// Get the errors found so far.
    pub fn errors(&self) -> &[AnalyzerError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<AnalyzerError> {
        self.errors
    }

    fn check_form(&mut self, judgment: &'r JudgmentDef) {
        let Some(production_id) = judgment.production else {
            self.errors
                .push(AnalyzerError::missing_production(&judgment.name, judgment.span));
            return;
        };
        let Some(production) = self.registry.production(production_id) else {
            self.errors
                .push(AnalyzerError::unknown_production(production_id, judgment.span));
            return;
        };
        if production.judgment != judgment.id {
            self.errors
                .push(AnalyzerError::foreign_production(&judgment.name, judgment.span));
        }

        for nt in production.form.nonterminals() {
            if self.registry.syntax(nt.syntax).is_none() {
                self.errors
                    .push(AnalyzerError::unknown_syntax(&nt.name, nt.syntax, nt.span));
            }
        }

        if let Some(assume) = &judgment.assume {
            if !production.form.nonterminals().any(|nt| nt == assume) {
                self.errors.push(AnalyzerError::assumption_not_in_form(
                    &judgment.name,
                    &assume.name,
                    assume.span,
                ));
            }
        }
    }

    fn check_rule(&mut self, judgment: &'r JudgmentDef, rule: &'r RuleDef) {
        if judgment.production != Some(rule.conclusion.production) {
            self.errors.push(AnalyzerError::conclusion_mismatch(
                &rule.name,
                &judgment.name,
                rule.conclusion.span,
            ));
        }

        self.scope.push();
        for clause in rule.clauses() {
            self.check_clause(clause);
        }
        self.scope.pop();
    }

    fn check_clause(&mut self, clause: &'r ClauseUse) {
        let Some(production) = self.registry.production(clause.production) else {
            self.errors
                .push(AnalyzerError::unknown_production(clause.production, clause.span));
            return;
        };

        let expected = &production.form.elements;
        if expected.len() != clause.elements.len() {
            self.errors.push(AnalyzerError::arity_mismatch(
                clause.to_string(),
                expected.len(),
                clause.elements.len(),
                clause.span,
            ));
        } else {
            for (want, got) in expected.iter().zip(&clause.elements) {
                if !self.element_matches(want, got) {
                    self.errors.push(AnalyzerError::element_mismatch(
                        clause.to_string(),
                        self.describe(want),
                        self.describe(got),
                        got.span(),
                    ));
                }
            }
        }

        for nt in clause.nonterminals() {
            match self.scope.syntax_of(&nt.name) {
                Some(syntax) if syntax != nt.syntax => {
                    self.errors.push(AnalyzerError::inconsistent_variable(
                        &nt.name,
                        self.syntax_name(syntax),
                        self.syntax_name(nt.syntax),
                        nt.span,
                    ));
                }
                Some(_) => {}
                None => {
                    self.scope.define(VarBinding::new(&nt.name, nt.syntax));
                }
            }
        }
    }

    fn element_matches(&self, want: &Element, got: &Element) -> bool {
        match (want, got) {
            (Element::Terminal(a), Element::Terminal(b)) => a.token == b.token,
            (Element::NonTerminal(a), Element::NonTerminal(b)) => a.syntax == b.syntax,
            _ => false,
        }
    }

    fn describe(&self, element: &Element) -> String {
        match element {
            Element::Terminal(t) => t.token.clone(),
            Element::NonTerminal(nt) => self.syntax_name(nt.syntax),
        }
    }

    fn syntax_name(&self, id: SyntaxId) -> String {
        self.registry
            .syntax(id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

/// Check one judgment and report every problem to `diagnostics`.
///
/// Returns the number of diagnostics added.
pub fn typecheck_judgment(
    registry: &Registry,
    judgment: JudgmentId,
    diagnostics: &mut Diagnostics,
) -> usize {
    let mut analyzer = Analyzer::new(registry);
    let count = analyzer.check_judgment(judgment);
    debug!(judgment = %judgment, errors = count, "judgment checked");
    for error in analyzer.into_errors() {
        diagnostics.push(error.to_diagnostic());
    }
    count
}

/// Check every judgment in the registry.
pub fn check_all(registry: &Registry, diagnostics: &mut Diagnostics) -> usize {
    let mut analyzer = Analyzer::new(registry);
    let count: usize = registry
        .all_judgments()
        .map(|j| analyzer.check_judgment(j.id))
        .sum();
    debug!(judgments = registry.judgment_count(), errors = count, "declarations checked");
    for error in analyzer.into_errors() {
        diagnostics.push(error.to_diagnostic());
    }
    count
}
