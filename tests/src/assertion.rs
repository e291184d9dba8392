//! Assertion types and builders for verifying step results.

use deduce_core::Diagnostics;

use crate::error::{ScenarioError, ScenarioResult};

/// What a successful step produced, rendered for comparison.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Name of the conjunction judgment.
    pub name: String,
    /// The merged form.
    pub form: String,
    /// Premises of its rule, in order.
    pub premises: Vec<String>,
    /// Conclusion of its rule.
    pub conclusion: String,
    /// Context binder of the merged form.
    pub context: Option<String>,
    /// Assumption marker of the judgment.
    pub assume: Option<String>,
    /// Diagnostics the step added to the session.
    pub diagnostics: Diagnostics,
    /// Whether the step created the judgment.
    pub fresh: bool,
}

/// A complete assertion for a step result.
#[derive(Default)]
pub struct Assertion {
    pub name: Option<String>,
    pub form: Option<String>,
    pub form_len: Option<usize>,
    pub premises: Option<Vec<String>>,
    pub conclusion: Option<String>,
    pub context: Option<Option<String>>,
    pub assume: Option<Option<String>>,

    // Diagnostics
    pub diagnostics: Option<usize>,
    pub messages: Vec<(String, usize)>,

    pub fresh: Option<bool>,

    // Identity against earlier steps
    pub same_as: Vec<String>,
    pub differs_from: Vec<String>,

    // Error assertions
    pub error: Option<String>,

    // Custom assertion function
    #[allow(clippy::type_complexity)]
    pub custom: Option<Box<dyn Fn(&Outcome) -> bool + Send + Sync>>,
}

impl std::fmt::Debug for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assertion")
            .field("name", &self.name)
            .field("form", &self.form)
            .field("premises", &self.premises)
            .field("context", &self.context)
            .field("diagnostics", &self.diagnostics)
            .field("fresh", &self.fresh)
            .field("same_as", &self.same_as)
            .field("error", &self.error)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Assertion {
    /// Create a new empty assertion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify the assertion against a result.
    ///
    /// Identity checks against earlier steps are left to the runner.
    pub fn verify(&self, step: &str, result: &Result<Outcome, String>) -> ScenarioResult<()> {
        // Check error expectations first
        if let Some(ref expected_error) = self.error {
            return match result {
                Err(msg) if msg.contains(expected_error) => Ok(()),
                Err(msg) => Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected error containing '{}', got: {}",
                        expected_error, msg
                    ),
                )),
                Ok(_) => Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected error containing '{}', but step succeeded",
                        expected_error
                    ),
                )),
            };
        }

        let outcome = result
            .as_ref()
            .map_err(|msg| ScenarioError::assertion_failed(step, format!("step failed: {}", msg)))?;

        if let Some(ref custom) = self.custom {
            if !custom(outcome) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    "custom assertion failed",
                ));
            }
        }

        check_eq(step, "name", &self.name, &outcome.name)?;
        check_eq(step, "form", &self.form, &outcome.form)?;
        check_eq(step, "conclusion", &self.conclusion, &outcome.conclusion)?;
        check_eq(step, "premises", &self.premises, &outcome.premises)?;
        check_eq(step, "context", &self.context, &outcome.context)?;
        check_eq(step, "assumption", &self.assume, &outcome.assume)?;
        check_eq(step, "fresh", &self.fresh, &outcome.fresh)?;

        if let Some(expected) = self.form_len {
            let actual = if outcome.form.is_empty() {
                0
            } else {
                outcome.form.split(' ').count()
            };
            check_eq(step, "form length", &Some(expected), &actual)?;
        }

        if let Some(expected) = self.diagnostics {
            if outcome.diagnostics.len() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected {} diagnostics, got {}: {:?}",
                        expected,
                        outcome.diagnostics.len(),
                        outcome
                            .diagnostics
                            .all()
                            .iter()
                            .map(|d| d.to_string())
                            .collect::<Vec<_>>()
                    ),
                ));
            }
        }
        for (message, count) in &self.messages {
            let actual = outcome.diagnostics.count_message(message);
            if actual != *count {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected {} diagnostics '{}', got {}",
                        count, message, actual
                    ),
                ));
            }
        }

        Ok(())
    }
}

fn check_eq<T: PartialEq + std::fmt::Debug>(
    step: &str,
    what: &str,
    expected: &Option<T>,
    actual: &T,
) -> ScenarioResult<()> {
    match expected {
        Some(expected) if expected != actual => Err(ScenarioError::assertion_failed(
            step,
            format!("expected {} {:?}, got {:?}", what, expected, actual),
        )),
        _ => Ok(()),
    }
}

/// Builder for creating assertions with a fluent API.
#[derive(Default)]
pub struct AssertionBuilder {
    assertion: Assertion,
}

impl AssertionBuilder {
    /// Create a new assertion builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the assertion.
    pub fn build(self) -> Assertion {
        self.assertion
    }

    // ==================== Judgment Assertions ====================

    /// Assert the judgment's name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.assertion.name = Some(name.into());
        self
    }

    /// Assert the merged form, written with single spaces.
    pub fn form(mut self, form: impl Into<String>) -> Self {
        self.assertion.form = Some(form.into());
        self
    }

    /// Assert the number of elements of the merged form.
    pub fn form_len(mut self, len: usize) -> Self {
        self.assertion.form_len = Some(len);
        self
    }

    /// Assert the premises of the rule, in order.
    pub fn premises(mut self, premises: &[&str]) -> Self {
        self.assertion.premises = Some(premises.iter().map(|p| p.to_string()).collect());
        self
    }

    /// Assert the conclusion of the rule.
    pub fn conclusion(mut self, conclusion: impl Into<String>) -> Self {
        self.assertion.conclusion = Some(conclusion.into());
        self
    }

    /// Assert the context binder.
    pub fn context(mut self, name: impl Into<String>) -> Self {
        self.assertion.context = Some(Some(name.into()));
        self
    }

    /// Assert that no context binder is present.
    pub fn no_context(mut self) -> Self {
        self.assertion.context = Some(None);
        self
    }

    /// Assert the assumption marker.
    pub fn assumes(mut self, name: impl Into<String>) -> Self {
        self.assertion.assume = Some(Some(name.into()));
        self
    }

    // ==================== Diagnostic Assertions ====================

    /// Assert the number of diagnostics the step added.
    pub fn diagnostics(mut self, count: usize) -> Self {
        self.assertion.diagnostics = Some(count);
        self
    }

    /// Assert that the step added no diagnostics.
    pub fn clean(self) -> Self {
        self.diagnostics(0)
    }

    /// Assert how many diagnostics carry `message`.
    pub fn message(mut self, message: impl Into<String>, count: usize) -> Self {
        self.assertion.messages.push((message.into(), count));
        self
    }

    // ==================== Cache Assertions ====================

    /// Assert that the step created its judgment.
    pub fn fresh(mut self) -> Self {
        self.assertion.fresh = Some(true);
        self
    }

    /// Assert that the step reused an existing judgment.
    pub fn cached(mut self) -> Self {
        self.assertion.fresh = Some(false);
        self
    }

    /// Assert the same judgment as an earlier step.
    pub fn same_as(mut self, step: impl Into<String>) -> Self {
        self.assertion.same_as.push(step.into());
        self
    }

    /// Assert a different judgment from an earlier step.
    pub fn differs_from(mut self, step: impl Into<String>) -> Self {
        self.assertion.differs_from.push(step.into());
        self
    }

    // ==================== Error Assertions ====================

    /// Assert that the step failed with an error containing this message.
    pub fn error(mut self, msg: impl Into<String>) -> Self {
        self.assertion.error = Some(msg.into());
        self
    }

    // ==================== Custom Assertions ====================

    /// Add a custom assertion function.
    pub fn custom<F>(mut self, f: F) -> Self
    where
        F: Fn(&Outcome) -> bool + Send + Sync + 'static,
    {
        self.assertion.custom = Some(Box::new(f));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome() -> Outcome {
        Outcome {
            name: "and[a,b]".to_string(),
            form: "x1 ok and y2 ok".to_string(),
            premises: vec!["x1 ok".to_string(), "y2 ok".to_string()],
            conclusion: "x1 ok and y2 ok".to_string(),
            context: None,
            assume: None,
            diagnostics: Diagnostics::new(),
            fresh: true,
        }
    }

    #[test]
    fn test_matching_assertion_passes() {
        let assertion = AssertionBuilder::new()
            .named("and[a,b]")
            .form_len(5)
            .premises(&["x1 ok", "y2 ok"])
            .no_context()
            .fresh()
            .clean()
            .build();

        assert!(assertion.verify("s", &Ok(outcome())).is_ok());
    }

    #[test]
    fn test_mismatched_form_fails() {
        let assertion = AssertionBuilder::new().form("x1 ok").build();

        let result = assertion.verify("s", &Ok(outcome()));

        assert!(matches!(result, Err(ScenarioError::AssertionFailed { .. })));
    }

    #[test]
    fn test_expected_error() {
        let assertion = AssertionBuilder::new().error("appears more than once").build();

        assert!(assertion
            .verify("s", &Err("judgment j0 appears more than once".to_string()))
            .is_ok());
        assert!(assertion.verify("s", &Ok(outcome())).is_err());
    }

    #[test]
    fn test_custom_assertion() {
        let assertion = AssertionBuilder::new()
            .custom(|o| o.premises.len() == 3)
            .build();

        assert!(assertion.verify("s", &Ok(outcome())).is_err());
    }
}
