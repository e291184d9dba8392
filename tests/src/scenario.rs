//! Scenario definition and builder.

use deduce_conjunction::SynthesisConfig;
use deduce_core::Span;

use crate::assertion::{Assertion, AssertionBuilder};
use crate::error::ScenarioResult;
use crate::runner::Runner;

/// A declaration installed before any step runs.
#[derive(Debug, Clone)]
pub enum Declaration {
    /// A syntax category, possibly context-carrying.
    Syntax { name: String, context: bool },
    /// A judgment with its form as words, and an optional assumption.
    Judgment {
        name: String,
        form: String,
        assume: Option<String>,
    },
    /// A placeholder judgment that never gets a form.
    Placeholder { name: String },
}

/// A step in a scenario with its assertion.
#[derive(Debug)]
pub struct Step {
    /// Step name, used in reports and by `same_as`/`differs_from`.
    pub name: String,
    /// Components to conjoin, by judgment name, in order.
    pub components: Vec<String>,
    /// Where the request is attributed.
    pub span: Span,
    /// Assertion to verify the result.
    pub assertion: Assertion,
}

/// A complete test scenario.
pub struct Scenario {
    /// Scenario name (for reporting).
    name: String,
    /// Declarations, in order.
    declarations: Vec<Declaration>,
    /// Synthesis configuration for the session.
    config: SynthesisConfig,
    /// Steps with assertions.
    steps: Vec<Step>,
    /// Reset the session before the step at this index.
    resets: Vec<usize>,
}

impl Scenario {
    /// Create a new scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
            config: SynthesisConfig::default(),
            steps: Vec::new(),
            resets: Vec::new(),
        }
    }

    /// Declare a syntax category.
    pub fn syntax(mut self, name: impl Into<String>) -> Self {
        self.declarations.push(Declaration::Syntax {
            name: name.into(),
            context: false,
        });
        self
    }

    /// Declare a context-carrying syntax category.
    pub fn context(mut self, name: impl Into<String>) -> Self {
        self.declarations.push(Declaration::Syntax {
            name: name.into(),
            context: true,
        });
        self
    }

    /// Declare a judgment.
    pub fn judgment(mut self, name: impl Into<String>, form: impl Into<String>) -> Self {
        self.declarations.push(Declaration::Judgment {
            name: name.into(),
            form: form.into(),
            assume: None,
        });
        self
    }

    /// Declare a judgment that assumes one of its nonterminals.
    pub fn judgment_assuming(
        mut self,
        name: impl Into<String>,
        form: impl Into<String>,
        assume: impl Into<String>,
    ) -> Self {
        self.declarations.push(Declaration::Judgment {
            name: name.into(),
            form: form.into(),
            assume: Some(assume.into()),
        });
        self
    }

    /// Declare a judgment whose form is never defined.
    pub fn placeholder(mut self, name: impl Into<String>) -> Self {
        self.declarations
            .push(Declaration::Placeholder { name: name.into() });
        self
    }

    /// Use a non-default synthesis configuration.
    pub fn config(mut self, config: SynthesisConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a step conjoining `components` with an assertion on the result.
    pub fn step<F>(self, name: impl Into<String>, components: &[&str], assertion_fn: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        self.step_at(name, Span::default(), components, assertion_fn)
    }

    /// Add a step attributed to `span`.
    pub fn step_at<F>(
        mut self,
        name: impl Into<String>,
        span: Span,
        components: &[&str],
        assertion_fn: F,
    ) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        let assertion = assertion_fn(AssertionBuilder::new()).build();
        self.steps.push(Step {
            name: name.into(),
            components: components.iter().map(|c| c.to_string()).collect(),
            span,
            assertion,
        });
        self
    }

    /// Reset the session before the next step.
    pub fn reset(mut self) -> Self {
        self.resets.push(self.steps.len());
        self
    }

    /// Run the scenario and return the result.
    pub fn run(&self) -> ScenarioResult<()> {
        let mut runner = Runner::new(self)?;
        runner.run()
    }

    /// Get the scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn synthesis_config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Get the steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Whether the session is reset before the step at `index`.
    pub fn resets_before(&self, index: usize) -> bool {
        self.resets.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scenario_builder() {
        let scenario = Scenario::new("test")
            .context("Gamma")
            .syntax("e")
            .judgment("value", "e value")
            .step("one", &["value"], |a| a.fresh())
            .reset()
            .step("again", &["value"], |a| a.fresh());

        assert_eq!(scenario.name(), "test");
        assert_eq!(scenario.declarations().len(), 3);
        assert_eq!(scenario.steps().len(), 2);
        assert_eq!(scenario.steps()[0].components, ["value"]);
        assert!(!scenario.resets_before(0));
        assert!(scenario.resets_before(1));
    }
}
