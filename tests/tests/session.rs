//! Session lifecycle.

use deduce_tests::prelude::*;

mod reset_forgets_conjunctions {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("reset_forgets_conjunctions")
            .syntax("e")
            .judgment("value", "e value")
            .judgment("halts", "e halts")
            .step("before", &["value", "halts"], |a| a.fresh())
            .step("cached", &["value", "halts"], |a| a.cached())
            .reset()
            .step("after", &["value", "halts"], |a| {
                a.fresh().form("e1 value and e2 halts").clean()
            })
            .step("trivial", &[], |a| a.cached())
    }

    #[test]
    fn test() {
        scenario().run().unwrap();
    }
}

mod unknown_step_reference {
    use super::*;

    #[test]
    fn test() {
        let result = Scenario::new("unknown_step_reference")
            .syntax("e")
            .judgment("value", "e value")
            .step("one", &["value"], |a| a.same_as("zero"))
            .run();

        assert!(matches!(result, Err(ScenarioError::StepNotFound { .. })));
    }
}

mod failed_assertion_is_reported {
    use super::*;

    #[test]
    fn test() {
        let result = Scenario::new("failed_assertion_is_reported")
            .syntax("e")
            .judgment("value", "e value")
            .step("one", &["value"], |a| a.form("e value"))
            .run();

        assert!(matches!(
            result,
            Err(ScenarioError::AssertionFailed { step, .. }) if step == "one"
        ));
    }
}
