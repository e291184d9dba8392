//! Variable renaming across conjuncts.

use deduce_tests::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

mod shared_names_are_split {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("shared_names_are_split")
            .syntax("e")
            .judgment("value", "e value")
            .judgment("halts", "e halts")
            .step("both", &["value", "halts"], |a| {
                a.form("e1 value and e2 halts")
                    .premises(&["e1 value", "e2 halts"])
            })
    }

    #[test]
    fn test() {
        scenario().run().unwrap();
    }
}

mod digit_suffixed_syntax {
    use super::*;

    pub fn scenario() -> Scenario {
        // `t1` + 1 would spell the same name as `t` + 11
        Scenario::new("digit_suffixed_syntax")
            .syntax("t")
            .syntax("t1")
            .judgment("many", "t t t t t t t t t t")
            .judgment("one", "t1 !")
            .step("both", &["one", "many"], |a| {
                a.custom(|o| {
                    let names: Vec<&str> = o
                        .form
                        .split(' ')
                        .filter(|w| w.starts_with('t'))
                        .collect();
                    names.iter().collect::<HashSet<_>>().len() == names.len()
                })
                .clean()
            })
    }

    #[test]
    fn test() {
        scenario().run().unwrap();
    }
}

mod fresh_names_per_call {
    use super::*;

    pub fn scenario() -> Scenario {
        // Every synthesis starts counting again
        Scenario::new("fresh_names_per_call")
            .syntax("e")
            .judgment("value", "e value")
            .judgment("halts", "e halts")
            .step("first", &["value", "halts"], |a| a.form("e1 value and e2 halts"))
            .step("second", &["halts", "value"], |a| a.form("e1 halts and e2 value"))
    }

    #[test]
    fn test() {
        scenario().run().unwrap();
    }
}

mod random_forms {
    use super::*;

    #[test]
    fn test() {
        let mut rng = StdRng::seed_from_u64(7);
        let words = ["e", "e'", "tau", "Gamma", "|-", ":", "->", "ok"];

        for round in 0..25 {
            // GIVEN random judgments over a shared vocabulary
            let count = rng.gen_range(1..5);
            let mut scenario = Scenario::new(format!("random_{}", round))
                .context("Gamma")
                .syntax("e")
                .syntax("tau");
            let mut names = Vec::new();
            for j in 0..count {
                let len = rng.gen_range(1..7);
                let form: Vec<&str> = (0..len)
                    .map(|_| words[rng.gen_range(0..words.len())])
                    .collect();
                let name = format!("j{}", j);
                scenario = scenario.judgment(name.clone(), form.join(" "));
                names.push(name);
            }
            let components: Vec<&str> = names.iter().map(String::as_str).collect();

            // WHEN / THEN no generated name repeats
            scenario
                .step("all", &components, |a| {
                    a.custom(|o| {
                        let mut seen = HashSet::new();
                        let context = o.context.clone();
                        o.form
                            .split(' ')
                            .filter(|w| w.starts_with(['e', 't']))
                            .filter(|w| Some(w.to_string()) != context)
                            .all(|w| seen.insert(w.to_string()))
                    })
                })
                .run()
                .unwrap();
        }
    }
}
