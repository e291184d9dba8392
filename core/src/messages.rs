//! Common diagnostic messages used across checker components.
//!
//! These constants keep the wording identical wherever a message is raised
//! or asserted on.

/// Diagnostic: the components of a conjunction disagree on their context.
pub const ERR_CONTEXTS_MUST_AGREE: &str = "All contexts in a conjunction must be the same";

/// Diagnostic: the components of a conjunction disagree on their assumption.
pub const ERR_ASSUMPTIONS_MUST_AGREE: &str =
    "cannot conjoin judgments with different assumptions";

/// Default separator token placed between conjuncts.
pub const CONJUNCTION_SEPARATOR: &str = "and";

/// Default prefix of generated conjunction names, as in `and[A,B]`.
pub const CONJUNCTION_PREFIX: &str = "and";
