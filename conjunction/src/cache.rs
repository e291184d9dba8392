//! Memo of synthesized conjunctions.

use deduce_core::JudgmentId;
use std::collections::HashMap;

/// Synthesized conjunctions keyed by their ordered component list.
///
/// Keys are owned copies, so the caller's slice may change afterwards
/// without affecting lookups. Entries are never replaced or evicted; the
/// whole cache is cleared only when its session resets.
#[derive(Debug, Clone, Default)]
pub struct SynthesisCache {
    entries: HashMap<Box<[JudgmentId]>, JudgmentId>,
}

impl SynthesisCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the conjunction of exactly these components, in this order.
    pub fn get(&self, parts: &[JudgmentId]) -> Option<JudgmentId> {
        self.entries.get(parts).copied()
    }

    pub fn contains(&self, parts: &[JudgmentId]) -> bool {
        self.entries.contains_key(parts)
    }

    /// Record a conjunction. An existing entry is kept and returned.
    pub fn insert(&mut self, parts: &[JudgmentId], judgment: JudgmentId) -> JudgmentId {
        *self
            .entries
            .entry(parts.to_vec().into_boxed_slice())
            .or_insert(judgment)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[JudgmentId], JudgmentId)> {
        self.entries.iter().map(|(k, &v)| (&**k, v))
    }
}
