//! Completed-step bookkeeping.

use std::collections::BTreeSet;

/// Set of step indices (0-based) the cook has advanced past or finalized.
///
/// Only grows; there is no way to unmark a step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionTracker {
    completed: BTreeSet<usize>,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a step complete. Marking twice is harmless.
    pub fn mark_complete(&mut self, index: usize) {
        self.completed.insert(index);
    }

    pub fn has(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Size comparison against the step count. Indices are only ever added
    /// for real steps, so equal sizes mean every step is done.
    pub fn all_complete(&self, total_steps: usize) -> bool {
        self.completed.len() == total_steps
    }

    /// Completed indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.completed.iter().copied()
    }

    pub fn to_set(&self) -> BTreeSet<usize> {
        self.completed.clone()
    }
}
