//! Immutable state of the left-to-right merge scan.

use crate::interval::Interval;

/// Frozen results plus the live "current interval".
///
/// Transitions consume the state and return a new one; snapshots are owned
/// vectors, so no step ever observes a later transition.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MergeState {
    frozen: Vec<Interval>,
    current: Interval,
}

impl MergeState {
    /// Seeds the scan with a copy of the first sorted interval.
    pub(crate) fn seed(first: Interval) -> Self {
        Self {
            frozen: Vec::new(),
            current: first,
        }
    }

    pub(crate) fn current(&self) -> Interval {
        self.current
    }

    pub(crate) fn frozen(&self) -> &[Interval] {
        &self.frozen
    }

    /// The result list as a caller would see it: frozen results followed by
    /// the current interval.
    pub(crate) fn snapshot(&self) -> Vec<Interval> {
        let mut merged = Vec::with_capacity(self.frozen.len() + 1);
        merged.extend_from_slice(&self.frozen);
        merged.push(self.current);
        merged
    }

    /// Extends the current interval's end to cover `next`.
    pub(crate) fn absorb(self, next: &Interval) -> Self {
        Self {
            current: self.current.extended_to(next),
            frozen: self.frozen,
        }
    }

    /// Freezes the current interval and starts a new one from `next`.
    pub(crate) fn freeze_and_pick(mut self, next: Interval) -> Self {
        self.frozen.push(self.current);
        Self {
            frozen: self.frozen,
            current: next,
        }
    }

    /// Freezes the current interval and returns the final result.
    pub(crate) fn finish(mut self) -> Vec<Interval> {
        self.frozen.push(self.current);
        self.frozen
    }
}
