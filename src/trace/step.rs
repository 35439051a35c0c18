//! Immutable snapshots emitted by the trace engine.

use std::fmt::Display;

use crate::interval::Interval;
use crate::language::Language;

/// The closed set of decisions the merge scan narrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StepKind {
    Initial,
    Sort,
    PickFirst,
    CompareOverlap,
    Merge,
    CompareNoOverlap,
    AddAndPickNew,
    Complete,
}

impl StepKind {
    pub const ALL: [StepKind; 8] = [
        StepKind::Initial,
        StepKind::Sort,
        StepKind::PickFirst,
        StepKind::CompareOverlap,
        StepKind::Merge,
        StepKind::CompareNoOverlap,
        StepKind::AddAndPickNew,
        StepKind::Complete,
    ];

    /// Stable snake_case identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StepKind::Initial => "initial",
            StepKind::Sort => "sort",
            StepKind::PickFirst => "pick_first",
            StepKind::CompareOverlap => "compare_overlap",
            StepKind::Merge => "merge",
            StepKind::CompareNoOverlap => "compare_no_overlap",
            StepKind::AddAndPickNew => "add_and_pick_new",
            StepKind::Complete => "complete",
        }
    }

    /// True for the two comparison kinds that open a decision on interval `i`.
    pub const fn is_comparison(&self) -> bool {
        matches!(self, StepKind::CompareOverlap | StepKind::CompareNoOverlap)
    }
}

impl Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// An input interval tagged with its position in the caller's list.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TracedInterval {
    pub interval: Interval,
    pub original_index: usize,
}

impl TracedInterval {
    pub fn new(interval: Interval, original_index: usize) -> Self {
        Self {
            interval,
            original_index,
        }
    }

    pub fn start(&self) -> f64 {
        self.interval.start()
    }

    pub fn end(&self) -> f64 {
        self.interval.end()
    }
}

/// One self-contained moment of the merge algorithm.
///
/// Every field is an owned value. Nothing is shared with the caller's input or
/// with other steps, so a sequence can be replayed in any order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub(crate) kind: StepKind,
    pub(crate) language: Language,
    pub(crate) description: String,
    pub(crate) intervals: Vec<TracedInterval>,
    pub(crate) current_index: Option<usize>,
    pub(crate) merged_intervals: Vec<Interval>,
    pub(crate) highlight_indices: Vec<usize>,
    pub(crate) message: String,
}

impl Step {
    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// Language of [`Step::description`] and [`Step::message`].
    pub fn language(&self) -> Language {
        self.language
    }

    /// Short localized label for [`Step::kind`].
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Working list: input order in the `initial` step, start-sorted afterwards.
    pub fn intervals(&self) -> &[TracedInterval] {
        &self.intervals
    }

    /// Index into [`Step::intervals`] under examination, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Result list as of this step, including the live accumulator.
    pub fn merged_intervals(&self) -> &[Interval] {
        &self.merged_intervals
    }

    pub fn highlight_indices(&self) -> &[usize] {
        &self.highlight_indices
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlight_indices.contains(&index)
    }

    /// Narrated explanation with the concrete values of this step.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The bare intervals of [`Step::intervals`], without their tags.
    pub fn plain_intervals(&self) -> Vec<Interval> {
        self.intervals.iter().map(|t| t.interval).collect()
    }
}
