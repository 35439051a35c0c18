//! Step-trace generation for the merge-intervals algorithm.
//!
//! The engine runs the classic sort-then-scan merge once and records every
//! decision as a [`Step`]:
//!
//! 1. `initial` with the input as given (tagged with original indices)
//! 2. `sort` with the intervals stably sorted by start
//! 3. `pick_first` seeding the accumulator with the first sorted interval
//! 4. for each later interval, either `compare_overlap` + `merge` (when
//!    `current.end >= next.start`) or `compare_no_overlap` + `add_and_pick_new`
//! 5. `complete` with the final result
//!
//! An empty input stops after the `initial` step.
//!
//! The whole sequence is computed up front. Steps own their data, so playback
//! can move in either direction without recomputing anything.

mod accumulator;
pub(crate) mod narrative;
mod step;


use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::interval::Interval;
use crate::language::Language;

use accumulator::MergeState;
pub use step::{Step, StepKind, TracedInterval};

/// Generates the full step trace in the default language.
///
/// # Example
///
/// ```
/// use mergetrace::{generate, Interval, StepKind};
///
/// let input = vec![
///     Interval::new(1.0, 3.0).unwrap(),
///     Interval::new(2.0, 6.0).unwrap(),
/// ];
/// let steps = generate(&input);
/// let last = steps.last().unwrap();
/// assert_eq!(last.kind(), StepKind::Complete);
/// assert_eq!(last.merged_intervals(), &[Interval::new(1.0, 6.0).unwrap()]);
/// ```
pub fn generate(intervals: &[Interval]) -> Vec<Step> {
    generate_with(intervals, Language::default())
}

/// Generates the full step trace with labels and messages in `language`.
pub fn generate_with(intervals: &[Interval], language: Language) -> Vec<Step> {
    let mut trace = TraceBuilder::new(language);

    let tagged: Vec<TracedInterval> = intervals
        .iter()
        .enumerate()
        .map(|(idx, interval)| TracedInterval::new(*interval, idx))
        .collect();

    trace.push(
        StepKind::Initial,
        &tagged,
        None,
        Vec::new(),
        Vec::new(),
        narrative::initial(language, intervals.len()),
    );

    let Some(sorted) = sort_by_start(tagged) else {
        debug!(input = 0, steps = trace.len(), "generated empty merge trace");
        return trace.finish();
    };

    trace.push(
        StepKind::Sort,
        &sorted,
        None,
        Vec::new(),
        Vec::new(),
        narrative::sort(language),
    );

    let mut state = MergeState::seed(sorted[0].interval);
    trace.push(
        StepKind::PickFirst,
        &sorted,
        Some(0),
        state.snapshot(),
        vec![0],
        narrative::pick_first(language, &state.current()),
    );

    for (i, next) in sorted.iter().enumerate().skip(1) {
        let next = next.interval;
        let current = state.current();

        if current.reaches(&next) {
            trace.push(
                StepKind::CompareOverlap,
                &sorted,
                Some(i),
                state.snapshot(),
                vec![i],
                narrative::compare_overlap(language, &next, &current),
            );

            state = state.absorb(&next);
            trace.push(
                StepKind::Merge,
                &sorted,
                Some(i),
                state.snapshot(),
                vec![i],
                narrative::merge(language, &current, &next, &state.current()),
            );
        } else {
            trace.push(
                StepKind::CompareNoOverlap,
                &sorted,
                Some(i),
                state.snapshot(),
                vec![i],
                narrative::compare_no_overlap(language, &next, &current),
            );

            state = state.freeze_and_pick(next);
            trace.push(
                StepKind::AddAndPickNew,
                &sorted,
                Some(i),
                state.snapshot(),
                vec![i],
                narrative::add_and_pick_new(
                    language,
                    &current,
                    &state.current(),
                    state.frozen().len(),
                ),
            );
        }
    }

    let merged = state.finish();
    let message = narrative::complete(language, intervals.len(), merged.len());
    trace.push(
        StepKind::Complete,
        &sorted,
        Some(sorted.len() - 1),
        merged,
        Vec::new(),
        message,
    );

    debug!(
        input = intervals.len(),
        steps = trace.len(),
        "generated merge trace"
    );
    trace.finish()
}

/// Returns only the merged result, without recording a trace.
///
/// Produces exactly what the `complete` step of [`generate`] holds.
pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let tagged = intervals
        .iter()
        .enumerate()
        .map(|(idx, interval)| TracedInterval::new(*interval, idx))
        .collect();
    let Some(sorted) = sort_by_start(tagged) else {
        return Vec::new();
    };

    let state = sorted[1..]
        .iter()
        .fold(MergeState::seed(sorted[0].interval), |state, next| {
            if state.current().reaches(&next.interval) {
                state.absorb(&next.interval)
            } else {
                state.freeze_and_pick(next.interval)
            }
        });
    state.finish()
}

/// Stable sort by start. Returns `None` for an empty list.
fn sort_by_start(mut intervals: Vec<TracedInterval>) -> Option<Vec<TracedInterval>> {
    if intervals.is_empty() {
        return None;
    }
    // Endpoints are finite, so `partial_cmp` always succeeds.
    intervals.sort_by(|a, b| a.start().partial_cmp(&b.start()).unwrap_or(Ordering::Equal));
    Some(intervals)
}

/// Append-only step collector.
struct TraceBuilder {
    language: Language,
    steps: Vec<Step>,
}

impl TraceBuilder {
    fn new(language: Language) -> Self {
        Self {
            language,
            steps: Vec::new(),
        }
    }

    fn len(&self) -> usize {
        self.steps.len()
    }

    fn push(
        &mut self,
        kind: StepKind,
        intervals: &[TracedInterval],
        current_index: Option<usize>,
        merged_intervals: Vec<Interval>,
        highlight_indices: Vec<usize>,
        message: String,
    ) {
        trace!(step = self.steps.len(), kind = %kind, ?current_index, "emit step");
        self.steps.push(Step {
            kind,
            language: self.language,
            description: narrative::description(kind, self.language).to_string(),
            intervals: intervals.to_vec(),
            current_index,
            merged_intervals,
            highlight_indices,
            message,
        });
    }

    fn finish(self) -> Vec<Step> {
        self.steps
    }
}
