//! mergetrace - step-by-step traces of the merge-intervals algorithm
//!
//! Turns a list of intervals into a replayable sequence of narrated steps
//! (sort, pick, compare, merge, save, complete) and lays intervals out on
//! non-colliding tracks for display.

pub mod input;
pub mod interval;
pub mod language;
pub mod layout;
pub mod playback;
pub mod trace;

pub use interval::{Interval, IntervalError};
pub use language::Language;
pub use layout::{assign_tracks, TrackedInterval};
pub use trace::{generate, generate_with, merge_intervals, Step, StepKind, TracedInterval};
