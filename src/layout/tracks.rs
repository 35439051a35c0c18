//! Greedy first-fit lane assignment.
//!
//! Intervals are visited in start order and placed on the first track whose
//! last interval has already ended. On interval graphs first-fit in start
//! order is optimal, so the number of tracks equals the largest number of
//! intervals covering a single point.

use std::cmp::Ordering;

use tracing::debug;

use crate::interval::Interval;

/// An interval placed on a layout lane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackedInterval {
    pub interval: Interval,
    pub track: usize,
}

impl TrackedInterval {
    pub fn start(&self) -> f64 {
        self.interval.start()
    }

    pub fn end(&self) -> f64 {
        self.interval.end()
    }
}

/// Assigns each interval a track so that intervals sharing a track never
/// overlap.
///
/// The output has the same length and order as `intervals`. An interval that
/// ends exactly where another starts may share its track.
///
/// # Example
///
/// ```
/// use mergetrace::{assign_tracks, Interval};
///
/// let input: Vec<Interval> = [(1.0, 2.0), (3.0, 4.0), (1.5, 3.5)]
///     .into_iter()
///     .map(|(s, e)| Interval::new(s, e).unwrap())
///     .collect();
/// let tracks: Vec<usize> = assign_tracks(&input).iter().map(|t| t.track).collect();
/// assert_eq!(tracks, vec![0, 0, 1]);
/// ```
pub fn assign_tracks(intervals: &[Interval]) -> Vec<TrackedInterval> {
    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_by(|&a, &b| {
        intervals[a]
            .start()
            .partial_cmp(&intervals[b].start())
            .unwrap_or(Ordering::Equal)
    });

    // End of the last interval placed on each open track.
    let mut track_ends: Vec<f64> = Vec::new();
    let mut assigned = vec![0usize; intervals.len()];

    for idx in order {
        let interval = &intervals[idx];
        let track = match track_ends
            .iter()
            .position(|&end| end <= interval.start())
        {
            Some(track) => {
                track_ends[track] = interval.end();
                track
            }
            None => {
                track_ends.push(interval.end());
                track_ends.len() - 1
            }
        };
        assigned[idx] = track;
    }

    debug!(
        intervals = intervals.len(),
        tracks = track_ends.len(),
        "assigned layout tracks"
    );

    intervals
        .iter()
        .zip(assigned)
        .map(|(interval, track)| TrackedInterval {
            interval: *interval,
            track,
        })
        .collect()
}

/// Number of distinct tracks used by an assignment. Zero when empty.
pub fn track_count(tracked: &[TrackedInterval]) -> usize {
    tracked.iter().map(|t| t.track + 1).max().unwrap_or(0)
}
