//! Arrows from source intervals to the merged interval that absorbed them.
//!
//! Geometry is derived from step data and track assignments only: x positions
//! come from an [`Axis`] (percentages), y positions from [`LaneMetrics`]
//! (pixels). Renderers draw a quadratic curve through the returned points.

use crate::trace::{Step, StepKind};

use super::axis::Axis;
use super::tracks::{assign_tracks, track_count, TrackedInterval};

/// Vertical layout constants for the two stacked sections.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneMetrics {
    /// Offset of the first track from the top of the sources section.
    pub top_padding: f64,
    /// Distance between two consecutive tracks.
    pub track_height: f64,
    /// Height of a single interval box.
    pub box_height: f64,
    /// Gap between the last source track and the first merged track.
    pub section_gap: f64,
}

impl Default for LaneMetrics {
    fn default() -> Self {
        Self {
            top_padding: 30.0,
            track_height: 22.0,
            box_height: 18.0,
            section_gap: 30.0,
        }
    }
}

impl LaneMetrics {
    /// Top edge of a box on `track` in the sources section.
    pub fn source_top(&self, track: usize) -> f64 {
        self.top_padding + track as f64 * self.track_height
    }

    /// Top edge of a box on `track` in the merged section, placed below
    /// `source_tracks` source lanes.
    pub fn merged_top(&self, source_tracks: usize, track: usize) -> f64 {
        self.source_top(source_tracks) + self.section_gap + track as f64 * self.track_height
    }
}

/// A source interval (index into [`Step::intervals`]) linked to the merged
/// interval (index into [`Step::merged_intervals`]) that covers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    pub source: usize,
    pub target: usize,
    /// True when the target is the live accumulator of an unfinished scan.
    pub processing: bool,
}

/// Quadratic curve from the bottom of a source box to the top of its target.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectionPath {
    pub connection: Connection,
    pub from: (f64, f64),
    pub control: (f64, f64),
    pub to: (f64, f64),
}

/// Lists every containment link of a step in merged-major order.
///
/// Nothing is linked on the `initial` step or before anything is merged.
pub fn connections(step: &Step) -> Vec<Connection> {
    let merged = step.merged_intervals();
    if step.kind() == StepKind::Initial || merged.is_empty() {
        return Vec::new();
    }
    let last = merged.len() - 1;
    let finished = step.kind() == StepKind::Complete;

    merged
        .iter()
        .enumerate()
        .flat_map(|(target, m)| {
            step.intervals()
                .iter()
                .enumerate()
                .filter(move |(_, source)| m.covers(&source.interval))
                .map(move |(source, _)| Connection {
                    source,
                    target,
                    processing: target == last && !finished,
                })
        })
        .collect()
}

/// Full layout of one step: tracks for both sections and routed arrows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepLayout {
    pub axis: Option<Axis>,
    pub sources: Vec<TrackedInterval>,
    pub merged: Vec<TrackedInterval>,
    pub paths: Vec<ConnectionPath>,
}

impl StepLayout {
    /// Lays out `step` using `metrics` for vertical spacing.
    pub fn compute(step: &Step, metrics: &LaneMetrics) -> Self {
        let sources = assign_tracks(&step.plain_intervals());
        let merged = assign_tracks(step.merged_intervals());
        let axis = Axis::for_step(step);

        let paths = match axis {
            Some(axis) => route(&connections(step), &sources, &merged, &axis, metrics),
            None => Vec::new(),
        };

        Self {
            axis,
            sources,
            merged,
            paths,
        }
    }

    /// Number of source lanes. At least one so an empty section keeps its height.
    pub fn source_tracks(&self) -> usize {
        track_count(&self.sources).max(1)
    }

    pub fn merged_tracks(&self) -> usize {
        track_count(&self.merged).max(1)
    }
}

/// Turns connections into curves. Links whose indices fall outside the
/// tracked lists are skipped.
pub fn route(
    links: &[Connection],
    sources: &[TrackedInterval],
    merged: &[TrackedInterval],
    axis: &Axis,
    metrics: &LaneMetrics,
) -> Vec<ConnectionPath> {
    let source_tracks = track_count(sources).max(1);
    links
        .iter()
        .filter_map(|link| {
            let source = sources.get(link.source)?;
            let target = merged.get(link.target)?;
            let from = (
                axis.center(&source.interval),
                metrics.source_top(source.track) + metrics.box_height,
            );
            let to = (
                axis.center(&target.interval),
                metrics.merged_top(source_tracks, target.track),
            );
            let control = (from.0, from.1 + (to.1 - from.1) * 0.5);
            Some(ConnectionPath {
                connection: *link,
                from,
                control,
                to,
            })
        })
        .collect()
}
