//! Color groups tying sorted intervals to the merged interval that absorbed
//! them.

use crate::interval::Interval;

/// A set of related shades for one merged interval and its sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColorGroup {
    pub primary: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
    pub background: &'static str,
}

// green, blue, cyan, orange, pink, brown
const PALETTE: [ColorGroup; 6] = [
    ColorGroup {
        primary: "#66bb6a",
        light: "#81c784",
        dark: "#4caf50",
        background: "#2a3a2a",
    },
    ColorGroup {
        primary: "#42a5f5",
        light: "#64b5f6",
        dark: "#2196f3",
        background: "#2a3a4a",
    },
    ColorGroup {
        primary: "#26c6da",
        light: "#4dd0e1",
        dark: "#00bcd4",
        background: "#2a3a3a",
    },
    ColorGroup {
        primary: "#ffa726",
        light: "#ffb74d",
        dark: "#ff9800",
        background: "#3a3a2a",
    },
    ColorGroup {
        primary: "#ec407a",
        light: "#f06292",
        dark: "#e91e63",
        background: "#3a2a2a",
    },
    ColorGroup {
        primary: "#8d6e63",
        light: "#a1887f",
        dark: "#6d4c41",
        background: "#2a2a2a",
    },
];

/// Color group for the merged interval at `merged_index`, cycling through a
/// fixed six-entry palette.
pub fn palette_color(merged_index: usize) -> ColorGroup {
    PALETTE[merged_index % PALETTE.len()]
}

/// Index of the first merged interval that fully covers `interval`.
pub fn merged_group(interval: &Interval, merged: &[Interval]) -> Option<usize> {
    merged.iter().position(|m| m.covers(interval))
}

/// [`merged_group`] for every interval in `intervals`.
pub fn merged_groups(intervals: &[Interval], merged: &[Interval]) -> Vec<Option<usize>> {
    intervals
        .iter()
        .map(|interval| merged_group(interval, merged))
        .collect()
}
