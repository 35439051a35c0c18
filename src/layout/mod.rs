//! Pure layout helpers for rendering a step.
//!
//! Nothing here measures or touches a real display. Every function reads step
//! data (or plain intervals) and returns plain values.

mod axis;
mod connections;
mod groups;
mod tracks;

pub use axis::Axis;
pub use connections::{connections, route, Connection, ConnectionPath, LaneMetrics, StepLayout};
pub use groups::{merged_group, merged_groups, palette_color, ColorGroup};
pub use tracks::{assign_tracks, track_count, TrackedInterval};
