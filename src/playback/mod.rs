//! Playback of a precomputed trace with optional narration.

mod config;
mod error;
mod narration;
mod player;

pub use config::{NarrationSettings, PlaybackConfig};
pub use error::PlaybackError;
pub use narration::{NarrationEvent, NarrationSink, RecordingSink, SilentSink};
pub use player::Player;
