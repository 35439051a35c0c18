//! Interval lists from text, presets and random draws.

mod error;
mod parse;
mod presets;

pub use error::ParseError;
pub use parse::{format_intervals, parse_intervals};
pub use presets::{default_preset, preset, random_intervals, Preset, PRESETS};
