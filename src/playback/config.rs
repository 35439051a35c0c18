//! Configuration for step playback and narration.

use std::time::Duration;

use crate::language::Language;

use super::error::PlaybackError;

/// Controls how fast a [`Player`](super::Player) advances.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaybackConfig {
    /// Current speed multiplier.
    pub speed: f64,
    /// Slowest allowed multiplier.
    pub min_speed: f64,
    /// Fastest allowed multiplier.
    pub max_speed: f64,
    /// Speeds must be a whole multiple of this increment.
    pub speed_step: f64,
    /// Time spent on one step at 1x, in milliseconds.
    pub base_delay_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            min_speed: 0.5,
            max_speed: 3.0,
            speed_step: 0.5,
            base_delay_ms: 1000,
        }
    }
}

impl PlaybackConfig {
    /// Checks that `speed` is positive, lies in range and sits on the step grid.
    ///
    /// # Errors
    ///
    /// Also fails when the config's own `speed_step` is not a positive finite
    /// number, since no grid can be derived from it.
    pub fn validate_speed(&self, speed: f64) -> Result<(), PlaybackError> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(PlaybackError::InvalidSpeed { speed });
        }
        if !self.speed_step.is_finite() || self.speed_step <= 0.0 {
            return Err(PlaybackError::InvalidSpeedStep {
                step: self.speed_step,
            });
        }
        if !(self.min_speed..=self.max_speed).contains(&speed) {
            return Err(PlaybackError::SpeedOutOfRange {
                speed,
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        let steps = speed / self.speed_step;
        if (steps - steps.round()).abs() > 1e-9 {
            return Err(PlaybackError::SpeedOffStep {
                speed,
                step: self.speed_step,
            });
        }
        Ok(())
    }

    /// Time to linger on each step at the current speed.
    ///
    /// A speed that cannot produce a delay (zero, negative, NaN or so small the
    /// delay overflows) falls back to the 1x delay.
    pub fn step_delay(&self) -> Duration {
        let base = Duration::from_millis(self.base_delay_ms);
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return base;
        }
        Duration::try_from_secs_f64(base.as_secs_f64() / self.speed).unwrap_or(base)
    }
}

/// Settings handed to a [`NarrationSink`](super::NarrationSink).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NarrationSettings {
    /// Speech rate multiplier, kept in sync with the playback speed.
    pub rate: f64,
    pub enabled: bool,
    pub language: Language,
}

impl Default for NarrationSettings {
    fn default() -> Self {
        Self {
            rate: 1.0,
            enabled: true,
            language: Language::default(),
        }
    }
}
