//! Cursor over a precomputed step sequence.

use std::time::Duration;

use tracing::debug;

use crate::language::Language;
use crate::trace::{generate_with, Step};

use super::config::{NarrationSettings, PlaybackConfig};
use super::error::PlaybackError;
use super::narration::{NarrationSink, SilentSink};

/// Plays back a step trace forwards, backwards or by direct seek.
///
/// The player never recomputes steps. Timers are the caller's business:
/// call [`Player::tick`] every [`Player::step_delay`] while
/// [`Player::is_playing`] holds. Whenever the cursor lands on a different
/// step, that step's message goes to the narration sink (if enabled),
/// tagged with the language the message is written in.
///
/// # Example
///
/// ```
/// use mergetrace::playback::{Player, RecordingSink};
/// use mergetrace::{generate, Interval};
///
/// let steps = generate(&[Interval::new(1.0, 3.0).unwrap()]);
/// let mut player = Player::with_sink(steps, RecordingSink::new());
/// player.toggle_play();
/// while player.tick() {}
/// assert!(player.is_at_end());
/// assert!(!player.is_playing());
/// assert_eq!(player.sink().narrated().len(), 4);
/// ```
#[derive(Debug)]
pub struct Player<S: NarrationSink = SilentSink> {
    steps: Vec<Step>,
    position: usize,
    playing: bool,
    config: PlaybackConfig,
    narration: NarrationSettings,
    sink: S,
}

impl Player<SilentSink> {
    /// Creates a player without narration.
    pub fn new(steps: Vec<Step>) -> Self {
        Self::with_sink(steps, SilentSink)
    }
}

impl<S: NarrationSink> Player<S> {
    /// Creates a player that narrates through `sink` with default settings.
    pub fn with_sink(steps: Vec<Step>, sink: S) -> Self {
        let mut player = Self {
            steps,
            position: 0,
            playing: false,
            config: PlaybackConfig::default(),
            narration: NarrationSettings::default(),
            sink,
        };
        player.follow_trace_language();
        player.sink.configure(&player.narration);
        player.narrate_current();
        player
    }

    /// Replaces the playback configuration.
    ///
    /// # Errors
    ///
    /// Fails if `config.speed` is not allowed by the config's own bounds, or
    /// if those bounds are unusable.
    pub fn with_config(mut self, config: PlaybackConfig) -> Result<Self, PlaybackError> {
        config.validate_speed(config.speed)?;
        self.narration.rate = config.speed;
        self.config = config;
        self.sink.configure(&self.narration);
        Ok(self)
    }

    /// Replaces the narration settings.
    ///
    /// A `settings.language` different from the loaded trace's regenerates the
    /// trace in that language.
    pub fn with_narration(mut self, settings: NarrationSettings) -> Self {
        self.set_narration(settings);
        self
    }

    /// Swaps in a new trace: rewinds, pauses and silences the old narration.
    pub fn load(&mut self, steps: Vec<Step>) {
        self.sink.stop();
        self.steps = steps;
        self.position = 0;
        self.playing = false;
        self.follow_trace_language();
        self.sink.configure(&self.narration);
        debug!(steps = self.steps.len(), "loaded trace");
        self.narrate_current();
    }

    pub fn current(&self) -> Option<&Step> {
        self.steps.get(self.position)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// True on the last step (or when there are no steps at all).
    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.steps.len()
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn narration(&self) -> &NarrationSettings {
        &self.narration
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Time to wait between two ticks at the current speed.
    pub fn step_delay(&self) -> Duration {
        self.config.step_delay()
    }

    /// Moves one step forward and pauses. Returns false at the last step.
    pub fn next(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.playing = false;
        self.move_to(self.position + 1)
    }

    /// Moves one step back and pauses. Returns false at the first step.
    pub fn previous(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.playing = false;
        self.move_to(self.position - 1)
    }

    /// Rewinds to the first step and pauses.
    pub fn reset(&mut self) {
        self.playing = false;
        self.move_to(0);
    }

    /// Jumps straight to `index`. Returns false if it is out of range.
    pub fn seek(&mut self, index: usize) -> bool {
        if index >= self.steps.len() {
            return false;
        }
        self.move_to(index);
        true
    }

    /// Starts or pauses playback. Starting from the last step rewinds first.
    pub fn toggle_play(&mut self) {
        if self.is_at_end() {
            self.move_to(0);
            self.playing = true;
        } else {
            self.playing = !self.playing;
        }
        debug!(playing = self.playing, position = self.position, "toggled playback");
    }

    /// Advances one step if playing. Playback stops on reaching the last step.
    ///
    /// Returns true if the cursor moved.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        if self.is_at_end() {
            self.playing = false;
            return false;
        }
        let moved = self.move_to(self.position + 1);
        if self.is_at_end() {
            self.playing = false;
        }
        moved
    }

    /// Changes playback speed and keeps the narration rate in step.
    ///
    /// # Errors
    ///
    /// Fails if `speed` is outside the configured range or off its grid.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), PlaybackError> {
        self.config.validate_speed(speed)?;
        self.config.speed = speed;
        self.narration.rate = speed;
        self.sink.configure(&self.narration);
        debug!(speed, "playback speed changed");
        Ok(())
    }

    /// Switches the narration language and re-narrates the current step.
    ///
    /// The trace is regenerated from its `initial` step in `language`, so the
    /// cursor stays on the same decision with translated text.
    pub fn set_language(&mut self, language: Language) {
        self.relocalize(language);
        self.narration.language = language;
        self.sink.configure(&self.narration);
        self.sink.stop();
        self.narrate_current();
    }

    /// Turns narration on or off. Turning it off silences the sink.
    pub fn set_narration_enabled(&mut self, enabled: bool) {
        self.narration.enabled = enabled;
        self.sink.configure(&self.narration);
        if !enabled {
            self.sink.stop();
        }
    }

    fn set_narration(&mut self, settings: NarrationSettings) {
        let enabled = settings.enabled;
        self.relocalize(settings.language);
        self.narration = settings;
        self.sink.configure(&self.narration);
        if !enabled {
            self.sink.stop();
        }
    }

    /// Adopts the language the loaded steps are written in.
    fn follow_trace_language(&mut self) {
        if let Some(step) = self.steps.first() {
            self.narration.language = step.language();
        }
    }

    /// Rebuilds the trace in `language`, keeping the cursor in place.
    fn relocalize(&mut self, language: Language) {
        let Some(initial) = self.steps.first() else {
            return;
        };
        if initial.language() == language {
            return;
        }
        self.steps = generate_with(&initial.plain_intervals(), language);
        debug!(%language, steps = self.steps.len(), "regenerated trace");
    }

    /// Moves the cursor, narrating only when the step actually changes.
    fn move_to(&mut self, index: usize) -> bool {
        if index == self.position {
            return false;
        }
        self.position = index;
        debug!(position = index, "moved to step");
        self.narrate_current();
        true
    }

    fn narrate_current(&mut self) {
        if !self.narration.enabled {
            return;
        }
        if let Some(step) = self.steps.get(self.position) {
            self.sink.narrate(step.message(), step.language());
        }
    }
}
