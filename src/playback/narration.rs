//! Narration sinks driven by the player.
//!
//! A sink stands in for a speech backend. The player owns one (optionally),
//! configures it when rate, language or the enabled flag change, and hands it
//! the message of each step it lands on.

use tracing::debug;

use crate::language::Language;

use super::config::NarrationSettings;

/// Receiver of narrated step messages.
pub trait NarrationSink {
    /// Applies new settings. Called once on attach and after every change.
    fn configure(&mut self, settings: &NarrationSettings);

    /// Speaks `text`, interrupting anything still being spoken.
    fn narrate(&mut self, text: &str, language: Language);

    /// Silences any narration in progress.
    fn stop(&mut self);
}

/// Sink that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl NarrationSink for SilentSink {
    fn configure(&mut self, _settings: &NarrationSettings) {}

    fn narrate(&mut self, _text: &str, _language: Language) {}

    fn stop(&mut self) {}
}

/// One call observed by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum NarrationEvent {
    Configured(NarrationSettings),
    Narrated { text: String, language: Language },
    Stopped,
}

/// Sink that records every call, for tests and headless runs.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<NarrationEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[NarrationEvent] {
        &self.events
    }

    /// Texts narrated so far, in order.
    pub fn narrated(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                NarrationEvent::Narrated { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl NarrationSink for RecordingSink {
    fn configure(&mut self, settings: &NarrationSettings) {
        debug!(
            rate = settings.rate,
            enabled = settings.enabled,
            language = %settings.language,
            "narration configured"
        );
        self.events.push(NarrationEvent::Configured(settings.clone()));
    }

    fn narrate(&mut self, text: &str, language: Language) {
        self.events.push(NarrationEvent::Narrated {
            text: text.to_string(),
            language,
        });
    }

    fn stop(&mut self) {
        self.events.push(NarrationEvent::Stopped);
    }
}
