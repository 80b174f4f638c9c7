//! Stateful editing session for a Morse keyer.
//!
//! `EditSession` owns the message buffer and the timing classifier,
//! processes each GUI event, and returns a `KeyResponse` telling the
//! frontend which views to redraw.

mod key_handlers;
mod response;
mod types;

#[cfg(test)]
mod tests;

use moarse_core::settings::{self, KeySettings, Settings};
use moarse_core::{MessageBuffer, TimingClassifier, TimingConfig};

pub use types::{key, KeyEvent, KeyResponse, PLACEHOLDER};

pub struct EditSession {
    buffer: MessageBuffer,
    classifier: TimingClassifier,
    keys: KeySettings,
}

impl EditSession {
    pub fn new(timing: TimingConfig, keys: KeySettings) -> Self {
        Self {
            buffer: MessageBuffer::new(),
            classifier: TimingClassifier::new(timing),
            keys,
        }
    }

    pub fn from_settings(s: &Settings) -> Self {
        Self::new(s.timing_config(), s.keys.clone())
    }

    pub fn buffer(&self) -> &MessageBuffer {
        &self.buffer
    }

    pub fn key_settings(&self) -> &KeySettings {
        &self.keys
    }

    /// Decoded text of the current buffer.
    pub fn translation(&self) -> String {
        self.buffer.current_text()
    }

    /// Rendered symbols, as placed on the clipboard by the copy action.
    pub fn copy_text(&self) -> String {
        self.buffer.rendered()
    }

    /// True while the keyer is held down.
    pub fn is_keying(&self) -> bool {
        self.classifier.is_pressed()
    }
}

impl Default for EditSession {
    /// A session using the global settings.
    fn default() -> Self {
        Self::from_settings(settings::settings())
    }
}
