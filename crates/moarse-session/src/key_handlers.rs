use std::time::Duration;

use tracing::{debug, debug_span};

use moarse_core::KeyTransition;

use super::types::{KeyEvent, KeyResponse};
use super::EditSession;

impl EditSession {
    /// Process one event. Returns a KeyResponse describing what the caller should do.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event).entered();

        match event {
            KeyEvent::KeyerDown { timestamp } => {
                self.classifier.classify(KeyTransition::Press(timestamp));
                KeyResponse::consumed()
            }

            KeyEvent::KeyerUp { timestamp } => self.handle_keyer_up(timestamp),

            KeyEvent::NextLetter => {
                self.buffer.append_separator();
                self.make_full_redraw_response()
            }

            // Empty buffer: nothing to delete, still consumed.
            KeyEvent::DeleteLast => {
                self.buffer.delete_last();
                self.make_full_redraw_response()
            }

            KeyEvent::Clear => {
                self.buffer.clear();
                self.make_full_redraw_response()
            }

            KeyEvent::TextEdited { text } => {
                self.buffer.set_from_text(&text);
                debug!(symbols = self.buffer.len(), "buffer rebuilt from text");
                self.make_code_redraw_response()
            }

            KeyEvent::Other => KeyResponse::not_consumed(),
        }
    }

    /// Map a raw key transition through the configured key codes, then handle it.
    pub fn handle_key_code(
        &mut self,
        key_code: u16,
        is_down: bool,
        timestamp: Duration,
    ) -> KeyResponse {
        let event = KeyEvent::from_key_code(&self.keys, key_code, is_down, timestamp);
        self.handle_key(event)
    }

    fn handle_keyer_up(&mut self, timestamp: Duration) -> KeyResponse {
        match self.classifier.classify(KeyTransition::Release(timestamp)) {
            Some(symbol) => {
                self.buffer.append(symbol);
                let mut resp = self.make_full_redraw_response();
                resp.emitted = Some(symbol);
                resp
            }
            None => KeyResponse::consumed(),
        }
    }
}
