use std::time::Duration;

use moarse_core::settings::KeySettings;
use moarse_core::Symbol;

/// Default macOS virtual key codes.
pub mod key {
    pub const LEFT_SHIFT: u16 = 56;
    pub const RIGHT_SHIFT: u16 = 60;
    pub const SPACE: u16 = 49;
    pub const BACKSPACE: u16 = 51;
}

/// Hint shown in the empty code view.
pub const PLACEHOLDER: &str = "Hold shift to do a dash. Tap shift for a dot. \
    Press space to move to the next character. Backspace to delete.";

/// One input event from the GUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// The keying key went down.
    KeyerDown { timestamp: Duration },
    /// The keying key came up.
    KeyerUp { timestamp: Duration },
    /// Finish the current letter.
    NextLetter,
    DeleteLast,
    /// The clear button.
    Clear,
    /// The user edited the plain-text field; carries its full new contents.
    TextEdited { text: String },
    /// Anything this session does not handle.
    Other,
}

impl KeyEvent {
    /// Map a raw key transition to an event using the configured key codes.
    ///
    /// The next-letter and delete keys act on key down only.
    pub fn from_key_code(
        keys: &KeySettings,
        key_code: u16,
        is_down: bool,
        timestamp: Duration,
    ) -> KeyEvent {
        match (key_code, is_down) {
            (c, true) if c == keys.keyer => KeyEvent::KeyerDown { timestamp },
            (c, false) if c == keys.keyer => KeyEvent::KeyerUp { timestamp },
            (c, true) if c == keys.next_letter => KeyEvent::NextLetter,
            (c, true) if c == keys.delete_last => KeyEvent::DeleteLast,
            _ => KeyEvent::Other,
        }
    }

    pub fn text(s: &str) -> KeyEvent {
        KeyEvent::TextEdited {
            text: s.to_string(),
        }
    }
}

/// What the GUI must do after an event.
///
/// `code` and `translation` are `Some` only when that view needs redrawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    pub consumed: bool,
    /// Symbol produced by the keyer, if any.
    pub emitted: Option<Symbol>,
    /// New contents of the code view (display glyphs).
    pub code: Option<String>,
    /// New contents of the text view.
    pub translation: Option<String>,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            emitted: None,
            code: None,
            translation: None,
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }
}
