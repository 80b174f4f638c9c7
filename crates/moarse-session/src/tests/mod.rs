
use std::time::Duration;

use moarse_core::settings::KeySettings;
use moarse_core::{Symbol, TimingConfig};

use super::key;
use super::{EditSession, KeyEvent, KeyResponse};

pub(super) fn default_keys() -> KeySettings {
    KeySettings {
        keyer: key::RIGHT_SHIFT,
        next_letter: key::SPACE,
        delete_last: key::BACKSPACE,
    }
}

pub(super) fn make_session() -> EditSession {
    EditSession::new(TimingConfig::default(), default_keys())
}

pub(super) fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// Helper: hold the keyer from `start` for `held`, returning the release response
pub(super) fn tap(session: &mut EditSession, start: Duration, held: Duration) -> KeyResponse {
    let down = session.handle_key(KeyEvent::KeyerDown { timestamp: start });
    assert!(down.consumed);
    assert!(down.emitted.is_none());
    session.handle_key(KeyEvent::KeyerUp {
        timestamp: start + held,
    })
}

// Helper: key a symbol sequence with the keyer (marks 100ms, holds 600ms),
// pressing the next-letter key for each separator
pub(super) fn key_symbols(session: &mut EditSession, symbols: &[Symbol]) {
    let mut clock = ms(1_000);
    for symbol in symbols {
        match symbol {
            Symbol::Mark => {
                tap(session, clock, ms(100));
            }
            Symbol::Hold => {
                tap(session, clock, ms(600));
            }
            Symbol::Separator => {
                session.handle_key(KeyEvent::NextLetter);
            }
        }
        clock += ms(1_000);
    }
}
