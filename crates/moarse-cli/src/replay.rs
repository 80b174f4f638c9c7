//! Replay scripts: recorded keyer sessions as text.
//!
//! One event per line:
//!
//! ```text
//! # SOS, keyed
//! down 0
//! up 90        # milliseconds on any monotonic clock
//! next
//! delete
//! clear
//! text hello world
//! ```
//!
//! Blank lines and `#` comments are ignored. `text` takes the rest of the
//! line verbatim and is not comment-stripped.

use std::time::Duration;

use serde::Serialize;

use moarse_session::{EditSession, KeyEvent};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ReplayError {
    #[error("line {line}: unknown command {command:?}")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: {command} needs a timestamp in milliseconds")]
    MissingTimestamp { line: usize, command: String },
    #[error("line {line}: invalid timestamp {value:?}")]
    InvalidTimestamp { line: usize, value: String },
    #[error("line {line}: unexpected argument {arg:?}")]
    UnexpectedArgument { line: usize, arg: String },
}

pub fn parse_script(script: &str) -> Result<Vec<KeyEvent>, ReplayError> {
    let mut events = Vec::new();
    for (idx, raw) in script.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim_start();

        if let Some(rest) = trimmed.strip_prefix("text") {
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                let text = rest.strip_prefix(char::is_whitespace).unwrap_or(rest);
                events.push(KeyEvent::text(text));
                continue;
            }
        }

        let content = match trimmed.find('#') {
            Some(pos) => &trimmed[..pos],
            None => trimmed,
        };
        let mut words = content.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let event = match command {
            "down" => KeyEvent::KeyerDown {
                timestamp: timestamp(line, command, words.next())?,
            },
            "up" => KeyEvent::KeyerUp {
                timestamp: timestamp(line, command, words.next())?,
            },
            "next" => KeyEvent::NextLetter,
            "delete" => KeyEvent::DeleteLast,
            "clear" => KeyEvent::Clear,
            _ => {
                return Err(ReplayError::UnknownCommand {
                    line,
                    command: command.to_string(),
                })
            }
        };
        if let Some(arg) = words.next() {
            return Err(ReplayError::UnexpectedArgument {
                line,
                arg: arg.to_string(),
            });
        }
        events.push(event);
    }
    Ok(events)
}

fn timestamp(line: usize, command: &str, word: Option<&str>) -> Result<Duration, ReplayError> {
    let word = word.ok_or_else(|| ReplayError::MissingTimestamp {
        line,
        command: command.to_string(),
    })?;
    word.parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ReplayError::InvalidTimestamp {
            line,
            value: word.to_string(),
        })
}

/// Final state after a replay.
#[derive(Debug, Serialize)]
pub struct ReplayOutcome {
    pub events: usize,
    pub emitted: usize,
    pub code: String,
    pub translation: String,
}

pub fn run(session: &mut EditSession, events: Vec<KeyEvent>) -> ReplayOutcome {
    let count = events.len();
    let emitted = events
        .into_iter()
        .filter_map(|event| session.handle_key(event).emitted)
        .count();
    ReplayOutcome {
        events: count,
        emitted,
        code: session.copy_text(),
        translation: session.translation(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moarse_core::settings::parse_settings_toml;
    use moarse_core::settings::DEFAULT_SETTINGS_TOML;

    fn session() -> EditSession {
        EditSession::from_settings(&parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap())
    }

    #[test]
    fn parse_all_commands() {
        let script = "\
# header
down 0
up 120   # short

next
delete
clear
text hi # there
";
        let events = parse_script(script).unwrap();
        assert_eq!(
            events,
            vec![
                KeyEvent::KeyerDown {
                    timestamp: Duration::ZERO
                },
                KeyEvent::KeyerUp {
                    timestamp: Duration::from_millis(120)
                },
                KeyEvent::NextLetter,
                KeyEvent::DeleteLast,
                KeyEvent::Clear,
                KeyEvent::text("hi # there"),
            ]
        );
    }

    #[test]
    fn bare_text_clears_text() {
        assert_eq!(parse_script("text").unwrap(), vec![KeyEvent::text("")]);
    }

    #[test]
    fn text_separated_by_tab() {
        assert_eq!(parse_script("text\thi").unwrap(), vec![KeyEvent::text("hi")]);
        assert_eq!(parse_script("text\t hi").unwrap(), vec![KeyEvent::text(" hi")]);
    }

    #[test]
    fn text_prefix_is_not_a_command() {
        let err = parse_script("textual").unwrap_err();
        assert!(matches!(err, ReplayError::UnknownCommand { line: 1, .. }));
    }

    #[test]
    fn error_missing_timestamp() {
        let err = parse_script("down 0\nup\n").unwrap_err();
        assert_eq!(
            err,
            ReplayError::MissingTimestamp {
                line: 2,
                command: "up".to_string()
            }
        );
    }

    #[test]
    fn error_invalid_timestamp() {
        let err = parse_script("down 1.5").unwrap_err();
        assert!(matches!(err, ReplayError::InvalidTimestamp { line: 1, .. }));
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn error_extra_argument() {
        let err = parse_script("next 5").unwrap_err();
        assert!(matches!(err, ReplayError::UnexpectedArgument { .. }));
    }

    #[test]
    fn replay_sos() {
        let mut script = String::new();
        let mut t = 0;
        for letter in ["...", "---", "..."] {
            for c in letter.chars() {
                let held = if c == '.' { 100 } else { 600 };
                script.push_str(&format!("down {t}\nup {}\n", t + held));
                t += 1_000;
            }
            script.push_str("next\n");
        }
        let events = parse_script(&script).unwrap();
        let outcome = run(&mut session(), events);
        assert_eq!(outcome.translation, "SOS");
        assert_eq!(outcome.emitted, 9);
        assert_eq!(outcome.events, 21);
        assert_eq!(outcome.code, "●●● ——— ●●● ");
    }

    #[test]
    fn replay_text_then_delete() {
        let events = parse_script("text ab\ndelete\ndelete\n").unwrap();
        let outcome = run(&mut session(), events);
        // B (-...) lost its separator and last mark, leaving D (-..).
        assert_eq!(outcome.translation, "AD");
        assert_eq!(outcome.emitted, 0);
    }
}
