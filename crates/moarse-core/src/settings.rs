//! Global settings loaded from TOML, following the same OnceLock pattern as the alphabet table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;

use crate::timing::TimingConfig;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub timing: TimingSettings,
    pub keys: KeySettings,
}

impl Settings {
    pub fn timing_config(&self) -> TimingConfig {
        TimingConfig {
            mark_max_duration: Duration::from_millis(self.timing.mark_max_ms),
            long_gap_threshold: Duration::from_millis(self.timing.long_gap_ms),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimingSettings {
    pub mark_max_ms: u64,
    pub long_gap_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeySettings {
    pub keyer: u16,
    pub next_letter: u16,
    pub delete_last: u16,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive!(timing.mark_max_ms);
    check_positive!(timing.long_gap_ms);
    if s.timing.long_gap_ms < s.timing.mark_max_ms {
        return Err(SettingsError::InvalidValue {
            field: "timing.long_gap_ms".to_string(),
            reason: "must not be shorter than timing.mark_max_ms".to_string(),
        });
    }

    let k = &s.keys;
    if k.keyer == k.next_letter || k.keyer == k.delete_last || k.next_letter == k.delete_last {
        return Err(SettingsError::InvalidValue {
            field: "keys".to_string(),
            reason: "keyer, next_letter and delete_last must be distinct".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.timing.mark_max_ms, 400);
        assert_eq!(s.timing.long_gap_ms, 800);
        assert_eq!(s.keys.keyer, 60);
        assert_eq!(s.keys.next_letter, 49);
        assert_eq!(s.keys.delete_last, 51);

        let t = s.timing_config();
        assert_eq!(t.mark_max_duration, Duration::from_millis(400));
        assert_eq!(t.long_gap_threshold, Duration::from_millis(800));
    }

    #[test]
    fn global_settings_match_default() {
        assert_eq!(settings().timing.mark_max_ms, 400);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[timing]
mark_max_ms = 250
long_gap_ms = 600

[keys]
keyer = 56
next_letter = 49
delete_last = 51
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.timing.mark_max_ms, 250);
        assert_eq!(s.keys.keyer, 56);
    }

    #[test]
    fn error_zero_mark_max() {
        let toml = r#"
[timing]
mark_max_ms = 0
long_gap_ms = 800

[keys]
keyer = 60
next_letter = 49
delete_last = 51
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("timing.mark_max_ms"));
    }

    #[test]
    fn error_gap_shorter_than_mark() {
        let toml = r#"
[timing]
mark_max_ms = 400
long_gap_ms = 300

[keys]
keyer = 60
next_letter = 49
delete_last = 51
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("timing.long_gap_ms"));
    }

    #[test]
    fn error_duplicate_key_codes() {
        let toml = r#"
[timing]
mark_max_ms = 400
long_gap_ms = 800

[keys]
keyer = 49
next_letter = 49
delete_last = 51
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("keys"));
    }

    #[test]
    fn error_negative_value_is_parse_error() {
        let toml = r#"
[timing]
mark_max_ms = -1
long_gap_ms = 800

[keys]
keyer = 60
next_letter = 49
delete_last = 51
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[timing]
mark_max_ms = 400
long_gap_ms = 800
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
