use std::fs;
use std::path::Path;

use moarse_core::alphabet::{self, AlphabetTable};
use moarse_core::settings::{self, Settings};

use super::die;

#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Settings(#[from] settings::SettingsError),
    #[error(transparent)]
    Alphabet(#[from] alphabet::AlphabetError),
}

fn read(path: &Path) -> Result<String, ConfigFileError> {
    fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
        path: path.display().to_string(),
        source,
    })
}

pub fn load_settings(path: &Path) -> Result<Settings, ConfigFileError> {
    Ok(settings::parse_settings_toml(&read(path)?)?)
}

pub fn load_alphabet(path: &Path) -> Result<AlphabetTable, ConfigFileError> {
    Ok(AlphabetTable::from_toml(&read(path)?)?)
}

pub fn alphabet_export() {
    print!("{}", alphabet::default_toml());
}

pub fn alphabet_validate(file: &Path) {
    let table = die!(load_alphabet(file), "Error: {}");
    println!("OK: {} mappings", table.len());
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &Path) {
    let s = die!(load_settings(file), "Error: {}");
    println!(
        "OK: timing.mark_max_ms={}, timing.long_gap_ms={}, keys.keyer={}",
        s.timing.mark_max_ms, s.timing.long_gap_ms, s.keys.keyer
    );
}
