//! The character ↔ code bijection.
//!
//! The table is compiled-in TOML, validated once and held in a global
//! singleton.

mod config;
mod table;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::symbol::{Code, Symbol};

pub use config::{parse_alphabet_toml, AlphabetError};
use table::DEFAULT_TOML;

/// Returns the embedded default alphabet TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

#[derive(Debug)]
pub struct AlphabetTable {
    by_code: HashMap<Code, char>,
    by_char: HashMap<char, Code>,
    /// Entries sorted by character, for listing.
    entries: Vec<(char, Code)>,
}

impl AlphabetTable {
    /// Build a table from TOML text. Fails if the mapping is not a bijection.
    pub fn from_toml(toml_str: &str) -> Result<Self, AlphabetError> {
        let entries = parse_alphabet_toml(toml_str)?;
        let by_code = entries.iter().map(|(ch, code)| (code.clone(), *ch)).collect();
        let by_char = entries.iter().map(|(ch, code)| (*ch, code.clone())).collect();
        Ok(AlphabetTable {
            by_code,
            by_char,
            entries,
        })
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static AlphabetTable {
        static INSTANCE: OnceLock<AlphabetTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            AlphabetTable::from_toml(DEFAULT_TOML).expect("alphabet TOML must be a valid bijection")
        })
    }

    /// Character for a letter group, if the table has one.
    pub fn lookup_code(&self, symbols: &[Symbol]) -> Option<char> {
        self.by_code.get(symbols).copied()
    }

    /// Code for a character. Expects the canonical (uppercase) form.
    pub fn lookup_character(&self, ch: char) -> Option<&Code> {
        self.by_char.get(&ch)
    }

    pub fn entries(&self) -> impl Iterator<Item = (char, &Code)> {
        self.entries.iter().map(|(ch, code)| (*ch, code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
