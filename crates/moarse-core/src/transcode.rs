//! Text ↔ symbol conversion over the global alphabet table.
//!
//! The two directions fail differently. `encode` drops characters the
//! table cannot represent; `decode` replaces unknown letter groups with
//! [`SENTINEL`]. Neither returns an error.

use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

use crate::alphabet::AlphabetTable;
use crate::symbol::Symbol;

/// Output for a letter group with no table entry.
pub const SENTINEL: char = '?';

/// Encode `text` with the global table.
pub fn encode(text: &str) -> Vec<Symbol> {
    encode_with(AlphabetTable::global(), text).symbols
}

/// Like [`encode`], but also reports which characters were dropped.
pub fn encode_report(text: &str) -> EncodeReport {
    encode_with(AlphabetTable::global(), text)
}

/// Decode `symbols` with the global table.
pub fn decode(symbols: &[Symbol]) -> String {
    decode_with(AlphabetTable::global(), symbols)
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodeReport {
    pub symbols: Vec<Symbol>,
    /// Characters with no code, in input order (after uppercasing). Each is
    /// one user-perceived character and may span several code points.
    pub dropped: Vec<String>,
}

pub fn encode_with(table: &AlphabetTable, text: &str) -> EncodeReport {
    let mut report = EncodeReport::default();
    // Uppercase the whole string first: some characters expand (ß → SS).
    // A cluster with combining marks is one character and has no code.
    for grapheme in text.to_uppercase().graphemes(true) {
        match single_char(grapheme).and_then(|ch| table.lookup_character(ch)) {
            Some(code) => {
                report.symbols.extend_from_slice(code.symbols());
                report.symbols.push(Symbol::Separator);
            }
            None => {
                trace!(?grapheme, "no code for character, dropped");
                report.dropped.push(grapheme.to_string());
            }
        }
    }
    report
}

fn single_char(grapheme: &str) -> Option<char> {
    let mut chars = grapheme.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

pub fn decode_with(table: &AlphabetTable, symbols: &[Symbol]) -> String {
    symbols
        .split(|s| *s == Symbol::Separator)
        .filter(|group| !group.is_empty())
        .map(|group| {
            table.lookup_code(group).unwrap_or_else(|| {
                trace!(len = group.len(), "unknown letter group");
                SENTINEL
            })
        })
        .collect()
}
