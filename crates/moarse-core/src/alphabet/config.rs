use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Deserialize;

use crate::symbol::{Code, Symbol};

#[derive(Deserialize)]
struct AlphabetConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AlphabetError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("key must be a single character: {0:?}")]
    NotSingleChar(String),
    #[error("empty code for key: {0}")]
    EmptyCode(char),
    #[error("invalid code {code:?} for key {key}: only '.' and '-' are allowed")]
    InvalidCode { key: char, code: String },
    #[error("duplicate character: {0}")]
    DuplicateCharacter(char),
    #[error("duplicate code {code} for {first} and {second}")]
    DuplicateCode { code: String, first: char, second: char },
}

/// Parse TOML text into validated `(character, code)` pairs.
///
/// Characters are canonicalized to uppercase. The result is a bijection:
/// no character and no code appears twice.
pub fn parse_alphabet_toml(toml_str: &str) -> Result<Vec<(char, Code)>, AlphabetError> {
    let config: AlphabetConfig =
        toml::from_str(toml_str).map_err(|e| AlphabetError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(AlphabetError::Empty);
    }

    let mut seen_chars = HashSet::new();
    let mut seen_codes: HashMap<Code, char> = HashMap::with_capacity(config.mappings.len());
    let mut entries = Vec::with_capacity(config.mappings.len());

    for (key, value) in &config.mappings {
        let ch = single_char(key)?;
        if !seen_chars.insert(ch) {
            return Err(AlphabetError::DuplicateCharacter(ch));
        }
        let code = parse_code(ch, value)?;
        if let Some(first) = seen_codes.insert(code.clone(), ch) {
            return Err(AlphabetError::DuplicateCode {
                code: code.to_string(),
                first,
                second: ch,
            });
        }
        entries.push((ch, code));
    }

    Ok(entries)
}

fn single_char(key: &str) -> Result<char, AlphabetError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            // Reject characters whose uppercase form is not a single char (e.g. ß).
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => Ok(u),
                _ => Err(AlphabetError::NotSingleChar(key.to_string())),
            }
        }
        _ => Err(AlphabetError::NotSingleChar(key.to_string())),
    }
}

fn parse_code(key: char, value: &str) -> Result<Code, AlphabetError> {
    if value.is_empty() {
        return Err(AlphabetError::EmptyCode(key));
    }
    let symbols = value
        .chars()
        .map(|c| match c {
            '.' => Ok(Symbol::Mark),
            '-' => Ok(Symbol::Hold),
            _ => Err(AlphabetError::InvalidCode {
                key,
                code: value.to_string(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Code::new(&symbols).ok_or(AlphabetError::EmptyCode(key))
}
