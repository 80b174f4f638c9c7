use std::borrow::Borrow;
use std::fmt;

/// One element of a Morse message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Short mark ("dot").
    Mark,
    /// Long mark ("dash").
    Hold,
    /// Ends one letter group.
    Separator,
}

impl Symbol {
    /// Glyph used when showing the message to a user.
    pub fn glyph(self) -> char {
        match self {
            Symbol::Mark => '●',
            Symbol::Hold => '—',
            Symbol::Separator => ' ',
        }
    }

    /// Plain ASCII form (`.`, `-`, space).
    pub fn ascii(self) -> char {
        match self {
            Symbol::Mark => '.',
            Symbol::Hold => '-',
            Symbol::Separator => ' ',
        }
    }

    fn from_char(c: char) -> Option<Symbol> {
        match c {
            '.' | '·' | '●' => Some(Symbol::Mark),
            '-' | '_' | '—' => Some(Symbol::Hold),
            ' ' | '/' => Some(Symbol::Separator),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A single letter group: a non-empty run of `Mark`/`Hold` with no `Separator`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(Box<[Symbol]>);

impl Code {
    /// Returns `None` for an empty slice or one containing a `Separator`.
    pub fn new(symbols: &[Symbol]) -> Option<Code> {
        if symbols.is_empty() || symbols.contains(&Symbol::Separator) {
            return None;
        }
        Some(Code(symbols.into()))
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// `Code` hashes exactly like its slice, so maps keyed by `Code` can be
// probed with `&[Symbol]`.
impl Borrow<[Symbol]> for Code {
    fn borrow(&self) -> &[Symbol] {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in self.0.iter() {
            write!(f, "{}", s.ascii())?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("unexpected {found:?} at position {position}")]
pub struct SymbolParseError {
    pub found: char,
    pub position: usize,
}

/// Parse textual Morse into symbols.
///
/// Accepts `.`, `·`, `●` for Mark; `-`, `_`, `—` for Hold; space or `/`
/// for Separator. `position` in the error counts characters, not bytes.
pub fn parse_symbols(text: &str) -> Result<Vec<Symbol>, SymbolParseError> {
    text.chars()
        .enumerate()
        .map(|(position, found)| {
            Symbol::from_char(found).ok_or(SymbolParseError { found, position })
        })
        .collect()
}

/// Render with display glyphs.
pub fn render(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.glyph()).collect()
}

/// Render as ASCII dots and dashes.
pub fn render_ascii(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.ascii()).collect()
}
