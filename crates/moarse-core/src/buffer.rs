use crate::symbol::{self, Symbol};
use crate::transcode;

/// The symbols the user is composing.
///
/// Edits on the text side replace the whole buffer; nothing the text cannot
/// represent survives that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBuffer {
    symbols: Vec<Symbol>,
}

impl MessageBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    /// Advance to the next letter.
    pub fn append_separator(&mut self) {
        self.symbols.push(Symbol::Separator);
    }

    /// Remove the last symbol. Returns it, or `None` on an empty buffer.
    pub fn delete_last(&mut self) -> Option<Symbol> {
        self.symbols.pop()
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    pub fn replace_with(&mut self, symbols: Vec<Symbol>) {
        self.symbols = symbols;
    }

    pub fn current_text(&self) -> String {
        transcode::decode(&self.symbols)
    }

    pub fn set_from_text(&mut self, text: &str) {
        self.symbols = transcode::encode(text);
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Symbols with display glyphs, for the code view and the copy action.
    pub fn rendered(&self) -> String {
        symbol::render(&self.symbols)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
