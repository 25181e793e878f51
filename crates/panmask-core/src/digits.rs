//! Digit indexing over free text
//!
//! Positions are codepoint indices (`str::chars().enumerate()`), the same unit
//! the redactor uses when it replaces characters.

/// A single decimal digit found in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitEntry {
    /// Codepoint position in the input
    pub position: usize,

    /// Digit value (0-9)
    pub value: u8,
}

/// Mapping from character position to digit value for every digit in a text
///
/// Entries are kept in strictly ascending position order. The rank of an entry
/// in that order is its digit index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitIndex {
    entries: Vec<DigitEntry>,
}

impl DigitIndex {
    /// Build the index for `text`
    pub fn new(text: &str) -> Self {
        let entries = text
            .chars()
            .enumerate()
            .filter_map(|(position, c)| {
                decimal_value(c).map(|value| DigitEntry { position, value })
            })
            .collect();

        Self { entries }
    }

    /// All entries in ascending position order
    pub fn entries(&self) -> &[DigitEntry] {
        &self.entries
    }

    /// Number of digits in the text
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Digit value at a character position, if that character is a digit
    pub fn value_at(&self, position: usize) -> Option<u8> {
        self.entries
            .binary_search_by_key(&position, |entry| entry.position)
            .ok()
            .map(|i| self.entries[i].value)
    }

    /// Sorted digit positions
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|entry| entry.position)
    }
}

/// Whether `c` is an ASCII decimal digit
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn decimal_value(c: char) -> Option<u8> {
    if is_decimal_digit(c) {
        Some(c as u8 - b'0')
    } else {
        None
    }
}
