//! PAN masking by character position

use std::collections::BTreeSet;

/// Character written over masked digits
pub const MASK_CHAR: char = '*';

/// Replace the characters at `positions` with [`MASK_CHAR`]
///
/// Positions are codepoint indices. Every other character is copied unchanged
/// and the character count of the result equals that of `text`.
pub fn mask_positions(text: &str, positions: &[usize]) -> String {
    if positions.is_empty() {
        return text.to_string();
    }

    let targets: BTreeSet<usize> = positions.iter().copied().collect();

    text.chars()
        .enumerate()
        .map(|(i, c)| if targets.contains(&i) { MASK_CHAR } else { c })
        .collect()
}
