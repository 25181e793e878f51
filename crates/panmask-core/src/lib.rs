//! PanMask PAN Detection and Masking
//!
//! This crate finds card numbers (PANs) embedded in free text and masks them:
//! - Digit indexing that tolerates separators, punctuation and newlines
//! - Luhn-validated candidate scanning with an earliest/shortest match policy
//! - Interior masking that keeps the first and last four digits visible

pub mod detector;
pub mod digits;
pub mod luhn;
pub mod masker;
pub mod redactor;

pub use detector::{
    Candidate, CandidateScanner, LuhnScanner, MIN_PAN_LENGTH, Rejection, VISIBLE_EDGE_DIGITS,
};
pub use digits::{DigitEntry, DigitIndex, is_decimal_digit};
pub use masker::{Candidates, MaskOutcome, PanMasker};
pub use redactor::{MASK_CHAR, mask_positions};

use once_cell::sync::Lazy;

static DEFAULT_MASKER: Lazy<PanMasker> = Lazy::new(PanMasker::new);

/// Mask every Luhn-valid PAN in `input`, keeping the first and last four digits.
///
/// All other characters, separators included, are returned verbatim and the
/// output has exactly as many characters as the input.
pub fn mask_pan(input: &str) -> String {
    DEFAULT_MASKER.mask(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_pan_entry_point() {
        assert_eq!(mask_pan("4000160000000004"), "4000********0004");
        assert_eq!(mask_pan("no digits here"), "no digits here");
    }

    #[test]
    fn test_mask_pan_from_multiple_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| mask_pan("card 4000 1600 0000 0004 ok")))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "card 4000 **** **** 0004 ok");
        }
    }
}
