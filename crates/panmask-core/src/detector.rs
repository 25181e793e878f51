//! PAN candidate detection

mod luhn_scanner;

pub use luhn_scanner::LuhnScanner;

use crate::digits::DigitIndex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of digits in a PAN candidate
pub const MIN_PAN_LENGTH: usize = 16;

/// Digits left visible at each end of a masked PAN
pub const VISIBLE_EDGE_DIGITS: usize = 4;

/// A digit run accepted as a PAN
///
/// The run is contiguous in digit index but may span separators in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Digit index of the first digit in the run
    pub first_digit_index: usize,

    /// Character positions of the run's digits, strictly ascending
    pub positions: Vec<usize>,
}

impl Candidate {
    /// Number of digits in the run
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Digit index of the last digit in the run
    pub fn last_digit_index(&self) -> usize {
        (self.first_digit_index + self.len()).saturating_sub(1)
    }

    /// Digit index where the next scan starts
    pub fn next_digit_index(&self) -> usize {
        self.first_digit_index + self.len()
    }

    /// Positions to mask: everything but the first and last four digits
    pub fn interior(&self) -> &[usize] {
        if self.len() <= 2 * VISIBLE_EDGE_DIGITS {
            return &[];
        }
        &self.positions[VISIBLE_EDGE_DIGITS..self.len() - VISIBLE_EDGE_DIGITS]
    }

    /// Character position of the first digit
    pub fn start(&self) -> Option<usize> {
        self.positions.first().copied()
    }

    /// Character position just past the last digit
    pub fn end(&self) -> Option<usize> {
        self.positions.last().map(|p| p + 1)
    }
}

/// Why a start index was abandoned during a scan
///
/// Both cases rule out every longer run from the same start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("run starts with a leading zero")]
    LeadingZero,

    #[error("run value exceeds the signed 64-bit range")]
    Overflow,
}

/// Trait for finding the next PAN candidate in a digit index
pub trait CandidateScanner: Send + Sync {
    /// Find the earliest, shortest candidate at or after `from_digit_index`
    fn scan(&self, index: &DigitIndex, from_digit_index: usize) -> Option<Candidate>;
}
