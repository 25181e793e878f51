//! Multi-match PAN masking
//!
//! The masker indexes the input once, then scans repeatedly: each candidate's
//! interior is masked and the next scan starts one digit past the candidate, so
//! matches never overlap and the loop always terminates.

use crate::detector::{Candidate, CandidateScanner, LuhnScanner};
use crate::digits::DigitIndex;
use crate::redactor::mask_positions;
use serde::Serialize;
use std::iter::FusedIterator;
use tracing::debug;

/// Result of masking a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskOutcome {
    /// The masked text
    pub text: String,

    /// Candidates masked, in scan order
    pub candidates: Vec<Candidate>,
}

impl MaskOutcome {
    /// Total number of digits replaced by the mask character
    pub fn masked_digits(&self) -> usize {
        self.candidates.iter().map(|c| c.interior().len()).sum()
    }
}

/// Orchestrates repeated candidate scans over a text
#[derive(Debug, Clone, Default)]
pub struct PanMasker<S = LuhnScanner> {
    scanner: S,
}

impl PanMasker {
    /// Create a masker backed by the Luhn scanner
    pub fn new() -> Self {
        Self {
            scanner: LuhnScanner::new(),
        }
    }
}

impl<S: CandidateScanner> PanMasker<S> {
    /// Create a masker with a custom scanner
    pub fn with_scanner(scanner: S) -> Self {
        Self { scanner }
    }

    /// Iterate the non-overlapping candidates of an index in scan order
    pub fn candidates<'a>(&'a self, index: &'a DigitIndex) -> Candidates<'a, S> {
        Candidates {
            scanner: &self.scanner,
            index,
            next_digit_index: Some(0),
        }
    }

    /// Find every candidate that [`PanMasker::mask`] would mask
    pub fn detect(&self, text: &str) -> Vec<Candidate> {
        let index = DigitIndex::new(text);
        self.candidates(&index).collect()
    }

    /// Mask the interior digits of every PAN in `text`
    pub fn mask(&self, text: &str) -> String {
        self.mask_with_candidates(text).text
    }

    /// Mask `text` and return the candidates that were masked
    pub fn mask_with_candidates(&self, text: &str) -> MaskOutcome {
        let index = DigitIndex::new(text);
        let mut result = text.to_string();
        let mut candidates = Vec::new();

        for candidate in self.candidates(&index) {
            debug!(
                first_digit_index = candidate.first_digit_index,
                length = candidate.len(),
                start = candidate.start(),
                end = candidate.end(),
                "masking PAN candidate"
            );
            result = mask_positions(&result, candidate.interior());
            candidates.push(candidate);
        }

        debug!(candidates = candidates.len(), "PAN masking complete");

        MaskOutcome {
            text: result,
            candidates,
        }
    }
}

/// Iterator over successive scan results
///
/// Yields candidates while scanning; once a scan finds nothing the iterator is
/// done for good.
pub struct Candidates<'a, S> {
    scanner: &'a S,
    index: &'a DigitIndex,
    next_digit_index: Option<usize>,
}

impl<S: CandidateScanner> Iterator for Candidates<'_, S> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        let from = self.next_digit_index.take()?;
        let candidate = self.scanner.scan(self.index, from)?;

        // A scanner that does not move forward would loop forever
        if candidate.next_digit_index() <= from {
            return None;
        }

        self.next_digit_index = Some(candidate.next_digit_index());
        Some(candidate)
    }
}

impl<S: CandidateScanner> FusedIterator for Candidates<'_, S> {}
