//! Luhn-based candidate scanner

use crate::detector::{Candidate, CandidateScanner, MIN_PAN_LENGTH, Rejection};
use crate::digits::{DigitEntry, DigitIndex};
use crate::luhn;
use tracing::trace;

/// Largest run value accepted before a start index is abandoned
const MAX_RUN_VALUE: u64 = i64::MAX as u64;

/// Scanner that accepts the shortest Luhn-valid run from the earliest start
///
/// Start indices are tried in ascending order and, for each start, run lengths
/// in ascending order from `MIN_PAN_LENGTH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LuhnScanner;

impl LuhnScanner {
    /// Create a new scanner
    pub fn new() -> Self {
        Self
    }

    /// Extend a run from the start of `run`, one digit at a time
    ///
    /// Returns the length of the first Luhn-valid extension, `None` when the
    /// digits run out, or the rejection that rules out this start entirely.
    fn extend(&self, run: &[DigitEntry]) -> Result<Option<usize>, Rejection> {
        let mut value: u64 = 0;

        for (offset, entry) in run.iter().enumerate() {
            let len = offset + 1;

            if len == 1 && entry.value == 0 {
                return Err(Rejection::LeadingZero);
            }

            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(entry.value)))
                .filter(|v| *v <= MAX_RUN_VALUE)
                .ok_or(Rejection::Overflow)?;

            if len < MIN_PAN_LENGTH {
                continue;
            }

            if luhn::is_valid(value) {
                return Ok(Some(len));
            }
        }

        Ok(None)
    }
}

impl CandidateScanner for LuhnScanner {
    fn scan(&self, index: &DigitIndex, from_digit_index: usize) -> Option<Candidate> {
        let remaining = index.entries().get(from_digit_index..)?;

        if remaining.len() < MIN_PAN_LENGTH {
            return None;
        }

        for start in 0..=remaining.len() - MIN_PAN_LENGTH {
            match self.extend(&remaining[start..]) {
                Ok(Some(len)) => {
                    return Some(Candidate {
                        first_digit_index: from_digit_index + start,
                        positions: remaining[start..start + len]
                            .iter()
                            .map(|entry| entry.position)
                            .collect(),
                    });
                }
                Ok(None) => {}
                Err(rejection) => {
                    trace!(
                        digit_index = from_digit_index + start,
                        reason = %rejection,
                        "abandoning start index"
                    );
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str, from: usize) -> Option<Candidate> {
        LuhnScanner::new().scan(&DigitIndex::new(text), from)
    }

    #[test]
    fn test_no_candidate_in_short_input() {
        assert_eq!(scan("", 0), None);
        assert_eq!(scan("0", 0), None);
        assert_eq!(scan("400016000000000", 0), None);
    }

    #[test]
    fn test_single_pan() {
        let candidate = scan("4000160000000004", 0).unwrap();

        assert_eq!(candidate.first_digit_index, 0);
        assert_eq!(candidate.positions, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_pan_surrounded_by_zeroes() {
        let candidate = scan("00400016000000000400", 0).unwrap();

        assert_eq!(candidate.first_digit_index, 2);
        assert_eq!(candidate.positions, (2..18).collect::<Vec<_>>());
    }

    #[test]
    fn test_positions_follow_separators() {
        let candidate = scan("4000 1600 0000 0004", 0).unwrap();

        assert_eq!(candidate.len(), 16);
        assert_eq!(candidate.start(), Some(0));
        assert_eq!(candidate.end(), Some(19));
        assert!(!candidate.positions.contains(&4));
        assert!(!candidate.positions.contains(&9));
        assert!(!candidate.positions.contains(&14));
    }

    #[test]
    fn test_shortest_valid_extension_wins() {
        // A valid 16-digit run followed by more digits stops at 16
        let candidate = scan("40001600000000041234", 0).unwrap();
        assert_eq!(candidate.len(), 16);

        // Lengths 16 to 18 fail here, 19 passes
        let candidate = scan("6771830000000000006", 0).unwrap();
        assert_eq!(candidate.len(), 19);
    }

    #[test]
    fn test_luhn_invalid_run() {
        assert_eq!(scan("4000160000000005", 0), None);
    }

    #[test]
    fn test_scan_from_offset() {
        let text = "4000160000000004 X 4000160000000004";

        let candidate = scan(text, 16).unwrap();
        assert_eq!(candidate.first_digit_index, 16);
        assert_eq!(candidate.start(), Some(19));
        assert_eq!(candidate.next_digit_index(), 32);

        assert_eq!(scan(text, 32), None);
        assert_eq!(scan(text, 33), None);
        assert_eq!(scan(text, usize::MAX), None);
    }

    #[test]
    fn test_overflow_abandons_start() {
        // Twenty nines pass Luhn, but the value never fits
        assert_eq!(scan(&"9".repeat(20), 0), None);
    }

    #[test]
    fn test_extend_reports_rejections() {
        let scanner = LuhnScanner::new();

        let index = DigitIndex::new("0400016000000000400");
        assert_eq!(scanner.extend(index.entries()), Err(Rejection::LeadingZero));

        let index = DigitIndex::new(&"9".repeat(20));
        assert_eq!(scanner.extend(index.entries()), Err(Rejection::Overflow));

        let index = DigitIndex::new("4000160000000005");
        assert_eq!(scanner.extend(index.entries()), Ok(None));

        let index = DigitIndex::new("4000160000000004");
        assert_eq!(scanner.extend(index.entries()), Ok(Some(16)));
    }
}
