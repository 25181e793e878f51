//! Luhn (mod 10) checksum

/// Validate `number` with the Luhn algorithm
///
/// Starting from the rightmost digit, every second digit is doubled (minus 9
/// when the result exceeds 9); the number is valid when the digit sum is a
/// multiple of 10.
pub fn is_valid(mut number: u64) -> bool {
    let mut sum = 0u64;
    let mut double = false;

    while number > 0 {
        let mut digit = number % 10;
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
        number /= 10;
    }

    sum.is_multiple_of(10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_numbers() {
        assert!(is_valid(4000160000000004));
        assert!(is_valid(4532015112830366));
        assert!(is_valid(4111111111111111));
        assert!(is_valid(79927398713));
    }

    #[test]
    fn test_known_invalid_numbers() {
        assert!(!is_valid(4000160000000005));
        assert!(!is_valid(4532015112830367));
        assert!(!is_valid(79927398710));
    }

    #[test]
    fn test_large_values() {
        assert!(!is_valid(u64::MAX));
        // Nineteen nines: digit sum 171
        assert!(!is_valid(9_999_999_999_999_999_999));
    }
}
