//! Highest-value digit palindrome under a change budget

use tracing::debug;

use crate::error::{DrillsError, Result};

/// Number of mirror pairs that differ
fn mismatched_pairs(digits: &[u8]) -> usize {
    let half = digits.len() / 2;
    (0..half)
        .filter(|&i| digits[i] != digits[digits.len() - 1 - i])
        .count()
}

/// Largest palindrome reachable from `number` by changing at most `changes`
/// digits.
///
/// Every mismatched mirror pair must cost one change, so that many are
/// reserved first. Walking pairs left to right, a pair is raised to `99`
/// when neither side is already 9 and the remaining spare changes cover it
/// (one extra for a mismatched pair, two for a matched one); otherwise a
/// mismatched pair copies its larger digit. A leftover change raises the
/// middle digit of an odd-length number.
///
/// ```
/// use drills_core::palindrome::highest_palindrome;
///
/// assert_eq!(highest_palindrome("1921", 2).unwrap(), "1991");
/// assert_eq!(highest_palindrome("1921", 3).unwrap(), "9999");
/// assert!(highest_palindrome("11122", 1).is_err());
/// assert_eq!(highest_palindrome("11119111", 4).unwrap(), "91199119");
/// ```
pub fn highest_palindrome(number: &str, changes: usize) -> Result<String> {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DrillsError::invalid_value("digit string", number));
    }

    let mut digits: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
    let len = digits.len();

    let needed = mismatched_pairs(&digits);
    if needed > changes {
        return Err(DrillsError::PalindromeImpossible {
            needed,
            available: changes,
        });
    }
    let mut spare = changes - needed;

    for i in 0..len / 2 {
        let j = len - 1 - i;
        let matched = digits[i] == digits[j];
        let cost = if matched { 2 } else { 1 };

        if digits[i].max(digits[j]) < 9 && spare >= cost {
            spare -= cost;
            digits[i] = 9;
            digits[j] = 9;
        } else if !matched {
            let high = digits[i].max(digits[j]);
            digits[i] = high;
            digits[j] = high;
        }
    }

    if len % 2 == 1 && spare > 0 {
        digits[len / 2] = 9;
    }

    debug!(needed, spare, "highest_palindrome");

    Ok(digits.iter().map(|d| char::from(b'0' + d)).collect())
}
