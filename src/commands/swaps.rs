//! Swap-sequence command
//!
//! Finds the swaps that turn one arrangement into another and checks them.

use crate::core::BoardError;
use crate::core::board::{parse_letters, same_letters};
use crate::solver::{Swap, find_swaps, validate_swaps};

/// Swaps between two arrangements
pub struct SwapsResult {
    pub start: String,
    pub target: String,
    pub swaps: Vec<Swap>,
    pub verified: bool,
}

fn normalize(text: &str) -> Result<String, BoardError> {
    let letters = parse_letters(text)?;
    Ok(letters.iter().map(|&letter| letter as char).collect())
}

/// Find and verify the swap sequence from `start` to `target`
///
/// # Errors
///
/// Returns an error if either arrangement is not 21 letters or the two do not
/// hold the same letters.
pub fn swaps_command(start: &str, target: &str) -> Result<SwapsResult, String> {
    let start = normalize(start).map_err(|e| format!("Invalid start: {e}"))?;
    let target = normalize(target).map_err(|e| format!("Invalid target: {e}"))?;
    if !same_letters(&start, &target) {
        return Err(BoardError::MismatchedLetters.to_string());
    }

    let swaps = find_swaps(&start, &target);
    let verified = validate_swaps(&start, &target, &swaps);

    Ok(SwapsResult {
        start,
        target,
        swaps,
        verified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_single_swap() {
        let result = swaps_command("isrencoerabbieigwinch", "SIRENCOERABBIEIGWINCH").unwrap();
        assert_eq!(result.start, "ISRENCOERABBIEIGWINCH");
        assert_eq!(result.swaps, [Swap(0, 1)]);
        assert!(result.verified);
    }

    #[test]
    fn sample_needs_five() {
        let result = swaps_command("NIESRCOEWABBIEIGRCNIH", "SIRENCOERABBIEIGWINCH").unwrap();
        assert_eq!(result.swaps.len(), 5);
        assert!(result.verified);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(swaps_command("SIREN", "SIRENCOERABBIEIGWINCH").is_err());
        assert!(swaps_command("ZIRENCOERABBIEIGWINCH", "SIRENCOERABBIEIGWINCH").is_err());
    }
}
