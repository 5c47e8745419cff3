//! Hint command
//!
//! Reads a coloured board and suggests the next swap.

use crate::core::board::parse_board;
use crate::core::{Board, Tile};
use crate::dictionary::Trie;
use crate::solver::{Hint, Solver};

/// A parsed board and the advice for it
pub struct HintResult {
    pub board: Board<Tile>,
    pub hint: Hint,
}

/// Suggest a move for a board given as letters and colour codes
///
/// `answer` is only consulted when the dictionary admits no solution.
///
/// # Errors
///
/// Returns an error if the letters or colours are malformed.
pub fn hint_command(
    index: &Trie,
    letters: &str,
    colors: &str,
    answer: Option<&str>,
) -> Result<HintResult, String> {
    let board = parse_board(letters, colors).map_err(|e| format!("Invalid board: {e}"))?;
    let answer = answer.map(str::to_ascii_uppercase);
    let hint = Solver::new(index).suggest(&board, answer.as_deref());

    Ok(HintResult { board, hint })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Swap;

    fn trie() -> Trie {
        Trie::from_words(["SIREN", "RABBI", "WINCH", "SCREW", "ROBIN", "NEIGH"])
    }

    #[test]
    fn sample_board_has_full_path() {
        let result = hint_command(
            &trie(),
            "NIESRCOEWABBIEIGRCNIH",
            "YGYYYGGGYGGGGGGGYYGYG",
            None,
        )
        .unwrap();

        let Hint::FullPath { solution, swaps } = result.hint else {
            panic!("expected a full path");
        };
        assert_eq!(solution, "SIRENCOERABBIEIGWINCH");
        assert_eq!(swaps.len(), 5);
    }

    #[test]
    fn answer_rescues_unknown_words() {
        let result = hint_command(
            &Trie::new(),
            "ISRENCOERABBIEIGWINCH",
            "YYGGGGGGGGGGGGGGGGGGG",
            Some("sirencoerabbieigwinch"),
        )
        .unwrap();
        assert_eq!(result.hint, Hint::Fallback { swap: Swap(0, 1) });
    }

    #[test]
    fn malformed_colors_are_rejected() {
        let err = hint_command(&trie(), "NIESRCOEWABBIEIGRCNIH", "YGX", None)
            .err()
            .unwrap();
        assert!(err.starts_with("Invalid board"));
    }
}
