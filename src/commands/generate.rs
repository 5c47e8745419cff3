//! Puzzle generation command

use super::make_rng;
use crate::core::board::board_letters;
use crate::dictionary::Trie;
use crate::generator::{GeneratorConfig, Puzzle, generate_puzzle};
use crate::solver::{Swap, find_swaps};

/// A fresh puzzle and the shortest known way to solve it
pub struct GenerateResult {
    pub puzzle: Puzzle,
    pub swaps: Vec<Swap>,
}

/// Generate a puzzle
///
/// `shuffle` scrambles every letter instead of applying a few random swaps.
#[must_use]
pub fn generate_command(index: &Trie, seed: Option<u64>, shuffle: bool) -> GenerateResult {
    let mut rng = make_rng(seed);
    let config = GeneratorConfig {
        scramble_swaps: if shuffle {
            None
        } else {
            GeneratorConfig::new().scramble_swaps
        },
        ..GeneratorConfig::new()
    };

    let puzzle = generate_puzzle(index, &mut rng, &config);
    let swaps = find_swaps(&board_letters(&puzzle.board), &puzzle.solution.serialize());

    GenerateResult { puzzle, swaps }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::is_solved;
    use crate::solver::apply_swaps;

    fn trie() -> Trie {
        Trie::from_words(["SIREN", "RABBI", "WINCH", "SCREW", "ROBIN", "NEIGH"])
    }

    #[test]
    fn generated_path_reaches_answer() {
        let result = generate_command(&trie(), Some(7), false);
        let start = board_letters(&result.puzzle.board);

        assert!(!is_solved(&result.puzzle.board));
        assert!(!result.swaps.is_empty());
        assert_eq!(apply_swaps(&start, &result.swaps), result.puzzle.solution.serialize());
    }

    #[test]
    fn same_seed_same_puzzle() {
        let trie = trie();
        let a = generate_command(&trie, Some(42), true);
        let b = generate_command(&trie, Some(42), true);
        assert_eq!(a.puzzle, b.puzzle);
        assert_eq!(a.swaps, b.swaps);
    }
}
