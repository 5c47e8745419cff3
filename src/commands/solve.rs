//! Puzzle solving command
//!
//! Lets the solver play a puzzle under the game rules, one hint per move.

use crate::core::board::board_letters;
use crate::core::{Board, Tile};
use crate::dictionary::Trie;
use crate::game::{Game, GameStatus, SolveConfig};
use crate::generator::Puzzle;
use crate::solver::{Hint, Solver, Swap, fallback_swap, swap_distance};
use log::{debug, warn};

/// A single move in the solution
pub struct SolveStep {
    pub hint: Hint,
    pub swap: Swap,
    pub board: Board<Tile>,
}

/// Result of playing a puzzle
pub struct SolveResult {
    pub puzzle: Puzzle,
    pub steps: Vec<SolveStep>,
    pub status: GameStatus,
    /// Swaps the swap-sequence algorithm needs with the answer known
    pub optimal_swaps: usize,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == GameStatus::Won
    }
}

/// Play a puzzle until it is won, lost or no move can be suggested
///
/// The real answer is handed to the solver only for its fallback, when the
/// dictionary admits no answer at all.
#[must_use]
pub fn solve_puzzle(index: &Trie, puzzle: Puzzle, config: SolveConfig) -> SolveResult {
    let target = puzzle.solution.serialize();
    let optimal_swaps = swap_distance(&board_letters(&puzzle.board), &target);
    let solver = Solver::new(index);
    let mut game = Game::from_puzzle(&puzzle, config);
    let mut steps = Vec::new();

    while game.status() == GameStatus::Playing {
        let hint = solver.suggest(game.board(), Some(target.as_str()));
        let Some(swap) = hint.next_swap() else {
            debug!("No move suggested: {hint:?}");
            break;
        };

        let played = match game.play(swap) {
            Ok(_) => swap,
            Err(e) => {
                warn!("Suggested move {swap} rejected: {e}");
                let Some(fallback) = fallback_swap(game.board(), &target) else {
                    break;
                };
                if game.play(fallback).is_err() {
                    break;
                }
                fallback
            }
        };

        steps.push(SolveStep {
            hint,
            swap: played,
            board: *game.board(),
        });
    }

    SolveResult {
        status: game.status(),
        puzzle,
        steps,
        optimal_swaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::sample_puzzle;

    fn trie() -> Trie {
        Trie::from_words(["SIREN", "RABBI", "WINCH", "SCREW", "ROBIN", "NEIGH"])
    }

    #[test]
    fn solves_sample_in_optimal_moves() {
        let result = solve_puzzle(&trie(), sample_puzzle(), SolveConfig::new());

        assert!(result.success());
        assert_eq!(result.optimal_swaps, 5);
        assert_eq!(result.steps.len(), 5);
        assert!(matches!(result.steps[0].hint, Hint::FullPath { .. }));
    }

    #[test]
    fn unknown_words_still_solve_with_fallback() {
        let result = solve_puzzle(&Trie::new(), sample_puzzle(), SolveConfig::new());

        assert!(result.success());
        assert!(
            result
                .steps
                .iter()
                .all(|step| matches!(step.hint, Hint::Fallback { .. }))
        );
    }

    #[test]
    fn move_limit_is_respected() {
        let result = solve_puzzle(&trie(), sample_puzzle(), SolveConfig { max_moves: 2 });
        assert_eq!(result.status, GameStatus::Lost);
        assert_eq!(result.steps.len(), 2);
    }
}
