//! Main Waffle solver interface

use super::chooser::find_best_swap;
use super::enumerator::possible_solutions_with;
use super::swaps::{Swap, find_swaps};
use crate::core::board::{board_letters, is_solved};
use crate::core::{Board, Tile};
use crate::dictionary::Trie;
use log::{debug, info};

/// Advice for the next move on a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// Every tile is already green
    Solved,
    /// Exactly one answer fits: the whole swap path to it
    FullPath { solution: String, swaps: Vec<Swap> },
    /// Several answers fit: the swap that is best on average
    BestSwap { swap: Swap, candidates: usize },
    /// No answer fits the dictionary, but the real answer is known
    Fallback { swap: Swap },
    /// Nothing can be suggested
    Unsolvable,
}

impl Hint {
    /// The swap to play next, if any
    #[must_use]
    pub fn next_swap(&self) -> Option<Swap> {
        match self {
            Self::FullPath { swaps, .. } => swaps.first().copied(),
            Self::BestSwap { swap, .. } | Self::Fallback { swap } => Some(*swap),
            Self::Solved | Self::Unsolvable => None,
        }
    }
}

/// Main Waffle solver
///
/// Reads the coloured board, enumerates the answers it allows and turns them
/// into a hint.
pub struct Solver<'a> {
    index: &'a Trie,
}

impl<'a> Solver<'a> {
    /// Create a solver over a dictionary index
    #[must_use]
    pub const fn new(index: &'a Trie) -> Self {
        Self { index }
    }

    /// Answers consistent with the board, sorted
    #[must_use]
    pub fn candidates(&self, board: &Board<Tile>) -> Vec<String> {
        let mut candidates: Vec<String> = possible_solutions_with(self.index, board)
            .into_iter()
            .collect();
        candidates.sort_unstable();
        candidates
    }

    /// Suggest the next move
    ///
    /// `known_target` is the real answer when the caller has it; it is only
    /// used when the dictionary admits no answer at all.
    ///
    /// # Examples
    /// ```
    /// use waffle_solver::core::board;
    /// use waffle_solver::dictionary::Trie;
    /// use waffle_solver::solver::{Hint, Solver, Swap};
    ///
    /// let trie = Trie::from_words(["SIREN", "RABBI", "WINCH", "SCREW", "ROBIN", "NEIGH"]);
    /// let target = board::letters("SIRENCOERABBIEIGWINCH");
    /// let current = board::color_board(&board::letters("ISRENCOERABBIEIGWINCH"), &target);
    ///
    /// let hint = Solver::new(&trie).suggest(&current, None);
    /// assert_eq!(hint.next_swap(), Some(Swap(0, 1)));
    /// ```
    #[must_use]
    pub fn suggest(&self, board: &Board<Tile>, known_target: Option<&str>) -> Hint {
        if is_solved(board) {
            return Hint::Solved;
        }

        let start = board_letters(board);
        let candidates = self.candidates(board);
        info!("Found {} possible solutions", candidates.len());

        match candidates.as_slice() {
            [] => known_target
                .and_then(|target| fallback_swap(board, target))
                .map_or(Hint::Unsolvable, |swap| {
                    debug!("Falling back to heuristic swap {swap}");
                    Hint::Fallback { swap }
                }),
            [solution] => Hint::FullPath {
                swaps: find_swaps(&start, solution),
                solution: solution.clone(),
            },
            _ => find_best_swap(&start, &candidates).map_or(Hint::Unsolvable, |swap| {
                Hint::BestSwap {
                    swap,
                    candidates: candidates.len(),
                }
            }),
        }
    }
}

/// A plausible swap towards a known answer when no candidate fits
///
/// Only squares that are wrong and not green are considered. The first pair
/// where one square holds the letter the other needs wins; otherwise the first
/// two wrong squares. Returns `None` with fewer than two wrong squares.
#[must_use]
pub fn fallback_swap(board: &Board<Tile>, target: &str) -> Option<Swap> {
    let target = target.as_bytes();
    let wrong: Vec<usize> = board
        .iter()
        .enumerate()
        .filter(|&(square, tile)| {
            target.get(square).is_some_and(|&want| want != tile.letter) && !tile.color.is_green()
        })
        .map(|(square, _)| square)
        .collect();

    for (i, &a) in wrong.iter().enumerate() {
        for &b in &wrong[i + 1..] {
            if board[a].letter == target[b] || board[b].letter == target[a] {
                return Some(Swap(a, b));
            }
        }
    }

    match wrong.as_slice() {
        [a, b, ..] => Some(Swap(*a, *b)),
        _ => None,
    }
}
