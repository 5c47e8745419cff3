//! Enumerate every answer consistent with a coloured board
//!
//! Candidates for each of the six words come from the dictionary index. The
//! search then fixes the three across words, looks up down words by the three
//! letters they share with them, and keeps a letter budget so no branch uses
//! more copies of a letter than the board holds. Each complete grid is finally
//! recoloured against the board to confirm it reproduces every colour.

use crate::core::board::{self, color_board, is_intersection};
use crate::core::{
    ALL_WORD_LOCATIONS, Board, Color, Solution, Tile, WORD_LENGTH, Word, WordLocation,
};
use crate::dictionary::{Constraint, Trie, get_or_build_index};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

/// Remaining copies of each letter A-Z
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LetterBudget([u8; 26]);

impl LetterBudget {
    fn from_board(board: &Board<Tile>) -> Self {
        let mut counts = [0u8; 26];
        for tile in board {
            if tile.letter.is_ascii_uppercase() {
                counts[(tile.letter - b'A') as usize] += 1;
            }
        }
        Self(counts)
    }

    /// Budget left after spending `letters`, or `None` if any runs out
    fn charge(mut self, letters: impl IntoIterator<Item = u8>) -> Option<Self> {
        for letter in letters {
            let count = self.0.get_mut(letter.wrapping_sub(b'A') as usize)?;
            *count = count.checked_sub(1)?;
        }
        Some(self)
    }
}

/// Constraints for one word location read from the board
///
/// A yellow square shared by two words only says the letter belongs to one of
/// them, so it restricts each word to "not here".
fn constraints_for(board: &Board<Tile>, location: WordLocation) -> [Constraint; WORD_LENGTH] {
    let squares = location.squares();
    std::array::from_fn(|index| {
        let square = squares[index];
        let tile = board[square];
        match tile.color {
            Color::Yellow if is_intersection(square) => Constraint::NotHere(tile.letter),
            _ => Constraint::from_tile(tile),
        }
    })
}

fn sorted(words: FxHashSet<Word>) -> Vec<Word> {
    let mut words: Vec<Word> = words.into_iter().collect();
    words.sort_unstable();
    words
}

/// Down candidates keyed by their crossing letters (positions 0, 2 and 4)
fn by_crossings(words: Vec<Word>) -> FxHashMap<[u8; 3], Vec<Word>> {
    let mut map: FxHashMap<[u8; 3], Vec<Word>> = FxHashMap::default();
    for word in words {
        let c = word.chars();
        map.entry([c[0], c[2], c[4]]).or_default().push(word);
    }
    map
}

/// All answers consistent with the board, using the shared dictionary
///
/// An empty set means the board cannot be solved with this dictionary.
#[must_use]
pub fn possible_solutions_from_board(board: &Board<Tile>) -> FxHashSet<String> {
    possible_solutions_with(&get_or_build_index(), board)
}

/// All answers consistent with the board, using an explicit dictionary
///
/// Every returned answer, used as the target, recolours the board to exactly
/// the colours it was given.
///
/// # Examples
/// ```
/// use waffle_solver::core::board;
/// use waffle_solver::dictionary::Trie;
/// use waffle_solver::solver::possible_solutions_with;
///
/// let trie = Trie::from_words(["SIREN", "RABBI", "WINCH", "SCREW", "ROBIN", "NEIGH"]);
/// let target = board::letters("SIRENCOERABBIEIGWINCH");
/// let scrambled = board::letters("ISRENCOERABBIEIGWINCH");
/// let coloured = board::color_board(&scrambled, &target);
///
/// let found = possible_solutions_with(&trie, &coloured);
/// assert!(found.contains("SIRENCOERABBIEIGWINCH"));
/// ```
#[must_use]
pub fn possible_solutions_with(trie: &Trie, board: &Board<Tile>) -> FxHashSet<String> {
    let budget = LetterBudget::from_board(board);

    let candidates = ALL_WORD_LOCATIONS.map(|location| candidates_for(trie, board, location));

    for (location, words) in ALL_WORD_LOCATIONS.iter().zip(&candidates) {
        debug!("{location}: {} candidate words", words.len());
    }

    let [a1, a2, a3, d1, d2, d3] = candidates;
    let downs = [by_crossings(d1), by_crossings(d2), by_crossings(d3)];

    let letters = board.map(|tile| tile.letter);
    let colors = board.map(|tile| tile.color);
    let mut results = FxHashSet::default();

    for first in &a1 {
        let Some(budget) = budget.charge(*first.chars()) else {
            continue;
        };
        for mid in &a2 {
            let Some(budget) = budget.charge(*mid.chars()) else {
                continue;
            };
            for last in &a3 {
                let Some(budget) = budget.charge(*last.chars()) else {
                    continue;
                };
                let across = [*first, *mid, *last];
                search_downs(&across, &downs, budget, &mut |solution| {
                    let target = solution.to_board();
                    let recoloured = color_board(&letters, &target);
                    if recoloured.iter().map(|tile| tile.color).eq(colors) {
                        results.insert(solution.serialize());
                    }
                });
            }
        }
    }

    debug!("Found {} consistent solutions", results.len());
    results
}

/// Try every down-word combination for fixed across words
///
/// Down words only spend their two letters off the crossings; the crossing
/// letters were paid for by the across words.
fn search_downs(
    across: &[Word; 3],
    downs: &[FxHashMap<[u8; 3], Vec<Word>>; 3],
    budget: LetterBudget,
    emit: &mut impl FnMut(Solution),
) {
    let crossing = |col: usize| -> [u8; 3] {
        let at = col * 2;
        [across[0].char_at(at), across[1].char_at(at), across[2].char_at(at)]
    };
    let empty = Vec::new();
    let list = |col: usize| downs[col].get(&crossing(col)).unwrap_or(&empty);
    let own_letters = |word: &Word| [word.char_at(1), word.char_at(3)];

    for first in list(0) {
        let Some(budget) = budget.charge(own_letters(first)) else {
            continue;
        };
        for mid in list(1) {
            let Some(budget) = budget.charge(own_letters(mid)) else {
                continue;
            };
            for last in list(2) {
                if budget.charge(own_letters(last)).is_none() {
                    continue;
                }
                if let Some(solution) = Solution::from_words(*across, [*first, *mid, *last]) {
                    emit(solution);
                }
            }
        }
    }
}

/// Whether an answer reproduces the board's colours
#[must_use]
pub fn is_consistent(board: &Board<Tile>, solution: &str) -> bool {
    match board::parse_letters(solution) {
        Ok(target) => {
            let letters = board.map(|tile| tile.letter);
            color_board(&letters, &target) == *board
        }
        Err(_) => false,
    }
}

/// Dictionary words that fit one location of the board, sorted
#[must_use]
pub fn candidates_for(trie: &Trie, board: &Board<Tile>, location: WordLocation) -> Vec<Word> {
    sorted(trie.search(&constraints_for(board, location)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::letters;
    use crate::core::{Direction, Order};

    const TARGET: &str = "SIRENCOERABBIEIGWINCH";

    fn small_trie() -> Trie {
        Trie::from_words([
            "SIREN", "RABBI", "WINCH", "SCREW", "ROBIN", "NEIGH", "RESIN", "RINSE", "BRINE",
            "WRECK", "SHINE", "CHINS",
        ])
    }

    fn board_for(arrangement: &str, target: &str) -> Board<Tile> {
        color_board(&letters(arrangement), &letters(target))
    }

    #[test]
    fn solved_board_has_only_its_answer() {
        let found = possible_solutions_with(&small_trie(), &board_for(TARGET, TARGET));
        assert_eq!(found.len(), 1);
        assert!(found.contains(TARGET));
    }

    #[test]
    fn single_mismatch_still_finds_answer() {
        let board = board_for("ISRENCOERABBIEIGWINCH", TARGET);
        // I on the shared corner is yellow only because SIREN holds an I
        assert_eq!(board[0].color, Color::Yellow);
        assert_eq!(board[1].color, Color::Yellow);

        let found = possible_solutions_with(&small_trie(), &board);
        assert!(found.contains(TARGET));
    }

    #[test]
    fn sample_puzzle_is_unique_with_full_dictionary() {
        let board = board_for("NIESRCOEWABBIEIGRCNIH", TARGET);
        let found = possible_solutions_from_board(&board);
        assert_eq!(found.len(), 1);
        assert!(found.contains(TARGET));
    }

    #[test]
    fn every_solution_reproduces_colours() {
        let board = board_for("NIESRCOEWABBIEIGRCNIH", TARGET);
        for solution in possible_solutions_with(&small_trie(), &board) {
            assert!(is_consistent(&board, &solution), "{solution}");
        }
    }

    #[test]
    fn unsolvable_board_gives_empty_set() {
        // Nothing in the dictionary fits a row of Zs
        let mut board = board_for(TARGET, TARGET);
        for tile in &mut board[..5] {
            tile.letter = b'Z';
        }
        assert!(possible_solutions_with(&small_trie(), &board).is_empty());
    }

    #[test]
    fn empty_dictionary_gives_empty_set() {
        let board = board_for(TARGET, TARGET);
        assert!(possible_solutions_with(&Trie::new(), &board).is_empty());
    }

    #[test]
    fn budget_rejects_overspending() {
        let board = board_for(TARGET, TARGET);
        let budget = LetterBudget::from_board(&board);
        // The board has a single S
        assert!(budget.charge(*b"S").is_some());
        assert!(budget.charge(*b"SS").is_none());
        // and two Bs
        assert!(budget.charge(*b"BB").is_some());
        assert!(budget.charge(*b"BBB").is_none());
    }

    #[test]
    fn crossing_yellow_only_blocks_its_square() {
        let board = board_for("ISRENCOERABBIEIGWINCH", TARGET);
        let down = WordLocation::new(Direction::Down, Order::First);
        let constraints = constraints_for(&board, down);
        assert_eq!(constraints[0], Constraint::NotHere(b'I'));
        assert!(candidates_for(&small_trie(), &board, down).contains(&Word::new("SCREW").unwrap()));
    }

    #[test]
    fn is_consistent_rejects_wrong_answer() {
        let board = board_for("ISRENCOERABBIEIGWINCH", TARGET);
        assert!(is_consistent(&board, TARGET));
        assert!(!is_consistent(&board, "ISRENCOERABBIEIGWINCH"));
        assert!(!is_consistent(&board, "short"));
    }
}
