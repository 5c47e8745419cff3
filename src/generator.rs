//! Puzzle generation
//!
//! Builds valid six-word grids from the dictionary and scrambles them into
//! playable boards. Generation tries a guided search first, then random
//! sampling, then a list of known grids, and finally a fixed grid that needs
//! nothing from the dictionary, so [`generate_guaranteed_waffle`] always
//! returns a valid answer.

use crate::core::board::{self, color_board};
use crate::core::{BOARD_SIZE, Board, Solution, Tile, Word, crossings_agree};
use crate::dictionary::Trie;
use log::{debug, info, warn};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use rustc_hash::FxHashMap;

/// Tuning for puzzle generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Attempts for the guided generator
    pub smart_attempts: usize,
    /// Attempts for the random-sampling generator
    pub random_attempts: usize,
    /// Random swaps used to scramble a new puzzle; `None` shuffles fully
    pub scramble_swaps: Option<usize>,
}

impl GeneratorConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            smart_attempts: 1000,
            random_attempts: 500,
            scramble_swaps: Some(10),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// An answer and the scrambled board the player starts from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub solution: Solution,
    pub board: Board<Tile>,
}

/// Known-good grid built from geometry alone
const FALLBACK: Solution = Solution::from_words_unchecked(
    [
        Word::from_upper(*b"SIREN"),
        Word::from_upper(*b"RABBI"),
        Word::from_upper(*b"WINCH"),
    ],
    [
        Word::from_upper(*b"SCREW"),
        Word::from_upper(*b"ROBIN"),
        Word::from_upper(*b"NEIGH"),
    ],
);

/// Scrambled start of the fixed demo puzzle
const SAMPLE_START: &str = "NIESRCOEWABBIEIGRCNIH";

/// Hand-picked grids, in across-then-down order
const CLASSICS: [[&str; 6]; 15] = [
    ["SIREN", "RABBI", "WINCH", "SCREW", "ROBIN", "NEIGH"],
    ["BEGIN", "SCORE", "NEEDS", "BISON", "GOOSE", "NEEDS"],
    ["EAGLE", "GLOBE", "EMPTY", "EAGLE", "GROUP", "EVERY"],
    ["LEAVE", "GROVE", "THEFT", "LIGHT", "ABOVE", "EVENT"],
    ["GUARD", "ABOVE", "DREAM", "GRAND", "ABOVE", "DREAM"],
    ["JOINT", "PAPER", "NOTED", "JAPAN", "INPUT", "TIRED"],
    ["PLATE", "ABOUT", "EXTRA", "PLACE", "ABOUT", "EXTRA"],
    ["ISSUE", "ALIVE", "EIGHT", "IMAGE", "SWING", "EVENT"],
    ["DROVE", "ENTER", "MARCH", "DREAM", "OTTER", "EARTH"],
    ["WRONG", "EXTRA", "LARGE", "WHEEL", "OUTER", "GRACE"],
    ["JAPAN", "PLANE", "NEEDS", "JAPAN", "PHASE", "NEEDS"],
    ["BUILD", "AGAIN", "SCENE", "BEARS", "IMAGE", "DANCE"],
    ["SQUAD", "URBAN", "DANCE", "SOUND", "URBAN", "DANCE"],
    ["WHILE", "ORDER", "SIXTY", "WOODS", "INDEX", "EARLY"],
    ["BROWN", "OCCUR", "SERVE", "BOOKS", "OCCUR", "NURSE"],
];

/// Whether six words form a valid grid
///
/// All six must be dictionary words and the nine crossings must agree.
/// Words are given as three across words then three down words.
///
/// # Examples
/// ```
/// use waffle_solver::dictionary::get_or_build_index;
/// use waffle_solver::generator::is_valid_waffle_grid;
///
/// let index = get_or_build_index();
/// assert!(is_valid_waffle_grid(&index, ["SIREN", "RABBI", "WINCH", "SCREW", "ROBIN", "NEIGH"]));
/// assert!(!is_valid_waffle_grid(&index, ["SIREN", "RABBI", "WINCH", "ROBIN", "SCREW", "NEIGH"]));
/// ```
#[must_use]
pub fn is_valid_waffle_grid(index: &Trie, words: [&str; 6]) -> bool {
    create_waffle_solution(index, words).is_some()
}

/// Build the grid for six words, or `None` if they do not form one
#[must_use]
pub fn create_waffle_solution(index: &Trie, words: [&str; 6]) -> Option<Solution> {
    let mut parsed = [FALLBACK.words()[0]; 6];
    for (slot, text) in parsed.iter_mut().zip(words) {
        let word = Word::new(text).ok()?;
        if !index.contains(&word) {
            return None;
        }
        *slot = word;
    }

    let [a1, a2, a3, d1, d2, d3] = parsed;
    Solution::from_words([a1, a2, a3], [d1, d2, d3])
}

/// Lookup tables for the guided generator
struct WordIndex {
    words: Vec<Word>,
    by_first: FxHashMap<u8, Vec<Word>>,
    by_position: FxHashMap<(usize, u8), Vec<Word>>,
}

impl WordIndex {
    fn new(index: &Trie) -> Self {
        let words = index.words();
        let mut by_first: FxHashMap<u8, Vec<Word>> = FxHashMap::default();
        let mut by_position: FxHashMap<(usize, u8), Vec<Word>> = FxHashMap::default();

        for &word in &words {
            by_first.entry(word.char_at(0)).or_default().push(word);
            for (position, &letter) in word.chars().iter().enumerate() {
                by_position.entry((position, letter)).or_default().push(word);
            }
        }

        Self {
            words,
            by_first,
            by_position,
        }
    }

    /// Words with the given letters at positions 0, 2 and 4
    fn matching(&self, letters: [u8; 3]) -> Vec<Word> {
        self.by_position
            .get(&(0, letters[0]))
            .map(|words| {
                words
                    .iter()
                    .copied()
                    .filter(|w| w.char_at(2) == letters[1] && w.char_at(4) == letters[2])
                    .collect()
            })
            .unwrap_or_default()
    }

    fn starting_with(&self, letter: u8) -> &[Word] {
        self.by_first.get(&letter).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Guided generation: pick the top word, then columns that start on its
/// crossing letters, then the two lower rows that fit the columns
pub fn generate_smart_waffle<R: Rng + ?Sized>(
    index: &Trie,
    rng: &mut R,
    max_attempts: usize,
) -> Option<Solution> {
    let lookup = WordIndex::new(index);

    for attempt in 1..=max_attempts {
        let Some(&top) = lookup.words.choose(rng) else {
            return None;
        };

        let columns = [0, 2, 4].map(|at| lookup.starting_with(top.char_at(at)).choose(rng).copied());
        let [Some(c1), Some(c2), Some(c3)] = columns else {
            continue;
        };

        let Some(&mid) = lookup
            .matching([c1.char_at(2), c2.char_at(2), c3.char_at(2)])
            .choose(rng)
        else {
            continue;
        };
        let Some(&bottom) = lookup
            .matching([c1.char_at(4), c2.char_at(4), c3.char_at(4)])
            .choose(rng)
        else {
            continue;
        };

        if let Some(solution) = Solution::from_words([top, mid, bottom], [c1, c2, c3]) {
            debug!("Guided generator succeeded after {attempt} attempts");
            return Some(solution);
        }
    }

    warn!("Guided generator gave up after {max_attempts} attempts");
    None
}

/// Random generation: sample words and test them six at a time
pub fn generate_random_waffle<R: Rng + ?Sized>(
    index: &Trie,
    rng: &mut R,
    max_attempts: usize,
) -> Option<Solution> {
    let words = index.words();

    for attempt in 1..=max_attempts {
        let sample: Vec<Word> = words.choose_multiple(rng, 100).copied().collect();

        for group in sample.chunks_exact(6) {
            let across = [group[0], group[1], group[2]];
            let down = [group[3], group[4], group[5]];
            if crossings_agree(&across, &down) {
                debug!("Random generator succeeded after {attempt} attempts");
                return Solution::from_words(across, down);
            }
        }
    }

    warn!("Random generator gave up after {max_attempts} attempts");
    None
}

/// The classic grids that are valid in this dictionary
#[must_use]
pub fn classic_waffles(index: &Trie) -> Vec<Solution> {
    CLASSICS
        .iter()
        .filter_map(|&words| {
            let solution = create_waffle_solution(index, words);
            if solution.is_none() {
                debug!("Skipping invalid classic grid {}", words.join("/"));
            }
            solution
        })
        .collect()
}

/// A valid answer, always
///
/// Tries the guided generator, then random sampling, then a random classic
/// grid, and finally the fixed SIREN/RABBI/WINCH grid.
pub fn generate_guaranteed_waffle<R: Rng + ?Sized>(
    index: &Trie,
    rng: &mut R,
    config: &GeneratorConfig,
) -> Solution {
    if let Some(solution) = generate_smart_waffle(index, rng, config.smart_attempts) {
        return solution;
    }

    if let Some(solution) = generate_random_waffle(index, rng, config.random_attempts) {
        return solution;
    }

    if let Some(&solution) = classic_waffles(index).choose(rng) {
        info!("Using a classic grid");
        return solution;
    }

    info!("Using the built-in grid");
    FALLBACK
}

/// Generate an answer and scramble it into a starting board
pub fn generate_puzzle<R: Rng + ?Sized>(index: &Trie, rng: &mut R, config: &GeneratorConfig) -> Puzzle {
    let solution = generate_guaranteed_waffle(index, rng, config);
    let board = match config.scramble_swaps {
        Some(swaps) => scramble_puzzle(&solution, swaps, rng),
        None => shuffle_puzzle(&solution, rng),
    };
    Puzzle { solution, board }
}

/// Shuffle every letter of the answer and colour the result
///
/// Never returns a solved board unless all letters are the same.
pub fn shuffle_puzzle<R: Rng + ?Sized>(solution: &Solution, rng: &mut R) -> Board<Tile> {
    let target = solution.to_board();
    let mut letters = target;
    letters.shuffle(rng);
    unsolve(&mut letters, &target);
    color_board(&letters, &target)
}

/// Apply random swaps of squares holding different letters
///
/// The answer is always reachable within `max(swaps, 1)` swaps: a board that
/// comes out solved gets one extra swap. Never returns a solved board unless
/// all letters are the same.
pub fn scramble_puzzle<R: Rng + ?Sized>(
    solution: &Solution,
    swaps: usize,
    rng: &mut R,
) -> Board<Tile> {
    let target = solution.to_board();
    let mut letters = target;

    for _ in 0..swaps {
        let a = rng.random_range(0..BOARD_SIZE);
        let partners: Vec<usize> = (0..BOARD_SIZE).filter(|&b| letters[b] != letters[a]).collect();
        if let Some(&b) = partners.choose(rng) {
            letters.swap(a, b);
        }
    }

    unsolve(&mut letters, &target);
    color_board(&letters, &target)
}

/// Swap the first two different letters if the board came out solved
fn unsolve(letters: &mut Board<u8>, target: &Board<u8>) {
    if *letters != *target {
        return;
    }
    if let Some(b) = (1..BOARD_SIZE).find(|&b| letters[b] != letters[0]) {
        letters.swap(0, b);
    }
}

/// The fixed demo puzzle: the SIREN grid and its scrambled start
#[must_use]
pub fn sample_puzzle() -> Puzzle {
    let target = FALLBACK.to_board();
    Puzzle {
        solution: FALLBACK,
        board: color_board(&board::letters(SAMPLE_START), &target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::{board_letters, is_solved, same_letters};
    use crate::dictionary::get_or_build_index;
    use crate::solver::swap_distance;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const CLASSIC: [&str; 6] = ["SIREN", "RABBI", "WINCH", "SCREW", "ROBIN", "NEIGH"];

    fn assert_valid(index: &Trie, solution: &Solution) {
        for word in solution.words() {
            assert!(index.contains(&word), "{word} not in dictionary");
        }
        assert!(crossings_agree(solution.across(), solution.down()));
    }

    #[test]
    fn classic_grid_is_valid() {
        let index = get_or_build_index();
        assert!(is_valid_waffle_grid(&index, CLASSIC));

        let solution = create_waffle_solution(&index, CLASSIC).unwrap();
        assert_eq!(solution.serialize(), "SIRENCOERABBIEIGWINCH");
    }

    #[test]
    fn invalid_grids_are_rejected() {
        let index = get_or_build_index();
        // Crossings disagree
        assert!(create_waffle_solution(&index, ["SIREN", "RABBI", "WINCH", "ROBIN", "SCREW", "NEIGH"]).is_none());
        // Not five letters
        assert!(!is_valid_waffle_grid(&index, ["SIRENS", "RABBI", "WINCH", "SCREW", "ROBIN", "NEIGH"]));
        // Not in the dictionary
        let small = Trie::from_words(["SIREN", "RABBI", "WINCH", "SCREW", "ROBIN"]);
        assert!(!is_valid_waffle_grid(&small, CLASSIC));
    }

    #[test]
    fn fallback_matches_checked_construction() {
        let index = Trie::from_words(CLASSIC);
        assert_eq!(create_waffle_solution(&index, CLASSIC), Some(FALLBACK));
    }

    #[test]
    fn classics_skip_invalid_grids() {
        let index = get_or_build_index();
        let classics = classic_waffles(&index);
        // BOOKS is not in the dictionary
        assert_eq!(classics.len(), CLASSICS.len() - 1);
        for solution in &classics {
            assert_valid(&index, solution);
        }
    }

    #[test]
    fn smart_generator_builds_valid_grids() {
        let index = get_or_build_index();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..5 {
            let solution = generate_smart_waffle(&index, &mut rng, 1000).unwrap();
            assert_valid(&index, &solution);
        }
    }

    #[test]
    fn random_generator_finds_grid_among_its_own_words() {
        // Every sample is an ordering of these six words; two orderings are grids
        let index = Trie::from_words(CLASSIC);
        let mut rng = StdRng::seed_from_u64(3);
        let solution = generate_random_waffle(&index, &mut rng, 5000).unwrap();
        assert_valid(&index, &solution);

        let mut words: Vec<Word> = solution.words().to_vec();
        words.sort();
        let mut expected: Vec<Word> = FALLBACK.words().to_vec();
        expected.sort();
        assert_eq!(words, expected);
    }

    #[test]
    fn random_generator_gives_up_on_empty_dictionary() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(generate_random_waffle(&Trie::new(), &mut rng, 50), None);
    }

    #[test]
    fn guaranteed_generator_uses_random_sampling() {
        let index = Trie::from_words(CLASSIC);
        let mut rng = StdRng::seed_from_u64(11);
        let config = GeneratorConfig {
            smart_attempts: 0,
            random_attempts: 5000,
            scramble_swaps: None,
        };
        assert_valid(&index, &generate_guaranteed_waffle(&index, &mut rng, &config));
    }

    #[test]
    fn guaranteed_generator_falls_back_on_tiny_dictionary() {
        let index = Trie::from_words(["SIREN"]);
        let mut rng = StdRng::seed_from_u64(1);
        let config = GeneratorConfig {
            smart_attempts: 10,
            random_attempts: 2,
            scramble_swaps: None,
        };
        assert_eq!(generate_guaranteed_waffle(&index, &mut rng, &config), FALLBACK);
    }

    #[test]
    fn guaranteed_generator_with_empty_dictionary() {
        let mut rng = StdRng::seed_from_u64(1);
        let solution = generate_guaranteed_waffle(&Trie::new(), &mut rng, &GeneratorConfig::new());
        assert_eq!(solution.serialize(), "SIRENCOERABBIEIGWINCH");
    }

    #[test]
    fn scramble_stays_within_swap_budget() {
        let mut rng = StdRng::seed_from_u64(9);
        let target = FALLBACK.serialize();
        for _ in 0..50 {
            for swaps in [1, 2] {
                let board = scramble_puzzle(&FALLBACK, swaps, &mut rng);
                let letters = board_letters(&board);
                assert!(!is_solved(&board));
                assert!(swap_distance(&letters, &target) <= swaps);
            }
        }

        let board = scramble_puzzle(&FALLBACK, 10, &mut rng);
        assert!(!is_solved(&board));
        assert!(same_letters(&board_letters(&board), &target));
    }

    #[test]
    fn shuffle_keeps_letters() {
        let mut rng = StdRng::seed_from_u64(5);
        let board = shuffle_puzzle(&FALLBACK, &mut rng);
        assert!(!is_solved(&board));
        assert!(FALLBACK.letters_fit(&board));
    }

    #[test]
    fn scramble_with_zero_swaps_is_still_unsolved() {
        let mut rng = StdRng::seed_from_u64(0);
        let board = scramble_puzzle(&FALLBACK, 0, &mut rng);
        assert!(!is_solved(&board));
        assert_eq!(swap_distance(&board_letters(&board), &FALLBACK.serialize()), 1);
    }

    #[test]
    fn sample_puzzle_matches_demo_board() {
        let puzzle = sample_puzzle();
        assert_eq!(board_letters(&puzzle.board), SAMPLE_START);
        assert_eq!(puzzle.solution.serialize(), "SIRENCOERABBIEIGWINCH");
        assert!(puzzle.solution.letters_fit(&puzzle.board));
    }

    #[test]
    fn generate_puzzle_uses_config() {
        let index = get_or_build_index();
        let mut rng = StdRng::seed_from_u64(8);
        let puzzle = generate_puzzle(&index, &mut rng, &GeneratorConfig::new());
        assert_valid(&index, &puzzle.solution);
        assert!(puzzle.solution.letters_fit(&puzzle.board));
        assert!(!is_solved(&puzzle.board));
    }
}
