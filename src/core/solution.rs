//! Complete six-word Waffle grids

use super::board::{
    ALL_WORD_LOCATIONS, BOARD_SIZE, Board, Direction, WordLocation, same_letters,
    word_from_word_location,
};
use super::color::Tile;
use super::word::Word;
use std::fmt;

/// A full assignment of the six words whose nine crossings agree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Solution {
    across: [Word; 3],
    down: [Word; 3],
}

impl Solution {
    /// Build a solution from across and down words
    ///
    /// Returns `None` when any of the nine crossing letters disagree.
    ///
    /// # Examples
    /// ```
    /// use waffle_solver::core::{Solution, Word};
    ///
    /// let w = |s| Word::new(s).unwrap();
    /// let solution = Solution::from_words(
    ///     [w("SIREN"), w("RABBI"), w("WINCH")],
    ///     [w("SCREW"), w("ROBIN"), w("NEIGH")],
    /// )
    /// .unwrap();
    /// assert_eq!(solution.serialize(), "SIRENCOERABBIEIGWINCH");
    ///
    /// assert!(Solution::from_words(
    ///     [w("ROBIN"), w("RABBI"), w("WINCH")],
    ///     [w("SCREW"), w("ROBIN"), w("NEIGH")],
    /// )
    /// .is_none());
    /// ```
    #[must_use]
    pub fn from_words(across: [Word; 3], down: [Word; 3]) -> Option<Self> {
        crossings_agree(&across, &down).then_some(Self { across, down })
    }

    /// Assemble a grid whose crossings are known to agree
    pub(crate) const fn from_words_unchecked(across: [Word; 3], down: [Word; 3]) -> Self {
        Self { across, down }
    }

    /// Read a solution back from its 21-letter board form
    ///
    /// Returns `None` if the text is not 21 ASCII letters.
    #[must_use]
    pub fn deserialize(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != BOARD_SIZE {
            return None;
        }
        let board: Board<u8> = std::array::from_fn(|square| bytes[square]);

        let mut words = [None; 6];
        for (slot, location) in words.iter_mut().zip(ALL_WORD_LOCATIONS) {
            *slot = Word::from_letters(word_from_word_location(&board, location)).ok();
        }

        let [a1, a2, a3, d1, d2, d3] = words;
        Some(Self {
            across: [a1?, a2?, a3?],
            down: [d1?, d2?, d3?],
        })
    }

    #[must_use]
    pub const fn across(&self) -> &[Word; 3] {
        &self.across
    }

    #[must_use]
    pub const fn down(&self) -> &[Word; 3] {
        &self.down
    }

    /// The word at a logical location
    #[must_use]
    pub const fn word_at(&self, location: WordLocation) -> Word {
        match location.dir {
            Direction::Across => self.across[location.order.index()],
            Direction::Down => self.down[location.order.index()],
        }
    }

    /// The six words in across-then-down order
    #[must_use]
    pub const fn words(&self) -> [Word; 6] {
        let [a1, a2, a3] = self.across;
        let [d1, d2, d3] = self.down;
        [a1, a2, a3, d1, d2, d3]
    }

    /// Letters laid out on the board
    #[must_use]
    pub fn to_board(&self) -> Board<u8> {
        let mut board = [0u8; BOARD_SIZE];
        for location in ALL_WORD_LOCATIONS {
            let word = self.word_at(location);
            for (&square, &letter) in location.squares().iter().zip(word.chars()) {
                board[square] = letter;
            }
        }
        board
    }

    /// The 21-letter string form, squares in board order
    #[must_use]
    pub fn serialize(&self) -> String {
        self.to_board().iter().map(|&letter| letter as char).collect()
    }

    /// Whether a board holds exactly the letters of this solution
    #[must_use]
    pub fn letters_fit(&self, board: &Board<Tile>) -> bool {
        let letters: String = board.iter().map(|tile| tile.letter as char).collect();
        same_letters(&self.serialize(), &letters)
    }

    /// Five-line grid with blanks for the four holes
    #[must_use]
    pub fn render(&self) -> String {
        render_grid(&self.to_board())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.serialize())
    }
}

/// Check the nine crossings of three across and three down words
///
/// Across word `r` meets down word `c` at letter `2c` of the across word and
/// letter `2r` of the down word.
#[must_use]
pub fn crossings_agree(across: &[Word; 3], down: &[Word; 3]) -> bool {
    across.iter().enumerate().all(|(row, a)| {
        down.iter()
            .enumerate()
            .all(|(col, d)| a.char_at(col * 2) == d.char_at(row * 2))
    })
}

/// Lay out 21 board letters as the five visual rows
#[must_use]
pub fn render_grid(board: &Board<u8>) -> String {
    let ch = |square: usize| board[square] as char;
    let mut out = String::with_capacity(50);

    for row in 0..5 {
        let line: String = if row % 2 == 0 {
            let start = row / 2 * 8;
            (start..start + 5)
                .map(ch)
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            let start = 5 + row / 2 * 8;
            format!("{}   {}   {}", ch(start), ch(start + 1), ch(start + 2))
        };
        out.push_str(&line);
        if row < 4 {
            out.push('\n');
        }
    }

    out
}
