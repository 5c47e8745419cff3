//! Waffle board geometry
//!
//! The board is a 5×5 grid with the four cells inside each 2×2 corner block
//! removed, leaving 21 squares numbered row by row:
//!
//! ```text
//!  0  1  2  3  4
//!  5     6     7
//!  8  9 10 11 12
//! 13    14    15
//! 16 17 18 19 20
//! ```
//!
//! Three words run across (rows 0, 2, 4) and three run down (columns 0, 2, 4).
//! The nine squares where they cross belong to two words.

use super::color::{Color, Tile};
use super::word::WORD_LENGTH;
use std::fmt;

/// Number of squares on a board
pub const BOARD_SIZE: usize = 21;

/// A full board, one value per square
pub type Board<T> = [T; BOARD_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Order {
    First,
    Mid,
    Last,
}

impl Order {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Mid => 1,
            Self::Last => 2,
        }
    }
}

/// One of the six logical words on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordLocation {
    pub dir: Direction,
    pub order: Order,
}

impl WordLocation {
    #[must_use]
    pub const fn new(dir: Direction, order: Order) -> Self {
        Self { dir, order }
    }

    /// Board squares covered by this word, in reading order
    #[inline]
    #[must_use]
    pub const fn squares(self) -> &'static [usize; WORD_LENGTH] {
        match self.dir {
            Direction::Across => &ACROSS_SQUARES[self.order.index()],
            Direction::Down => &DOWN_SQUARES[self.order.index()],
        }
    }
}

impl fmt::Display for WordLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.dir {
            Direction::Across => "across",
            Direction::Down => "down",
        };
        let order = match self.order {
            Order::First => "first",
            Order::Mid => "mid",
            Order::Last => "last",
        };
        write!(f, "{dir}/{order}")
    }
}

/// A letter slot inside one logical word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterLocation {
    pub location: WordLocation,
    /// Position of the letter within the word (0-4)
    pub index: usize,
}

/// Word locations in enumeration order: across words first, then down words
pub const ALL_WORD_LOCATIONS: [WordLocation; 6] = [
    WordLocation::new(Direction::Across, Order::First),
    WordLocation::new(Direction::Across, Order::Mid),
    WordLocation::new(Direction::Across, Order::Last),
    WordLocation::new(Direction::Down, Order::First),
    WordLocation::new(Direction::Down, Order::Mid),
    WordLocation::new(Direction::Down, Order::Last),
];

const ACROSS_SQUARES: [[usize; WORD_LENGTH]; 3] =
    [[0, 1, 2, 3, 4], [8, 9, 10, 11, 12], [16, 17, 18, 19, 20]];

const DOWN_SQUARES: [[usize; WORD_LENGTH]; 3] =
    [[0, 5, 8, 13, 16], [2, 6, 10, 14, 18], [4, 7, 12, 15, 20]];

const fn at(dir: Direction, order: Order, index: usize) -> LetterLocation {
    LetterLocation {
        location: WordLocation::new(dir, order),
        index,
    }
}

use Direction::{Across, Down};
use Order::{First, Last, Mid};

static LETTER_LOCATIONS: [&[LetterLocation]; BOARD_SIZE] = [
    &[at(Across, First, 0), at(Down, First, 0)],
    &[at(Across, First, 1)],
    &[at(Across, First, 2), at(Down, Mid, 0)],
    &[at(Across, First, 3)],
    &[at(Across, First, 4), at(Down, Last, 0)],
    &[at(Down, First, 1)],
    &[at(Down, Mid, 1)],
    &[at(Down, Last, 1)],
    &[at(Across, Mid, 0), at(Down, First, 2)],
    &[at(Across, Mid, 1)],
    &[at(Across, Mid, 2), at(Down, Mid, 2)],
    &[at(Across, Mid, 3)],
    &[at(Across, Mid, 4), at(Down, Last, 2)],
    &[at(Down, First, 3)],
    &[at(Down, Mid, 3)],
    &[at(Down, Last, 3)],
    &[at(Across, Last, 0), at(Down, First, 4)],
    &[at(Across, Last, 1)],
    &[at(Across, Last, 2), at(Down, Mid, 4)],
    &[at(Across, Last, 3)],
    &[at(Across, Last, 4), at(Down, Last, 4)],
];

/// Letter slots occupied by a square: two for crossings, one otherwise
///
/// # Panics
/// Panics if `square >= BOARD_SIZE`
#[inline]
#[must_use]
pub fn letter_locations(square: usize) -> &'static [LetterLocation] {
    LETTER_LOCATIONS[square]
}

/// Whether a square is shared by an across word and a down word
#[inline]
#[must_use]
pub fn is_intersection(square: usize) -> bool {
    LETTER_LOCATIONS[square].len() == 2
}

/// Gather the five values of one logical word
#[must_use]
pub fn word_from_word_location<T: Copy>(board: &Board<T>, location: WordLocation) -> [T; WORD_LENGTH] {
    location.squares().map(|square| board[square])
}

/// Apply `transform` to every square, passing its value, number and letter slots
pub fn transform_board<T, U, F>(board: &Board<T>, mut transform: F) -> Board<U>
where
    F: FnMut(&T, usize, &[LetterLocation]) -> U,
{
    std::array::from_fn(|square| transform(&board[square], square, letter_locations(square)))
}

/// Colour of `letter` placed on `square` when `target` is the answer
///
/// Green when the letter is the answer's letter at this square. Otherwise
/// Yellow when any word crossing the square contains the letter, and Grey
/// only when none of them does.
///
/// # Examples
/// ```
/// use waffle_solver::core::{Color, board};
///
/// let target = board::letters("SIRENCOERABBIEIGWINCH");
/// assert_eq!(board::color_of_square(b'S', &target, 0), Color::Green);
/// assert_eq!(board::color_of_square(b'N', &target, 0), Color::Yellow); // SIREN has an N
/// assert_eq!(board::color_of_square(b'Z', &target, 0), Color::Grey);
/// ```
#[must_use]
pub fn color_of_square(letter: u8, target: &Board<u8>, square: usize) -> Color {
    for letter_location in letter_locations(square) {
        let word = word_from_word_location(target, letter_location.location);

        if word[letter_location.index] == letter {
            return Color::Green;
        }

        if word.contains(&letter) {
            return Color::Yellow;
        }
    }

    Color::Grey
}

/// Recolour a letter arrangement against an assumed answer
#[must_use]
pub fn color_board(letters: &Board<u8>, target: &Board<u8>) -> Board<Tile> {
    transform_board(letters, |&letter, square, _| {
        Tile::new(letter, color_of_square(letter, target, square))
    })
}

/// Convert a 21-letter string into board letters
///
/// # Panics
/// Panics if the string is not exactly 21 bytes long. Callers validate
/// external input with [`parse_letters`] first.
#[must_use]
pub fn letters(serialized: &str) -> Board<u8> {
    let bytes = serialized.as_bytes();
    assert_eq!(
        bytes.len(),
        BOARD_SIZE,
        "board strings must have exactly {BOARD_SIZE} letters"
    );
    std::array::from_fn(|square| bytes[square])
}

/// The letters of a board as a 21-character string
#[must_use]
pub fn board_letters(board: &Board<Tile>) -> String {
    board.iter().map(|tile| tile.letter as char).collect()
}

#[must_use]
pub fn is_solved(board: &Board<Tile>) -> bool {
    board.iter().all(|tile| tile.color.is_green())
}

/// Whether two arrangements use exactly the same letters
#[must_use]
pub fn same_letters(a: &str, b: &str) -> bool {
    let mut a: Vec<u8> = a.bytes().collect();
    let mut b: Vec<u8> = b.bytes().collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Error type for malformed board input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    InvalidLength(usize),
    InvalidLetter { square: usize, found: char },
    InvalidColor { square: usize, found: char },
    MismatchedLetters,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Board must have exactly {BOARD_SIZE} squares, got {len}")
            }
            Self::InvalidLetter { square, found } => {
                write!(f, "Square {square} holds '{found}', expected a letter A-Z")
            }
            Self::InvalidColor { square, found } => {
                write!(f, "Square {square} has colour '{found}', expected G, Y or -")
            }
            Self::MismatchedLetters => write!(f, "Boards do not use the same letters"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Parse and validate 21 board letters (case-insensitive)
///
/// # Errors
/// Returns `BoardError` if the length is wrong or a character is not A-Z.
pub fn parse_letters(text: &str) -> Result<Board<u8>, BoardError> {
    let chars: Vec<char> = text.trim().chars().collect();
    if chars.len() != BOARD_SIZE {
        return Err(BoardError::InvalidLength(chars.len()));
    }

    let mut board = [0u8; BOARD_SIZE];
    for (square, &ch) in chars.iter().enumerate() {
        if !ch.is_ascii_alphabetic() {
            return Err(BoardError::InvalidLetter { square, found: ch });
        }
        board[square] = ch.to_ascii_uppercase() as u8;
    }

    Ok(board)
}

/// Parse a board from its letters and colour feedback
///
/// # Errors
/// Returns `BoardError` if either string is malformed.
///
/// # Examples
/// ```
/// use waffle_solver::core::{Color, board};
///
/// let parsed = board::parse_board("SIRENCOERABBIEIGWINCH", "GGGGGGGGGGGGGGGGGGGGG").unwrap();
/// assert!(board::is_solved(&parsed));
/// assert_eq!(parsed[1].letter, b'I');
/// assert_eq!(parsed[1].color, Color::Green);
/// ```
pub fn parse_board(letters: &str, colors: &str) -> Result<Board<Tile>, BoardError> {
    let letters = parse_letters(letters)?;

    let colors: Vec<char> = colors.trim().chars().collect();
    if colors.len() != BOARD_SIZE {
        return Err(BoardError::InvalidLength(colors.len()));
    }

    let mut parsed = [Tile::new(b'A', Color::Grey); BOARD_SIZE];
    for (square, (&letter, &ch)) in letters.iter().zip(&colors).enumerate() {
        let color = Color::from_char(ch).ok_or(BoardError::InvalidColor { square, found: ch })?;
        parsed[square] = Tile::new(letter, color);
    }

    Ok(parsed)
}
