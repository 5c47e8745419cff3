//! Core domain types for Waffle
//!
//! Letters, tiles, words and the fixed board geometry. Everything here is
//! pure and has no dependencies outside the standard library.

pub mod board;
mod color;
mod solution;
mod word;

pub use board::{
    ALL_WORD_LOCATIONS, BOARD_SIZE, Board, BoardError, Direction, LetterLocation, Order,
    WordLocation,
};
pub use color::{Color, Tile};
pub use solution::{Solution, crossings_agree, render_grid};
pub use word::{WORD_LENGTH, Word, WordError};
