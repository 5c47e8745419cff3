//! Five-letter grid words
//!
//! Every word in a Waffle grid is five uppercase ASCII letters, stored inline
//! so candidate sets and solutions copy words around freely.

use std::fmt;

/// Number of letters in every grid word
pub const WORD_LENGTH: usize = 5;

/// A five-letter uppercase word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    chars: [u8; WORD_LENGTH],
}

/// Why text could not become a [`Word`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(f, "expected {WORD_LENGTH} letters, found {len}"),
            Self::NonAscii => write!(f, "only ASCII letters are allowed"),
            Self::InvalidCharacters => write!(f, "only the letters A-Z are allowed"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Parse a word, uppercasing it
    ///
    /// # Errors
    /// Returns `WordError` for text that is not exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use waffle_solver::core::{Word, WordError};
    ///
    /// assert_eq!(Word::new("siren").unwrap().text(), "SIREN");
    /// assert_eq!(Word::new("sirens"), Err(WordError::InvalidLength(6)));
    /// assert_eq!(Word::new("s1ren"), Err(WordError::InvalidCharacters));
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }
        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;
        Self::from_letters(letters)
    }

    /// Build a word from five raw letters of either case
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if any byte is not a letter.
    pub fn from_letters(letters: [u8; WORD_LENGTH]) -> Result<Self, WordError> {
        if !letters.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }
        Ok(Self::from_upper(letters.map(|letter| letter.to_ascii_uppercase())))
    }

    /// Wrap letters already known to be uppercase A-Z
    pub(crate) const fn from_upper(chars: [u8; WORD_LENGTH]) -> Self {
        Self { chars }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Only ASCII letters get in
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Letter at `position`
    ///
    /// # Panics
    /// Panics unless `position < 5`.
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Whether `letter` (uppercase) appears anywhere in the word
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
