//! Tile feedback colours
//!
//! A colour is derived feedback for one board square given an assumed answer:
//! - Green = letter is correct at this square
//! - Yellow = letter belongs to a word crossing this square, but elsewhere
//! - Grey = letter belongs to no word crossing this square

use std::fmt;

/// Feedback colour of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Green,
    Yellow,
    Grey,
}

impl Color {
    /// Parse a colour from a single feedback character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/'.'/⬜ for grey
    ///
    /// # Examples
    /// ```
    /// use waffle_solver::core::Color;
    ///
    /// assert_eq!(Color::from_char('g'), Some(Color::Green));
    /// assert_eq!(Color::from_char('🟨'), Some(Color::Yellow));
    /// assert_eq!(Color::from_char('.'), Some(Color::Grey));
    /// assert_eq!(Color::from_char('x'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | '.' | '⬜' => Some(Self::Grey),
            _ => None,
        }
    }

    /// Short ASCII code used when printing boards as text
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Grey => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Grey => '⬜',
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_green(self) -> bool {
        matches!(self, Self::Green)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Green => write!(f, "green"),
            Self::Yellow => write!(f, "yellow"),
            Self::Grey => write!(f, "grey"),
        }
    }
}

/// One board square: a letter and its current feedback colour
///
/// Letters are stored as uppercase ASCII bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub letter: u8,
    pub color: Color,
}

impl Tile {
    #[inline]
    #[must_use]
    pub const fn new(letter: u8, color: Color) -> Self {
        Self { letter, color }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.letter as char, self.color.code())
    }
}
