//! Formatting utilities for terminal output

use crate::core::{BOARD_SIZE, Board, Color, Tile};
use crate::solver::Swap;
use colored::{ColoredString, Colorize};

/// Where each square sits in the five visual rows
const SQUARE_NAMES: [&str; BOARD_SIZE] = [
    "Top Left",
    "Row 1 Col 2",
    "Row 1 Center",
    "Row 1 Col 4",
    "Top Right",
    "Row 2 Left",
    "Row 2 Center",
    "Row 2 Right",
    "Row 3 Left",
    "Row 3 Col 2",
    "Center",
    "Row 3 Col 4",
    "Row 3 Right",
    "Row 4 Left",
    "Row 4 Center",
    "Row 4 Right",
    "Bottom Left",
    "Row 5 Col 2",
    "Row 5 Center",
    "Row 5 Col 4",
    "Bottom Right",
];

/// Human name of a square, e.g. "Top Left" or "Center"
#[must_use]
pub fn square_name(square: usize) -> String {
    SQUARE_NAMES
        .get(square)
        .map_or_else(|| format!("Square {square}"), |name| (*name).to_string())
}

/// A square with the letter it currently holds: `"N" at Top Left`
#[must_use]
pub fn describe_square(square: usize, board: &Board<Tile>) -> String {
    board.get(square).map_or_else(
        || square_name(square),
        |tile| format!("\"{}\" at {}", tile.letter as char, square_name(square)),
    )
}

/// A swap in words, lower square first: `"N" at Top Left ↔ "S" at Row 1 Col 4`
#[must_use]
pub fn describe_swap(swap: Swap, board: &Board<Tile>) -> String {
    let Swap(a, b) = swap.normalized();
    format!("{} ↔ {}", describe_square(a, board), describe_square(b, board))
}

/// Colour feedback as a 21-character code string (`G`, `Y`, `-`)
#[must_use]
pub fn color_codes(board: &Board<Tile>) -> String {
    board.iter().map(|tile| tile.color.code()).collect()
}

/// Colour feedback as emoji
#[must_use]
pub fn color_emoji(board: &Board<Tile>) -> String {
    board.iter().map(|tile| tile.color.emoji()).collect()
}

fn paint(tile: Tile) -> ColoredString {
    let text = format!(" {} ", tile.letter as char);
    match tile.color {
        Color::Green => text.black().on_green().bold(),
        Color::Yellow => text.black().on_yellow().bold(),
        Color::Grey => text.white().on_bright_black(),
    }
}

/// Render a board as five rows of coloured tiles
///
/// Rows 2 and 4 only have the three crossing columns.
#[must_use]
pub fn render_board(board: &Board<Tile>) -> String {
    let mut lines = Vec::with_capacity(5);

    for row in 0..5 {
        let line = if row % 2 == 0 {
            let start = row / 2 * 8;
            board[start..start + 5]
                .iter()
                .map(|&tile| paint(tile).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            let start = 5 + row / 2 * 8;
            board[start..start + 3]
                .iter()
                .map(|&tile| paint(tile).to_string())
                .collect::<Vec<_>>()
                .join("     ")
        };
        lines.push(format!("   {line}"));
    }

    lines.join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
