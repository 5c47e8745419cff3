//! Move-limited game session
//!
//! A game holds the answer, the current board and a move allowance. Each move
//! swaps two squares that are not yet green, recolours the whole board and
//! ends the game on a full green board or when the moves run out.

use crate::core::board::{board_letters, color_board, is_solved};
use crate::core::{BOARD_SIZE, Board, Solution, Tile};
use crate::generator::Puzzle;
use crate::solver::Swap;
use log::debug;
use std::fmt;

/// Game rules configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    /// Swaps allowed before the game is lost
    pub max_moves: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self { max_moves: 15 }
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Error type for rejected moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    SameSquare(usize),
    OutOfRange(usize),
    LockedSquare(usize),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game has ended"),
            Self::SameSquare(square) => write!(f, "Cannot swap square {square} with itself"),
            Self::OutOfRange(square) => {
                write!(f, "Square {square} is off the board (0-{})", BOARD_SIZE - 1)
            }
            Self::LockedSquare(square) => {
                write!(f, "Square {square} is already correct and cannot move")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// A game in progress
#[derive(Debug, Clone)]
pub struct Game {
    target: Board<u8>,
    board: Board<Tile>,
    config: SolveConfig,
    moves: Vec<Swap>,
    status: GameStatus,
}

impl Game {
    /// Start a game from an answer and a starting arrangement
    ///
    /// The starting colours are recomputed against the answer.
    #[must_use]
    pub fn new(solution: &Solution, start: &Board<Tile>, config: SolveConfig) -> Self {
        let target = solution.to_board();
        let board = color_board(&start.map(|tile| tile.letter), &target);
        let status = if is_solved(&board) {
            GameStatus::Won
        } else {
            GameStatus::Playing
        };

        Self {
            target,
            board,
            config,
            moves: Vec::new(),
            status,
        }
    }

    #[must_use]
    pub fn from_puzzle(puzzle: &Puzzle, config: SolveConfig) -> Self {
        Self::new(&puzzle.solution, &puzzle.board, config)
    }

    /// Swap two squares
    ///
    /// # Errors
    /// Returns `MoveError` if the game is over, the squares are equal or off
    /// the board, or either square is already green.
    ///
    /// # Examples
    /// ```
    /// use waffle_solver::game::{Game, GameStatus, SolveConfig};
    /// use waffle_solver::generator::sample_puzzle;
    /// use waffle_solver::solver::Swap;
    ///
    /// let mut game = Game::from_puzzle(&sample_puzzle(), SolveConfig::new());
    /// assert_eq!(game.play(Swap(0, 3)), Ok(GameStatus::Playing));
    /// assert_eq!(game.moves_used(), 1);
    /// assert!(game.play(Swap(0, 0)).is_err());
    /// ```
    pub fn play(&mut self, swap: Swap) -> Result<GameStatus, MoveError> {
        self.check(swap).inspect_err(|e| debug!("Rejected move {swap}: {e}"))?;

        let mut letters = self.board.map(|tile| tile.letter);
        swap.apply_to(&mut letters);
        self.board = color_board(&letters, &self.target);
        self.moves.push(swap);

        if is_solved(&self.board) {
            self.status = GameStatus::Won;
        } else if self.moves.len() >= self.config.max_moves {
            self.status = GameStatus::Lost;
        }

        debug!("Move {}: {swap} -> {}", self.moves.len(), self.status);
        Ok(self.status)
    }

    fn check(&self, Swap(a, b): Swap) -> Result<(), MoveError> {
        if self.status != GameStatus::Playing || self.moves.len() >= self.config.max_moves {
            return Err(MoveError::GameOver);
        }
        if a == b {
            return Err(MoveError::SameSquare(a));
        }
        for square in [a, b] {
            if square >= BOARD_SIZE {
                return Err(MoveError::OutOfRange(square));
            }
        }
        for square in [a, b] {
            if self.board[square].color.is_green() {
                return Err(MoveError::LockedSquare(square));
            }
        }
        Ok(())
    }

    #[must_use]
    pub const fn board(&self) -> &Board<Tile> {
        &self.board
    }

    /// Current letters as a 21-character string
    #[must_use]
    pub fn letters(&self) -> String {
        board_letters(&self.board)
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn moves_used(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn moves_left(&self) -> usize {
        self.config.max_moves.saturating_sub(self.moves.len())
    }

    /// Swaps played so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[Swap] {
        &self.moves
    }

    /// The answer as a 21-character string
    #[must_use]
    pub fn target(&self) -> String {
        self.target.iter().map(|&letter| letter as char).collect()
    }
}
