//! Waffle Solver
//!
//! Solver and generator for Waffle, the 21-square word puzzle where six
//! crossing words are unscrambled by swapping letters.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use waffle_solver::core::board;
//! use waffle_solver::dictionary::get_or_build_index;
//! use waffle_solver::solver::{Solver, find_swaps};
//!
//! // Every answer the colours allow
//! let current = board::parse_board("NIESRCOEWABBIEIGRCNIH", "YGYYYGGGYGGGGGGGYYGYG").unwrap();
//! let index = get_or_build_index();
//! let hint = Solver::new(&index).suggest(&current, None);
//! println!("{hint:?}");
//!
//! // Swaps between two arrangements of the same letters
//! let swaps = find_swaps("NIESRCOEWABBIEIGRCNIH", "SIRENCOERABBIEIGWINCH");
//! assert_eq!(swaps.len(), 5);
//! ```

// Core domain types
pub mod core;

// Word index
pub mod dictionary;

// Solving algorithms
pub mod solver;

// Puzzle generation
pub mod generator;

// Move-limited game session
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
