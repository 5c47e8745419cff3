//! Waffle solving algorithms
//!
//! - [`enumerator`] lists every answer a coloured board allows
//! - [`swaps`] turns one arrangement into another by swapping letters
//! - [`chooser`] picks the best swap when several answers remain
//! - [`Solver`] combines them into a hint for the next move

pub mod chooser;
mod engine;
pub mod enumerator;
pub mod swaps;

pub use chooser::{SwapScore, calculate_swap_score, find_best_swap, rank_swaps};
pub use engine::{Hint, Solver, fallback_swap};
pub use enumerator::{possible_solutions_from_board, possible_solutions_with};
pub use swaps::{Swap, apply_swap, apply_swaps, find_swaps, swap_distance, validate_swaps};
