//! Terminal output formatting
//!
//! Coloured boards, hints and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_generate_result, print_hint_result, print_solve_result,
    print_swaps_result,
};
pub use formatters::{describe_square, describe_swap, render_board, square_name};
