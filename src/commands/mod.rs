//! Command implementations

pub mod benchmark;
pub mod generate;
pub mod hint;
pub mod solve;
pub mod swaps;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use generate::{GenerateResult, generate_command};
pub use hint::{HintResult, hint_command};
pub use solve::{SolveResult, SolveStep, solve_puzzle};
pub use swaps::{SwapsResult, swaps_command};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random source for a command: seeded when reproducibility is asked for
#[must_use]
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
}
