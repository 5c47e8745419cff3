//! Benchmark command
//!
//! Generates puzzles and lets the solver play them all.

use super::make_rng;
use super::solve::solve_puzzle;
use crate::dictionary::Trie;
use crate::game::SolveConfig;
use crate::generator::{GeneratorConfig, Puzzle, generate_puzzle};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// What to benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Number of puzzles to play
    pub puzzles: usize,
    /// Seed for puzzle generation; random when `None`
    pub seed: Option<u64>,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            puzzles: 20,
            seed: None,
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_puzzles: usize,
    pub won: usize,
    pub total_moves: usize,
    pub average_moves: f64,
    pub average_optimal: f64,
    pub min_moves: usize,
    pub max_moves: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_puzzles == 0 {
            return 0.0;
        }
        self.won as f64 / self.total_puzzles as f64 * 100.0
    }
}

/// Per-puzzle outcome
struct Played {
    won: bool,
    moves: usize,
    optimal: usize,
}

/// Generate puzzles and solve them in parallel
///
/// Puzzles are generated up front from one random source, so a seed fixes
/// the whole run regardless of thread scheduling.
#[must_use]
pub fn run_benchmark(index: &Trie, config: BenchmarkConfig) -> BenchmarkResult {
    let start = Instant::now();
    let mut rng = make_rng(config.seed);
    let generator = GeneratorConfig::new();
    let puzzles: Vec<Puzzle> = (0..config.puzzles)
        .map(|_| generate_puzzle(index, &mut rng, &generator))
        .collect();

    let pb = ProgressBar::new(puzzles.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let played: Vec<Played> = puzzles
        .into_par_iter()
        .map(|puzzle| {
            let result = solve_puzzle(index, puzzle, SolveConfig::new());
            if !result.success() {
                warn!("Failed to solve {}", result.puzzle.solution);
            }
            pb.inc(1);
            Played {
                won: result.success(),
                moves: result.steps.len(),
                optimal: result.optimal_swaps,
            }
        })
        .collect();
    pb.finish_with_message("done");

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for game in &played {
        *distribution.entry(game.moves).or_insert(0) += 1;
    }

    let total_puzzles = played.len();
    let won = played.iter().filter(|game| game.won).count();
    let total_moves: usize = played.iter().map(|game| game.moves).sum();
    let total_optimal: usize = played.iter().map(|game| game.optimal).sum();
    let per_puzzle = |total: usize| {
        if total_puzzles == 0 {
            0.0
        } else {
            total as f64 / total_puzzles as f64
        }
    };
    let duration = start.elapsed();

    BenchmarkResult {
        total_puzzles,
        won,
        total_moves,
        average_moves: per_puzzle(total_moves),
        average_optimal: per_puzzle(total_optimal),
        min_moves: played.iter().map(|game| game.moves).min().unwrap_or(0),
        max_moves: played.iter().map(|game| game.moves).max().unwrap_or(0),
        distribution,
        duration,
        puzzles_per_second: total_puzzles as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
