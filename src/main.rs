//! Waffle Solver - CLI
//!
//! Generate Waffle puzzles, find swap sequences, get hints and let the solver
//! play.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::sync::Arc;
use waffle_solver::{
    commands::{
        BenchmarkConfig, generate_command, hint_command, make_rng, run_benchmark, solve_puzzle,
        swaps_command,
    },
    core::Word,
    dictionary::{Trie, get_or_build_index, install_index, loader::load_from_file},
    game::SolveConfig,
    generator::{GeneratorConfig, generate_puzzle},
    logging::init_logger,
    output::{
        print_benchmark_result, print_generate_result, print_hint_result, print_solve_result,
        print_swaps_result,
    },
};

#[derive(Parser)]
#[command(
    name = "waffle_solver",
    about = "Waffle puzzle solver and generator",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new puzzle
    Generate {
        /// Seed for reproducible puzzles
        #[arg(long)]
        seed: Option<u64>,

        /// Shuffle every letter instead of a few random swaps
        #[arg(long)]
        shuffle: bool,

        /// Do not print the answer grid
        #[arg(long)]
        hide_solution: bool,
    },

    /// Find the swaps that turn one arrangement into another
    Swaps {
        /// Starting 21 letters
        start: String,

        /// Target 21 letters
        target: String,
    },

    /// Suggest the next swap for a board
    Hint {
        /// The 21 board letters, row by row
        letters: String,

        /// The 21 colours: G (green), Y (yellow), - (grey)
        colors: String,

        /// The answer, used only if no dictionary solution fits
        #[arg(short, long)]
        answer: Option<String>,
    },

    /// Generate a puzzle and watch the solver play it
    Solve {
        /// Seed for reproducible puzzles
        #[arg(long)]
        seed: Option<u64>,

        /// Swaps allowed
        #[arg(short, long, default_value = "15")]
        max_moves: usize,

        /// Print the board after every move
        #[arg(long)]
        show_boards: bool,
    },

    /// Benchmark the solver on generated puzzles
    Benchmark {
        /// Number of puzzles to play
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary index based on the -w flag
///
/// - "embedded": the built-in word list
/// - "<path>": a custom word list, installed as the process index
fn load_index(wordlist: &str) -> Result<Arc<Trie>> {
    if wordlist == "embedded" {
        return Ok(get_or_build_index());
    }

    let words = load_from_file(wordlist)?;
    info!("Loaded {} words from {wordlist}", words.len());
    Ok(install_index(Trie::from_words(words.iter().map(Word::text))))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Swaps { start, target } => {
            let result = swaps_command(&start, &target).map_err(|e| anyhow::anyhow!(e))?;
            print_swaps_result(&result);
        }
        Commands::Generate {
            seed,
            shuffle,
            hide_solution,
        } => {
            let index = load_index(&cli.wordlist)?;
            let result = generate_command(&index, seed, shuffle);
            print_generate_result(&result, !hide_solution);
        }
        Commands::Hint {
            letters,
            colors,
            answer,
        } => {
            let index = load_index(&cli.wordlist)?;
            let result = hint_command(&index, &letters, &colors, answer.as_deref())
                .map_err(|e| anyhow::anyhow!(e))?;
            print_hint_result(&result);
        }
        Commands::Solve {
            seed,
            max_moves,
            show_boards,
        } => {
            let index = load_index(&cli.wordlist)?;
            let mut rng = make_rng(seed);
            let puzzle = generate_puzzle(&index, &mut rng, &GeneratorConfig::new());
            let result = solve_puzzle(&index, puzzle, SolveConfig { max_moves });
            print_solve_result(&result, show_boards);
        }
        Commands::Benchmark { count, seed } => {
            let index = load_index(&cli.wordlist)?;
            println!("Running benchmark on {count} generated puzzles...");
            let result = run_benchmark(
                &index,
                BenchmarkConfig {
                    puzzles: count,
                    seed,
                },
            );
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
