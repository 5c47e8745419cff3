//! Display functions for command results

use super::formatters::{
    color_codes, color_emoji, create_progress_bar, describe_swap, render_board,
};
use crate::commands::{BenchmarkResult, GenerateResult, HintResult, SolveResult, SwapsResult};
use crate::core::board::letters;
use crate::core::render_grid;
use crate::solver::Hint;
use colored::Colorize;

fn banner(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print a freshly generated puzzle
pub fn print_generate_result(result: &GenerateResult, show_solution: bool) {
    banner("NEW WAFFLE");

    println!("\n{}", render_board(&result.puzzle.board));
    println!("\n   Colours: {}", color_codes(&result.puzzle.board));
    println!("   Share:   {}", color_emoji(&result.puzzle.board));

    if show_solution {
        println!("\n{}", "Solution:".bright_cyan().bold());
        for line in result.puzzle.solution.render().lines() {
            println!("   {line}");
        }
    }

    println!(
        "\n🎯 Solvable in {} swaps",
        result.swaps.len().to_string().bright_yellow().bold()
    );
}

/// Print a swap sequence between two arrangements
pub fn print_swaps_result(result: &SwapsResult) {
    banner("SWAP SEQUENCE");

    println!("\n   From: {}", result.start);
    println!("   To:   {}", result.target.bright_yellow());

    if result.swaps.is_empty() {
        println!("\n   Already arranged, no swaps needed");
    } else {
        println!();
        for (i, swap) in result.swaps.iter().enumerate() {
            println!("   {:2}. {swap}", i + 1);
        }
    }

    println!();
    if result.verified {
        println!(
            "{}",
            format!("✅ {} swaps, verified", result.swaps.len())
                .green()
                .bold()
        );
    } else {
        println!("{}", "❌ Swap sequence does not reach the target".red().bold());
    }
}

/// Print the hint for a board
pub fn print_hint_result(result: &HintResult) {
    banner("HINT");
    println!("\n{}\n", render_board(&result.board));

    match &result.hint {
        Hint::Solved => println!("{}", "✅ Already solved!".green().bold()),
        Hint::FullPath { solution, swaps } => {
            println!("{}", "Unique solution found:".bright_cyan().bold());
            for line in render_grid(&letters(solution)).lines() {
                println!("   {line}");
            }
            println!("\n📋 {} swaps to finish:", swaps.len());
            if let Some(&first) = swaps.first() {
                println!(
                    "   {} {}",
                    "Recommended:".green().bold(),
                    describe_swap(first, &result.board)
                );
            }
            for (i, swap) in swaps.iter().enumerate() {
                println!("   {:2}. {swap}", i + 1);
            }
        }
        Hint::BestSwap { swap, candidates } => {
            println!("🔍 {candidates} possible solutions remain");
            println!(
                "   {} {}  ({swap})",
                "Best swap:".green().bold(),
                describe_swap(*swap, &result.board)
            );
        }
        Hint::Fallback { swap } => {
            println!("{}", "⚠️  No dictionary solution fits this board".yellow());
            println!(
                "   {} {}  ({swap})",
                "Try:".yellow().bold(),
                describe_swap(*swap, &result.board)
            );
        }
        Hint::Unsolvable => {
            println!("{}", "❌ No solution fits this board".red().bold());
        }
    }
}

/// Print the solver playing a puzzle
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    banner("SOLVING WAFFLE");
    println!("\n{}", render_board(&result.puzzle.board));

    let mut previous = result.puzzle.board;
    for (i, step) in result.steps.iter().enumerate() {
        let source = match &step.hint {
            Hint::FullPath { .. } => "path".to_string(),
            Hint::BestSwap { candidates, .. } => format!("best of {candidates}"),
            Hint::Fallback { .. } => "fallback".to_string(),
            Hint::Solved | Hint::Unsolvable => String::new(),
        };
        println!(
            "\nMove {:2}: {}  {}",
            i + 1,
            describe_swap(step.swap, &previous),
            format!("[{source}]").bright_black()
        );
        if verbose {
            println!("{}", render_board(&step.board));
        }
        previous = step.board;
    }

    if !verbose && !result.steps.is_empty() {
        println!("\n{}", render_board(&previous));
    }

    println!();
    println!("   Optimal swaps: {}", result.optimal_swaps);
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {} moves!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved after {} moves ({})", result.steps.len(), result.status)
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    banner("BENCHMARK RESULTS");

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Puzzles played:   {}", result.total_puzzles);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!(
        "   Average moves:    {}",
        format!("{:.2}", result.average_moves)
            .bright_yellow()
            .bold()
    );
    println!("   Average optimal:  {:.2}", result.average_optimal);
    println!(
        "   Best case:        {}",
        result.min_moves.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_moves.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    if result.total_puzzles == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(&usize, &usize)> = result.distribution.iter().collect();
    counts.sort_unstable();
    for (&moves, &count) in counts {
        let pct = count as f64 / result.total_puzzles as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {moves:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
