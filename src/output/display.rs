//! Display functions for command results

use super::formatters::{create_progress_bar, spaced_board, wrong_guess_meter};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, max_wrong: usize, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let mut wrong = 0;
    for (i, step) in result.steps.iter().enumerate() {
        let mark = if step.hit {
            "hit ".green().bold()
        } else {
            wrong += 1;
            "miss".red().bold()
        };
        println!(
            "\nTurn {}: {} {}  {}  [{}]",
            i + 1,
            step.letter.to_ascii_uppercase().to_string().bright_white().bold(),
            mark,
            spaced_board(&step.board_after),
            wrong_guess_meter(wrong, max_wrong).bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guesses ({} wrong)",
                result.total_guesses(),
                result.wrong_guesses
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Hanged after {} guesses ({} wrong)",
                result.total_guesses(),
                result.wrong_guesses
            )
            .red()
            .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({})",
        result.solved,
        format!("{:.1}%", result.success_rate()).bright_yellow().bold()
    );
    if result.errors > 0 {
        println!(
            "   Aborted:          {}",
            result.errors.to_string().red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses()).bright_yellow()
    );
    println!(
        "   Average wrong:    {}",
        format!("{:.2}", result.average_wrong()).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Wrong guesses:".bright_cyan().bold());
    let most = result.distribution.values().copied().max().unwrap_or(1);
    for (&wrong, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(count as f64, most as f64, 40);
        println!("   {wrong:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
