//! Display functions for command results

use super::formatters::{create_progress_bar, round_line};
use crate::commands::{BenchmarkResult, CandidateList};
use crate::solver::SolveResult;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.answer.as_str().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!("\nTurn {}: {}", i + 1, round_line(&step.guess, &step.feedback));

        if verbose {
            println!("  Constraints in chain: {}", step.constraints);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses())
                .red()
                .bold()
        );
    }
}

/// Print the words left after applying some rounds
pub fn print_candidates(list: &CandidateList, explain: bool) {
    if explain && !list.constraints.is_empty() {
        println!("{}", "Constraints:".bright_cyan().bold());
        for constraint in &list.constraints {
            println!("  • {constraint}");
        }
        println!();
    }

    if list.solved {
        println!("{}", "Already solved.".green().bold());
        return;
    }

    if list.words.is_empty() {
        println!(
            "{}",
            "No candidates remain. Check your feedback.".red().bold()
        );
        return;
    }

    println!(
        "{} candidates remaining:",
        list.words.len().to_string().bright_yellow().bold()
    );
    for word in &list.words {
        println!("  {word}");
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
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
