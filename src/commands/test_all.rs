//! Test all answers - comprehensive solver evaluation
//!
//! Plays a game against every dictionary word and generates statistics.
//! Games are independent (each builds its own chain), so they run in parallel.

use crate::core::Word;
use crate::solver::Game;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from testing a single word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: Word,
    pub guesses: Vec<Word>,
    pub success: bool,
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_words: Vec<(Word, usize)>,
    pub failed_words: Vec<Word>,
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Run a game against every dictionary word (or the first `limit` of them)
///
/// `max_guesses` bounds each game; games that hit it count as failures.
#[must_use]
pub fn run_test_all(
    words: &[Word],
    limit: Option<usize>,
    max_guesses: usize,
    show_progress: bool,
) -> TestAllStatistics {
    let answers = &words[..limit.unwrap_or(words.len()).min(words.len())];
    let pb = progress_bar(answers.len(), show_progress);
    pb.set_message("Solving");

    let total_start = Instant::now();

    let results: Vec<WordTestResult> = answers
        .par_iter()
        .map(|answer| {
            let result = Game::solve_for(words, answer, max_guesses);
            pb.inc(1);
            WordTestResult {
                word: *answer,
                guesses: result.steps.iter().map(|s| s.guess).collect(),
                success: result.success,
            }
        })
        .collect();

    pb.finish_with_message("Complete!");
    let total_time = total_start.elapsed();

    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failed_words = Vec::new();
    for result in &results {
        if result.success {
            *guess_distribution.entry(result.guesses.len()).or_insert(0) += 1;
        } else {
            warn!("could not solve {}", result.word);
            failed_words.push(result.word);
        }
    }

    let solved_lengths: Vec<usize> = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.guesses.len())
        .collect();
    let solved = solved_lengths.len();

    let average_guesses = if solved > 0 {
        solved_lengths.iter().sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    let mut worst_words: Vec<(Word, usize)> = results
        .iter()
        .filter(|r| r.success && r.guesses.len() >= 5)
        .map(|r| (r.word, r.guesses.len()))
        .collect();
    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    TestAllStatistics {
        total_words: results.len(),
        solved,
        failed: results.len() - solved,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved_lengths.iter().copied().max().unwrap_or(0),
        min_guesses: solved_lengths.iter().copied().min().unwrap_or(0),
        worst_words,
        failed_words,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_words.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!(
        "  Best / worst:        {} / {}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses:2} guesses: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words (5+ guesses)".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!(
                "  {} ({} guesses)",
                word.as_str().to_uppercase().yellow(),
                guesses
            );
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Unsolved".red().bold());
        let listed: Vec<String> = stats
            .failed_words
            .iter()
            .take(20)
            .map(|w| w.as_str().to_uppercase())
            .collect();
        println!("  {}", listed.join(" "));
        if stats.failed_words.len() > listed.len() {
            println!("  ...and {} more", stats.failed_words.len() - listed.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn test_all_counts_add_up() {
        let words = words_from_slice(WORDS);
        let stats = run_test_all(&words, Some(40), 6, false);

        assert_eq!(stats.total_words, 40);
        assert_eq!(stats.solved + stats.failed, 40);
        assert_eq!(stats.failed, stats.failed_words.len());
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), stats.solved);
    }

    #[test]
    fn test_all_first_word_takes_one_guess() {
        let words = words_from_slice(WORDS);
        let stats = run_test_all(&words, Some(1), 6, false);

        assert_eq!(stats.solved, 1);
        assert_eq!(stats.min_guesses, 1);
        assert_eq!(stats.max_guesses, 1);
        assert!((stats.average_guesses - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_small_dictionary() {
        let words = words_from_slice(&["arose", "clout", "loony", "knoll"]);
        let stats = run_test_all(&words, None, 6, false);

        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.guess_distribution.get(&4), Some(&1));
    }

    #[test]
    fn limit_beyond_dictionary_is_clamped() {
        let words = words_from_slice(&["arose", "clout"]);
        let stats = run_test_all(&words, Some(100), 6, false);
        assert_eq!(stats.total_words, 2);
    }
}
