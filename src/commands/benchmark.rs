//! Benchmark command
//!
//! Plays games against a random sample of dictionary words.

use crate::core::Word;
use crate::solver::Game;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of solved games
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Draw `count` distinct answers from `words`
///
/// A fixed `seed` makes the sample reproducible.
#[must_use]
pub fn sample_answers(words: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    words.choose_multiple(&mut rng, count).copied().collect()
}

/// Run benchmark on a set of target words
///
/// Averages are taken over solved games only.
#[must_use]
pub fn run_benchmark(words: &[Word], targets: &[Word], max_guesses: usize) -> BenchmarkResult {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_seen = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for target in targets {
        let result = Game::solve_for(words, target, max_guesses);
        if !result.success {
            info!("failed to solve {target}");
            continue;
        }

        let guesses = result.guesses();
        solved += 1;
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_seen = max_seen.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_words = targets.len();

    BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses: max_seen,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
