//! Word solving command
//!
//! Plays a full game against a known answer and returns the solution path.

use crate::core::Word;
use crate::solver::{Game, SolveResult};
use anyhow::{Context, Result};
use log::info;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Solve a specific word against the given dictionary
///
/// The answer does not have to be in the dictionary; if it is missing the
/// chain simply runs dry and the result reports failure.
///
/// # Errors
///
/// Returns an error if the target is not a valid 5-letter word.
pub fn solve_word(config: &SolveConfig, words: &[Word]) -> Result<SolveResult> {
    let answer = Word::new(&config.target)
        .with_context(|| format!("invalid target word '{}'", config.target))?;

    if !words.contains(&answer) {
        info!("{answer} is not in the dictionary; the solver cannot reach it");
    }

    Ok(Game::solve_for(words, &answer, config.max_guesses))
}
