//! Candidate listing command
//!
//! Applies rounds the user already played and lists every word still in play.

use crate::core::{Feedback, Word};
use crate::solver::{Chain, Constraint, derive_chain};
use anyhow::{Context, Result, anyhow};

/// Words left after applying some rounds, plus the constraints that did it
pub struct CandidateList {
    pub words: Vec<Word>,
    pub constraints: Vec<Constraint>,
    pub solved: bool,
}

/// Parse a `guess:feedback` round such as `arose:xxgxx`
///
/// # Errors
///
/// Returns an error if the separator is missing or either half is malformed.
pub fn parse_round(round: &str) -> Result<(Word, Feedback)> {
    let (guess, feedback) = round
        .split_once(':')
        .ok_or_else(|| anyhow!("expected GUESS:FEEDBACK, got '{round}'"))?;

    let guess = Word::new(guess).with_context(|| format!("bad guess in '{round}'"))?;
    let feedback = Feedback::parse(feedback).with_context(|| format!("bad feedback in '{round}'"))?;

    Ok((guess, feedback))
}

/// Apply every round in order and drain the resulting chain
///
/// Unlike a live game, this starts from a fresh chain so words that sit
/// before a played guess in dictionary order are still listed.
///
/// # Errors
///
/// Returns an error if any round fails to parse.
pub fn list_candidates(rounds: &[String], words: &[Word]) -> Result<CandidateList> {
    let mut chain = Chain::new(words);
    let mut solved = false;

    for round in rounds {
        let (guess, feedback) = parse_round(round)?;
        let (next, done) = derive_chain(&guess, &feedback, chain);
        chain = next;
        if done {
            solved = true;
            break;
        }
    }

    let constraints = chain.constraints().to_vec();
    let words = if solved {
        Vec::new()
    } else {
        chain.collect()
    };

    Ok(CandidateList {
        words,
        constraints,
        solved,
    })
}
