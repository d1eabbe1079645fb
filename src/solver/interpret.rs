//! Feedback interpretation
//!
//! Turns one round of (guess, feedback) into letter constraints and grows the
//! chain with them. Duplicate letters need care: when a guess holds the same
//! letter twice and one copy is green, the other copy's yellow or grey mark
//! says something about the *remaining* copies only.

use super::chain::Chain;
use super::constraint::{Constraint, PositionSet};
use crate::core::{Feedback, Mark, WORD_LEN, Word};
use log::debug;

/// First position where `letter` is marked Correct in this guess
fn green_position(letter: u8, guess: &Word, feedback: &Feedback) -> Option<usize> {
    (0..WORD_LEN).find(|&p| guess.letter_at(p) == letter && feedback.mark(p) == Mark::Correct)
}

/// Derive the constraints implied by one round of feedback
///
/// Returns an empty list for a solved round, since nothing remains to filter.
///
/// # Examples
/// ```
/// use wordle_chain::core::{Feedback, Word};
/// use wordle_chain::solver::{Constraint, constraints_for};
///
/// let guess = Word::new("arose").unwrap();
/// let feedback = Feedback::parse("xxgxx").unwrap();
/// let constraints = constraints_for(&guess, &feedback);
///
/// assert_eq!(constraints.len(), 5);
/// assert!(constraints.contains(&Constraint::LetterAt { letter: b'o', position: 2 }));
/// ```
#[must_use]
pub fn constraints_for(guess: &Word, feedback: &Feedback) -> Vec<Constraint> {
    if feedback.is_solved() {
        return Vec::new();
    }

    let mut constraints = Vec::with_capacity(WORD_LEN);

    for (position, &mark) in feedback.marks().iter().enumerate() {
        let letter = guess.letter_at(position);

        match mark {
            Mark::Correct => constraints.push(Constraint::LetterAt { letter, position }),
            Mark::Present => {
                // A green copy of the same letter is already pinned; it must not
                // double as the "somewhere else" occurrence.
                let skip = green_position(letter, guess, feedback)
                    .map_or(PositionSet::EMPTY, PositionSet::single);
                constraints.push(Constraint::LetterPresentElsewhere {
                    letter,
                    position,
                    skip,
                });
            }
            Mark::Absent => match green_position(letter, guess, feedback) {
                None => constraints.push(Constraint::LetterAbsent { letter }),
                // The answer holds exactly one copy, pinned at `green`.
                Some(green) => constraints.extend(
                    (0..WORD_LEN)
                        .filter(|&p| p != green)
                        .map(|p| Constraint::LetterAbsentAt {
                            letter,
                            position: p,
                        }),
                ),
            },
        }
    }

    constraints
}

/// Build the next round's chain from the current one
///
/// Returns `(chain, true)` with the chain untouched when the feedback is all
/// Correct. Otherwise every derived constraint wraps the chain as a new layer
/// and the second value is `false`.
///
/// `guess` and `feedback` always have the same length: both are fixed-width
/// types, and malformed responses are rejected by [`Feedback::parse`].
#[must_use]
pub fn derive_chain<'a>(guess: &Word, feedback: &Feedback, chain: Chain<'a>) -> (Chain<'a>, bool) {
    if feedback.is_solved() {
        debug!("{guess} solved the puzzle");
        return (chain, true);
    }

    let constraints = constraints_for(guess, feedback);
    debug!(
        "{guess} {feedback}: adding {} constraints to a chain of {}",
        constraints.len(),
        chain.depth()
    );

    let chain = constraints.into_iter().fold(chain, |chain, constraint| {
        debug!("  + {constraint}");
        chain.with(constraint)
    });

    (chain, false)
}
