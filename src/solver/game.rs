//! A single puzzle session
//!
//! Pulls guesses from the chain, feeds each round's feedback back through the
//! interpreter and keeps the round history for display.

use super::chain::Chain;
use super::constraint::Constraint;
use super::interpret::derive_chain;
use crate::core::{Feedback, Word};
use log::{debug, info};
use std::fmt;

/// Outcome of recording one round of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    Continue,
}

/// Error type for misuse of a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Feedback was recorded before any guess was drawn
    NoPendingGuess,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPendingGuess => write!(f, "feedback given before a guess was made"),
        }
    }
}

impl std::error::Error for GameError {}

/// One (guess, feedback) round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub feedback: Feedback,
}

/// A puzzle in progress
///
/// Starting over means creating a new `Game`; the dictionary cursor is never
/// rewound.
pub struct Game<'a> {
    chain: Chain<'a>,
    pending: Option<Word>,
    history: Vec<Round>,
}

impl<'a> Game<'a> {
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        Self {
            chain: Chain::new(words),
            pending: None,
            history: Vec::new(),
        }
    }

    /// Draw the next guess from the chain
    ///
    /// Returns `None` once no word satisfies every constraint so far. Calling
    /// this again before recording feedback discards the pending guess and
    /// draws a fresh one.
    pub fn next_guess(&mut self) -> Option<Word> {
        self.pending = self.chain.next();
        match self.pending {
            Some(guess) => debug!("turn {}: guessing {guess}", self.turn()),
            None => info!("candidates exhausted after {} rounds", self.history.len()),
        }
        self.pending
    }

    /// Record the feedback for the pending guess
    ///
    /// # Errors
    /// Returns `GameError::NoPendingGuess` if no guess has been drawn since the
    /// last recorded round.
    pub fn record(&mut self, feedback: Feedback) -> Result<Outcome, GameError> {
        let guess = self.pending.take().ok_or(GameError::NoPendingGuess)?;
        self.history.push(Round { guess, feedback });

        let (chain, solved) = derive_chain(&guess, &feedback, std::mem::take(&mut self.chain));
        self.chain = chain;

        Ok(if solved {
            info!("solved with {guess} in {} guesses", self.history.len());
            Outcome::Solved
        } else {
            Outcome::Continue
        })
    }

    /// Current turn number, starting at 1
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }

    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// Every constraint accumulated so far
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        self.chain.constraints()
    }
}

/// A single guess step in a simulated game
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub guess: Word,
    pub feedback: Feedback,
    /// Chain depth after this round
    pub constraints: usize,
}

/// Result of playing a full game against a known answer
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: Word,
    pub success: bool,
    pub steps: Vec<GuessStep>,
}

impl SolveResult {
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.steps.len()
    }
}

impl Game<'_> {
    /// Play a whole game against `answer`, scoring each guess automatically
    ///
    /// Stops when the answer is guessed, when `max_guesses` guesses have been
    /// played, or when the chain runs dry.
    #[must_use]
    pub fn solve_for(words: &[Word], answer: &Word, max_guesses: usize) -> SolveResult {
        let mut game = Game::new(words);
        let mut steps = Vec::new();
        let mut success = false;

        while steps.len() < max_guesses {
            let Some(guess) = game.next_guess() else {
                break;
            };
            let feedback = Feedback::score(&guess, answer);

            // A guess was just drawn, so recording cannot fail.
            let outcome = game.record(feedback).unwrap_or(Outcome::Continue);
            steps.push(GuessStep {
                guess,
                feedback,
                constraints: game.constraints().len(),
            });

            if outcome == Outcome::Solved {
                success = true;
                break;
            }
        }

        SolveResult {
            answer: *answer,
            success,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn feedback(s: &str) -> Feedback {
        Feedback::parse(s).unwrap()
    }

    #[test]
    fn first_guess_is_first_word() {
        let dict = words(&["arose", "clout"]);
        let mut game = Game::new(&dict);
        assert_eq!(game.turn(), 1);
        assert_eq!(game.next_guess(), Some(dict[0]));
    }

    #[test]
    fn record_without_guess_is_an_error() {
        let dict = words(&["arose"]);
        let mut game = Game::new(&dict);
        assert_eq!(
            game.record(feedback("xxxxx")),
            Err(GameError::NoPendingGuess)
        );
    }

    #[test]
    fn record_consumes_pending_guess() {
        let dict = words(&["arose", "clout"]);
        let mut game = Game::new(&dict);
        game.next_guess();
        assert_eq!(game.record(feedback("xxgxx")), Ok(Outcome::Continue));
        assert_eq!(
            game.record(feedback("xxgxx")),
            Err(GameError::NoPendingGuess)
        );
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.turn(), 2);
    }

    #[test]
    fn solved_feedback_ends_game() {
        let dict = words(&["knoll"]);
        let mut game = Game::new(&dict);
        game.next_guess();
        assert_eq!(game.record(Feedback::SOLVED), Ok(Outcome::Solved));
        assert!(game.constraints().is_empty());
    }

    #[test]
    fn exhausted_game_has_no_guess() {
        let dict = words(&["arose", "about"]);
        let mut game = Game::new(&dict);
        game.next_guess();
        game.record(feedback("gxxxx")).unwrap();
        // ABOUT keeps the green A but holds an O, which the feedback ruled out
        assert_eq!(game.next_guess(), None);
    }

    #[test]
    fn solve_for_replays_recorded_game() {
        let dict = words(&[
            "arose", "about", "alarm", "clout", "dying", "loony", "knoll",
        ]);
        let answer = Word::new("knoll").unwrap();
        let result = Game::solve_for(&dict, &answer, 6);

        assert!(result.success);
        let played: Vec<String> = result.steps.iter().map(|s| s.guess.to_string()).collect();
        assert_eq!(played, vec!["arose", "clout", "loony", "knoll"]);
        assert_eq!(result.guesses(), 4);
    }

    #[test]
    fn solve_for_respects_guess_limit() {
        let dict = words(&["arose", "clout", "loony", "knoll"]);
        let answer = Word::new("knoll").unwrap();
        let result = Game::solve_for(&dict, &answer, 2);

        assert!(!result.success);
        assert_eq!(result.guesses(), 2);
    }
}
