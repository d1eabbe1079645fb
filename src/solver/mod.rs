//! Constraint chain solving
//!
//! Candidate words flow lazily from a dictionary through a stack of filter
//! layers; each round of feedback adds layers via the interpreter.

mod chain;
mod constraint;
mod game;
mod interpret;

pub use chain::{CandidateSource, Chain, Filtered, WordSource};
pub use constraint::{Constraint, PositionSet};
pub use game::{Game, GameError, GuessStep, Outcome, Round, SolveResult};
pub use interpret::{constraints_for, derive_chain};
