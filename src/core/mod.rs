//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark};
pub use word::{WORD_LEN, Word, WordError};
