//! Wordle Chain
//!
//! A Wordle solver that narrows a fixed dictionary by wrapping it in one lazy
//! filter layer per piece of letter feedback. The first word that survives
//! every layer is the next guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_chain::core::{Feedback, Word};
//! use wordle_chain::solver::{Chain, derive_chain};
//! use wordle_chain::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["arose", "clout", "loony", "knoll"]);
//! let mut chain = Chain::new(&words);
//!
//! let guess = chain.next().unwrap();
//! assert_eq!(guess, Word::new("arose").unwrap());
//!
//! let feedback = Feedback::parse("xxgxx").unwrap();
//! let (mut chain, solved) = derive_chain(&guess, &feedback, chain);
//! assert!(!solved);
//! assert_eq!(chain.next().unwrap().as_str(), "clout");
//! ```

// Core domain types
pub mod core;

// Constraint chain and feedback interpretation
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
