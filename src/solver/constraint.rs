//! Letter constraints derived from feedback
//!
//! Each constraint is a predicate over a [`Word`]. A chain accepts a word only
//! when every constraint it carries is satisfied.

use crate::core::{WORD_LEN, Word};
use std::fmt;

/// A small set of word positions, stored as a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PositionSet(u8);

impl PositionSet {
    pub const EMPTY: Self = Self(0);

    #[must_use]
    pub const fn single(position: usize) -> Self {
        Self(1 << position)
    }

    #[must_use]
    pub const fn with(self, position: usize) -> Self {
        Self(self.0 | (1 << position))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, position: usize) -> bool {
        position < 8 && self.0 & (1 << position) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..WORD_LEN).filter(move |&p| self.contains(p))
    }
}

impl FromIterator<usize> for PositionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

/// One letter constraint over candidate words
///
/// Positions are 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// The letter does not occur anywhere in the word
    LetterAbsent { letter: u8 },
    /// The letter is not at `position` (it may occur elsewhere)
    LetterAbsentAt { letter: u8, position: usize },
    /// The letter is exactly at `position`
    LetterAt { letter: u8, position: usize },
    /// The letter is not at `position` but occurs at some other position
    /// outside `skip`
    ///
    /// Positions in `skip` are already accounted for by another constraint and
    /// must not count toward presence, otherwise one occurrence could satisfy
    /// two independent constraints.
    LetterPresentElsewhere {
        letter: u8,
        position: usize,
        skip: PositionSet,
    },
}

impl Constraint {
    /// Check whether `word` satisfies this constraint
    ///
    /// # Examples
    /// ```
    /// use wordle_chain::core::Word;
    /// use wordle_chain::solver::{Constraint, PositionSet};
    ///
    /// let yellow_o = Constraint::LetterPresentElsewhere {
    ///     letter: b'o',
    ///     position: 0,
    ///     skip: PositionSet::EMPTY,
    /// };
    /// assert!(yellow_o.satisfied_by(&Word::new("clout").unwrap()));
    /// assert!(!yellow_o.satisfied_by(&Word::new("ocean").unwrap()));
    /// ```
    #[must_use]
    pub fn satisfied_by(&self, word: &Word) -> bool {
        match *self {
            Self::LetterAbsent { letter } => !word.contains(letter),
            Self::LetterAbsentAt { letter, position } => word.letter_at(position) != letter,
            Self::LetterAt { letter, position } => word.letter_at(position) == letter,
            Self::LetterPresentElsewhere {
                letter,
                position,
                skip,
            } => {
                word.letter_at(position) != letter
                    && word
                        .positions_of(letter)
                        .any(|q| q != position && !skip.contains(q))
            }
        }
    }

    /// The letter this constraint is about
    #[must_use]
    pub const fn letter(&self) -> u8 {
        match *self {
            Self::LetterAbsent { letter }
            | Self::LetterAbsentAt { letter, .. }
            | Self::LetterAt { letter, .. }
            | Self::LetterPresentElsewhere { letter, .. } => letter,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = char::from(self.letter()).to_ascii_uppercase();
        match *self {
            Self::LetterAbsent { .. } => write!(f, "no {letter} anywhere"),
            Self::LetterAbsentAt { position, .. } => {
                write!(f, "no {letter} at position {}", position + 1)
            }
            Self::LetterAt { position, .. } => write!(f, "{letter} at position {}", position + 1),
            Self::LetterPresentElsewhere { position, skip, .. } => {
                write!(f, "{letter} somewhere other than position {}", position + 1)?;
                if !skip.is_empty() {
                    let skipped: Vec<String> = skip.iter().map(|p| (p + 1).to_string()).collect();
                    write!(f, " (ignoring {})", skipped.join(", "))?;
                }
                Ok(())
            }
        }
    }
}
