//! Wordle word representation
//!
//! A Word stores a 5-letter lowercase word as a fixed byte array so it can be
//! copied freely between sources, filter layers and callers.

use std::fmt;
use std::str::FromStr;

/// Number of letters in every word (the puzzle width)
pub const WORD_LEN: usize = 5;

/// A 5-letter Wordle word
///
/// Letters are validated lowercase ASCII, indexed by position 0-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_chain::core::Word;
    ///
    /// let word = Word::new("Arose").unwrap();
    /// assert_eq!(word.as_str(), "arose");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let bytes = text.as_bytes();
        let letters: [u8; WORD_LEN] = bytes
            .try_into()
            .map_err(|_| WordError::InvalidLength(bytes.len()))?;

        if !letters.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            letters: letters.map(|b| b.to_ascii_lowercase()),
        })
    }

    /// Get the word as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Letters are ASCII by construction, so this never falls back.
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Iterate over every position holding `letter`, in ascending order
    pub fn positions_of(&self, letter: u8) -> impl Iterator<Item = usize> + '_ {
        self.letters
            .iter()
            .enumerate()
            .filter(move |&(_, &l)| l == letter)
            .map(|(i, _)| i)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("clout").unwrap();
        assert_eq!(word.as_str(), "clout");
        assert_eq!(word.letters(), b"clout");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("KNOLL").unwrap();
        assert_eq!(word.as_str(), "knoll");

        let word2 = Word::new("KnOlL").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crané"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("loony").unwrap();
        assert_eq!(word.letter_at(0), b'l');
        assert_eq!(word.letter_at(2), b'o');
        assert_eq!(word.letter_at(4), b'y');
    }

    #[test]
    fn word_contains() {
        let word = Word::new("arose").unwrap();
        assert!(word.contains(b'a'));
        assert!(word.contains(b'e'));
        assert!(!word.contains(b'z'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("sissy").unwrap();
        assert_eq!(word.positions_of(b's').collect::<Vec<_>>(), vec![0, 2, 3]);
        assert_eq!(word.positions_of(b'i').collect::<Vec<_>>(), vec![1]);
        assert_eq!(word.positions_of(b'z').count(), 0);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Clout".parse().unwrap();
        assert_eq!(format!("{word}"), "clout");
        assert!("clouts".parse::<Word>().is_err());
    }
}
