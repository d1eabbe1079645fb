//! Per-guess letter feedback
//!
//! One [`Mark`] per letter position of the guess:
//! - `g` = Correct (green, right letter in the right position)
//! - `y` = Present (yellow, letter is in the word elsewhere)
//! - `x` = Absent (grey)

use super::word::{WORD_LEN, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback symbol for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    Present,
    Absent,
}

impl Mark {
    /// Parse one feedback symbol
    ///
    /// Accepts:
    /// - 'g'/'G'/🟩 for Correct
    /// - 'y'/'Y'/🟨 for Present
    /// - 'x'/'X'/'-'/'_'/⬜/⬛ for Absent
    #[must_use]
    pub const fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            'g' | 'G' | '🟩' => Some(Self::Correct),
            'y' | 'Y' | '🟨' => Some(Self::Present),
            'x' | 'X' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Canonical single-letter symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'g',
            Self::Present => 'y',
            Self::Absent => 'x',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error type for malformed feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength { expected: usize, found: usize },
    InvalidSymbol { symbol: char, position: usize },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, found } => {
                write!(f, "invalid response length: expected {expected} symbols, got {found}")
            }
            Self::InvalidSymbol { symbol, position } => write!(
                f,
                "invalid response format: '{symbol}' at position {} (use g, y or x)",
                position + 1
            ),
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Feedback for a whole guess, exactly one mark per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LEN]);

impl Feedback {
    /// All greens
    pub const SOLVED: Self = Self([Mark::Correct; WORD_LEN]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks)
    }

    /// Parse a feedback string like "xygxx" or "🟩🟨⬜⬜🟩"
    ///
    /// Surrounding whitespace is ignored. Length is checked before any symbol,
    /// so a short or long response is always reported as a length error.
    ///
    /// # Errors
    /// Returns `FeedbackError` if the string does not hold exactly one valid
    /// symbol per letter position.
    ///
    /// # Examples
    /// ```
    /// use wordle_chain::core::{Feedback, Mark};
    ///
    /// let feedback = Feedback::parse("xygxx").unwrap();
    /// assert_eq!(feedback.mark(2), Mark::Correct);
    /// assert!(Feedback::parse("xyg").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let symbols: Vec<char> = s.trim().chars().collect();

        if symbols.len() != WORD_LEN {
            return Err(FeedbackError::InvalidLength {
                expected: WORD_LEN,
                found: symbols.len(),
            });
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (position, (&symbol, mark)) in symbols.iter().zip(marks.iter_mut()).enumerate() {
            *mark = Mark::from_char(symbol)
                .ok_or(FeedbackError::InvalidSymbol { symbol, position })?;
        }

        Ok(Self(marks))
    }

    /// Calculate the feedback a game gives when `guess` is played against `answer`
    ///
    /// Greens are assigned first and consume their answer letter; yellows are
    /// then handed out left to right from whatever letters remain, so a guess
    /// never gets more coloured copies of a letter than the answer holds.
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut remaining = [0u8; 26];

        // Allow: index needed to compare guess[i] with answer[i] and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.letter_at(i) == answer.letter_at(i) {
                marks[i] = Mark::Correct;
            } else {
                remaining[usize::from(answer.letter_at(i) - b'a')] += 1;
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Correct {
                continue;
            }
            let slot = &mut remaining[usize::from(guess.letter_at(i) - b'a')];
            if *slot > 0 {
                *mark = Mark::Present;
                *slot -= 1;
            }
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn mark(&self, position: usize) -> Mark {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    /// Check if every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Correct)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|m| write!(f, "{}", m.symbol()))
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn parse_canonical_symbols() {
        let feedback = Feedback::parse("yxgyx").unwrap();
        assert_eq!(
            feedback.marks(),
            &[
                Mark::Present,
                Mark::Absent,
                Mark::Correct,
                Mark::Present,
                Mark::Absent
            ]
        );
        assert_eq!(feedback.to_string(), "yxgyx");
    }

    #[test]
    fn parse_alternate_symbols() {
        let a = Feedback::parse("GY-_X").unwrap();
        let b = Feedback::parse("🟩🟨⬜⬛⬜").unwrap();
        let c = Feedback::parse("  gyxxx\n").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            Feedback::parse("gyx"),
            Err(FeedbackError::InvalidLength {
                expected: 5,
                found: 3
            })
        );
        assert_eq!(
            Feedback::parse("gggggg"),
            Err(FeedbackError::InvalidLength {
                expected: 5,
                found: 6
            })
        );
        assert!(Feedback::parse("").is_err());
    }

    #[test]
    fn parse_rejects_unknown_symbol() {
        assert_eq!(
            Feedback::parse("ggbgg"),
            Err(FeedbackError::InvalidSymbol {
                symbol: 'b',
                position: 2
            })
        );
    }

    #[test]
    fn solved_detection() {
        assert!(Feedback::parse("ggggg").unwrap().is_solved());
        assert!(Feedback::SOLVED.is_solved());
        assert!(!Feedback::parse("ggggy").unwrap().is_solved());
    }

    #[test]
    fn score_matches_recorded_game() {
        let answer = word("knoll");
        assert_eq!(Feedback::score(&word("arose"), &answer).to_string(), "xxgxx");
        assert_eq!(Feedback::score(&word("clout"), &answer).to_string(), "xygxx");
        assert_eq!(Feedback::score(&word("loony"), &answer).to_string(), "yxgyx");
        assert_eq!(Feedback::score(&answer, &answer), Feedback::SOLVED);
    }

    #[test]
    fn score_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: the second O is green, the first is yellow
        let feedback = Feedback::score(&word("robot"), &word("floor"));
        assert_eq!(feedback.to_string(), "yyxgx");
    }

    #[test]
    fn score_extra_copies_are_grey() {
        // Only one S in SHIRT: the green one consumes it
        let feedback = Feedback::score(&word("sissy"), &word("shirt"));
        assert_eq!(feedback.to_string(), "gyxxx");
    }

    #[test]
    fn emoji_rendering() {
        let feedback = Feedback::parse("gyxxg").unwrap();
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜⬜🟩");
    }
}
