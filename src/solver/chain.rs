//! Lazy candidate sources and the constraint filter chain
//!
//! A [`WordSource`] walks a dictionary once, front to back. Each [`Filtered`]
//! layer owns the source it wraps and silently drops words that violate its
//! constraint. A [`Chain`] is the type-erased stack of layers the interpreter
//! grows round by round.

use super::constraint::Constraint;
use crate::core::Word;
use log::trace;

/// A lazy, forward-only supply of candidate words
///
/// `None` signals exhaustion. Sources are never rewound: starting over means
/// building a new source.
pub trait CandidateSource {
    fn next_candidate(&mut self) -> Option<Word>;
}

impl<S: CandidateSource + ?Sized> CandidateSource for Box<S> {
    fn next_candidate(&mut self) -> Option<Word> {
        (**self).next_candidate()
    }
}

/// Candidate source over an explicitly supplied dictionary
pub struct WordSource<'a> {
    words: std::slice::Iter<'a, Word>,
}

impl<'a> WordSource<'a> {
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        Self {
            words: words.iter(),
        }
    }
}

impl CandidateSource for WordSource<'_> {
    fn next_candidate(&mut self) -> Option<Word> {
        self.words.next().copied()
    }
}

/// A single constraint layer wrapped around another source
pub struct Filtered<S> {
    inner: S,
    constraint: Constraint,
}

impl<S: CandidateSource> Filtered<S> {
    pub const fn new(inner: S, constraint: Constraint) -> Self {
        Self { inner, constraint }
    }
}

impl<S: CandidateSource> CandidateSource for Filtered<S> {
    fn next_candidate(&mut self) -> Option<Word> {
        loop {
            let word = self.inner.next_candidate()?;
            if self.constraint.satisfied_by(&word) {
                return Some(word);
            }
            trace!("{word} rejected: {}", self.constraint);
        }
    }
}

/// The composed filter chain: a base dictionary plus every constraint so far
///
/// Adding a constraint consumes the chain and returns a new one. The cursor
/// into the base dictionary carries over, so words already handed out or
/// rejected are never seen again.
///
/// # Examples
/// ```
/// use wordle_chain::core::Word;
/// use wordle_chain::solver::{Chain, Constraint};
///
/// let words: Vec<Word> = ["arose", "clout", "knoll"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let mut chain = Chain::new(&words).with(Constraint::LetterAbsent { letter: b'e' });
/// assert_eq!(chain.next().map(|w| w.to_string()), Some("clout".to_string()));
/// ```
pub struct Chain<'a> {
    source: Box<dyn CandidateSource + 'a>,
    constraints: Vec<Constraint>,
}

impl<'a> Chain<'a> {
    /// Start an unfiltered chain over `words`
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        Self::from_source(WordSource::new(words))
    }

    /// Start an unfiltered chain over any candidate source
    pub fn from_source(source: impl CandidateSource + 'a) -> Self {
        Self {
            source: Box::new(source),
            constraints: Vec::new(),
        }
    }

    /// Wrap the chain in one more constraint layer
    #[must_use]
    pub fn with(self, constraint: Constraint) -> Self {
        let mut constraints = self.constraints;
        constraints.push(constraint);

        Self {
            source: Box::new(Filtered::new(self.source, constraint)),
            constraints,
        }
    }

    /// Constraints applied so far, innermost first
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Number of filter layers above the base source
    #[must_use]
    pub fn depth(&self) -> usize {
        self.constraints.len()
    }
}

impl Default for Chain<'_> {
    /// An already exhausted chain
    fn default() -> Self {
        Self::new(&[])
    }
}

impl CandidateSource for Chain<'_> {
    fn next_candidate(&mut self) -> Option<Word> {
        self.source.next_candidate()
    }
}

impl Iterator for Chain<'_> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        self.next_candidate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::PositionSet;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn texts(chain: Chain<'_>) -> Vec<String> {
        chain.map(|w| w.to_string()).collect()
    }

    /// Source that counts how many words were pulled from it
    struct Counting<'a> {
        inner: WordSource<'a>,
        pulled: &'a std::cell::Cell<usize>,
    }

    impl CandidateSource for Counting<'_> {
        fn next_candidate(&mut self) -> Option<Word> {
            let word = self.inner.next_candidate()?;
            self.pulled.set(self.pulled.get() + 1);
            Some(word)
        }
    }

    #[test]
    fn word_source_yields_in_order_then_exhausts() {
        let dict = words(&["arose", "clout", "loony"]);
        let mut source = WordSource::new(&dict);
        assert_eq!(source.next_candidate(), Some(dict[0]));
        assert_eq!(source.next_candidate(), Some(dict[1]));
        assert_eq!(source.next_candidate(), Some(dict[2]));
        assert_eq!(source.next_candidate(), None);
        assert_eq!(source.next_candidate(), None);
    }

    #[test]
    fn unfiltered_chain_passes_everything() {
        let dict = words(&["arose", "clout", "loony"]);
        assert_eq!(texts(Chain::new(&dict)), vec!["arose", "clout", "loony"]);
    }

    #[test]
    fn filtered_layer_skips_rejected_words() {
        let dict = words(&["arose", "alarm", "clout", "which", "knoll"]);
        let chain = Chain::new(&dict).with(Constraint::LetterAt {
            letter: b'o',
            position: 2,
        });
        assert_eq!(texts(chain), vec!["arose", "clout", "knoll"]);
    }

    #[test]
    fn filtering_is_lazy() {
        let dict = words(&["arose", "clout", "loony", "knoll"]);
        let pulled = std::cell::Cell::new(0);
        let source = Counting {
            inner: WordSource::new(&dict),
            pulled: &pulled,
        };

        let mut chain = Chain::from_source(source).with(Constraint::LetterAbsent { letter: b'a' });
        assert_eq!(chain.next().map(|w| w.to_string()), Some("clout".to_string()));
        // Only AROSE and CLOUT were pulled; the rest stay untouched
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn cursor_carries_over_when_wrapping() {
        let dict = words(&["arose", "clout", "loony"]);
        let mut chain = Chain::new(&dict);
        assert_eq!(chain.next(), Some(dict[0]));

        let chain = chain.with(Constraint::LetterAbsent { letter: b'z' });
        assert_eq!(texts(chain), vec!["clout", "loony"]);
    }

    #[test]
    fn contradictory_constraints_exhaust_immediately() {
        let dict = words(&["arose", "about", "alarm", "clout"]);
        let mut chain = Chain::new(&dict)
            .with(Constraint::LetterAt {
                letter: b'a',
                position: 0,
            })
            .with(Constraint::LetterAbsent { letter: b'a' });
        assert_eq!(chain.next(), None);
        assert_eq!(chain.next(), None);
    }

    #[test]
    fn chain_records_constraints() {
        let dict = words(&["arose"]);
        let first = Constraint::LetterAbsent { letter: b'q' };
        let second = Constraint::LetterPresentElsewhere {
            letter: b'r',
            position: 0,
            skip: PositionSet::EMPTY,
        };
        let chain = Chain::new(&dict).with(first).with(second);
        assert_eq!(chain.depth(), 2);
        assert_eq!(chain.constraints(), &[first, second]);
    }

    #[test]
    fn default_chain_is_exhausted() {
        let mut chain = Chain::default();
        assert_eq!(chain.depth(), 0);
        assert_eq!(chain.next(), None);
    }
}
