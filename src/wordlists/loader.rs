//! Word list loading utilities
//!
//! Every loader yields an ordered, duplicate-free list: order is the guessing
//! order, and the first occurrence of a repeated word wins.

use crate::core::Word;
use log::{debug, warn};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Keep valid words in order, dropping blanks, invalid entries and repeats
fn collect_words<'s>(entries: impl IntoIterator<Item = &'s str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut skipped = 0usize;

    let words: Vec<Word> = entries
        .into_iter()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match Word::new(entry) {
            Ok(word) => Some(word),
            Err(e) => {
                debug!("skipping '{entry}': {e}");
                skipped += 1;
                None
            }
        })
        .filter(|word| seen.insert(*word))
        .collect();

    if skipped > 0 {
        warn!("skipped {skipped} invalid dictionary entries");
    }

    words
}

/// Load words from a newline-delimited file
///
/// Returns the valid words in file order, skipping blank lines, invalid
/// entries and duplicates.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_chain::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(collect_words(content.lines()))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_chain::wordlists::loader::words_from_slice;
/// use wordle_chain::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    collect_words(slice.iter().copied())
}
