//! Word list loading utilities
//!
//! Loads the word universe from a whitespace-separated text file or converts
//! an in-memory list.

use crate::core::Word;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load the word universe from a file
///
/// Words are separated by any whitespace. Every token must be a valid
/// five-letter word; the result is lowercased, deduplicated, and sorted.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a token is not a word.
///
/// # Examples
/// ```no_run
/// use wordle_strategies::wordlists::loader::load_words;
///
/// let words = load_words("data/wordle_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    let mut words = content
        .split_whitespace()
        .map(|token| {
            Word::new(token)
                .with_context(|| format!("invalid entry '{token}' in {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    words.sort_unstable();
    words.dedup();
    Ok(words)
}

/// Convert a string slice to a sorted, deduplicated word list
///
/// Entries that are not valid words are skipped.
///
/// # Examples
/// ```
/// use wordle_strategies::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["slate", "crane", "toolong", "crane"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].as_str(), "crane");
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    let mut words: Vec<Word> = slice.iter().filter_map(|&s| Word::new(s).ok()).collect();
    words.sort_unstable();
    words.dedup();
    words
}
