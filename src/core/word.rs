//! Wordle word representation
//!
//! A Word is five lowercase ASCII letters stored inline, so it is `Copy` and
//! cheap to hash, compare, and keep in large candidate lists.

use super::InputError;
use std::fmt;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A validated, lowercase 5-letter word
///
/// Ordering is alphabetical, which is the stable tie order used when ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LEN]);

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is case-normalized to lowercase.
    ///
    /// # Errors
    /// Returns `InputError::WordLength` unless the input has exactly 5
    /// characters, and `InputError::NonAlphabetic` if any of them is not an
    /// ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_strategies::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.as_str(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, InputError> {
        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(InputError::WordLength(len));
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(InputError::NonAlphabetic(text.to_string()));
        }

        let mut letters = [0u8; WORD_LEN];
        for (slot, byte) in letters.iter_mut().zip(text.bytes()) {
            *slot = byte.to_ascii_lowercase();
        }

        Ok(Self(letters))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).expect("validated as ASCII letters")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Occurrences of each letter, indexed `a` = 0 through `z` = 25
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &letter in &self.0 {
            counts[letter_index(letter)] += 1;
        }
        counts
    }
}

/// Alphabet index of a lowercase ASCII letter
#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Word {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
