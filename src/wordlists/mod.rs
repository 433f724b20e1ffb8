//! Word lists for Wordle solving
//!
//! The universe is read at runtime from a plain text file.

pub mod loader;

pub use loader::{load_words, words_from_slice};
