//! Core domain types for Wordle
//!
//! Words, feedback, boards, and the input validation errors for all three.
//! Everything here is a pure value type with no solver logic.

mod board;
mod error;
mod feedback;
mod word;

pub use board::{Board, Observation};
pub use error::InputError;
pub use feedback::{Feedback, Mark};
pub use word::{WORD_LEN, Word};
