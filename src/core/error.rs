//! Malformed-input errors
//!
//! Everything a caller can get wrong before the solver runs: bad words, bad
//! feedback strings, unpaired board tokens, and unknown strategy names.

use thiserror::Error;

/// Input rejected during validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("word must be exactly 5 letters, got {0}")]
    WordLength(usize),

    #[error("word '{0}' must contain only letters")]
    NonAlphabetic(String),

    #[error("feedback must be exactly 5 symbols, got {0}")]
    FeedbackLength(usize),

    #[error("invalid feedback symbol '{0}' (use G for green, Y for yellow, X for gray)")]
    FeedbackSymbol(char),

    #[error("board has {0} tokens; every guess needs a feedback token")]
    UnpairedBoard(usize),

    #[error("unknown strategy '{0}' (expected best_answer, best_guess or random_answer)")]
    UnknownStrategy(String),
}
