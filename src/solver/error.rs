//! Solver errors
//!
//! Keeps the three failure classes apart: malformed input, a board no word
//! satisfies, and a precomputed table that is missing an entry.

use super::GameState;
use crate::core::{InputError, Word};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error(transparent)]
    Input(#[from] InputError),

    /// The feedback history rules out every word in the universe
    #[error("no words are consistent with the feedback on the board")]
    NoConsistentCandidates,

    /// The feedback table was built for a different universe
    #[error("precomputed feedback missing for secret '{secret}' and guess '{guess}'")]
    MissingCacheEntry { secret: Word, guess: Word },

    #[error("game is already over ({0})")]
    GameOver(GameState),
}
