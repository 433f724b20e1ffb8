//! Wordle solving algorithms
//!
//! Filtering, information ranking, strategies, and the game engine that ties
//! them together.

pub mod cache;
mod engine;
pub mod entropy;
mod error;
pub mod filter;
pub mod simulation;
pub mod strategy;

pub use cache::{DirectGrader, FallbackCache, FeedbackSource, PrecomputeCache};
pub use engine::{Game, GameRecord, GameState, Solver, Suggestion};
pub use entropy::{GuessInformation, RankedGuess};
pub use error::SolverError;
pub use simulation::{SimulationSummary, evaluate_strategy, opening_guess};
pub use strategy::{Strategy, choose_guess};
