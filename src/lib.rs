//! Wordle Strategies
//!
//! A Wordle solver that ranks guesses by expected information, plus a
//! simulator that compares guessing strategies over every possible secret.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_strategies::core::{Board, Word};
//! use wordle_strategies::solver::{Solver, Strategy};
//!
//! let universe: Vec<Word> = ["crane", "grace", "grate", "crate", "slate"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let solver = Solver::new(&universe);
//!
//! let board = Board::parse_tokens(&["slate", "XXGGG"]).unwrap();
//! let game = solver.replay(&board).unwrap();
//! let suggestion = solver.suggest(&game, Strategy::BestGuess).unwrap();
//! println!("Try one of {:?}", suggestion.options);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Saved tables and simulation results
pub mod persist;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
