//! Strategy simulation
//!
//! Plays one game per secret under a strategy and summarizes how it went.
//! Games run in parallel; each one draws from its own generator seeded from
//! the run seed and the secret's position, so a run is reproducible no matter
//! how rayon schedules it.

use super::engine::{GameRecord, Solver};
use super::entropy::GuessInformation;
use super::strategy::{Strategy, choose_guess};
use super::{FeedbackSource, SolverError};
use crate::core::Word;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// The opening an informative strategy plays: the top starting guess
#[must_use]
pub fn opening_guess(starting: &GuessInformation) -> Option<Word> {
    starting.best().map(|row| row.word)
}

/// Play every secret under `strategy`
///
/// With `opening` set, every game opens with it. Without, `RandomAnswer`
/// opens each game with a random universe word and the informative
/// strategies open with the top-ranked word of the universe.
/// `on_game` is called after each finished game. Records come back in
/// `secrets` order.
///
/// # Errors
/// The first feedback lookup failure, or `SolverError::NoConsistentCandidates`
/// for an empty universe.
pub fn evaluate_strategy<F, P>(
    solver: &Solver<'_, F>,
    secrets: &[Word],
    strategy: Strategy,
    opening: Option<Word>,
    seed: u64,
    on_game: P,
) -> Result<Vec<GameRecord>, SolverError>
where
    F: FeedbackSource,
    P: Fn() + Sync,
{
    let fixed_opening = match opening {
        Some(word) => Some(word),
        None if strategy.uses_information() => {
            let starting = solver.rank(&solver.new_game())?;
            Some(opening_guess(&starting).ok_or(SolverError::NoConsistentCandidates)?)
        }
        None => None,
    };

    secrets
        .par_iter()
        .enumerate()
        .map(|(index, secret)| -> Result<GameRecord, SolverError> {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
            let opening = match fixed_opening {
                Some(word) => word,
                None => choose_guess(solver.universe(), &mut rng)
                    .ok_or(SolverError::NoConsistentCandidates)?,
            };

            let record = solver.play(secret, opening, strategy, &mut rng)?;
            on_game();
            Ok(record)
        })
        .collect()
}

/// Aggregate statistics over a set of games
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationSummary {
    pub games: usize,
    pub solved: usize,
    pub exhausted: usize,
    /// Mean turns over solved games
    pub average_turns: f64,
    pub min_turns: Option<usize>,
    pub max_turns: Option<usize>,
    /// Turns taken → number of solved games
    pub distribution: BTreeMap<usize, usize>,
}

impl SimulationSummary {
    #[must_use]
    pub fn from_games(records: &[GameRecord]) -> Self {
        let mut summary = Self {
            games: records.len(),
            ..Self::default()
        };

        let mut total_turns = 0;
        for record in records {
            if record.is_solved() {
                let turns = record.turns();
                summary.solved += 1;
                total_turns += turns;
                *summary.distribution.entry(turns).or_insert(0) += 1;
            } else {
                summary.exhausted += 1;
            }
        }

        if summary.solved > 0 {
            summary.average_turns = total_turns as f64 / summary.solved as f64;
        }
        summary.min_turns = summary.distribution.keys().next().copied();
        summary.max_turns = summary.distribution.keys().next_back().copied();

        summary
    }

    /// Share of games solved, in percent
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.solved as f64 / self.games as f64 * 100.0
    }
}
