//! Strategy simulation command
//!
//! Plays every word of the universe as the secret, once per strategy and
//! repetition, and saves each run as JSON.

use super::precompute::{load_or_compute_starting_table, progress_bar};
use crate::core::Word;
use crate::persist::{results_path, save_results};
use crate::solver::{
    FeedbackSource, PrecomputeCache, SimulationSummary, Solver, Strategy, evaluate_strategy,
    opening_guess,
};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Settings for a simulation sweep
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    pub results_dir: PathBuf,
    pub starting_guesses: PathBuf,
    pub reps: usize,
    pub strategies: Vec<Strategy>,
    pub use_cache: bool,
    pub seed: u64,
}

/// One strategy run within a sweep
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub strategy: Strategy,
    pub rep: usize,
    pub summary: SimulationSummary,
    pub path: PathBuf,
    pub duration: Duration,
}

/// Run every requested strategy `reps` times over the whole universe
///
/// # Errors
/// Returns an error if the results directory cannot be created, a feedback
/// lookup fails, or a run cannot be saved.
pub fn run_simulations(universe: &[Word], config: &SimulateConfig) -> Result<Vec<RunSummary>> {
    if !config.results_dir.exists() {
        eprintln!(
            "{} results directory {} does not exist, creating it",
            "warning:".yellow().bold(),
            config.results_dir.display()
        );
        fs::create_dir_all(&config.results_dir).with_context(|| {
            format!("failed to create {}", config.results_dir.display())
        })?;
    }

    if config.use_cache {
        let pb = progress_bar(universe.len() as u64, "Precomputing feedback");
        let cache = PrecomputeCache::build_with_progress(universe, || pb.inc(1));
        pb.finish_with_message(format!("Cached {} × {} feedback", cache.len(), cache.len()));

        sweep(&Solver::with_source(universe, &cache), config)
    } else {
        sweep(&Solver::new(universe), config)
    }
}

fn sweep<F: FeedbackSource>(
    solver: &Solver<'_, F>,
    config: &SimulateConfig,
) -> Result<Vec<RunSummary>> {
    let universe = solver.universe();
    let mut runs = Vec::with_capacity(config.reps * config.strategies.len());

    let opening = if config.strategies.iter().any(|s| s.uses_information()) {
        let starting = load_or_compute_starting_table(&config.starting_guesses, solver)?;
        opening_guess(&starting)
    } else {
        None
    };

    for rep in 0..config.reps {
        for (index, &strategy) in config.strategies.iter().enumerate() {
            let seed = config
                .seed
                .wrapping_add(((rep * config.strategies.len() + index) as u64) << 32);
            let strategy_opening = if strategy.uses_information() {
                opening
            } else {
                None
            };

            println!(
                "\n{} {} (rep {}/{})",
                "Simulating".bright_cyan().bold(),
                strategy.to_string().bright_yellow(),
                rep + 1,
                config.reps
            );

            let start = Instant::now();
            let pb = progress_bar(universe.len() as u64, "Playing games");
            let records = evaluate_strategy(solver, universe, strategy, strategy_opening, seed, || {
                pb.inc(1);
            })?;
            pb.finish_and_clear();

            let path = results_path(&config.results_dir, strategy, rep);
            save_results(&path, &records)?;

            runs.push(RunSummary {
                strategy,
                rep,
                summary: SimulationSummary::from_games(&records),
                path,
                duration: start.elapsed(),
            });
        }
    }

    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::load_results;
    use crate::wordlists::words_from_slice;

    #[test]
    fn sweep_saves_one_file_per_run() {
        let universe = words_from_slice(&[
            "crane", "grace", "grate", "crate", "irate", "slate", "trace", "child",
        ]);
        let dir = std::env::temp_dir().join(format!(
            "wordle_strategies_{}_simulate",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);

        let config = SimulateConfig {
            results_dir: dir.join("results"),
            starting_guesses: dir.join("starting_guesses.json"),
            reps: 2,
            strategies: vec![Strategy::BestAnswer, Strategy::RandomAnswer],
            use_cache: true,
            seed: 11,
        };
        fs::create_dir_all(&dir).unwrap();

        let runs = run_simulations(&universe, &config).unwrap();
        assert_eq!(runs.len(), 4);

        for run in &runs {
            assert_eq!(run.summary.games, universe.len());
            assert_eq!(run.summary.solved, universe.len());
            let saved = load_results(&run.path).unwrap();
            assert_eq!(saved.len(), universe.len());
            for (secret, board) in &saved {
                assert_eq!(board.solution(), Some(*secret));
            }
        }
        assert!(
            config
                .results_dir
                .join("random_answer_strategy_full_results_rep=1.json")
                .exists()
        );

        fs::remove_dir_all(&dir).unwrap();
    }
}
