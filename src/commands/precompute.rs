//! Starting-guess table
//!
//! The first move ranks the whole universe against itself, the most expensive
//! estimate the solver ever makes. It is computed once and saved as JSON.

use crate::persist::{load_starting_table, save_starting_table};
use crate::solver::{FeedbackSource, GuessInformation, Solver, entropy};
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Rank every universe word as a first guess, with a progress bar
///
/// # Errors
/// Propagates feedback lookup failures.
pub fn compute_starting_table<F: FeedbackSource>(
    solver: &Solver<'_, F>,
) -> Result<GuessInformation> {
    let universe = solver.universe();
    let pb = progress_bar(universe.len() as u64, "Ranking first guesses");

    let table = entropy::estimate_with_progress(universe, universe, solver.source(), || {
        pb.inc(1);
    })?;

    pb.finish_with_message("Ranked first guesses");
    Ok(table)
}

/// Load the saved starting table, computing and saving it when missing
///
/// # Errors
/// Returns an error if an existing file is unreadable or the new table
/// cannot be saved.
pub fn load_or_compute_starting_table<F: FeedbackSource>(
    path: &Path,
    solver: &Solver<'_, F>,
) -> Result<GuessInformation> {
    if path.exists() {
        return load_starting_table(path, solver.universe());
    }

    eprintln!(
        "{} no starting-guess table at {}, computing it now",
        "warning:".yellow().bold(),
        path.display()
    );
    run_precompute(path, solver)
}

/// Compute the starting table and save it to `path`
///
/// # Errors
/// Returns an error if the table cannot be computed or saved.
pub fn run_precompute<F: FeedbackSource>(
    path: &Path,
    solver: &Solver<'_, F>,
) -> Result<GuessInformation> {
    let table = compute_starting_table(solver)?;
    save_starting_table(path, &table)?;

    println!(
        "{} saved {} starting guesses to {}",
        "✓".green().bold(),
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Progress bar in the style used by every long-running command
#[must_use]
pub fn progress_bar(len: u64, message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(message);
    pb
}
