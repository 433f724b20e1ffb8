//! JSON persistence
//!
//! The starting-guess table (the first-move ranking over the whole universe)
//! is expensive to compute, so it is saved once and reloaded. Simulation runs
//! are saved as secret → board tokens, the same encoding boards are typed in.

use crate::core::{Board, Word};
use crate::solver::{GameRecord, GuessInformation, Strategy};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One saved row of the starting-guess table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartingRow {
    pub guess: String,
    pub information: f64,
}

/// Save a first-move ranking, best first
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn save_starting_table(path: &Path, table: &GuessInformation) -> Result<()> {
    let rows: Vec<StartingRow> = table
        .ranked()
        .iter()
        .map(|row| StartingRow {
            guess: row.word.to_string(),
            information: row.information,
        })
        .collect();

    write_json(path, &rows)
}

/// Load a saved first-move ranking
///
/// Every word of `universe` is a possible answer before the first guess, so
/// rows are flagged against it.
///
/// # Errors
/// Returns an error if the file cannot be read or holds an invalid word.
pub fn load_starting_table(path: &Path, universe: &[Word]) -> Result<GuessInformation> {
    let rows: Vec<StartingRow> = read_json(path)?;

    let scores = rows
        .into_iter()
        .map(|row| {
            let word = Word::new(&row.guess)
                .with_context(|| format!("invalid guess in {}", path.display()))?;
            Ok((word, row.information))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(GuessInformation::new(scores, universe))
}

/// `<dir>/<strategy>_strategy_full_results_rep=<rep>.json`
#[must_use]
pub fn results_path(dir: &Path, strategy: Strategy, rep: usize) -> PathBuf {
    dir.join(format!("{strategy}_strategy_full_results_rep={rep}.json"))
}

/// Save simulated games as secret → flat board tokens
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn save_results(path: &Path, records: &[GameRecord]) -> Result<()> {
    let results: BTreeMap<String, Vec<String>> = records
        .iter()
        .map(|record| (record.secret.to_string(), record.board.to_tokens()))
        .collect();

    write_json(path, &results)
}

/// Load saved games back into boards
///
/// # Errors
/// Returns an error if the file cannot be read or a secret or board is
/// malformed.
pub fn load_results(path: &Path) -> Result<BTreeMap<Word, Board>> {
    let results: BTreeMap<String, Vec<String>> = read_json(path)?;

    results
        .into_iter()
        .map(|(secret, tokens)| {
            let word = Word::new(&secret)
                .with_context(|| format!("invalid secret in {}", path.display()))?;
            let board = Board::parse_tokens(&tokens)
                .with_context(|| format!("invalid board for '{secret}' in {}", path.display()))?;
            Ok((word, board))
        })
        .collect()
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize JSON")?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
