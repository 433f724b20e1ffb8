//! Shannon entropy of Wordle feedback distributions
//!
//! Given a guess and a set of possible answers, the expected information is
//! the entropy of the feedback distribution the guess induces:
//!
//! H = -Σ p(x) · log₂ p(x)
//!
//! where p(x) is the share of answers that would produce feedback x.

use super::filter::feedback_counts;
use super::{FeedbackSource, SolverError};
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Shannon entropy (bits) of a distribution given as raw counts
///
/// Zero counts are skipped. Terms are summed in slice order, so the same
/// counts always give the same bits regardless of how they were gathered.
///
/// # Examples
/// ```
/// use wordle_strategies::solver::entropy::shannon_entropy;
///
/// assert!((shannon_entropy(&[25, 25, 25, 25]) - 2.0).abs() < 1e-12);
/// assert_eq!(shannon_entropy(&[10]), 0.0);
/// ```
#[must_use]
pub fn shannon_entropy(counts: &[usize]) -> f64 {
    let total = counts.iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
        .max(0.0)
}

/// Expected information (bits) of `guess` against `answers`
///
/// # Errors
/// Propagates lookup failures from `source`.
pub fn expected_information<F: FeedbackSource + ?Sized>(
    guess: &Word,
    answers: &[Word],
    source: &F,
) -> Result<f64, SolverError> {
    let counts = feedback_counts(guess, answers, source)?;
    Ok(shannon_entropy(&counts))
}

/// Expected information of every guess against `answers`, ranked
///
/// Guesses are scored in parallel. Words in `answers` are flagged as possible
/// answers in the result.
///
/// # Errors
/// Propagates the first lookup failure from `source`.
pub fn estimate<F: FeedbackSource + ?Sized>(
    guesses: &[Word],
    answers: &[Word],
    source: &F,
) -> Result<GuessInformation, SolverError> {
    estimate_with_progress(guesses, answers, source, || {})
}

/// Like [`estimate`], calling `on_guess` after each guess is scored
///
/// # Errors
/// Propagates the first lookup failure from `source`.
pub fn estimate_with_progress<F, P>(
    guesses: &[Word],
    answers: &[Word],
    source: &F,
    on_guess: P,
) -> Result<GuessInformation, SolverError>
where
    F: FeedbackSource + ?Sized,
    P: Fn() + Sync,
{
    let scores = guesses
        .par_iter()
        .map(|guess| -> Result<(Word, f64), SolverError> {
            let information = expected_information(guess, answers, source)?;
            on_guess();
            Ok((*guess, information))
        })
        .collect::<Result<Vec<_>, SolverError>>()?;

    Ok(GuessInformation::new(scores, answers))
}

/// One row of a ranking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedGuess {
    pub word: Word,
    /// Expected information in bits
    pub information: f64,
    /// Whether the guess is still a possible answer
    pub possible_answer: bool,
}

/// Guesses ranked by expected information
///
/// Sorted by descending information; equal scores are ordered
/// alphabetically so the ranking is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuessInformation {
    ranked: Vec<RankedGuess>,
}

impl GuessInformation {
    /// Rank `scores`, flagging the words that appear in `candidates`
    ///
    /// A word scored more than once keeps its first score.
    #[must_use]
    pub fn new(scores: impl IntoIterator<Item = (Word, f64)>, candidates: &[Word]) -> Self {
        let candidate_set: FxHashSet<&Word> = candidates.iter().collect();
        let mut seen = FxHashSet::default();

        let mut ranked: Vec<RankedGuess> = scores
            .into_iter()
            .filter(|(word, _)| seen.insert(*word))
            .map(|(word, information)| RankedGuess {
                word,
                information,
                possible_answer: candidate_set.contains(&word),
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.information
                .total_cmp(&a.information)
                .then_with(|| a.word.cmp(&b.word))
        });

        Self { ranked }
    }

    /// All rows, best first
    #[must_use]
    pub fn ranked(&self) -> &[RankedGuess] {
        &self.ranked
    }

    /// The highest-ranked guess
    #[must_use]
    pub fn best(&self) -> Option<&RankedGuess> {
        self.ranked.first()
    }

    /// Look up the row for `word`
    #[must_use]
    pub fn get(&self, word: &Word) -> Option<&RankedGuess> {
        self.ranked.iter().find(|row| row.word == *word)
    }

    /// Rows whose guess is still a possible answer, best first
    pub fn possible_answers(&self) -> impl Iterator<Item = &RankedGuess> {
        self.ranked.iter().filter(|row| row.possible_answer)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}
