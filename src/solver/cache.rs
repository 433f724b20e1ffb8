//! Feedback sources
//!
//! The filter and the information estimator ask a [`FeedbackSource`] for the
//! feedback of every (secret, guess) pair they look at. [`DirectGrader`]
//! grades on demand; [`PrecomputeCache`] looks the answer up in a table built
//! once for a whole simulation sweep.

use super::SolverError;
use crate::core::{Feedback, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Where feedback for a (secret, guess) pair comes from
///
/// Implementations must agree with [`Feedback::grade`] for every pair they
/// answer.
pub trait FeedbackSource: Sync {
    /// Feedback for `guess` when `secret` is the answer
    ///
    /// # Errors
    /// Returns `SolverError::MissingCacheEntry` when a table-backed source
    /// has no entry for the pair.
    fn feedback(&self, secret: &Word, guess: &Word) -> Result<Feedback, SolverError>;
}

impl<T: FeedbackSource + ?Sized> FeedbackSource for &T {
    fn feedback(&self, secret: &Word, guess: &Word) -> Result<Feedback, SolverError> {
        (**self).feedback(secret, guess)
    }
}

/// Grades every pair on the fly
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectGrader;

impl FeedbackSource for DirectGrader {
    #[inline]
    fn feedback(&self, secret: &Word, guess: &Word) -> Result<Feedback, SolverError> {
        Ok(Feedback::grade(secret, guess))
    }
}

/// Read-only secret × guess feedback table
///
/// Row-major: `table[secret_index * len + guess_index]`.
#[derive(Debug, Clone)]
pub struct PrecomputeCache {
    index: FxHashMap<Word, usize>,
    table: Vec<Feedback>,
}

impl PrecomputeCache {
    /// Grade every word against every other word (parallelized by row)
    ///
    /// Duplicate words in `words` share one row and column.
    #[must_use]
    pub fn build(words: &[Word]) -> Self {
        Self::build_with_progress(words, || {})
    }

    /// Like [`PrecomputeCache::build`], calling `on_row` after each secret row
    pub fn build_with_progress<P>(words: &[Word], on_row: P) -> Self
    where
        P: Fn() + Sync,
    {
        let mut unique: Vec<Word> = words.to_vec();
        unique.sort_unstable();
        unique.dedup();

        let len = unique.len();
        let index = unique.iter().enumerate().map(|(i, &w)| (w, i)).collect();

        let mut table = vec![Feedback::default(); len * len];
        if len > 0 {
            table
                .par_chunks_mut(len)
                .zip(unique.par_iter())
                .for_each(|(row, secret)| {
                    for (slot, guess) in row.iter_mut().zip(&unique) {
                        *slot = Feedback::grade(secret, guess);
                    }
                    on_row();
                });
        }

        Self { index, table }
    }

    /// Number of distinct words in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Whether `word` has a row and column
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word)
    }

    /// Table lookup, `None` if either word is outside the table
    #[must_use]
    pub fn get(&self, secret: &Word, guess: &Word) -> Option<Feedback> {
        let row = *self.index.get(secret)?;
        let col = *self.index.get(guess)?;
        Some(self.table[row * self.len() + col])
    }
}

impl FeedbackSource for PrecomputeCache {
    fn feedback(&self, secret: &Word, guess: &Word) -> Result<Feedback, SolverError> {
        self.get(secret, guess)
            .ok_or(SolverError::MissingCacheEntry {
                secret: *secret,
                guess: *guess,
            })
    }
}

/// A cache that grades directly on a miss instead of failing
///
/// The first fallback is logged to stderr; every fallback is counted so a
/// stale table can still be reported after the run.
#[derive(Debug)]
pub struct FallbackCache<'a> {
    cache: &'a PrecomputeCache,
    warned: AtomicBool,
    fallbacks: AtomicUsize,
}

impl<'a> FallbackCache<'a> {
    #[must_use]
    pub const fn new(cache: &'a PrecomputeCache) -> Self {
        Self {
            cache,
            warned: AtomicBool::new(false),
            fallbacks: AtomicUsize::new(0),
        }
    }

    /// Number of lookups that missed the table
    #[must_use]
    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }
}

impl FeedbackSource for FallbackCache<'_> {
    fn feedback(&self, secret: &Word, guess: &Word) -> Result<Feedback, SolverError> {
        if let Some(feedback) = self.cache.get(secret, guess) {
            return Ok(feedback);
        }

        self.fallbacks.fetch_add(1, Ordering::Relaxed);
        if !self.warned.swap(true, Ordering::Relaxed) {
            use colored::Colorize;
            eprintln!(
                "{} no precomputed feedback for secret '{secret}' and guess '{guess}', grading directly",
                "warning:".yellow().bold()
            );
        }
        Ok(Feedback::grade(secret, guess))
    }
}
