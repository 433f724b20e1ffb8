//! Word analysis command
//!
//! Shows how a single guess would split the word universe.

use crate::core::{Feedback, Word};
use crate::solver::entropy::shannon_entropy;
use crate::solver::{FeedbackSource, SolverError, filter};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    /// Expected information in bits
    pub information: f64,
    /// Candidates expected to survive the guess, `N / 2^H`
    pub expected_remaining: f64,
    pub total_candidates: usize,
    /// Number of distinct feedback patterns the guess can receive
    pub partitions: usize,
    /// Biggest partitions first, ties by feedback value
    pub largest: Vec<(Feedback, Vec<Word>)>,
}

/// Analyze `word` as a guess against `candidates`, keeping the `top`
/// largest partitions
///
/// # Errors
/// Propagates feedback lookup failures.
pub fn analyze_word<F: FeedbackSource + ?Sized>(
    word: Word,
    candidates: &[Word],
    source: &F,
    top: usize,
) -> Result<AnalysisResult, SolverError> {
    let groups = filter::partition(&word, candidates, source)?;

    let mut counts = [0usize; Feedback::COUNT];
    for (feedback, group) in &groups {
        counts[usize::from(feedback.value())] = group.len();
    }
    let information = shannon_entropy(&counts);
    let expected_remaining = candidates.len() as f64 / information.exp2();

    let mut largest: Vec<(Feedback, Vec<Word>)> = groups.into_iter().collect();
    largest.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(&b.0)));
    let partitions = largest.len();
    largest.truncate(top);

    Ok(AnalysisResult {
        word,
        information,
        expected_remaining,
        total_candidates: candidates.len(),
        partitions,
        largest,
    })
}
