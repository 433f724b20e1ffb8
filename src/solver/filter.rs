//! Candidate filtering
//!
//! Splits a candidate set by the feedback each candidate would give a guess,
//! and narrows a candidate set down to the words consistent with a board.

use super::{FeedbackSource, SolverError};
use crate::core::{Board, Feedback, Observation, Word};
use rustc_hash::FxHashMap;

/// Group `candidates` by the feedback `guess` would receive if each were the secret
///
/// Partitions are disjoint and together hold every candidate exactly once.
/// Words keep their relative order within a partition.
///
/// # Errors
/// Propagates lookup failures from `source`.
pub fn partition<F: FeedbackSource + ?Sized>(
    guess: &Word,
    candidates: &[Word],
    source: &F,
) -> Result<FxHashMap<Feedback, Vec<Word>>, SolverError> {
    let mut groups: FxHashMap<Feedback, Vec<Word>> = FxHashMap::default();

    for candidate in candidates {
        let feedback = source.feedback(candidate, guess)?;
        groups.entry(feedback).or_default().push(*candidate);
    }

    Ok(groups)
}

/// Count candidates per feedback value, indexed by [`Feedback::value`]
///
/// Same grouping as [`partition`] without collecting the words.
///
/// # Errors
/// Propagates lookup failures from `source`.
pub fn feedback_counts<F: FeedbackSource + ?Sized>(
    guess: &Word,
    candidates: &[Word],
    source: &F,
) -> Result<[usize; Feedback::COUNT], SolverError> {
    let mut counts = [0usize; Feedback::COUNT];

    for candidate in candidates {
        let feedback = source.feedback(candidate, guess)?;
        counts[usize::from(feedback.value())] += 1;
    }

    Ok(counts)
}

/// Keep the candidates that would have produced `observation`
///
/// # Errors
/// Propagates lookup failures from `source`.
pub fn apply<F: FeedbackSource + ?Sized>(
    observation: &Observation,
    candidates: &[Word],
    source: &F,
) -> Result<Vec<Word>, SolverError> {
    let mut kept = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        if source.feedback(candidate, &observation.guess)? == observation.feedback {
            kept.push(*candidate);
        }
    }

    Ok(kept)
}

/// Narrow `candidates` by every observation on the board, in order
///
/// # Errors
/// Returns `SolverError::NoConsistentCandidates` as soon as an observation
/// leaves nothing, and propagates lookup failures from `source`.
///
/// # Examples
/// ```
/// use wordle_strategies::core::{Board, Word};
/// use wordle_strategies::solver::{DirectGrader, filter};
///
/// let universe: Vec<Word> = ["crane", "grace", "grate", "crate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let board = Board::parse_tokens(&["grate", "XGGXG"]).unwrap();
/// let remaining = filter::filter(&board, &universe, &DirectGrader).unwrap();
/// assert_eq!(remaining, vec![Word::new("crane").unwrap()]);
/// ```
pub fn filter<F: FeedbackSource + ?Sized>(
    board: &Board,
    candidates: &[Word],
    source: &F,
) -> Result<Vec<Word>, SolverError> {
    let mut remaining = candidates.to_vec();

    for observation in board {
        remaining = apply(observation, &remaining, source)?;
        if remaining.is_empty() {
            return Err(SolverError::NoConsistentCandidates);
        }
    }

    Ok(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::DirectGrader;

    const SAMPLE: &[&str] = &[
        "crane", "grace", "grate", "crate", "irate", "slate", "child", "couch", "speed", "erase",
        "robot", "floor", "eerie", "geese", "lolly", "llama", "abbey", "kebab", "trace", "react",
    ];

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn partitions_are_exhaustive_and_disjoint() {
        let candidates = words(SAMPLE);

        for guess in &candidates {
            let groups = partition(guess, &candidates, &DirectGrader).unwrap();
            let total: usize = groups.values().map(Vec::len).sum();
            assert_eq!(total, candidates.len());

            let mut seen: Vec<Word> = groups.values().flatten().copied().collect();
            seen.sort();
            let mut expected = candidates.clone();
            expected.sort();
            assert_eq!(seen, expected);
        }
    }

    #[test]
    fn feedback_counts_agree_with_partition() {
        let candidates = words(SAMPLE);
        let guess = word("crane");

        let groups = partition(&guess, &candidates, &DirectGrader).unwrap();
        let counts = feedback_counts(&guess, &candidates, &DirectGrader).unwrap();

        for (feedback, group) in &groups {
            assert_eq!(counts[usize::from(feedback.value())], group.len());
        }
        assert_eq!(counts.iter().sum::<usize>(), candidates.len());
    }

    #[test]
    fn secret_survives_its_own_feedback() {
        let candidates = words(SAMPLE);

        for secret in &candidates {
            let mut board = Board::new();
            for guess in &candidates {
                board.push(Observation::graded(secret, *guess));
                let remaining = filter(&board, &candidates, &DirectGrader).unwrap();
                assert!(remaining.contains(secret), "{secret} lost after {board}");
            }
        }
    }

    #[test]
    fn filtering_is_monotonic() {
        let candidates = words(SAMPLE);
        let secret = word("grate");
        let mut board = Board::new();
        let mut previous = candidates.len();

        for guess in ["speed", "crane", "irate", "grate"] {
            board.push(Observation::graded(&secret, word(guess)));
            let remaining = filter(&board, &candidates, &DirectGrader).unwrap();
            assert!(remaining.len() <= previous);
            previous = remaining.len();
        }
        assert_eq!(previous, 1);
    }

    #[test]
    fn empty_board_keeps_everything() {
        let candidates = words(SAMPLE);
        let remaining = filter(&Board::new(), &candidates, &DirectGrader).unwrap();
        assert_eq!(remaining, candidates);
    }

    #[test]
    fn contradictory_board_has_no_candidates() {
        let candidates = words(SAMPLE);
        // C and G cannot both be green in the first position
        let board = Board::parse_tokens(&["crane", "GXXXX", "grace", "GXXXX"]).unwrap();

        assert_eq!(
            filter(&board, &candidates, &DirectGrader),
            Err(SolverError::NoConsistentCandidates)
        );
    }

    #[test]
    fn apply_keeps_matching_candidates() {
        let candidates = words(&["trace", "crate", "react", "grate"]);
        let observation = Observation::new(word("crane"), "YGGXG".parse().unwrap());
        let kept = apply(&observation, &candidates, &DirectGrader).unwrap();
        assert_eq!(kept, words(&["trace"]));
    }
}
