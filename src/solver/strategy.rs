//! Guess selection strategies
//!
//! A strategy turns a ranking into the set of guesses worth playing. Picking
//! one of them is a separate, seedable random step ([`choose_guess`]) so the
//! selection itself stays deterministic.

use super::entropy::GuessInformation;
use crate::core::{InputError, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Policy for turning ranked information into the next guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Most informative guess among the possible answers
    BestAnswer,
    /// Most informative guess overall, preferring possible answers on a tie
    BestGuess,
    /// Any possible answer, ignoring information
    RandomAnswer,
}

impl Strategy {
    /// Every strategy, in the order simulations run them by default
    pub const ALL: [Self; 3] = [Self::BestGuess, Self::BestAnswer, Self::RandomAnswer];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BestAnswer => "best_answer",
            Self::BestGuess => "best_guess",
            Self::RandomAnswer => "random_answer",
        }
    }

    /// Whether [`Strategy::select`] looks at the ranking at all
    #[must_use]
    pub const fn uses_information(self) -> bool {
        !matches!(self, Self::RandomAnswer)
    }

    /// Guesses to choose from uniformly at random, in ranking order
    ///
    /// - `BestAnswer`: the top-scoring guesses among `candidates`.
    /// - `BestGuess`: the top-scoring guesses overall; if some of them are
    ///   candidates, only those.
    /// - `RandomAnswer`: `candidates` unchanged.
    ///
    /// # Examples
    /// ```
    /// use wordle_strategies::core::Word;
    /// use wordle_strategies::solver::{GuessInformation, Strategy};
    ///
    /// let w = |s| Word::new(s).unwrap();
    /// let candidates = [w("crate"), w("grape")];
    /// let info = GuessInformation::new(
    ///     [(w("slate"), 2.0), (w("crate"), 2.0), (w("grape"), 1.0)],
    ///     &candidates,
    /// );
    ///
    /// assert_eq!(Strategy::BestGuess.select(&info, &candidates), [w("crate")]);
    /// ```
    #[must_use]
    pub fn select(self, info: &GuessInformation, candidates: &[Word]) -> Vec<Word> {
        match self {
            Self::RandomAnswer => candidates.to_vec(),
            Self::BestAnswer => {
                let candidate_set: FxHashSet<&Word> = candidates.iter().collect();
                top_scoring(
                    info.ranked()
                        .iter()
                        .filter(|row| candidate_set.contains(&row.word))
                        .map(|row| (row.word, row.information)),
                )
            }
            Self::BestGuess => {
                let best = top_scoring(info.ranked().iter().map(|row| (row.word, row.information)));
                let candidate_set: FxHashSet<&Word> = candidates.iter().collect();
                let lucky: Vec<Word> = best
                    .iter()
                    .copied()
                    .filter(|word| candidate_set.contains(word))
                    .collect();

                if lucky.is_empty() { best } else { lucky }
            }
        }
    }
}

/// Words sharing the maximum score, in input order
fn top_scoring(scores: impl Iterator<Item = (Word, f64)>) -> Vec<Word> {
    let mut best: Vec<Word> = Vec::new();
    let mut max = f64::NEG_INFINITY;

    for (word, score) in scores {
        if score > max {
            max = score;
            best.clear();
            best.push(word);
        } else if score == max {
            best.push(word);
        }
    }

    best
}

/// Pick one option uniformly at random
///
/// Returns `None` when there is nothing to pick.
pub fn choose_guess<R: Rng + ?Sized>(options: &[Word], rng: &mut R) -> Option<Word> {
    options.choose(rng).copied()
}

impl std::str::FromStr for Strategy {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best_answer" | "best-answer" => Ok(Self::BestAnswer),
            "best_guess" | "best-guess" => Ok(Self::BestGuess),
            "random_answer" | "random-answer" => Ok(Self::RandomAnswer),
            other => Err(InputError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| word(w)).collect()
    }

    fn table(rows: &[(&str, f64)], candidates: &[Word]) -> GuessInformation {
        GuessInformation::new(rows.iter().map(|&(w, i)| (word(w), i)), candidates)
    }

    #[test]
    fn best_guess_prefers_answers_on_shared_maximum() {
        let candidates = words(&["crate", "grape"]);
        let info = table(&[("slate", 2.0), ("crate", 2.0), ("grape", 1.0)], &candidates);

        assert_eq!(
            Strategy::BestGuess.select(&info, &candidates),
            words(&["crate"])
        );
    }

    #[test]
    fn best_guess_falls_back_to_global_maximum() {
        let candidates = words(&["grape"]);
        let info = table(&[("slate", 2.0), ("crate", 2.0), ("grape", 1.0)], &candidates);

        // Neither maximal guess is an answer, so both are returned
        assert_eq!(
            Strategy::BestGuess.select(&info, &candidates),
            words(&["crate", "slate"])
        );
    }

    #[test]
    fn best_answer_restricts_to_candidates() {
        let candidates = words(&["grape", "irate"]);
        let info = table(
            &[("slate", 3.0), ("grape", 1.5), ("irate", 1.5), ("crate", 1.0)],
            &candidates,
        );

        assert_eq!(
            Strategy::BestAnswer.select(&info, &candidates),
            words(&["grape", "irate"])
        );
    }

    #[test]
    fn best_answer_with_no_scored_candidates_is_empty() {
        let info = table(&[("slate", 3.0)], &[]);
        assert!(
            Strategy::BestAnswer
                .select(&info, &words(&["grape"]))
                .is_empty()
        );
    }

    #[test]
    fn random_answer_ignores_information() {
        let candidates = words(&["grape", "irate", "crate"]);
        let info = table(&[("slate", 3.0)], &candidates);

        assert_eq!(Strategy::RandomAnswer.select(&info, &candidates), candidates);
        assert!(!Strategy::RandomAnswer.uses_information());
    }

    #[test]
    fn last_candidate_wins_when_nothing_is_informative() {
        let candidates = words(&["crane"]);
        let info = table(&[("crane", 0.0), ("slate", 0.0)], &candidates);

        assert_eq!(
            Strategy::BestGuess.select(&info, &candidates),
            words(&["crane"])
        );
        assert_eq!(
            Strategy::BestAnswer.select(&info, &candidates),
            words(&["crane"])
        );
    }

    #[test]
    fn parse_known_names() {
        assert_eq!("best_answer".parse::<Strategy>(), Ok(Strategy::BestAnswer));
        assert_eq!("best-guess".parse::<Strategy>(), Ok(Strategy::BestGuess));
        assert_eq!("random_answer".parse::<Strategy>(), Ok(Strategy::RandomAnswer));

        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(
            "best_info".parse::<Strategy>(),
            Err(InputError::UnknownStrategy("best_info".to_string()))
        );
        assert!("".parse::<Strategy>().is_err());
        assert!("BEST_GUESS".parse::<Strategy>().is_err());
    }

    #[test]
    fn choose_guess_is_reproducible_with_a_seed() {
        let options = words(&["crane", "grace", "grate", "crate", "irate"]);

        let first = choose_guess(&options, &mut StdRng::seed_from_u64(7));
        let second = choose_guess(&options, &mut StdRng::seed_from_u64(7));

        assert_eq!(first, second);
        assert!(options.contains(&first.unwrap()));
        assert_eq!(choose_guess(&[], &mut StdRng::seed_from_u64(7)), None);
    }
}
