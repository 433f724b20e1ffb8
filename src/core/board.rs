//! Game boards
//!
//! A board is the chronological list of (guess, feedback) observations.

use super::{Feedback, InputError, Word};
use std::fmt;

/// One guess and the feedback it received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Observation {
    pub guess: Word,
    pub feedback: Feedback,
}

impl Observation {
    #[must_use]
    pub const fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// Grade `guess` against `secret` and record the result
    #[must_use]
    pub fn graded(secret: &Word, guess: Word) -> Self {
        Self::new(guess, Feedback::grade(secret, &guess))
    }
}

/// Observations in the order the guesses were made
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board(Vec<Observation>);

impl Board {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse the flat token encoding: `guess feedback guess feedback ...`
    ///
    /// Guesses are case-normalized; feedback must be upper-case `G`/`Y`/`X`.
    ///
    /// # Errors
    /// Returns `InputError::UnpairedBoard` for an odd token count, otherwise
    /// the first word or feedback validation error encountered.
    ///
    /// # Examples
    /// ```
    /// use wordle_strategies::core::Board;
    ///
    /// let board = Board::parse_tokens(&["adieu", "XYXXY", "bound", "XGGGG"]).unwrap();
    /// assert_eq!(board.len(), 2);
    /// assert!(Board::parse_tokens(&["adieu"]).is_err());
    /// ```
    pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, InputError> {
        if tokens.len() % 2 != 0 {
            return Err(InputError::UnpairedBoard(tokens.len()));
        }

        tokens
            .chunks_exact(2)
            .map(|pair| -> Result<Observation, InputError> {
                let guess = Word::new(pair[0].as_ref())?;
                let feedback = pair[1].as_ref().parse()?;
                Ok(Observation::new(guess, feedback))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Flat token encoding, the inverse of [`Board::parse_tokens`]
    #[must_use]
    pub fn to_tokens(&self) -> Vec<String> {
        self.0
            .iter()
            .flat_map(|obs| [obs.guess.to_string(), obs.feedback.to_string()])
            .collect()
    }

    pub fn push(&mut self, observation: Observation) {
        self.0.push(observation);
    }

    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The guess that received all-green feedback, if any
    #[must_use]
    pub fn solution(&self) -> Option<Word> {
        self.0
            .iter()
            .find(|obs| obs.feedback.is_perfect())
            .map(|obs| obs.guess)
    }
}

impl From<Vec<Observation>> for Board {
    fn from(observations: Vec<Observation>) -> Self {
        Self(observations)
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_tokens().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tokens_normalizes_guesses() {
        let board = Board::parse_tokens(&["ADIEU", "XYXXY"]).unwrap();
        assert_eq!(board.observations()[0].guess.as_str(), "adieu");
        assert_eq!(board.observations()[0].feedback.to_string(), "XYXXY");
    }

    #[test]
    fn parse_tokens_empty_board() {
        let tokens: [&str; 0] = [];
        assert!(Board::parse_tokens(&tokens).unwrap().is_empty());
    }

    #[test]
    fn parse_tokens_rejects_odd_count() {
        assert_eq!(
            Board::parse_tokens(&["adieu", "XYXXY", "bound"]),
            Err(InputError::UnpairedBoard(3))
        );
    }

    #[test]
    fn parse_tokens_rejects_bad_tokens() {
        assert_eq!(
            Board::parse_tokens(&["adie", "XYXXY"]),
            Err(InputError::WordLength(4))
        );
        assert!(matches!(
            Board::parse_tokens(&["ad1eu", "XYXXY"]),
            Err(InputError::NonAlphabetic(_))
        ));
        assert_eq!(
            Board::parse_tokens(&["adieu", "XYXX"]),
            Err(InputError::FeedbackLength(4))
        );
        assert_eq!(
            Board::parse_tokens(&["adieu", "XYXXA"]),
            Err(InputError::FeedbackSymbol('A'))
        );
    }

    #[test]
    fn tokens_round_trip() {
        let tokens = ["adieu", "XYXXY", "bound", "XGGGG"];
        let board = Board::parse_tokens(&tokens).unwrap();
        assert_eq!(board.to_tokens(), tokens);
        assert_eq!(board.to_string(), "adieu XYXXY bound XGGGG");
    }

    #[test]
    fn solution_finds_perfect_feedback() {
        let secret = Word::new("crane").unwrap();
        let mut board = Board::new();
        board.push(Observation::graded(&secret, Word::new("grace").unwrap()));
        assert_eq!(board.solution(), None);

        board.push(Observation::graded(&secret, secret));
        assert_eq!(board.solution(), Some(secret));
        assert_eq!(board.len(), 2);
    }
}
