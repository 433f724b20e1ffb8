//! Wordle feedback grading and representation
//!
//! Feedback is encoded base-3 in a single byte:
//! - 0 = Gray (letter not available in the secret)
//! - 1 = Yellow (letter in the secret, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! Each position contributes digit × 3^position, giving values 0-242.

use super::word::{WORD_LEN, letter_index};
use super::{InputError, Word};
use std::fmt;

/// Verdict for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Gray,
    Yellow,
    Green,
}

impl Mark {
    const fn digit(self) -> u8 {
        match self {
            Self::Gray => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Green,
            1 => Self::Yellow,
            _ => Self::Gray,
        }
    }

    /// Board-encoding symbol: G, Y or X
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Gray => 'X',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }
}

/// Feedback for one guess against one secret
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback(u8);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Number of distinct feedback values
    pub const COUNT: usize = 243;

    /// Create feedback from its raw base-3 value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Feedback value must be < 243");
        Self(value)
    }

    /// Get the raw value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if every position is green
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Grade `guess` against `secret`
    ///
    /// Greens are assigned first and consume their letter; yellows are then
    /// handed out left to right while unconsumed copies of the letter remain.
    /// A repeated guess letter beyond the copies left in the secret is gray.
    ///
    /// # Examples
    /// ```
    /// use wordle_strategies::core::{Feedback, Word};
    ///
    /// let secret = Word::new("child").unwrap();
    /// let guess = Word::new("couch").unwrap();
    ///
    /// // The second C finds no unconsumed C left in CHILD
    /// assert_eq!(Feedback::grade(&secret, &guess).to_string(), "GXXXY");
    /// ```
    #[must_use]
    pub fn grade(secret: &Word, guess: &Word) -> Self {
        let mut marks = [Mark::Gray; WORD_LEN];
        let mut available = secret.letter_counts();

        // Allow: Index needed to compare guess[i] and secret[i] and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            let letter = guess.letter_at(i);
            if letter == secret.letter_at(i) {
                marks[i] = Mark::Green;
                available[letter_index(letter)] -= 1;
            }
        }

        for (i, &letter) in guess.letters().iter().enumerate() {
            if marks[i] == Mark::Gray {
                let count = &mut available[letter_index(letter)];
                if *count > 0 {
                    marks[i] = Mark::Yellow;
                    *count -= 1;
                }
            }
        }

        Self::from_marks(marks)
    }

    /// Build feedback from per-position marks
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LEN]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for mark in marks {
            value += mark.digit() * multiplier;
            multiplier *= 3;
        }
        Self(value)
    }

    /// Per-position marks, left to right
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LEN] {
        let mut marks = [Mark::Gray; WORD_LEN];
        let mut val = self.0;
        for mark in &mut marks {
            *mark = Mark::from_digit(val % 3);
            val /= 3;
        }
        marks
    }

    /// Count the number of green positions
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Green).count()
    }

    /// Count the number of yellow positions
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Yellow).count()
    }

    /// Render as emoji squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .iter()
            .map(|mark| match mark {
                Mark::Green => '🟩',
                Mark::Yellow => '🟨',
                Mark::Gray => '⬜',
            })
            .collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = InputError;

    /// Parse the board encoding: exactly five of `G`, `Y`, `X`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != WORD_LEN {
            return Err(InputError::FeedbackLength(len));
        }

        let mut marks = [Mark::Gray; WORD_LEN];
        for (mark, ch) in marks.iter_mut().zip(s.chars()) {
            *mark = match ch {
                'G' => Mark::Green,
                'Y' => Mark::Yellow,
                'X' => Mark::Gray,
                other => return Err(InputError::FeedbackSymbol(other)),
            };
        }

        Ok(Self::from_marks(marks))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}
