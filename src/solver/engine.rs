//! Game engine
//!
//! Drives one game at a time: records observations, narrows the candidates,
//! ranks guesses, and asks a strategy for the next move. The same engine
//! serves the interactive solver (feedback supplied by the player) and the
//! simulator (feedback graded against a known secret).

use super::entropy::{self, GuessInformation};
use super::filter;
use super::strategy::{Strategy, choose_guess};
use super::{DirectGrader, FeedbackSource, SolverError};
use crate::core::{Board, Observation, Word};
use rand::Rng;
use std::fmt;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// No guesses yet
    NotStarted,
    /// Guesses made, answer not yet found
    InProgress,
    /// A guess received all-green feedback
    Solved,
    /// The feedback rules out every word in the universe
    Exhausted,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Solved => "solved",
            Self::Exhausted => "no consistent candidates",
        })
    }
}

/// State of one game: its board and the words still in play
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    candidates: Vec<Word>,
    state: GameState,
}

impl Game {
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Words consistent with every observation so far
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Number of guesses made
    #[must_use]
    pub fn turns(&self) -> usize {
        self.board.len()
    }
}

/// The next-move recommendation for a game
#[derive(Debug, Clone)]
pub struct Suggestion {
    /// Ranking of the whole universe, absent for strategies that ignore it
    pub information: Option<GuessInformation>,
    /// Guesses to pick from uniformly at random
    pub options: Vec<Word>,
}

/// A finished simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub secret: Word,
    pub board: Board,
    pub state: GameState,
}

impl GameRecord {
    #[must_use]
    pub fn turns(&self) -> usize {
        self.board.len()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == GameState::Solved
    }
}

/// Main Wordle solver
///
/// Holds the word universe (used both as guess pool and initial answer set)
/// and the feedback source. Games are independent values, so one solver can
/// drive any number of them, concurrently if the source allows.
pub struct Solver<'a, F: FeedbackSource = DirectGrader> {
    universe: &'a [Word],
    source: F,
}

impl<'a> Solver<'a> {
    /// Solver that grades feedback on demand
    #[must_use]
    pub const fn new(universe: &'a [Word]) -> Self {
        Self::with_source(universe, DirectGrader)
    }
}

impl<'a, F: FeedbackSource> Solver<'a, F> {
    /// Solver that takes feedback from `source` (e.g. a [`super::PrecomputeCache`])
    #[must_use]
    pub const fn with_source(universe: &'a [Word], source: F) -> Self {
        Self { universe, source }
    }

    #[must_use]
    pub const fn universe(&self) -> &'a [Word] {
        self.universe
    }

    #[must_use]
    pub const fn source(&self) -> &F {
        &self.source
    }

    /// A game with an empty board and the whole universe in play
    #[must_use]
    pub fn new_game(&self) -> Game {
        Game {
            board: Board::new(),
            candidates: self.universe.to_vec(),
            state: GameState::NotStarted,
        }
    }

    /// Words in the universe consistent with `board`
    ///
    /// # Errors
    /// `SolverError::NoConsistentCandidates` if no word fits the board.
    pub fn candidates(&self, board: &Board) -> Result<Vec<Word>, SolverError> {
        filter::filter(board, self.universe, &self.source)
    }

    /// Rebuild a game from a board someone else played
    ///
    /// An inconsistent board yields a game in the `Exhausted` state rather
    /// than an error. Observations after the board became inconsistent are
    /// kept on the board but not applied.
    ///
    /// # Errors
    /// `SolverError::GameOver` if observations follow an all-green one, plus
    /// feedback lookup failures.
    pub fn replay(&self, board: &Board) -> Result<Game, SolverError> {
        let mut game = self.new_game();
        for observation in board {
            if game.state == GameState::Exhausted {
                game.board.push(*observation);
                continue;
            }
            self.observe(&mut game, *observation)?;
        }
        Ok(game)
    }

    /// Record an observation and move the game forward
    ///
    /// All-green feedback solves the game if the guess is still a candidate
    /// and exhausts it otherwise. Any other feedback narrows the candidates,
    /// and an empty result exhausts the game.
    ///
    /// # Errors
    /// `SolverError::GameOver` if the game had already ended, plus feedback
    /// lookup failures.
    pub fn observe(
        &self,
        game: &mut Game,
        observation: Observation,
    ) -> Result<GameState, SolverError> {
        if game.state.is_terminal() {
            return Err(SolverError::GameOver(game.state));
        }

        game.board.push(observation);

        if observation.feedback.is_perfect() {
            if game.candidates.contains(&observation.guess) {
                game.candidates = vec![observation.guess];
                game.state = GameState::Solved;
            } else {
                game.candidates.clear();
                game.state = GameState::Exhausted;
            }
            return Ok(game.state);
        }

        game.candidates = filter::apply(&observation, &game.candidates, &self.source)?;
        game.state = if game.candidates.is_empty() {
            GameState::Exhausted
        } else {
            GameState::InProgress
        };

        Ok(game.state)
    }

    /// Rank every universe word against the game's remaining candidates
    ///
    /// # Errors
    /// `SolverError::GameOver` for a finished game, plus feedback lookup
    /// failures.
    pub fn rank(&self, game: &Game) -> Result<GuessInformation, SolverError> {
        if game.state.is_terminal() {
            return Err(SolverError::GameOver(game.state));
        }
        entropy::estimate(self.universe, &game.candidates, &self.source)
    }

    /// Recommend next guesses for `game` under `strategy`
    ///
    /// # Errors
    /// `SolverError::GameOver` for a finished game, plus feedback lookup
    /// failures.
    pub fn suggest(&self, game: &Game, strategy: Strategy) -> Result<Suggestion, SolverError> {
        if game.state.is_terminal() {
            return Err(SolverError::GameOver(game.state));
        }

        if !strategy.uses_information() {
            return Ok(Suggestion {
                information: None,
                options: game.candidates.clone(),
            });
        }

        let information = self.rank(game)?;
        let options = strategy.select(&information, &game.candidates);

        Ok(Suggestion {
            information: Some(information),
            options,
        })
    }

    /// Play a full game against `secret`, opening with `opening`
    ///
    /// Every later guess is drawn with `rng` from the strategy's options.
    /// The game ends when solved or exhausted; since each informative guess
    /// strictly shrinks the candidates, it always ends.
    ///
    /// # Errors
    /// Feedback lookup failures. `SolverError::NoConsistentCandidates` if the
    /// strategy ever offers no option.
    pub fn play<R: Rng + ?Sized>(
        &self,
        secret: &Word,
        opening: Word,
        strategy: Strategy,
        rng: &mut R,
    ) -> Result<GameRecord, SolverError> {
        let mut game = self.new_game();
        let mut guess = opening;

        loop {
            let feedback = self.source.feedback(secret, &guess)?;
            let state = self.observe(&mut game, Observation::new(guess, feedback))?;
            if state.is_terminal() {
                break;
            }

            let suggestion = self.suggest(&game, strategy)?;
            guess = choose_guess(&suggestion.options, rng)
                .ok_or(SolverError::NoConsistentCandidates)?;
        }

        Ok(GameRecord {
            secret: *secret,
            board: game.board,
            state: game.state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::solver::PrecomputeCache;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| word(w)).collect()
    }

    fn vocabulary() -> Vec<Word> {
        words(&["crane", "grace", "grate", "crate"])
    }

    fn wider_vocabulary() -> Vec<Word> {
        words(&[
            "crane", "grace", "grate", "crate", "irate", "slate", "trace", "raise", "child",
            "couch", "speed", "erase", "robot", "floor", "abbey", "kebab",
        ])
    }

    #[test]
    fn solved_in_one_turn_when_opening_is_the_secret() {
        let universe = vocabulary();
        let solver = Solver::new(&universe);
        let crane = word("crane");

        let record = solver
            .play(&crane, crane, Strategy::BestGuess, &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(record.state, GameState::Solved);
        assert_eq!(record.turns(), 1);
        assert_eq!(record.board.observations()[0].feedback.to_string(), "GGGGG");
    }

    #[test]
    fn new_game_starts_with_whole_universe() {
        let universe = vocabulary();
        let solver = Solver::new(&universe);
        let game = solver.new_game();

        assert_eq!(game.state(), GameState::NotStarted);
        assert_eq!(game.candidates(), universe.as_slice());
        assert_eq!(game.turns(), 0);
    }

    #[test]
    fn observe_narrows_candidates() {
        let universe = vocabulary();
        let solver = Solver::new(&universe);
        let mut game = solver.new_game();

        let state = solver
            .observe(&mut game, Observation::graded(&word("crane"), word("grate")))
            .unwrap();

        assert_eq!(state, GameState::InProgress);
        assert_eq!(game.candidates(), words(&["crane"]).as_slice());
    }

    #[test]
    fn inconsistent_board_is_exhausted_not_solved() {
        let universe = wider_vocabulary();
        let solver = Solver::new(&universe);
        // C and G both claimed green in the first position
        let board = Board::parse_tokens(&["crane", "GXXXX", "grace", "GXXXX"]).unwrap();

        let game = solver.replay(&board).unwrap();
        assert_eq!(game.state(), GameState::Exhausted);
        assert!(game.candidates().is_empty());
        assert_eq!(
            solver.candidates(&board),
            Err(SolverError::NoConsistentCandidates)
        );
    }

    #[test]
    fn all_green_after_a_contradiction_is_exhausted() {
        let universe = wider_vocabulary();
        let solver = Solver::new(&universe);
        // CRANE GXXXX leaves CHILD and COUCH, which rules GRACE out
        let board = Board::parse_tokens(&["crane", "GXXXX", "grace", "GGGGG"]).unwrap();

        let game = solver.replay(&board).unwrap();
        assert_eq!(game.state(), GameState::Exhausted);
        assert!(game.candidates().is_empty());
        assert!(solver.candidates(&board).is_err());
    }

    #[test]
    fn board_exhausted_early_keeps_later_observations() {
        let universe = vocabulary();
        let solver = Solver::new(&universe);
        // Nothing in the vocabulary fits CRANE GXXXX
        let board = Board::parse_tokens(&["crane", "GXXXX", "slate", "XXXXX"]).unwrap();

        let game = solver.replay(&board).unwrap();
        assert_eq!(game.state(), GameState::Exhausted);
        assert_eq!(game.board(), &board);
        assert_eq!(game.turns(), 2);
    }

    #[test]
    fn observe_all_green_for_ruled_out_word_exhausts() {
        let universe = vocabulary();
        let solver = Solver::new(&universe);
        let mut game = solver.new_game();
        solver
            .observe(&mut game, Observation::graded(&word("crane"), word("grate")))
            .unwrap();

        let state = solver
            .observe(&mut game, Observation::new(word("crate"), Feedback::PERFECT))
            .unwrap();
        assert_eq!(state, GameState::Exhausted);
        assert!(game.candidates().is_empty());
    }

    #[test]
    fn finished_games_reject_further_moves() {
        let universe = vocabulary();
        let solver = Solver::new(&universe);
        let board = Board::parse_tokens(&["grate", "XGGXG", "crane", "GGGGG"]).unwrap();

        let mut game = solver.replay(&board).unwrap();
        assert_eq!(game.state(), GameState::Solved);
        assert_eq!(game.board().solution(), Some(word("crane")));

        assert_eq!(
            solver.suggest(&game, Strategy::BestGuess).unwrap_err(),
            SolverError::GameOver(GameState::Solved)
        );
        assert_eq!(
            solver
                .observe(&mut game, Observation::new(word("crate"), Feedback::PERFECT))
                .unwrap_err(),
            SolverError::GameOver(GameState::Solved)
        );
    }

    #[test]
    fn replay_rejects_observations_after_the_end() {
        let universe = vocabulary();
        let solver = Solver::new(&universe);
        let board = Board::parse_tokens(&["crane", "GGGGG", "grace", "XGGYG"]).unwrap();

        assert_eq!(
            solver.replay(&board).unwrap_err(),
            SolverError::GameOver(GameState::Solved)
        );
    }

    #[test]
    fn suggest_random_answer_offers_candidates_without_ranking() {
        let universe = vocabulary();
        let solver = Solver::new(&universe);
        let mut game = solver.new_game();
        solver
            .observe(&mut game, Observation::graded(&word("crate"), word("crane")))
            .unwrap();

        let suggestion = solver.suggest(&game, Strategy::RandomAnswer).unwrap();
        assert!(suggestion.information.is_none());
        assert_eq!(suggestion.options, game.candidates());
    }

    #[test]
    fn suggest_best_answer_offers_candidates_only() {
        let universe = wider_vocabulary();
        let solver = Solver::new(&universe);
        let game = solver
            .replay(&Board::from(vec![Observation::graded(
                &word("grate"),
                word("speed"),
            )]))
            .unwrap();

        let suggestion = solver.suggest(&game, Strategy::BestAnswer).unwrap();
        let info = suggestion.information.unwrap();
        assert_eq!(info.len(), universe.len());
        assert!(!suggestion.options.is_empty());
        for option in &suggestion.options {
            assert!(game.candidates().contains(option));
        }
    }

    #[test]
    fn every_strategy_solves_every_secret() {
        let universe = wider_vocabulary();
        let solver = Solver::new(&universe);
        let mut rng = StdRng::seed_from_u64(42);

        for strategy in Strategy::ALL {
            for secret in &universe {
                let record = solver
                    .play(secret, word("slate"), strategy, &mut rng)
                    .unwrap();

                assert!(record.is_solved(), "{strategy} failed on {secret}");
                assert_eq!(record.board.solution(), Some(*secret));
                assert!(record.turns() <= universe.len());
            }
        }
    }

    #[test]
    fn cached_play_matches_direct_play() {
        let universe = wider_vocabulary();
        let cache = PrecomputeCache::build(&universe);
        let direct = Solver::new(&universe);
        let cached = Solver::with_source(&universe, &cache);

        for secret in &universe {
            let a = direct
                .play(secret, word("crane"), Strategy::BestGuess, &mut StdRng::seed_from_u64(9))
                .unwrap();
            let b = cached
                .play(secret, word("crane"), Strategy::BestGuess, &mut StdRng::seed_from_u64(9))
                .unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn secret_outside_universe_exhausts() {
        let universe = vocabulary();
        let solver = Solver::new(&universe);

        let record = solver
            .play(
                &word("zebra"),
                word("crane"),
                Strategy::BestAnswer,
                &mut StdRng::seed_from_u64(3),
            )
            .unwrap();
        assert_eq!(record.state, GameState::Exhausted);
    }
}
