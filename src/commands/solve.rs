//! Board solving command
//!
//! Reads the feedback a player has seen so far and reports what is left and
//! what to guess next.

use crate::core::{Board, Word};
use crate::solver::{FeedbackSource, GameState, GuessInformation, Solver, SolverError, Strategy};

/// Strategies reported when none are requested
pub const DEFAULT_STRATEGIES: [Strategy; 2] = [Strategy::BestGuess, Strategy::BestAnswer];

/// What the solver makes of a board
#[derive(Debug, Clone)]
pub enum SolveReport {
    /// A guess on the board received all-green feedback
    Solved { answer: Word, turns: usize },
    /// No word in the universe fits the board
    Exhausted { board: Board },
    /// Still open
    InProgress(Box<Analysis>),
}

/// Ranking and suggestions for an open board
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Possible answers, in universe order
    pub candidates: Vec<Word>,
    /// Every universe word ranked against the candidates
    pub information: GuessInformation,
    /// Next-guess options per requested strategy
    pub suggestions: Vec<(Strategy, Vec<Word>)>,
}

/// Work out the state of `board` and, if it is open, rank the next move
///
/// `starting` is the saved first-move table, used instead of recomputing
/// the ranking when the board is empty.
///
/// # Errors
/// Propagates feedback lookup failures, and rejects boards that continue
/// after a solved observation.
pub fn solve_board<F: FeedbackSource>(
    solver: &Solver<'_, F>,
    board: &Board,
    strategies: &[Strategy],
    starting: Option<&GuessInformation>,
) -> Result<SolveReport, SolverError> {
    let game = solver.replay(board)?;

    match game.state() {
        GameState::Solved => {
            let answer = board.solution().ok_or(SolverError::GameOver(game.state()))?;
            return Ok(SolveReport::Solved {
                answer,
                turns: game.turns(),
            });
        }
        GameState::Exhausted => {
            return Ok(SolveReport::Exhausted {
                board: board.clone(),
            });
        }
        GameState::NotStarted | GameState::InProgress => {}
    }

    let information = match (game.state(), starting) {
        (GameState::NotStarted, Some(table)) => table.clone(),
        _ => solver.rank(&game)?,
    };

    let suggestions = strategies
        .iter()
        .map(|&strategy| (strategy, strategy.select(&information, game.candidates())))
        .collect();

    Ok(SolveReport::InProgress(Box::new(Analysis {
        candidates: game.candidates().to_vec(),
        information,
        suggestions,
    })))
}
