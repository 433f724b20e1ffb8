//! Wordle Strategies - CLI
//!
//! Suggests guesses for a Wordle board by expected information and compares
//! guessing strategies by simulating every possible secret.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_strategies::{
    commands::{
        DEFAULT_STRATEGIES, SimulateConfig, analyze_word, load_or_compute_starting_table,
        run_precompute, run_simulations, solve_board,
    },
    core::{Board, Word},
    output::{print_analysis_result, print_simulation_summary, print_solve_report},
    solver::{DirectGrader, Solver, Strategy},
    wordlists::load_words,
};

#[derive(Parser)]
#[command(
    name = "wordle_strategies",
    about = "Wordle solver and strategy simulator driven by expected information",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list: every valid five-letter word, whitespace separated
    #[arg(short = 'w', long, global = true, default_value = "data/wordle_words.txt")]
    words: PathBuf,

    /// Saved first-move information table (computed when missing)
    #[arg(long, global = true, default_value = "data/starting_guesses.json")]
    starting_guesses: PathBuf,

    /// Seed for random tie-breaking and random openings
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest the next guess for a board
    Solve {
        /// Board as guess/feedback pairs, e.g. `crane XGYXX slate XXGXY`
        /// (G green, Y yellow, X gray)
        board: Vec<String>,

        /// Number of ranked guesses and answers to show
        #[arg(short = 'n', long, default_value = "20")]
        top: usize,

        /// Strategies to suggest with: best_answer, best_guess, random_answer
        #[arg(short, long = "strategy")]
        strategies: Vec<String>,
    },

    /// Show how a single guess splits the word list
    Analyze {
        /// Word to analyze
        word: String,

        /// Number of largest partitions to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Compute and save the first-move information table
    Precompute,

    /// Play every word as the secret under each strategy and save the games
    Simulate {
        /// Directory for per-run JSON results
        #[arg(short, long)]
        results_dir: PathBuf,

        /// Repetitions per strategy
        #[arg(long, default_value = "10")]
        reps: usize,

        /// Strategies to simulate (default: all)
        #[arg(short, long = "strategy")]
        strategies: Vec<String>,

        /// Grade every pair directly instead of precomputing a feedback table
        #[arg(long)]
        no_cache: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            board,
            top,
            strategies,
        } => run_solve_command(&cli.words, &cli.starting_guesses, &board, top, &strategies),
        Commands::Analyze { word, top } => run_analyze_command(&cli.words, &word, top),
        Commands::Precompute => run_precompute_command(&cli.words, &cli.starting_guesses),
        Commands::Simulate {
            results_dir,
            reps,
            strategies,
            no_cache,
        } => {
            let config = SimulateConfig {
                results_dir,
                starting_guesses: cli.starting_guesses,
                reps,
                strategies: parse_strategies(&strategies, &Strategy::ALL)?,
                use_cache: !no_cache,
                seed: cli.seed.unwrap_or_else(rand::random),
            };
            run_simulate_command(&cli.words, &config)
        }
    }
}

/// Parse strategy names, falling back to `default` when none are given
fn parse_strategies(names: &[String], default: &[Strategy]) -> Result<Vec<Strategy>> {
    if names.is_empty() {
        return Ok(default.to_vec());
    }
    names
        .iter()
        .map(|name| name.parse::<Strategy>().map_err(anyhow::Error::from))
        .collect()
}

fn run_solve_command(
    words: &Path,
    starting_guesses: &Path,
    tokens: &[String],
    top: usize,
    strategy_names: &[String],
) -> Result<()> {
    // Reject malformed input before the word list is loaded
    let board = Board::parse_tokens(tokens)?;
    let strategies = parse_strategies(strategy_names, &DEFAULT_STRATEGIES)?;

    let universe = load_words(words)?;
    let solver = Solver::new(&universe);

    let starting = if board.is_empty() {
        Some(load_or_compute_starting_table(starting_guesses, &solver)?)
    } else {
        None
    };

    let report = solve_board(&solver, &board, &strategies, starting.as_ref())?;
    print_solve_report(&report, &board, top);
    Ok(())
}

fn run_analyze_command(words: &Path, word: &str, top: usize) -> Result<()> {
    let word = Word::new(word).with_context(|| format!("cannot analyze '{word}'"))?;
    let universe = load_words(words)?;

    let result = analyze_word(word, &universe, &DirectGrader, top)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_precompute_command(words: &Path, starting_guesses: &Path) -> Result<()> {
    let universe = load_words(words)?;
    run_precompute(starting_guesses, &Solver::new(&universe))?;
    Ok(())
}

fn run_simulate_command(words: &Path, config: &SimulateConfig) -> Result<()> {
    let universe = load_words(words)?;
    println!(
        "Simulating {} strategies × {} reps over {} secrets (seed {})",
        config.strategies.len(),
        config.reps,
        universe.len(),
        config.seed
    );

    let runs = run_simulations(&universe, config)?;
    print_simulation_summary(&runs);
    Ok(())
}
