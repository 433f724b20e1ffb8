//! Command implementations

pub mod analyze;
pub mod precompute;
pub mod simulate;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use precompute::{compute_starting_table, load_or_compute_starting_table, run_precompute};
pub use simulate::{RunSummary, SimulateConfig, run_simulations};
pub use solve::{DEFAULT_STRATEGIES, SolveReport, solve_board};
