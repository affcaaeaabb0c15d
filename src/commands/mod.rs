//! Command implementations

pub mod benchmark;
pub mod score;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use score::{ScoreResult, score_codes};
pub use simple::{SessionOutcome, play_session, run_simple};
pub use solve::{SolveResult, solve_secret};
