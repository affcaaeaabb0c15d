//! Terminal output formatting
//!
//! Display utilities for the line-based game and CLI results.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_score_result, print_solve_result, write_board,
    write_round_result,
};
