//! Mastermind
//!
//! The four-peg code-breaking game for the terminal. Play either side against
//! the computer in a full-screen TUI or a line-based prompt, or run the
//! computer guesser headless.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind::core::{Code, Feedback};
//!
//! let secret: Code = "red red blue white".parse().unwrap();
//! let guess: Code = "red blue red green".parse().unwrap();
//!
//! let feedback = Feedback::score(&secret, &guess);
//! println!("{} right, {} misplaced", feedback.count_correct(), feedback.count_wrong_location());
//! ```

// Core domain types
pub mod core;

// Rounds, turns and sides
pub mod game;

// Computer players
pub mod solver;

// Line input and retry prompts
pub mod input;

// Session settings
pub mod config;

// Diagnostics
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
