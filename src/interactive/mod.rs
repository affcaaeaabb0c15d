//! Interactive TUI mode
//!
//! Full-screen game built on ratatui: choose a side, then play rounds
//! back to back with a running tally.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
pub use rendering::{peg_color, ui};
