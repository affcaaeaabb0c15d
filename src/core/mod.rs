//! Core domain types for Mastermind
//!
//! Colors, codes, feedback scoring and the fixed rules. Everything here is
//! pure and free of I/O.

mod code;
mod color;
mod feedback;
mod rules;

pub use code::{CODE_LENGTH, Code, CodeError};
pub use color::Color;
pub use feedback::{Feedback, Marker};
pub use rules::{MAX_TURNS, Rules};
