//! Terminal input handling
//!
//! Turns raw lines into sanitized tokens, detects the exit command and
//! re-prompts on invalid answers.

mod parse;
mod prompt;

pub use parse::{Command, EXIT_TOKEN, parse_line, parse_role, sanitize};
pub use prompt::{InputError, Prompted, Prompter};
