//! Line sanitizing and command detection

use crate::game::Role;

/// Token that aborts the session from any prompt
pub const EXIT_TOKEN: &str = "exit";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Tokens(Vec<String>),
}

/// Lowercase, keep only `a-z` and spaces, split into tokens
///
/// # Examples
/// ```
/// use mastermind::input::sanitize;
///
/// assert_eq!(sanitize("Red, GREEN  blue!yellow"), vec!["red", "green", "blueyellow"]);
/// ```
#[must_use]
pub fn sanitize(line: &str) -> Vec<String> {
    let cleaned: String = line
        .to_lowercase()
        .chars()
        .filter(|&c| c.is_ascii_lowercase() || c == ' ')
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Sanitize a line and check for the exit token
#[must_use]
pub fn parse_line(line: &str) -> Command {
    let tokens = sanitize(line);
    if tokens.first().is_some_and(|t| t == EXIT_TOKEN) {
        Command::Exit
    } else {
        Command::Tokens(tokens)
    }
}

/// Read a role answer: exactly one token, `mastermind` or `guesser`
#[must_use]
pub fn parse_role(line: &str) -> Option<Role> {
    match sanitize(line).as_slice() {
        [token] => Role::from_token(token),
        _ => None,
    }
}
