//! Which side the human plays

use std::fmt;

/// The human player's side for a round
///
/// The other side is always played by the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Human writes the secret, computer guesses
    Mastermind,
    /// Computer writes the secret, human guesses
    Guesser,
}

impl Role {
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "mastermind" => Some(Self::Mastermind),
            "guesser" => Some(Self::Guesser),
            _ => None,
        }
    }

    /// Whether the secret is typed by the human
    #[inline]
    #[must_use]
    pub const fn human_sets_secret(self) -> bool {
        matches!(self, Self::Mastermind)
    }

    /// Whether guesses are typed by the human
    #[inline]
    #[must_use]
    pub const fn human_guesses(self) -> bool {
        matches!(self, Self::Guesser)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mastermind => f.write_str("mastermind"),
            Self::Guesser => f.write_str("guesser"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_are_exclusive() {
        assert!(Role::Mastermind.human_sets_secret());
        assert!(!Role::Mastermind.human_guesses());
        assert!(Role::Guesser.human_guesses());
        assert!(!Role::Guesser.human_sets_secret());
    }

    #[test]
    fn from_token() {
        assert_eq!(Role::from_token("mastermind"), Some(Role::Mastermind));
        assert_eq!(Role::from_token("guesser"), Some(Role::Guesser));
        assert_eq!(Role::from_token("referee"), None);
        assert_eq!(Role::from_token(&Role::Guesser.to_string()), Some(Role::Guesser));
    }
}
