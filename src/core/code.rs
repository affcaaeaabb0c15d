//! Secret and guess codes
//!
//! A Code is an ordered row of four colors. Colors may repeat.

use super::Color;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Number of pegs in every code
pub const CODE_LENGTH: usize = 4;

/// An immutable row of four colors
///
/// Used for the secret, for every guess, and for computer suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Color; CODE_LENGTH]);

/// Error type for rejected codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// Wrong number of tokens (carries the count received)
    InvalidLength(usize),
    /// A token that is not in the palette
    InvalidColor(String),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Please guess exactly {CODE_LENGTH} choices, got {len}")
            }
            Self::InvalidColor(token) => {
                let names: Vec<&str> = Color::ALL.iter().map(|c| c.name()).collect();
                write!(
                    f,
                    "'{token}' is not a color. Please choose only: {}",
                    names.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }

    /// Build a Code from sanitized lowercase tokens
    ///
    /// The length is checked before any token is looked up, so a short row of
    /// bad colors reports `InvalidLength`.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The token count is not exactly 4
    /// - Any token is not a palette color
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, CodeError};
    ///
    /// let code = Code::validate(&["red", "green", "blue", "yellow"]).unwrap();
    /// assert_eq!(code.to_string(), "red green blue yellow");
    ///
    /// assert_eq!(Code::validate(&["red"]), Err(CodeError::InvalidLength(1)));
    /// ```
    pub fn validate<S: AsRef<str>>(tokens: &[S]) -> Result<Self, CodeError> {
        if tokens.len() != CODE_LENGTH {
            return Err(CodeError::InvalidLength(tokens.len()));
        }

        let mut colors = [Color::Red; CODE_LENGTH];
        for (slot, token) in colors.iter_mut().zip(tokens) {
            let token = token.as_ref();
            *slot = Color::from_token(token)
                .ok_or_else(|| CodeError::InvalidColor(token.to_string()))?;
        }

        Ok(Self(colors))
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    /// Get the color at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn color_at(&self, position: usize) -> Color {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.0.contains(&color)
    }

    /// How many pegs carry this color
    #[must_use]
    pub fn count_of(&self, color: Color) -> usize {
        self.0.iter().filter(|&&c| c == color).count()
    }

    /// Occurrences of each color present in the code
    pub(crate) fn color_counts(&self) -> FxHashMap<Color, u8> {
        let mut counts = FxHashMap::default();
        for &color in &self.0 {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = CodeError;

    /// Parse whitespace-separated lowercase color names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        Self::validate(&tokens)
    }
}
