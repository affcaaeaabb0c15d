//! Fixed game rules
//!
//! One immutable value carries the palette, the code length and the turn cap.
//! Components take it by reference instead of reading global tables.

use super::{CODE_LENGTH, Color};

/// Maximum number of guesses in a round
pub const MAX_TURNS: usize = 12;

/// Palette and limits shared by every component of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    palette: [Color; 6],
    max_turns: usize,
}

impl Rules {
    /// The classic rules: six colors, four pegs, twelve turns
    pub const STANDARD: Self = Self {
        palette: Color::ALL,
        max_turns: MAX_TURNS,
    };

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &[Color] {
        &self.palette
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        CODE_LENGTH
    }

    #[inline]
    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rules() {
        let rules = Rules::default();
        assert_eq!(rules, Rules::STANDARD);
        assert_eq!(rules.palette().len(), 6);
        assert_eq!(rules.code_length(), 4);
        assert_eq!(rules.max_turns(), 12);
    }
}
