//! Code peg colors
//!
//! The palette is closed: six colors, parsed from their lowercase names.

use std::fmt;
use std::str::FromStr;

/// A single peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Violet,
    White,
}

impl Color {
    /// Every color in palette order
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Violet,
        Self::White,
    ];

    /// Lowercase token used for input and display
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Violet => "violet",
            Self::White => "white",
        }
    }

    /// Uppercase initial, unique across the palette
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Blue => 'B',
            Self::Violet => 'V',
            Self::White => 'W',
        }
    }

    /// Look up a color by its exact lowercase token
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.name() == token)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| format!("Unknown color: {s}"))
    }
}
