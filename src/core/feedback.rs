//! Guess feedback scoring and representation
//!
//! Feedback holds one marker per guess position:
//! - Correct: right color in the right position
//! - `WrongLocation`: the color is in the secret, but elsewhere
//! - Incorrect: the color is absent, or the guess holds more of it than the secret

use super::{CODE_LENGTH, Code};
use rustc_hash::FxHashMap;

/// Feedback for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Correct,
    WrongLocation,
    Incorrect,
}

/// Feedback for a whole guess, aligned with the guess positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Marker; CODE_LENGTH]);

impl Feedback {
    /// All pegs correct (the code is broken)
    pub const SOLVED: Self = Self([Marker::Correct; CODE_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(markers: [Marker; CODE_LENGTH]) -> Self {
        Self(markers)
    }

    #[inline]
    #[must_use]
    pub const fn markers(&self) -> &[Marker; CODE_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn marker_at(&self, position: usize) -> Marker {
        self.0[position]
    }

    /// Check if every position is Correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0 == Self::SOLVED.0
    }

    #[must_use]
    pub fn count(&self, marker: Marker) -> usize {
        self.0.iter().filter(|&&m| m == marker).count()
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(Marker::Correct)
    }

    #[must_use]
    pub fn count_wrong_location(&self) -> usize {
        self.count(Marker::WrongLocation)
    }

    /// Score `guess` against `secret`
    ///
    /// Duplicate colors are handled as a multiset: a color can earn at most as
    /// many Correct + `WrongLocation` markers as it has pegs in the secret.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and consume their color
    /// 2. Second pass: mark remaining positions `WrongLocation` while the
    ///    secret still has unconsumed pegs of that color
    /// 3. Everything else stays Incorrect
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback, Marker};
    ///
    /// let secret: Code = "red red blue green".parse().unwrap();
    /// let guess: Code = "red red red red".parse().unwrap();
    ///
    /// let feedback = Feedback::score(&secret, &guess);
    /// assert_eq!(
    ///     feedback.markers(),
    ///     &[Marker::Correct, Marker::Correct, Marker::Incorrect, Marker::Incorrect]
    /// );
    /// ```
    #[must_use]
    pub fn score(secret: &Code, guess: &Code) -> Self {
        let mut result = [Marker::Incorrect; CODE_LENGTH];
        let totals = secret.color_counts();
        let mut consumed: FxHashMap<_, u8> = FxHashMap::default();

        // First pass: exact position matches
        for (i, marker) in result.iter_mut().enumerate() {
            let color = guess.color_at(i);
            if color == secret.color_at(i) {
                *marker = Marker::Correct;
                *consumed.entry(color).or_insert(0) += 1;
            }
        }

        // Second pass: right color, wrong position
        for (i, marker) in result.iter_mut().enumerate() {
            if *marker == Marker::Correct {
                continue;
            }
            let color = guess.color_at(i);
            let Some(&total) = totals.get(&color) else {
                continue;
            };
            let used = consumed.entry(color).or_insert(0);
            if *used < total {
                *marker = Marker::WrongLocation;
                *used += 1;
            }
        }

        Self(result)
    }
}
