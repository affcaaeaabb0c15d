//! Random code generation
//!
//! Four independent uniform draws from the palette, with replacement. Used for
//! the computer's secret and for its opening guess.

use crate::core::{CODE_LENGTH, Code, Color, Rules};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random code generator
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator<R = StdRng> {
    rng: R,
    rules: Rules,
}

impl RandomCodeGenerator<StdRng> {
    /// Reproducible generator for tests and `--seed`
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomCodeGenerator<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self::with_rules(rng, Rules::STANDARD)
    }

    #[must_use]
    pub const fn with_rules(rng: R, rules: Rules) -> Self {
        Self { rng, rules }
    }

    /// Draw a full code
    pub fn generate(&mut self) -> Code {
        let mut colors = [Color::Red; CODE_LENGTH];
        for slot in &mut colors {
            *slot = self.random_color();
        }
        Code::new(colors)
    }

    /// Draw one palette color
    pub fn random_color(&mut self) -> Color {
        let palette = self.rules.palette();
        palette[self.rng.random_range(0..palette.len())]
    }

    pub(crate) fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_codes() {
        let mut a = RandomCodeGenerator::from_seed(42);
        let mut b = RandomCodeGenerator::from_seed(42);
        for _ in 0..20 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn codes_use_only_palette_colors() {
        let mut generator = RandomCodeGenerator::from_seed(7);
        for _ in 0..200 {
            let code = generator.generate();
            assert!(code.colors().iter().all(|c| Color::ALL.contains(c)));
        }
    }

    #[test]
    fn every_color_shows_up_in_every_position() {
        let mut generator = RandomCodeGenerator::from_seed(1234);
        let mut seen = [[false; 6]; CODE_LENGTH];
        for _ in 0..500 {
            let code = generator.generate();
            for (position, color) in code.colors().iter().enumerate() {
                let index = Color::ALL.iter().position(|c| c == color).unwrap();
                seen[position][index] = true;
            }
        }
        assert!(seen.iter().flatten().all(|&s| s));
    }

    #[test]
    fn repeats_are_possible() {
        let mut generator = RandomCodeGenerator::from_seed(99);
        let has_repeat = (0..200).any(|_| {
            let code = generator.generate();
            Color::ALL.iter().any(|&c| code.count_of(c) > 1)
        });
        assert!(has_repeat);
    }
}
