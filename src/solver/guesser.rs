//! Feedback-narrowing computer guesser
//!
//! Opens with a random code. After that it looks at the most recent turn only:
//! - Correct positions keep their color
//! - Colors marked `WrongLocation` go into a pool
//! - Every other position takes a pool color (without replacement), or a
//!   random palette color once the pool is empty
//!
//! Older turns are ignored, so the guesser can repeat itself and is not
//! guaranteed to converge.

use super::pool::ColorPool;
use super::random::RandomCodeGenerator;
use super::strategy::Strategy;
use crate::core::{CODE_LENGTH, Code, Color, Marker, Rules};
use crate::game::HistoryEntry;
use rand::Rng;
use rand::rngs::StdRng;

/// The computer's code breaker
#[derive(Debug, Clone)]
pub struct ComputerGuesser<R = StdRng> {
    generator: RandomCodeGenerator<R>,
}

impl ComputerGuesser<StdRng> {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            generator: RandomCodeGenerator::from_seed(seed),
        }
    }
}

impl<R: Rng> ComputerGuesser<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self::with_rules(rng, Rules::STANDARD)
    }

    #[must_use]
    pub const fn with_rules(rng: R, rules: Rules) -> Self {
        Self {
            generator: RandomCodeGenerator::with_rules(rng, rules),
        }
    }

    fn narrow(&mut self, last: &HistoryEntry) -> Code {
        let mut pinned: [Option<Color>; CODE_LENGTH] = [None; CODE_LENGTH];
        let mut pool = ColorPool::new();

        for (i, marker) in last.feedback.markers().iter().enumerate() {
            match marker {
                Marker::Correct => pinned[i] = Some(last.guess.color_at(i)),
                Marker::WrongLocation => pool.push(last.guess.color_at(i)),
                Marker::Incorrect => {}
            }
        }

        let mut colors = [Color::Red; CODE_LENGTH];
        for (slot, pin) in colors.iter_mut().zip(pinned) {
            *slot = match pin {
                Some(color) => color,
                None => match pool.draw(self.generator.rng_mut()) {
                    Some(color) => color,
                    None => self.generator.random_color(),
                },
            };
        }

        Code::new(colors)
    }
}

impl<R: Rng> Strategy for ComputerGuesser<R> {
    fn next_guess(&mut self, history: &[HistoryEntry]) -> Code {
        let guess = match history.last() {
            None => self.generator.generate(),
            Some(last) => self.narrow(last),
        };
        tracing::debug!(turn = history.len() + 1, guess = %guess, "computer guess");
        guess
    }

    fn name(&self) -> &'static str {
        "narrowing"
    }
}
