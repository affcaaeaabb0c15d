//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::guesser::ComputerGuesser;
use super::random::RandomCodeGenerator;
use crate::core::Code;
use crate::game::HistoryEntry;
use rand::Rng;
use rand::rngs::StdRng;

/// A source of computer guesses
pub trait Strategy {
    /// Produce the next guess given every scored turn so far
    fn next_guess(&mut self, history: &[HistoryEntry]) -> Code;

    /// Short name for reports
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Feedback-narrowing guesser (default)
    Narrowing(ComputerGuesser),
    /// Ignores feedback entirely
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn next_guess(&mut self, history: &[HistoryEntry]) -> Code {
        match self {
            Self::Narrowing(s) => s.next_guess(history),
            Self::Random(s) => s.next_guess(history),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Narrowing(s) => s.name(),
            Self::Random(s) => s.name(),
        }
    }
}

impl StrategyType {
    /// Names accepted by `from_name`
    pub const NAMES: [&'static str; 2] = ["narrowing", "random"];

    /// Create strategy from name string
    ///
    /// Supported names: "narrowing", "random".
    /// Defaults to narrowing if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, rng: StdRng) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy::new(rng)),
            _ => Self::Narrowing(ComputerGuesser::new(rng)),
        }
    }
}

/// Random strategy
///
/// Draws a fresh random code every turn. Baseline for benchmarks.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R = StdRng> {
    generator: RandomCodeGenerator<R>,
}

impl<R: Rng> RandomStrategy<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self {
            generator: RandomCodeGenerator::new(rng),
        }
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn next_guess(&mut self, _history: &[HistoryEntry]) -> Code {
        self.generator.generate()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn from_name_selects_strategy() {
        assert!(matches!(
            StrategyType::from_name("random", rng(1)),
            StrategyType::Random(_)
        ));
        assert!(matches!(
            StrategyType::from_name("narrowing", rng(1)),
            StrategyType::Narrowing(_)
        ));
    }

    #[test]
    fn unknown_name_defaults_to_narrowing() {
        let strategy = StrategyType::from_name("minimax", rng(1));
        assert_eq!(strategy.name(), "narrowing");
    }

    #[test]
    fn names_match_from_name() {
        for name in StrategyType::NAMES {
            assert_eq!(StrategyType::from_name(name, rng(0)).name(), name);
        }
    }

    #[test]
    fn random_strategy_ignores_feedback() {
        let guess: Code = "red green blue yellow".parse().unwrap();
        let history = [HistoryEntry {
            guess,
            feedback: Feedback::SOLVED,
            turn: 1,
        }];

        let mut with_history = RandomStrategy::new(rng(9));
        let mut without = RandomStrategy::new(rng(9));
        assert_eq!(with_history.next_guess(&history), without.next_guess(&[]));
    }

    #[test]
    fn enum_dispatch_matches_inner_strategy() {
        let mut wrapped = StrategyType::from_name("narrowing", rng(4));
        let mut inner = ComputerGuesser::new(rng(4));
        assert_eq!(wrapped.next_guess(&[]), inner.next_guess(&[]));
    }
}
