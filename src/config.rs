//! Session configuration
//!
//! Built once from the command line and handed to each command. Randomness is
//! split into independent streams so the secret and the computer's guesses
//! never share a generator.

use crate::core::Rules;
use crate::solver::{RandomCodeGenerator, StrategyType};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Independent random streams derived from one seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RngStream {
    Secret = 0,
    Guesser = 1,
}

impl RngStream {
    const COUNT: u64 = 2;
}

/// Everything a command needs to set up rounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rules: Rules,
    /// Computer strategy name, see `StrategyType::from_name`
    pub strategy: String,
    /// Fixed seed for reproducible games; OS entropy when `None`
    pub seed: Option<u64>,
    /// Print the secret when the round starts
    pub reveal_secret: bool,
    /// Clear and redraw the screen after every turn
    pub redraw: bool,
    /// Cap on answers per prompt (`None` retries forever)
    pub max_attempts: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rules: Rules::STANDARD,
            strategy: "narrowing".to_string(),
            seed: None,
            reveal_secret: false,
            redraw: true,
            max_attempts: None,
        }
    }
}

impl GameConfig {
    /// Random generator for one stream
    #[must_use]
    pub fn rng(&self, stream: RngStream) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream as u64)),
            None => StdRng::from_os_rng(),
        }
    }

    /// Generator for computer-made secrets
    #[must_use]
    pub fn secret_generator(&self) -> RandomCodeGenerator {
        RandomCodeGenerator::with_rules(self.rng(RngStream::Secret), self.rules)
    }

    /// The configured computer guesser
    #[must_use]
    pub fn strategy(&self) -> StrategyType {
        StrategyType::from_name(&self.strategy, self.rng(RngStream::Guesser))
    }

    /// Configuration for the `index`-th of many independent rounds
    ///
    /// Seeds never overlap between rounds or streams.
    #[must_use]
    pub fn for_round(&self, index: u64) -> Self {
        Self {
            seed: self
                .seed
                .map(|seed| seed.wrapping_add(index.wrapping_mul(RngStream::COUNT))),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn seeded(seed: u64) -> GameConfig {
        GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        }
    }

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.rules, Rules::STANDARD);
        assert_eq!(config.strategy, "narrowing");
        assert!(config.redraw);
        assert!(!config.reveal_secret);
        assert_eq!(config.max_attempts, None);
    }

    #[test]
    fn seeded_streams_are_reproducible() {
        let config = seeded(42);
        assert_eq!(
            config.secret_generator().generate(),
            config.secret_generator().generate()
        );
    }

    #[test]
    fn streams_differ() {
        let config = seeded(42);
        let a: u64 = config.rng(RngStream::Secret).random();
        let b: u64 = config.rng(RngStream::Guesser).random();
        assert_ne!(a, b);
    }

    #[test]
    fn rounds_get_distinct_seeds() {
        let config = seeded(10);
        let seeds: Vec<u64> = (0..4).filter_map(|i| config.for_round(i).seed).collect();
        assert_eq!(seeds, vec![10, 12, 14, 16]);
        assert_eq!(GameConfig::default().for_round(3).seed, None);
    }

    #[test]
    fn strategy_follows_name() {
        let config = GameConfig {
            strategy: "random".into(),
            ..seeded(1)
        };
        assert!(matches!(config.strategy(), StrategyType::Random(_)));
    }
}
