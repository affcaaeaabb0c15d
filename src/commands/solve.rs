//! Secret solving command
//!
//! Lets the computer guesser play against a known secret and returns the
//! turn-by-turn trace.

use crate::config::GameConfig;
use crate::core::{Code, CodeError};
use crate::game::{HistoryEntry, RoundStatus};
use crate::input::sanitize;
use crate::solver::Solver;

/// Result of solving a secret
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub secret: Code,
    pub strategy: &'static str,
    pub status: RoundStatus,
    pub steps: Vec<HistoryEntry>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == RoundStatus::Won
    }
}

/// Solve `secret` with the configured strategy
///
/// # Errors
///
/// Returns `CodeError` if the secret is not a valid code.
pub fn solve_secret(secret: &str, config: &GameConfig) -> Result<SolveResult, CodeError> {
    let secret = Code::validate(&sanitize(secret))?;

    let mut solver = Solver::new(config.strategy(), config.rules);
    let round = solver.solve(secret);

    Ok(SolveResult {
        secret,
        strategy: solver.strategy_name(),
        status: round.status(),
        steps: round.history().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_TURNS;

    fn seeded(seed: u64) -> GameConfig {
        GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        }
    }

    #[test]
    fn solve_records_history() {
        let result = solve_secret("red green blue yellow", &seeded(3)).unwrap();

        assert!(!result.steps.is_empty());
        assert!(result.steps.len() <= MAX_TURNS);
        assert_eq!(result.strategy, "narrowing");
        for (i, step) in result.steps.iter().enumerate() {
            assert_eq!(step.turn, i + 1);
        }
        assert_eq!(
            result.success(),
            result.steps.last().unwrap().feedback.is_solved()
        );
    }

    #[test]
    fn solve_is_reproducible_with_seed() {
        let a = solve_secret("white white violet red", &seeded(77)).unwrap();
        let b = solve_secret("white white violet red", &seeded(77)).unwrap();
        assert_eq!(a.steps, b.steps);
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        assert!(solve_secret("red green", &seeded(1)).is_err());
        assert!(solve_secret("red green blue orange", &seeded(1)).is_err());
    }
}
