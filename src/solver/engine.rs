//! Computer-driven rounds

use super::strategy::Strategy;
use crate::core::{Code, Rules};
use crate::game::Round;

/// Plays whole rounds with a strategy as the guesser
///
/// Coordinates the strategy with a fresh `Round` for each secret.
pub struct Solver<S: Strategy> {
    strategy: S,
    rules: Rules,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver with the given strategy and rules
    pub const fn new(strategy: S, rules: Rules) -> Self {
        Self { strategy, rules }
    }

    /// Ask the strategy for the next guess in a running round
    pub fn next_guess(&mut self, round: &Round) -> Code {
        self.strategy.next_guess(round.history())
    }

    /// Play a full round against `secret` and return the finished round
    pub fn solve(&mut self, secret: Code) -> Round {
        let mut round = Round::with_rules(secret, self.rules);

        while !round.is_over() {
            let guess = self.next_guess(&round);
            if round.record_turn(guess).is_err() {
                break;
            }
        }

        tracing::info!(
            strategy = self.strategy.name(),
            status = ?round.status(),
            turns = round.turns_taken(),
            "round finished"
        );
        round
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_TURNS;
    use crate::game::{HistoryEntry, RoundStatus};
    use crate::solver::{ComputerGuesser, RandomCodeGenerator};

    /// Always guesses the same code
    struct Fixed(Code);

    impl Strategy for Fixed {
        fn next_guess(&mut self, _history: &[HistoryEntry]) -> Code {
            self.0
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn fixed_right_guess_wins_in_one() {
        let secret = code("red green blue yellow");
        let mut solver = Solver::new(Fixed(secret), Rules::STANDARD);
        let round = solver.solve(secret);
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.turns_taken(), 1);
    }

    #[test]
    fn fixed_wrong_guess_runs_out_of_turns() {
        let mut solver = Solver::new(Fixed(code("white white white white")), Rules::STANDARD);
        let round = solver.solve(code("red green blue yellow"));
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.turns_taken(), MAX_TURNS);
    }

    #[test]
    fn narrowing_rounds_always_terminate() {
        let mut solver = Solver::new(ComputerGuesser::from_seed(8), Rules::STANDARD);
        let mut secrets = RandomCodeGenerator::from_seed(80);
        for _ in 0..100 {
            let round = solver.solve(secrets.generate());
            assert!(round.is_over());
            assert!(round.turns_taken() <= MAX_TURNS);
            assert_eq!(round.is_won(), round.last_entry().unwrap().feedback.is_solved());
        }
        assert_eq!(solver.strategy_name(), "narrowing");
    }
}
