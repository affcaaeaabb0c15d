//! Benchmark command
//!
//! Plays many computer-vs-computer rounds and summarises how the guesser did.

use crate::config::GameConfig;
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Outcome of one simulated round
#[derive(Debug, Clone, Copy)]
struct RoundSummary {
    won: bool,
    turns: usize,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub strategy: &'static str,
    pub total_rounds: usize,
    pub won: usize,
    pub lost: usize,
    /// Mean turns over won rounds only
    pub average_turns: f64,
    pub min_turns: Option<usize>,
    pub max_turns: Option<usize>,
    /// Turns taken -> number of rounds won in that many turns
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_rounds == 0 {
            0.0
        } else {
            self.won as f64 / self.total_rounds as f64
        }
    }
}

/// Run `rounds` independent rounds in parallel
///
/// Each round gets its own secret and guesser streams from
/// `GameConfig::for_round`, so seeded runs are reproducible.
pub fn run_benchmark(config: &GameConfig, rounds: usize, show_progress: bool) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let summaries: Vec<RoundSummary> = (0..rounds)
        .into_par_iter()
        .map(|index| {
            let round_config = config.for_round(index as u64);
            let secret = round_config.secret_generator().generate();
            let mut solver = Solver::new(round_config.strategy(), round_config.rules);
            let round = solver.solve(secret);
            pb.inc(1);
            RoundSummary {
                won: round.is_won(),
                turns: round.turns_taken(),
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    let strategy = config.strategy().name();
    summarize(strategy, &summaries, start.elapsed())
}

fn summarize(
    strategy: &'static str,
    summaries: &[RoundSummary],
    duration: Duration,
) -> BenchmarkResult {
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut total_turns = 0;
    for summary in summaries.iter().filter(|s| s.won) {
        total_turns += summary.turns;
        *distribution.entry(summary.turns).or_insert(0) += 1;
    }

    let won = summaries.iter().filter(|s| s.won).count();
    let total_rounds = summaries.len();

    BenchmarkResult {
        strategy,
        total_rounds,
        won,
        lost: total_rounds - won,
        average_turns: if won == 0 {
            0.0
        } else {
            total_turns as f64 / won as f64
        },
        min_turns: distribution.keys().next().copied(),
        max_turns: distribution.keys().next_back().copied(),
        distribution,
        duration,
        rounds_per_second: total_rounds as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
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
    fn benchmark_runs() {
        let result = run_benchmark(&seeded(1), 40, false);

        assert_eq!(result.total_rounds, 40);
        assert_eq!(result.won + result.lost, 40);
        assert_eq!(result.strategy, "narrowing");
        if result.won > 0 {
            assert!(result.average_turns >= 1.0);
            assert!(result.max_turns.unwrap() <= MAX_TURNS);
        }
    }

    #[test]
    fn benchmark_distribution_sums_to_wins() {
        let result = run_benchmark(&seeded(2), 30, false);
        let sum: usize = result.distribution.values().sum();
        assert_eq!(sum, result.won);
        for &turns in result.distribution.keys() {
            assert!((1..=MAX_TURNS).contains(&turns));
        }
    }

    #[test]
    fn seeded_benchmark_is_reproducible() {
        let a = run_benchmark(&seeded(9), 25, false);
        let b = run_benchmark(&seeded(9), 25, false);
        assert_eq!(a.won, b.won);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn benchmark_zero_rounds() {
        let result = run_benchmark(&seeded(3), 0, false);
        assert_eq!(result.total_rounds, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
        assert_eq!(result.min_turns, None);
    }

    #[test]
    fn summary_metrics_consistency() {
        let summaries = [
            RoundSummary { won: true, turns: 3 },
            RoundSummary { won: true, turns: 5 },
            RoundSummary { won: false, turns: 12 },
        ];
        let result = summarize("fixed", &summaries, Duration::from_secs(1));

        assert_eq!(result.won, 2);
        assert_eq!(result.lost, 1);
        assert!((result.average_turns - 4.0).abs() < f64::EPSILON);
        assert_eq!(result.min_turns, Some(3));
        assert_eq!(result.max_turns, Some(5));
        assert!((result.win_rate() - 2.0 / 3.0).abs() < 1e-9);
    }
}
