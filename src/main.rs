//! Mastermind - CLI
//!
//! Play Mastermind in a TUI or a plain prompt, or let the computer guesser
//! crack codes on its own.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{SessionOutcome, run_benchmark, run_simple, score_codes, solve_secret},
    config::GameConfig,
    game::Role,
    logging,
    output::{print_benchmark_result, print_score_result, print_solve_result},
    solver::StrategyType,
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind: break a four-color code in twelve turns, or make the computer try",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Computer guesser: narrowing (default) or random
    #[arg(short, long, global = true, default_value = "narrowing")]
    strategy: String,

    /// Seed for reproducible secrets and computer guesses
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log verbosity (-v info, -vv debug, -vvv trace); MASTERMIND_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Show the computer's secret when a round starts
        #[arg(long)]
        reveal: bool,
    },

    /// Line-based game without the TUI
    Simple {
        /// Skip the side question: mastermind or guesser
        #[arg(short, long, value_parser = parse_role_arg)]
        role: Option<Role>,

        /// Show the computer's secret when the round starts
        #[arg(long)]
        reveal: bool,

        /// Append the board instead of clearing the screen each turn
        #[arg(long)]
        no_clear: bool,

        /// Give up after this many invalid answers to one prompt
        #[arg(long)]
        max_attempts: Option<usize>,
    },

    /// Let the computer crack a given secret
    Solve {
        /// The secret code, e.g. `red red blue white`
        #[arg(required = true, num_args = 1..)]
        secret: Vec<String>,
    },

    /// Score a guess against a secret
    Score {
        /// The secret code
        #[arg(required = true, num_args = 1..)]
        secret: Vec<String>,

        /// The guess to score
        #[arg(short, long, required = true, num_args = 1..)]
        guess: Vec<String>,
    },

    /// Play many computer-vs-computer rounds and report statistics
    Benchmark {
        /// Number of rounds
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn parse_role_arg(value: &str) -> Result<Role, String> {
    Role::from_token(&value.to_lowercase())
        .ok_or_else(|| format!("'{value}' is not a side; use mastermind or guesser"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    if !StrategyType::NAMES.contains(&cli.strategy.as_str()) {
        tracing::warn!(strategy = %cli.strategy, "unknown strategy, using narrowing");
    }

    let config = GameConfig {
        strategy: cli.strategy,
        seed: cli.seed,
        ..GameConfig::default()
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { reveal: false });

    match command {
        Commands::Play { reveal } => run_play_command(GameConfig {
            reveal_secret: reveal,
            ..config
        }),
        Commands::Simple {
            role,
            reveal,
            no_clear,
            max_attempts,
        } => run_simple_command(
            &GameConfig {
                reveal_secret: reveal,
                redraw: !no_clear,
                max_attempts,
                ..config
            },
            role,
        ),
        Commands::Solve { secret } => run_solve_command(&secret.join(" "), &config),
        Commands::Score { secret, guess } => run_score_command(&secret.join(" "), &guess.join(" ")),
        Commands::Benchmark { count } => {
            run_benchmark_command(&config, count);
            Ok(())
        }
    }
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(&config);
    run_tui(app)
}

fn run_simple_command(config: &GameConfig, role: Option<Role>) -> Result<()> {
    match run_simple(config, role).context("game aborted")? {
        SessionOutcome::Aborted => println!("Goodbye!"),
        SessionOutcome::Finished { .. } => {}
    }
    Ok(())
}

fn run_solve_command(secret: &str, config: &GameConfig) -> Result<()> {
    let result = solve_secret(secret, config).with_context(|| format!("invalid secret '{secret}'"))?;
    print_solve_result(&result);
    Ok(())
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_codes(secret, guess).context("invalid code")?;
    print_score_result(&result);
    Ok(())
}

fn run_benchmark_command(config: &GameConfig, count: usize) {
    println!("Running benchmark on {count} rounds with the {} guesser...", config.strategy);
    let result = run_benchmark(config, count, true);
    print_benchmark_result(&result);
}
