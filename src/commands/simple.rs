//! Simple interactive CLI mode
//!
//! The line-based game: pick a side, then play one round with the board
//! redrawn after every turn.

use crate::config::GameConfig;
use crate::core::Code;
use crate::game::{Role, Round, RoundStatus};
use crate::input::{Prompted, Prompter};
use crate::output::display::{write_board, write_round_result};
use crate::output::formatters::{colorize_code, palette_legend};
use crate::solver::Strategy;
use anyhow::{Context, Result};
use crossterm::{execute, terminal::SetSize};
use std::io::{self, BufRead, Write};

const ROLE_PROMPT: &str = "Would you like to play as the Mastermind or the Guesser?";

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Finished { status: RoundStatus, turns: usize },
    /// The user typed the exit token
    Aborted,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input, the input
/// closes early, or the retry cap is exceeded.
pub fn run_simple(config: &GameConfig, role: Option<Role>) -> Result<SessionOutcome> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if config.redraw {
        // Room for twelve turns, the buffer lines and the instructions
        execute!(stdout, SetSize(90, 30)).context("failed to resize terminal")?;
    }

    let mut prompter =
        Prompter::new(stdin.lock(), stdout.lock()).with_max_attempts(config.max_attempts);
    play_session(&mut prompter, config, role)
}

/// Play one round over any line reader and writer
///
/// `role` skips the side question when already known.
///
/// # Errors
///
/// Returns an error on I/O failure, closed input or too many rejected answers.
pub fn play_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &GameConfig,
    role: Option<Role>,
) -> Result<SessionOutcome> {
    let role = match role {
        Some(role) => role,
        None => match prompter.ask_role(ROLE_PROMPT)? {
            Prompted::Value(role) => role,
            Prompted::Exit => return Ok(SessionOutcome::Aborted),
        },
    };
    tracing::info!(%role, "session started");

    let secret = if role.human_sets_secret() {
        let prompt = format!(
            "Please enter a four part code.\nYour choices are: {}\n\
             Remember, you can repeat colors in the code if you like.",
            palette_legend()
        );
        match prompter.ask_code(&prompt)? {
            Prompted::Value(code) => code,
            Prompted::Exit => return Ok(SessionOutcome::Aborted),
        }
    } else {
        config.secret_generator().generate()
    };

    if config.reveal_secret {
        writeln!(prompter.writer_mut(), "Secret code: {}", colorize_code(&secret))?;
    }

    let Some(round) = play_round(prompter, config, role, secret)? else {
        return Ok(SessionOutcome::Aborted);
    };

    write_round_result(prompter.writer_mut(), &round, role)?;
    Ok(SessionOutcome::Finished {
        status: round.status(),
        turns: round.turns_taken(),
    })
}

/// Turn loop; `None` when the user exits mid-round
fn play_round<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &GameConfig,
    role: Role,
    secret: Code,
) -> Result<Option<Round>> {
    let mut round = Round::with_rules(secret, config.rules);
    let mut computer = config.strategy();
    let guess_prompt = format!("Valid choices are: {}", palette_legend());

    write_board(prompter.writer_mut(), &round, config.redraw)?;

    while !round.is_over() {
        let guess = if role.human_guesses() {
            match prompter.ask_code(&guess_prompt)? {
                Prompted::Value(code) => code,
                Prompted::Exit => return Ok(None),
            }
        } else {
            computer.next_guess(round.history())
        };

        round.record_turn(guess)?;
        write_board(prompter.writer_mut(), &round, config.redraw)?;
    }

    tracing::info!(status = ?round.status(), turns = round.turns_taken(), "round over");
    Ok(Some(round))
}
