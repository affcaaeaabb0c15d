//! Display functions for boards and command results

use super::formatters::{colorize_code, format_feedback, format_turn, marker_symbol, palette_legend};
use crate::commands::{BenchmarkResult, ScoreResult, SolveResult};
use crate::core::{Marker, Rules};
use crate::game::{Role, Round, RoundStatus};
use crate::input::EXIT_TOKEN;
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Blank lines between the board and the instructions
const BUFFER_LINES: usize = 3;

pub(crate) const fn plural(n: usize) -> &'static str {
    if n == 1 { "turn" } else { "turns" }
}

/// How to play
#[must_use]
pub fn instructions(rules: &Rules) -> String {
    format!(
        "Welcome to mastermind!\n\
         In this game, you will have {turns} turns to guess the secret code.\n\
         The code is {len} colors long. After each guess, you will receive a hint.\n\
         The hints will be:\n    \
         {correct} : Correct color and location\n    \
         {wrong} : Correct color, but wrong location\n    \
         {incorrect} : Wrong color OR you guessed more of this color\n        \
         than there is in the code.\n\n\
         Your choices are: {legend}\n\
         Type '{EXIT_TOKEN}' at any prompt to quit.",
        turns = rules.max_turns(),
        len = rules.code_length(),
        correct = marker_symbol(Marker::Correct),
        wrong = marker_symbol(Marker::WrongLocation),
        incorrect = marker_symbol(Marker::Incorrect),
        legend = palette_legend(),
    )
}

/// Draw the board: one line per turn slot, then the instructions
///
/// With `redraw` the screen is cleared first so the board stays in place.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_board<W: Write>(w: &mut W, round: &Round, redraw: bool) -> io::Result<()> {
    if redraw {
        queue!(w, Clear(ClearType::All), MoveTo(0, 0))?;
    }

    let history = round.history();
    for slot in 0..round.rules().max_turns() {
        match history.get(slot) {
            Some(entry) => writeln!(w, "{}", format_turn(entry))?,
            None => writeln!(w)?,
        }
    }
    for _ in 0..BUFFER_LINES {
        writeln!(w)?;
    }
    writeln!(w, "{}", instructions(round.rules()))?;
    w.flush()
}

/// End-of-round message from the human's point of view, then the secret
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_round_result<W: Write>(w: &mut W, round: &Round, role: Role) -> io::Result<()> {
    let turns = round.turns_taken();
    let message = match (round.status(), role) {
        (RoundStatus::InProgress, _) => return Ok(()),
        (RoundStatus::Won, Role::Guesser) => {
            format!("You guessed correctly in {turns} {}!", plural(turns)).green()
        }
        (RoundStatus::Lost, Role::Guesser) => "Sorry, you didn't guess in time.".red(),
        (RoundStatus::Won, Role::Mastermind) => {
            format!("The computer cracked your code in {turns} {}!", plural(turns)).red()
        }
        (RoundStatus::Lost, Role::Mastermind) => {
            "Your code held! The computer ran out of turns.".green()
        }
    };

    writeln!(w, "{message}")?;
    writeln!(w, "The secret code was: {}", colorize_code(round.secret()))?;
    w.flush()
}

/// Print the computer's attempt at a given secret
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  ({} strategy)",
        colorize_code(&result.secret),
        result.strategy.bright_yellow()
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        println!(
            "Turn {:>2}: {} {}  {} correct, {} misplaced",
            step.turn,
            colorize_code(&step.guess),
            format_feedback(&step.feedback),
            step.feedback.count_correct(),
            step.feedback.count_wrong_location()
        );
    }

    println!();
    let turns = result.steps.len();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {turns} {}!", plural(turns)).green().bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {turns} {}", plural(turns)).red().bold()
        );
    }
}

/// Print the feedback for a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("Secret:   {}", colorize_code(&result.secret));
    println!("Guess:    {}", colorize_code(&result.guess));
    println!("Feedback: {}", format_feedback(&result.feedback));
    println!(
        "          {} correct, {} misplaced",
        result.feedback.count_correct(),
        result.feedback.count_wrong_location()
    );
    if result.feedback.is_solved() {
        println!("{}", "Code broken!".green().bold());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0).bright_yellow().bold()
    );
    println!(
        "   Average turns:    {}",
        format!("{:.2}", result.average_turns).bright_yellow().bold()
    );
    if let (Some(min), Some(max)) = (result.min_turns, result.max_turns) {
        println!("   Best case:        {}", min.to_string().green());
        println!("   Worst case:       {}", max.to_string().yellow());
    }
    println!("   Lost rounds:      {}", result.lost.to_string().red());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    if result.total_rounds == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&turns, &count) in &result.distribution {
        let pct = (count as f64 / result.total_rounds as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {turns:>2}: {bar} {count:5} ({pct:5.1}%)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, MAX_TURNS};

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn instructions_explain_markers_and_palette() {
        colored::control::set_override(false);
        let text = instructions(&Rules::STANDARD);
        assert!(text.contains("12 turns"));
        assert!(text.contains("4 colors long"));
        assert!(text.contains("√ : Correct color and location"));
        assert!(text.contains("violet"));
        assert!(text.contains("'exit'"));
    }

    #[test]
    fn board_has_a_line_per_turn_slot() {
        let mut round = Round::new(code("red green blue yellow"));
        round.record_turn(code("red red white white")).unwrap();

        let text = render(|w| write_board(w, &round, false));
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].ends_with("[ √ | x | x | x ] [1]"));
        assert!(lines[1..MAX_TURNS].iter().all(|l| l.is_empty()));
        assert!(lines[MAX_TURNS + BUFFER_LINES].starts_with("Welcome to mastermind!"));
    }

    #[test]
    fn redraw_clears_the_screen() {
        let round = Round::new(code("red green blue yellow"));
        let text = render(|w| write_board(w, &round, true));
        assert!(text.starts_with("\u{1b}["));
    }

    #[test]
    fn nothing_printed_while_in_progress() {
        let round = Round::new(code("red green blue yellow"));
        assert!(render(|w| write_round_result(w, &round, Role::Guesser)).is_empty());
    }

    #[test]
    fn mastermind_messages_are_from_the_humans_side() {
        let secret = code("red green blue yellow");
        let mut round = Round::new(secret);
        round.record_turn(code("red red red red")).unwrap();
        round.record_turn(secret).unwrap();

        let text = render(|w| write_round_result(w, &round, Role::Mastermind));
        assert!(text.contains("The computer cracked your code in 2 turns!"));
        assert!(text.contains("The secret code was:  R  G  B  Y "));
    }
}
