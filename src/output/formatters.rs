//! Formatting utilities for terminal output

use crate::core::{Code, Color, Feedback, Marker};
use crate::game::HistoryEntry;
use colored::{ColoredString, Colorize};

/// Symbol printed for a feedback marker
#[must_use]
pub const fn marker_symbol(marker: Marker) -> char {
    match marker {
        Marker::Correct => '√',
        Marker::WrongLocation => '•',
        Marker::Incorrect => 'x',
    }
}

/// Format feedback as `[ √ | • | x | x ]`
#[must_use]
pub fn format_feedback(feedback: &Feedback) -> String {
    let symbols: Vec<String> = feedback
        .markers()
        .iter()
        .map(|&m| marker_symbol(m).to_string())
        .collect();
    format!("[ {} ]", symbols.join(" | "))
}

/// Paint text on the background of a peg color
fn paint(text: &str, color: Color) -> ColoredString {
    match color {
        Color::Red => text.on_red(),
        Color::Green => text.on_green(),
        Color::Yellow => text.black().on_yellow(),
        Color::Blue => text.on_blue(),
        Color::Violet => text.on_magenta(),
        Color::White => text.black().on_white(),
    }
}

/// Colored block for one peg
#[must_use]
pub fn color_swatch(color: Color) -> ColoredString {
    paint(&format!(" {} ", color.initial()), color)
}

/// A code as a row of colored blocks
#[must_use]
pub fn colorize_code(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|&c| color_swatch(c).to_string())
        .collect()
}

/// One board line: pegs, feedback and turn number
#[must_use]
pub fn format_turn(entry: &HistoryEntry) -> String {
    format!(
        "{}  {} [{}]",
        colorize_code(&entry.guess),
        format_feedback(&entry.feedback),
        entry.turn
    )
}

/// The palette with each name on its own color
#[must_use]
pub fn palette_legend() -> String {
    let names: Vec<String> = Color::ALL
        .iter()
        .map(|&c| paint(&format!(" {} ", c.name()), c).to_string())
        .collect();

    match names.split_last() {
        Some((last, rest)) => format!("{}, or {last}", rest.join(", ")),
        None => String::new(),
    }
}
