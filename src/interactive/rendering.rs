//! TUI rendering with ratatui
//!
//! Board, legend and message panels for the Mastermind interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Color as Peg, Marker};
use crate::game::HistoryEntry;
use crate::output::formatters::marker_symbol;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Terminal color for a peg
#[must_use]
pub const fn peg_color(peg: Peg) -> Color {
    match peg {
        Peg::Red => Color::Red,
        Peg::Green => Color::Green,
        Peg::Yellow => Color::Yellow,
        Peg::Blue => Color::Blue,
        Peg::Violet => Color::Magenta,
        Peg::White => Color::White,
    }
}

fn peg_span(peg: Peg) -> Span<'static> {
    Span::styled(
        format!(" {} ", peg.initial()),
        Style::default()
            .fg(Color::Black)
            .bg(peg_color(peg))
            .add_modifier(Modifier::BOLD),
    )
}

fn marker_span(marker: Marker) -> Span<'static> {
    let color = match marker {
        Marker::Correct => Color::Green,
        Marker::WrongLocation => Color::Yellow,
        Marker::Incorrect => Color::DarkGray,
    };
    Span::styled(
        format!("{} ", marker_symbol(marker)),
        Style::default().fg(color),
    )
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Board and side panels
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("MASTERMIND - break the four color code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn board_line(turn: usize, entry: Option<&HistoryEntry>) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{turn:>2}  "),
        Style::default().fg(Color::DarkGray),
    )];

    match entry {
        Some(entry) => {
            spans.extend(entry.guess.colors().iter().map(|&peg| peg_span(peg)));
            spans.push(Span::raw("   "));
            spans.extend(entry.feedback.markers().iter().map(|&m| marker_span(m)));
        }
        None => spans.push(Span::styled(
            " ·  ·  ·  · ",
            Style::default().fg(Color::DarkGray),
        )),
    }

    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.round.as_ref().map_or(&[][..], |round| round.history());
    let lines: Vec<Line> = (1..=app.rules.max_turns())
        .map(|turn| board_line(turn, history.get(turn - 1)))
        .collect();

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(4)])
        .split(area);

    render_legend(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_legend(f: &mut Frame, app: &App, area: Rect) {
    let mut palette: Vec<Span> = Vec::new();
    for &peg in app.rules.palette() {
        palette.push(peg_span(peg));
        palette.push(Span::raw(format!(" {} ", peg.name())));
    }

    let lines = vec![
        Line::from(palette[..6].to_vec()),
        Line::from(palette[6..].to_vec()),
        Line::from(""),
        Line::from(vec![
            marker_span(Marker::Correct),
            Span::raw("right color, right place"),
        ]),
        Line::from(vec![
            marker_span(Marker::WrongLocation),
            Span::raw("right color, wrong place"),
        ]),
        Line::from(vec![
            marker_span(Marker::Incorrect),
            Span::raw("not in the code (or too many)"),
        ]),
    ];

    let legend = Paragraph::new(lines).block(
        Block::default()
            .title(" Colors & Hints ")
            .borders(Borders::ALL),
    );
    f.render_widget(legend, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::SelectRole => (
            " Choose a side: 'm' = Mastermind (you write the code), 'g' = Guesser ",
            "",
            Color::Cyan,
        ),
        InputMode::EnterSecret => (
            " Enter your secret code (e.g. red red blue white) ",
            app.input_buffer.as_str(),
            Color::Magenta,
        ),
        InputMode::EnterGuess => (
            " Enter your guess (4 colors) | type 'exit' to quit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ComputerTurn => (" Press Enter for the computer's next guess ", "", Color::Cyan),
        InputMode::RoundOver => (
            " Round over | 'n' new round, 'r' switch sides, 'q' quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let role_text = app
        .role
        .map_or_else(|| "Side: -".to_string(), |role| format!("Side: {role}"));
    f.render_widget(Paragraph::new(role_text).alignment(Alignment::Center), chunks[0]);

    let turn_text = app.round.as_ref().map_or_else(
        || "Turn: -".to_string(),
        |round| format!("Turn: {}/{}", round.turns_taken(), app.rules.max_turns()),
    );
    f.render_widget(Paragraph::new(turn_text).alignment(Alignment::Center), chunks[1]);

    let stats_text = format!(
        "Rounds: {} | Broken: {}",
        app.stats.total_games, app.stats.codes_broken
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[2]);

    let help_text = if app.input_mode.is_typing() {
        "Enter: Submit | Esc: Quit"
    } else {
        "q: Quit | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::Code;
    use crate::game::Role;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App {
        App::new(&GameConfig {
            seed: Some(21),
            ..GameConfig::default()
        })
    }

    #[test]
    fn peg_colors_are_distinct() {
        let mut colors: Vec<String> = Peg::ALL
            .iter()
            .map(|&p| format!("{:?}", peg_color(p)))
            .collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), Peg::ALL.len());
    }

    #[test]
    fn renders_header_and_role_prompt() {
        let text = screen(&app());
        assert!(text.contains("MASTERMIND"));
        assert!(text.contains("Choose a side"));
        assert!(text.contains("Side: -"));
    }

    #[test]
    fn renders_scored_turns_on_the_board() {
        let mut app = app();
        app.select_role(Role::Guesser);
        let guess: Code = "red green blue yellow".parse().unwrap();
        app.round.as_mut().unwrap().record_turn(guess).unwrap();

        let text = screen(&app);
        assert!(text.contains(" R  G  B  Y "));
        assert!(text.contains("Turn: 1/12"));
        assert!(text.contains("Side: guesser"));
    }
}
