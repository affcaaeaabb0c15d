//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::{Code, MAX_TURNS, Rules};
use crate::game::{Role, Round, RoundStatus};
use crate::input::{Command, parse_line};
use crate::output::display::plural;
use crate::solver::{RandomCodeGenerator, Strategy, StrategyType};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub rules: Rules,
    pub role: Option<Role>,
    pub round: Option<Round>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    reveal_secret: bool,
    secrets: RandomCodeGenerator,
    computer: StrategyType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    SelectRole,
    EnterSecret,
    EnterGuess,
    ComputerTurn,
    RoundOver,
}

impl InputMode {
    /// Modes where letters go into the input buffer
    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::EnterSecret | Self::EnterGuess)
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    /// Rounds where the code was broken, whoever guessed
    pub codes_broken: usize,
    /// Index = turns taken for broken codes
    pub turn_distribution: [usize; MAX_TURNS + 1],
}

impl App {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            rules: config.rules,
            role: None,
            round: None,
            input_mode: InputMode::SelectRole,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Press 'm' to write the code or 'g' to break it.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            reveal_secret: config.reveal_secret,
            secrets: config.secret_generator(),
            computer: config.strategy(),
        }
    }

    /// Choose a side and start a round
    pub fn select_role(&mut self, role: Role) {
        self.role = Some(role);
        self.start_round();
    }

    /// Start a fresh round with the current role
    pub fn new_game(&mut self) {
        if self.role.is_some() {
            self.start_round();
        } else {
            self.input_mode = InputMode::SelectRole;
        }
    }

    fn start_round(&mut self) {
        self.input_buffer.clear();
        self.round = None;

        match self.role {
            Some(Role::Mastermind) => {
                self.input_mode = InputMode::EnterSecret;
                self.add_message(
                    "Type your secret code (4 colors, repeats allowed) and press Enter.",
                    MessageStyle::Info,
                );
            }
            Some(Role::Guesser) => {
                let secret = self.secrets.generate();
                self.round = Some(Round::with_rules(secret, self.rules));
                self.input_mode = InputMode::EnterGuess;
                self.add_message(
                    "I've picked a secret code. Type your guess and press Enter.",
                    MessageStyle::Info,
                );
                if self.reveal_secret {
                    self.add_message(&format!("Secret code: {secret}"), MessageStyle::Info);
                }
            }
            None => self.input_mode = InputMode::SelectRole,
        }
    }

    /// Validate the typed code and use it as secret or guess
    pub fn submit_input(&mut self) {
        let tokens = match parse_line(&self.input_buffer) {
            Command::Exit => {
                self.should_quit = true;
                return;
            }
            Command::Tokens(tokens) => tokens,
        };

        let code = match Code::validate(tokens.as_slice()) {
            Ok(code) => code,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.input_buffer.clear();

        match self.input_mode {
            InputMode::EnterSecret => {
                self.round = Some(Round::with_rules(code, self.rules));
                self.input_mode = InputMode::ComputerTurn;
                self.add_message(
                    "Secret set. Press Enter to let the computer guess.",
                    MessageStyle::Success,
                );
            }
            InputMode::EnterGuess => self.play_turn(code),
            _ => {}
        }
    }

    /// Let the computer make its next guess
    pub fn computer_turn(&mut self) {
        let Some(round) = &self.round else {
            return;
        };
        let guess = self.computer.next_guess(round.history());
        self.play_turn(guess);
    }

    fn play_turn(&mut self, guess: Code) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        if let Err(err) = round.record_turn(guess) {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }
        if round.is_over() {
            self.finish_round();
        }
    }

    fn finish_round(&mut self) {
        let Some(round) = &self.round else {
            return;
        };
        let status = round.status();
        let turns = round.turns_taken();
        let secret = *round.secret();

        self.stats.total_games += 1;
        if status == RoundStatus::Won {
            self.stats.codes_broken += 1;
            if let Some(slot) = self.stats.turn_distribution.get_mut(turns) {
                *slot += 1;
            }
        }

        let (text, style) = match (status, self.role) {
            (RoundStatus::Won, Some(Role::Guesser)) => (
                format!("You guessed correctly in {turns} {}!", plural(turns)),
                MessageStyle::Success,
            ),
            (RoundStatus::Won, _) => (
                format!("The computer cracked your code in {turns} {}!", plural(turns)),
                MessageStyle::Error,
            ),
            (_, Some(Role::Guesser)) => (
                format!("Sorry, you didn't guess in time. The code was {secret}."),
                MessageStyle::Error,
            ),
            _ => (
                "Your code held! The computer ran out of turns.".to_string(),
                MessageStyle::Success,
            ),
        };
        self.add_message(&text, style);
        self.add_message(
            "Press 'n' for a new round, 'r' to switch sides or 'q' to quit.",
            MessageStyle::Info,
        );
        self.input_mode = InputMode::RoundOver;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::SelectRole => match key.code {
                KeyCode::Char('m') => self.select_role(Role::Mastermind),
                KeyCode::Char('g') => self.select_role(Role::Guesser),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            InputMode::EnterSecret | InputMode::EnterGuess => match key.code {
                KeyCode::Char(c) if c.is_ascii_alphabetic() || c == ' ' => {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
            InputMode::ComputerTurn => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.computer_turn(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            InputMode::RoundOver => match key.code {
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('r') => {
                    self.role = None;
                    self.round = None;
                    self.input_mode = InputMode::SelectRole;
                    self.add_message("Press 'm' or 'g' to choose a side.", MessageStyle::Info);
                }
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
