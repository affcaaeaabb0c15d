//! Re-prompting reader
//!
//! Asks a question, parses the answer and asks again on bad input. The loop
//! is explicit and can be capped with `max_attempts`.

use super::parse::{Command, parse_line, parse_role};
use crate::core::Code;
use crate::game::Role;
use std::fmt;
use std::io::{self, BufRead, Write};

/// Error type for the prompt loop
#[derive(Debug)]
pub enum InputError {
    Io(io::Error),
    /// Input ended before a valid answer arrived
    Closed,
    /// Gave up after this many rejected answers
    TooManyAttempts(usize),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error while reading input: {err}"),
            Self::Closed => write!(f, "Input closed before a valid answer was given"),
            Self::TooManyAttempts(n) => write!(f, "No valid answer after {n} attempts"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Outcome of a prompt: a value, or the user asked to leave
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted<T> {
    Value(T),
    Exit,
}

/// Line-oriented question/answer loop over any reader and writer
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    max_attempts: Option<usize>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            max_attempts: None,
        }
    }

    /// Cap the number of answers per question (`None` retries forever)
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print `prompt` and read one line
    ///
    /// # Errors
    ///
    /// Returns `InputError::Closed` at end of input, or `InputError::Io`.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        writeln!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(line)
    }

    /// Ask until `parse` accepts the sanitized tokens or the user exits
    ///
    /// Every rejection is reported on the writer before asking again.
    ///
    /// # Errors
    ///
    /// Returns an error if input closes, an I/O error occurs, or the attempt
    /// cap is reached.
    pub fn ask<T, E, F>(&mut self, prompt: &str, mut parse: F) -> Result<Prompted<T>, InputError>
    where
        E: fmt::Display,
        F: FnMut(&[String]) -> Result<T, E>,
    {
        let mut attempts = 0;
        loop {
            attempts += 1;
            let line = self.read_line(prompt)?;

            let tokens = match parse_line(&line) {
                Command::Exit => return Ok(Prompted::Exit),
                Command::Tokens(tokens) => tokens,
            };

            match parse(&tokens) {
                Ok(value) => return Ok(Prompted::Value(value)),
                Err(err) => {
                    tracing::warn!(attempt = attempts, error = %err, "rejected input");
                    writeln!(self.writer, "{err}")?;
                    writeln!(self.writer, "Invalid response. Try again.")?;
                }
            }

            if let Some(max) = self.max_attempts
                && attempts >= max
            {
                return Err(InputError::TooManyAttempts(max));
            }
        }
    }

    /// Ask for a four-color code
    ///
    /// # Errors
    ///
    /// See [`Prompter::ask`].
    pub fn ask_code(&mut self, prompt: &str) -> Result<Prompted<Code>, InputError> {
        self.ask(prompt, Code::validate::<String>)
    }

    /// Ask which side the human plays
    ///
    /// # Errors
    ///
    /// See [`Prompter::ask`].
    pub fn ask_role(&mut self, prompt: &str) -> Result<Prompted<Role>, InputError> {
        self.ask(prompt, |tokens| {
            parse_role(&tokens.join(" ")).ok_or("Please answer 'mastermind' or 'guesser'")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_writer()).unwrap()
    }

    #[test]
    fn accepts_first_valid_code() {
        let mut p = prompter("Red Green Blue Yellow\n");
        let answer = p.ask_code("Guess:").unwrap();
        assert_eq!(
            answer,
            Prompted::Value("red green blue yellow".parse().unwrap())
        );
        assert!(output(p).starts_with("Guess:"));
    }

    #[test]
    fn retries_after_bad_length_and_bad_color() {
        let mut p = prompter("red green\nred purple blue yellow\nwhite white white white\n");
        let answer = p.ask_code("Guess:").unwrap();
        assert_eq!(
            answer,
            Prompted::Value("white white white white".parse().unwrap())
        );

        let text = output(p);
        assert_eq!(text.matches("Invalid response. Try again.").count(), 2);
        assert!(text.contains("exactly 4"));
        assert!(text.contains("purple"));
    }

    #[test]
    fn exit_token_stops_the_loop() {
        let mut p = prompter("red\nexit\nred red red red\n");
        assert_eq!(p.ask_code("Guess:").unwrap(), Prompted::Exit);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut p = prompter("red\n");
        assert!(matches!(p.ask_code("Guess:"), Err(InputError::Closed)));
    }

    #[test]
    fn attempt_cap_is_enforced() {
        let mut p = prompter("a\nb\nc\nred red red red\n").with_max_attempts(Some(2));
        assert!(matches!(
            p.ask_code("Guess:"),
            Err(InputError::TooManyAttempts(2))
        ));
    }

    #[test]
    fn role_prompt_retries_until_known_role() {
        let mut p = prompter("referee\nGUESSER\n");
        assert_eq!(p.ask_role("Side?").unwrap(), Prompted::Value(Role::Guesser));
        assert!(output(p).contains("mastermind"));
    }
}
