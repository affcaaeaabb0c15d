//! Round state machine
//!
//! A round owns the secret and an append-only history of scored guesses.
//! It moves from `InProgress` to `Won` or `Lost` and never back.

use crate::core::{Code, Feedback, Rules};
use std::fmt;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: Code,
    pub feedback: Feedback,
    /// 1-based turn number
    pub turn: usize,
}

/// Error type for misuse of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundError {
    /// A guess was recorded after the round reached Won or Lost
    RoundAlreadyOver(RoundStatus),
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundAlreadyOver(status) => {
                write!(f, "Round is already over ({status:?}); no more guesses accepted")
            }
        }
    }
}

impl std::error::Error for RoundError {}

/// State of a single round
#[derive(Debug, Clone)]
pub struct Round {
    rules: Rules,
    secret: Code,
    history: Vec<HistoryEntry>,
    status: RoundStatus,
}

impl Round {
    /// Start a round under the standard rules
    #[must_use]
    pub fn new(secret: Code) -> Self {
        Self::with_rules(secret, Rules::STANDARD)
    }

    #[must_use]
    pub fn with_rules(secret: Code, rules: Rules) -> Self {
        Self {
            rules,
            secret,
            history: Vec::with_capacity(rules.max_turns()),
            status: RoundStatus::InProgress,
        }
    }

    /// Score a guess, append it to the history and update the status
    ///
    /// # Errors
    ///
    /// Returns `RoundError::RoundAlreadyOver` if the round is already Won or
    /// Lost. The turn loop must check `is_over()` first.
    pub fn record_turn(&mut self, guess: Code) -> Result<Feedback, RoundError> {
        if self.status.is_over() {
            return Err(RoundError::RoundAlreadyOver(self.status));
        }

        let feedback = Feedback::score(&self.secret, &guess);
        let turn = self.history.len() + 1;
        self.history.push(HistoryEntry {
            guess,
            feedback,
            turn,
        });

        self.status = if feedback.is_solved() {
            RoundStatus::Won
        } else if self.history.len() >= self.rules.max_turns() {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        };

        tracing::debug!(
            turn,
            guess = %guess,
            correct = feedback.count_correct(),
            misplaced = feedback.count_wrong_location(),
            status = ?self.status,
            "scored guess"
        );

        Ok(feedback)
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == RoundStatus::Won
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    #[must_use]
    pub fn turns_taken(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn turns_remaining(&self) -> usize {
        self.rules.max_turns().saturating_sub(self.history.len())
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn last_entry(&self) -> Option<&HistoryEntry> {
        self.history.last()
    }

    /// The secret, for end-of-round reveal
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }
}
