//! One-shot scoring command
//!
//! Scores a single guess against a single secret.

use crate::core::{Code, CodeError, Feedback};
use crate::input::sanitize;

/// Result of scoring one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Parse both codes and score the guess
///
/// # Errors
///
/// Returns `CodeError` if either code is malformed.
pub fn score_codes(secret: &str, guess: &str) -> Result<ScoreResult, CodeError> {
    let secret = Code::validate(&sanitize(secret))?;
    let guess = Code::validate(&sanitize(guess))?;

    Ok(ScoreResult {
        secret,
        guess,
        feedback: Feedback::score(&secret, &guess),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Marker;

    #[test]
    fn scores_parsed_codes() {
        let result = score_codes("Red Red Blue Green", "red,red,red,red").unwrap_err();
        // Commas glue the tokens together
        assert_eq!(result, CodeError::InvalidLength(1));

        let result = score_codes("Red Red Blue Green", "red red red red").unwrap();
        assert_eq!(
            result.feedback.markers(),
            &[Marker::Correct, Marker::Correct, Marker::Incorrect, Marker::Incorrect]
        );
    }

    #[test]
    fn rejects_bad_secret() {
        assert_eq!(
            score_codes("red red red purple", "red red red red"),
            Err(CodeError::InvalidColor("purple".into()))
        );
    }
}
