//! crates/logging/src/error.rs
//! Error types returned by logger configuration calls.

use logging_sink::Severity;
use thiserror::Error;

/// Returned when a severity channel cannot be rebound.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RedirectError {
    /// The logger routes its channels into a test harness; build a new logger instead.
    #[error("logger {name:?} routes its {severity} channel into a test harness and cannot be redirected")]
    FixedSinks {
        /// Name of the logger that rejected the redirect.
        name: String,
        /// Channel the caller tried to rebind.
        severity: Severity,
    },
}

/// Returned when a verbosity value or flag token cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseVerbosityError {
    /// The value was empty after trimming whitespace.
    #[error("verbosity value is empty")]
    Empty,
    /// The value was not a decimal integer.
    #[error("verbosity value {0:?} is not an integer")]
    InvalidNumber(String),
    /// The token was a flag other than `verbosity`.
    #[error("unrecognised flag {0:?}, expected --verbosity=N")]
    UnknownFlag(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_error_names_logger_and_channel() {
        let error = RedirectError::FixedSinks {
            name: "harness".to_string(),
            severity: Severity::Error,
        };
        let text = error.to_string();
        assert!(text.contains("\"harness\""));
        assert!(text.contains("error channel"));
    }

    #[test]
    fn parse_errors_quote_the_input() {
        assert_eq!(
            ParseVerbosityError::InvalidNumber("x1".into()).to_string(),
            "verbosity value \"x1\" is not an integer"
        );
        assert!(
            ParseVerbosityError::UnknownFlag("--quiet".into())
                .to_string()
                .contains("--quiet")
        );
    }
}
