//! Shared CLI plumbing: error type, exit codes, output helpers.

use serde::Serialize;
use thiserror::Error;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded (a missing mapping is still success)
    Success = 0,
    /// Input could not be parsed or failed validation
    ValidationError = 1,
    /// File system or configuration failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Message for stderr
    pub message: String,
}

impl CliError {
    /// Invalid user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O or configuration failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Renders a string with control and private-use characters escaped, so
/// key equivalents like `"\r"` or `"\u{f700}"` print legibly.
#[must_use]
pub fn escape_key(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() || ('\u{E000}'..='\u{F8FF}').contains(&c) {
                c.escape_unicode().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}
