//! Shared CLI error type and exit codes.

use std::fmt;
use std::path::Path;

use crate::models::{Color, ThemeDocument};
use crate::services::ThemeService;

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Invalid input or arguments
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
    /// The theme or color pair did not meet the accessibility target
    CheckFailed = 3,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process terminates with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid input (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Accessibility check failed (exit code 3).
    pub fn check_failed(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::CheckFailed,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Parses a color argument, mapping failures to a validation error.
pub fn parse_color_arg(value: &str) -> CliResult<Color> {
    Color::parse(value).map_err(|e| CliError::validation(e.to_string()))
}

/// Loads a theme file, mapping failures to an I/O error.
pub fn load_theme(path: &Path) -> CliResult<ThemeDocument> {
    ThemeService::load(path).map_err(|e| CliError::io(format!("Failed to load theme: {e:#}")))
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
