//! Shared CLI error handling and helpers.

use crate::catalog::BuiltinCatalogs;
use crate::config::Config;
use serde::Serialize;
use std::fmt;

/// Process exit codes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// The keyboard definition failed validation
    ValidationFailed = 1,
    /// Configuration, catalog or output failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates an I/O class error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Creates a validation class error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationFailed,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the catalogs configured in `config`.
pub fn load_catalogs(config: &Config) -> CliResult<BuiltinCatalogs> {
    config
        .load_catalogs()
        .map_err(|e| CliError::io(format!("Failed to load catalogs: {e:#}")))
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
