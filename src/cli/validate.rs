//! Validation command for keyboard definition files.

use crate::cli::common::{load_catalogs, print_json, CliError, CliResult};
use crate::cli::compile::FailureMessage;
use crate::compiler::{load_keyboard, KeyIssue};
use crate::config::Config;
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Validate a keyboard definition file for errors and warnings
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to keyboard definition file (omitted means no file chosen)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat key warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

/// Single validation message.
#[derive(Debug, Serialize)]
struct ValidationMessage {
    severity: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<ValidationPosition>,
}

/// Anchor cell a message refers to.
#[derive(Debug, Serialize)]
struct ValidationPosition {
    row: i32,
    col: i32,
}

/// JSON shape of the validate output.
#[derive(Debug, Serialize)]
struct ValidationResponse {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<FailureMessage>,
    messages: Vec<ValidationMessage>,
}

impl ValidationMessage {
    fn from_issue(issue: &KeyIssue) -> Self {
        let (row, col) = match issue {
            KeyIssue::UnresolvedSymbol { anchor, .. }
            | KeyIssue::IncompleteKeyConfig { anchor, .. } => *anchor,
        };
        Self {
            severity: "warning",
            message: issue.to_string(),
            position: Some(ValidationPosition { row, col }),
        }
    }
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let catalogs = load_catalogs(config)?;
        let path = config.resolve_keyboard_path(self.file.as_deref().unwrap_or(Path::new("")));
        let keyboard = load_keyboard(&path, catalogs.as_catalogs());

        let failure = FailureMessage::from_keyboard(&keyboard);
        let mut messages = Vec::new();
        if let Some(failure) = &failure {
            messages.push(ValidationMessage {
                severity: "error",
                message: format!("{}: {}", failure.heading, failure.detail),
                position: None,
            });
        }
        messages.extend(keyboard.issues.iter().map(ValidationMessage::from_issue));

        let response = ValidationResponse {
            valid: failure.is_none(),
            failure,
            messages,
        };

        if self.json {
            print_json(&response)?;
        } else {
            if response.valid {
                println!("✓ Validation passed");
            } else {
                println!("✗ Validation failed");
            }

            if !response.messages.is_empty() {
                println!("\nIssues:");
                for msg in &response.messages {
                    let prefix = if msg.severity == "error" { "  ✗" } else { "  ⚠" };
                    println!("{} {}", prefix, msg.message.replace(['\r', '\n'], " "));
                }
            }
        }

        if !response.valid {
            return Err(CliError::validation(format!(
                "Keyboard definition is invalid: {}",
                path.display()
            )));
        }
        if self.strict && !response.messages.is_empty() {
            return Err(CliError::validation(format!(
                "{} key warning(s) in strict mode",
                response.messages.len()
            )));
        }

        Ok(())
    }
}
