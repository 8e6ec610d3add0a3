//! CLI command handlers for dynkey.

pub mod common;
pub mod compile;
pub mod keyboards;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use compile::CompileArgs;
pub use keyboards::KeyboardsArgs;
pub use validate::ValidateArgs;
