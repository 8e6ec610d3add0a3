//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed error-layout messages.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Dynamic Keyboard Compiler";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "dynkey";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "dynkey";

/// Platform line separator used when normalizing label escapes and wrapping text.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// Platform line separator used when normalizing label escapes and wrapping text.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Heading shown when the definition file cannot be read or parsed.
pub const HEADING_LOAD_FAILED: &str = "Error loading file";

/// Heading shown when the definition is structurally incomplete.
pub const HEADING_INVALID_FILE: &str = "Invalid keyboard file";

/// Heading shown when the grid has non-positive dimensions.
pub const HEADING_BAD_GRID: &str = "Incorrect grid definition";

/// Heading shown when two keys share an anchor cell.
pub const HEADING_DUPLICATES: &str = "Duplicate row/column values for keys";

/// Detail shown when no input file was given.
pub const DETAIL_NO_FILE: &str =
    "No file specified. Please choose a startup file in the keyboard settings.";

/// Symbol used by the error layout's back key.
pub const BACK_SYMBOL: &str = "BackIcon";

/// String-table key used for the error layout's back key label.
pub const BACK_STRING_KEY: &str = "BACK";
