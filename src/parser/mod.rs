//! Parsing of keyboard definition files.
//!
//! This module turns raw definition files (JSON, JSON5, YAML or TOML) into
//! the in-memory [`Definition`](crate::models::Definition) model.

pub mod definition;

// Re-export commonly used items
pub use definition::{load_definition, parse_definition_str, DefinitionFormat, LoadError};
