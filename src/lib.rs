//! Dynamic keyboard layout compiler.
//!
//! This library loads declarative keyboard definition files (JSON, JSON5,
//! YAML or TOML), validates them, compiles each key into a renderable,
//! actionable form and places the keys on a grid. Malformed input is never
//! fatal: it produces a fixed error layout instead.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod compiler;
pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
