//! Built-in symbol table.

use super::SymbolCatalog;
use crate::models::Symbol;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Schema shared by the embedded symbols.json and user symbol files.
#[derive(Debug, Deserialize)]
struct SymbolFile {
    #[serde(default)]
    #[allow(dead_code)]
    version: Option<String>,
    symbols: HashMap<String, String>,
}

/// Symbol catalog backed by path data keyed by name.
///
/// The default table is embedded in the binary; user files can add or
/// replace entries with [`SymbolTable::extend_from_file`].
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, String>,
}

impl SymbolTable {
    /// Loads the embedded symbol table.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("symbols.json");
        let file: SymbolFile =
            serde_json::from_str(json_data).context("Failed to parse embedded symbols.json")?;

        Ok(Self {
            symbols: file.symbols,
        })
    }

    /// Adds or replaces symbols from a user JSON file.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read symbol file: {}", path.display()))?;
        let file: SymbolFile = serde_json::from_str(&content)
            .context(format!("Failed to parse symbol file: {}", path.display()))?;

        let count = file.symbols.len();
        self.symbols.extend(file.symbols);
        tracing::debug!("Loaded {} symbols from {}", count, path.display());

        Ok(count)
    }

    /// Number of known symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true when the table holds no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl SymbolCatalog for SymbolTable {
    fn resolve_symbol(&self, name: &str) -> Option<Symbol> {
        self.symbols
            .get(name)
            .map(|path_data| Symbol::new(name, path_data.clone()))
    }
}
