//! Built-in localized string table.

use super::StringLookup;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Schema shared by the embedded strings.json and user string files.
#[derive(Debug, Deserialize)]
struct StringFile {
    #[serde(default)]
    #[allow(dead_code)]
    version: Option<String>,
    strings: HashMap<String, String>,
}

/// String lookup backed by a key → text table.
///
/// Unknown keys resolve to the key itself so a missing translation shows up
/// on screen instead of leaving a key blank.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    strings: HashMap<String, String>,
}

impl StringTable {
    /// Loads the embedded (English) string table.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("strings.json");
        let file: StringFile =
            serde_json::from_str(json_data).context("Failed to parse embedded strings.json")?;

        Ok(Self {
            strings: file.strings,
        })
    }

    /// Adds or replaces strings from a user JSON file.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read string file: {}", path.display()))?;
        let file: StringFile = serde_json::from_str(&content)
            .context(format!("Failed to parse string file: {}", path.display()))?;

        let count = file.strings.len();
        self.strings.extend(file.strings);
        tracing::debug!("Loaded {} strings from {}", count, path.display());

        Ok(count)
    }
}

impl StringLookup for StringTable {
    fn lookup(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
