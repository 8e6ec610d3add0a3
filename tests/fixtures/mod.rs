//! Shared test fixtures for end-to-end tests.
#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Path to the dynkey binary
pub fn dynkey_bin() -> &'static str {
    env!("CARGO_BIN_EXE_dynkey")
}

/// A 2x2 definition: one text key and three action keys without an action.
pub fn definition_text_and_empty_actions() -> Value {
    json!({
        "Grid": { "rows": 2, "cols": 2 },
        "Keys": {
            "TextKeys": [ { "row": 0, "col": 0, "label": "A", "text": "A" } ],
            "ActionKeys": [
                { "row": 0, "col": 1 },
                { "row": 1, "col": 0 },
                { "row": 1, "col": 1 }
            ]
        }
    })
}

/// A definition whose grid has no rows or columns.
pub fn definition_zero_grid() -> Value {
    json!({
        "Grid": { "rows": 0, "cols": 0 },
        "Keys": {
            "TextKeys": [ { "row": 0, "col": 0, "text": "A" } ]
        }
    })
}

/// Two text keys anchored at the same cell.
pub fn definition_duplicate_anchor() -> Value {
    json!({
        "Grid": { "rows": 2, "cols": 2 },
        "Keys": {
            "TextKeys": [
                { "row": 1, "col": 1, "text": "first" },
                { "row": 1, "col": 1, "text": "second" }
            ]
        }
    })
}

/// A 1x1 definition holding a single plugin key.
pub fn definition_plugin() -> Value {
    json!({
        "Grid": { "rows": 1, "cols": 1 },
        "Keys": {
            "PluginKeys": [
                { "row": 0, "col": 0, "label": "Run", "pluginName": "Foo", "methodName": "Bar" }
            ]
        }
    })
}

/// A valid definition with one key missing its text.
pub fn definition_with_warning() -> Value {
    json!({
        "Grid": { "rows": 1, "cols": 2 },
        "Keys": {
            "TextKeys": [
                { "row": 0, "col": 0, "text": "a" },
                { "row": 0, "col": 1, "label": "b" }
            ]
        }
    })
}

/// Writes `definition` as JSON into a fresh temp dir.
pub fn create_temp_definition_file(definition: &Value) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("keyboard.json");
    write_definition_file(definition, &path).expect("Failed to write definition file");
    (path, temp_dir)
}

/// Writes `definition` as JSON to `path`.
pub fn write_definition_file(definition: &Value, path: &Path) -> std::io::Result<()> {
    let content = serde_json::to_string_pretty(definition)?;
    fs::write(path, content)
}

/// Config path inside `temp_dir` that does not exist, so defaults apply.
pub fn isolated_config(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("config.toml")
}
