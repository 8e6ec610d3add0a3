//! Keyboard definition file loading.
//!
//! This module reads a definition file from disk and turns it into a
//! [`Definition`]. The document format is picked from the file extension;
//! anything unrecognized is read as JSON.

use crate::models::Definition;
use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Document formats accepted for definition files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    /// `.json` and the fallback for unknown extensions
    Json,
    /// `.json5`
    Json5,
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
}

impl DefinitionFormat {
    /// Picks the format from a path's extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("json5") => Self::Json5,
            Some("yaml" | "yml") => Self::Yaml,
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

impl fmt::Display for DefinitionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Json5 => write!(f, "JSON5"),
            Self::Yaml => write!(f, "YAML"),
            Self::Toml => write!(f, "TOML"),
        }
    }
}

/// Fatal failure while turning a file into a [`Definition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// No input path was given
    MissingInput,
    /// The file could not be read or is not a well-formed definition
    Parse {
        /// File that failed
        path: PathBuf,
        /// Full diagnostic text, including the underlying cause
        diagnostic: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput => write!(f, "No keyboard definition file specified"),
            Self::Parse { diagnostic, .. } => write!(f, "{diagnostic}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Parses definition text in the given format.
///
/// # Errors
///
/// Returns an error if the text is not a well-formed definition document.
pub fn parse_definition_str(content: &str, format: DefinitionFormat) -> Result<Definition> {
    let definition = match format {
        DefinitionFormat::Json => serde_json::from_str(content)?,
        DefinitionFormat::Json5 => json5::from_str(content)?,
        DefinitionFormat::Yaml => serde_yml::from_str(content)?,
        DefinitionFormat::Toml => toml::from_str(content)?,
    };
    Ok(definition)
}

/// Reads and parses one definition file.
///
/// The read is a single blocking call and is never retried.
///
/// # Errors
///
/// - [`LoadError::MissingInput`] when `path` is empty
/// - [`LoadError::Parse`] when the file cannot be read or parsed
pub fn load_definition(path: &Path) -> Result<Definition, LoadError> {
    if path.as_os_str().is_empty() {
        return Err(LoadError::MissingInput);
    }

    read_definition(path).map_err(|err| LoadError::Parse {
        path: path.to_path_buf(),
        diagnostic: format!("{err:#}"),
    })
}

fn read_definition(path: &Path) -> Result<Definition> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read keyboard file: {}", path.display()))?;

    let format = DefinitionFormat::from_path(path);
    tracing::debug!("Parsing {} as {}", path.display(), format);

    parse_definition_str(&content, format).context(format!(
        "Failed to parse keyboard file {} as {}",
        path.display(),
        format
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FunctionKey, Grid};
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DefinitionFormat::from_path(Path::new("a.json")),
            DefinitionFormat::Json
        );
        assert_eq!(
            DefinitionFormat::from_path(Path::new("a.JSON5")),
            DefinitionFormat::Json5
        );
        assert_eq!(
            DefinitionFormat::from_path(Path::new("a.yml")),
            DefinitionFormat::Yaml
        );
        assert_eq!(
            DefinitionFormat::from_path(Path::new("a.toml")),
            DefinitionFormat::Toml
        );
        assert_eq!(
            DefinitionFormat::from_path(Path::new("keyboard")),
            DefinitionFormat::Json
        );
    }

    #[test]
    fn test_empty_path_is_missing_input() {
        assert_eq!(
            load_definition(Path::new("")),
            Err(LoadError::MissingInput)
        );
    }

    #[test]
    fn test_missing_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");

        match load_definition(&path) {
            Err(LoadError::Parse { path: failed, diagnostic }) => {
                assert_eq!(failed, path);
                assert!(diagnostic.contains("Failed to read keyboard file"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_keeps_cause() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(&temp_dir, "broken.json", "{ \"Grid\": ");

        let err = load_definition(&path).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("Failed to parse keyboard file"));
        assert!(text.contains("JSON"));
    }

    #[test]
    fn test_unknown_action_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(
            &temp_dir,
            "bad_action.json",
            r#"{ "Grid": { "rows": 1, "cols": 1 },
                 "Keys": { "ActionKeys": [ { "row": 0, "col": 0, "action": "Teleport" } ] } }"#,
        );

        assert!(matches!(
            load_definition(&path),
            Err(LoadError::Parse { .. })
        ));
    }

    #[test]
    fn test_yaml_definition() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(
            &temp_dir,
            "keys.yaml",
            "Grid:\n  rows: 1\n  cols: 2\nisShiftAware: true\nKeys:\n  ActionKeys:\n    - row: 0\n      col: 1\n      action: Enter\n",
        );

        let definition = load_definition(&path).unwrap();
        assert_eq!(definition.grid, Some(Grid::new(1, 2)));
        assert!(definition.flags.is_shift_aware);
        assert_eq!(
            definition.keys.unwrap().action_keys[0].action,
            Some(FunctionKey::Enter)
        );
    }

    #[test]
    fn test_toml_definition() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(
            &temp_dir,
            "keys.toml",
            "borderThickness = \"1,2\"\n\n[Grid]\nrows = 3\ncols = 4\n\n[[Keys.TextKeys]]\nrow = 2\ncol = 3\ntext = \"z\"\n",
        );

        let definition = load_definition(&path).unwrap();
        assert_eq!(definition.grid, Some(Grid::new(3, 4)));
        assert!(definition.flags.border_thickness.is_some());
        assert_eq!(
            definition.keys.unwrap().text_keys[0].text.as_deref(),
            Some("z")
        );
    }
}
