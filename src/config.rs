//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::catalog::BuiltinCatalogs;
use crate::constants::CONFIG_DIR_NAME;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Directory searched for keyboard files given as relative paths
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboards_dir: Option<PathBuf>,
}

/// User extensions to the built-in catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// JSON file adding or replacing symbols
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbols_file: Option<PathBuf>,
    /// JSON file adding or replacing localized strings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strings_file: Option<PathBuf>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Log at debug level by default
    #[serde(default)]
    pub verbose: bool,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/dynkey/config.toml`
/// - macOS: `~/Library/Application Support/dynkey/config.toml`
/// - Windows: `%APPDATA%\dynkey\config.toml`
///
/// # Validation
///
/// - `keyboards_dir` must exist and be a directory, if set
/// - `symbols_file` and `strings_file` must exist, if set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Catalog extensions
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to an explicit file.
    ///
    /// Uses temp file + rename pattern for atomic writes. The parent
    /// directory is created if missing.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.paths.keyboards_dir {
            if !dir.is_dir() {
                anyhow::bail!("Keyboards directory does not exist: {}", dir.display());
            }
        }

        for (what, file) in [
            ("Symbol", &self.catalog.symbols_file),
            ("String", &self.catalog.strings_file),
        ] {
            if let Some(file) = file {
                if !file.is_file() {
                    anyhow::bail!("{} file does not exist: {}", what, file.display());
                }
            }
        }

        Ok(())
    }

    /// Loads the built-in catalogs and applies the configured extensions.
    pub fn load_catalogs(&self) -> Result<BuiltinCatalogs> {
        let mut catalogs = BuiltinCatalogs::load()?;

        if let Some(file) = &self.catalog.symbols_file {
            catalogs.symbols.extend_from_file(file)?;
        }
        if let Some(file) = &self.catalog.strings_file {
            catalogs.strings.extend_from_file(file)?;
        }

        Ok(catalogs)
    }

    /// Resolves a keyboard path given on the command line.
    ///
    /// A relative path that does not exist is looked up in `keyboards_dir`.
    /// Anything else is returned unchanged.
    #[must_use]
    pub fn resolve_keyboard_path(&self, path: &Path) -> PathBuf {
        if path.as_os_str().is_empty() || path.is_absolute() || path.exists() {
            return path.to_path_buf();
        }

        match &self.paths.keyboards_dir {
            Some(dir) if dir.join(path).exists() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}
