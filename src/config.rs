//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::branding::APP_DATA_DIR;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme display mode (auto-detect, dark, or light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Show the help overlay when the editor starts
    #[serde(default = "default_show_help")]
    pub show_help_on_startup: bool,
}

fn default_show_help() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            show_help_on_startup: true,
        }
    }
}

/// Editor behavior settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Maximum number of snapshots kept in the undo history
    #[serde(default = "default_max_history_size")]
    pub max_history_size: usize,
    /// Trailing-edge debounce window for live slider updates, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_max_history_size() -> usize {
    50
}

fn default_debounce_ms() -> u64 {
    250
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_history_size: default_max_history_size(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExportConfig {
    /// Directory where export artifacts are written (defaults to the current directory)
    pub output_dir: Option<PathBuf>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/CardStudio/config.toml`
/// - macOS: `~/Library/Application Support/CardStudio/config.toml`
/// - Windows: `%APPDATA%\CardStudio\config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Editor behavior settings
    #[serde(default)]
    pub editor: EditorConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ui: UiConfig::default(),
            editor: EditorConfig::default(),
            export: ExportConfig::default(),
        }
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/CardStudio/`
    /// - macOS: `~/Library/Application Support/CardStudio/`
    /// - Windows: `%APPDATA%\CardStudio\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

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
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
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

    /// Saves configuration to the config file.
    ///
    /// Performs an atomic write using a temp file + rename so a crash mid-write
    /// never leaves a corrupted config behind.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `max_history_size` must be at least 1 (a timeline always holds the current snapshot)
    /// - `output_dir` must exist if set
    pub fn validate(&self) -> Result<()> {
        if self.editor.max_history_size == 0 {
            anyhow::bail!("editor.max_history_size must be at least 1");
        }

        if let Some(output_dir) = &self.export.output_dir {
            if !output_dir.exists() || !output_dir.is_dir() {
                anyhow::bail!(
                    "export.output_dir does not exist or is not a directory: {}",
                    output_dir.display()
                );
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new_defaults() {
        let config = Config::new();
        assert_eq!(config.editor.max_history_size, 50);
        assert_eq!(config.editor.debounce_ms, 250);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert!(config.export.output_dir.is_none());
    }

    #[test]
    fn test_config_roundtrip_toml() {
        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Dark;
        config.editor.max_history_size = 25;

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let parsed: Config = toml::from_str("[ui]\ntheme_mode = \"Light\"\n").unwrap();
        assert_eq!(parsed.ui.theme_mode, ThemeMode::Light);
        assert_eq!(parsed.editor.max_history_size, 50);
    }

    #[test]
    fn test_validate_rejects_zero_history() {
        let mut config = Config::new();
        config.editor.max_history_size = 0;
        assert!(config.validate().is_err());
    }
}
