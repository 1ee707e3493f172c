//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::keybinds::{parse_binding, Keybinds};
use crate::platform::appkit::{OptionAsAlt, TranslateOptions};

/// Keyboard translation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KeyboardConfig {
    /// Which option keys act as alt on macOS
    #[serde(default)]
    pub macos_option_as_alt: OptionAsAlt,
}

/// Keybinding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KeybindConfig {
    /// Start from an empty set instead of the defaults
    #[serde(default)]
    pub clear_defaults: bool,
    /// `trigger=action` lines, applied in order on top of the defaults
    #[serde(default)]
    pub bindings: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Default log level
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/keybridge/config.toml`
/// - macOS: `~/Library/Application Support/keybridge/config.toml`
/// - Windows: `%APPDATA%\keybridge\config.toml`
///
/// # Validation
///
/// - every keybinding must parse as `trigger=action`
/// - the log level must be a valid `tracing` filter directive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Keyboard translation settings
    #[serde(default)]
    pub keyboard: KeyboardConfig,
    /// Keybindings
    #[serde(default)]
    pub keybinds: KeybindConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/keybridge/`
    /// - macOS: `~/Library/Application Support/keybridge/`
    /// - Windows: `%APPDATA%\keybridge\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .context(format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - every binding parses
    /// - the log level is a valid filter directive
    pub fn validate(&self) -> Result<()> {
        for (idx, line) in self.keybinds.bindings.iter().enumerate() {
            parse_binding(line).context(format!("Invalid keybinding #{}: {line}", idx + 1))?;
        }

        tracing_subscriber::EnvFilter::try_new(&self.logging.level)
            .context(format!("Invalid log level: {}", self.logging.level))?;

        Ok(())
    }

    /// The effective keybindings: defaults (unless cleared) plus configured lines.
    ///
    /// Lines that fail to parse are skipped with a warning; [`Config::validate`]
    /// reports them as errors.
    #[must_use]
    pub fn keybinds(&self) -> Keybinds {
        let mut keybinds = if self.keybinds.clear_defaults {
            Keybinds::new()
        } else {
            Keybinds::defaults()
        };

        for line in &self.keybinds.bindings {
            if let Err(err) = keybinds.apply(line) {
                warn!(binding = %line, %err, "ignoring invalid keybinding");
            }
        }

        keybinds
    }

    /// Options for translating AppKit events.
    #[must_use]
    pub fn translate_options(&self) -> TranslateOptions {
        TranslateOptions {
            option_as_alt: self.keyboard.macos_option_as_alt,
        }
    }
}
