//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::accessibility::WcagLevel;
use crate::export::ExportFormat;
use crate::models::ThemeVariant;
use crate::preview::{ContrastValidation, DebounceConfig, PreviewOptions};

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "THEME_STUDIO_CONFIG_DIR";

/// Upper bound for `max_wait_ms`; longer waits defeat a live preview.
pub const MAX_WAIT_LIMIT_MS: u64 = 2000;

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

impl ThemeMode {
    /// Starter variant for new themes under this preference.
    #[must_use]
    pub fn variant(self) -> ThemeVariant {
        match self {
            Self::Auto => ThemeVariant::detect(),
            Self::Dark => ThemeVariant::Dark,
            Self::Light => ThemeVariant::Light,
        }
    }
}

/// Live preview timing and validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Debounce window in milliseconds
    pub debounce_ms: u64,
    /// Forced flush after this many milliseconds of continuous edits
    pub max_wait_ms: u64,
    /// Fix low-contrast text roles before applying
    pub validate_contrast: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 100,
            max_wait_ms: 500,
            validate_contrast: false,
        }
    }
}

/// Accessibility targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityConfig {
    /// Level audits and validation aim for
    pub target_level: WcagLevel,
    /// Use large-text thresholds
    pub large_text: bool,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            target_level: WcagLevel::Aa,
            large_text: false,
        }
    }
}

/// Export defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportConfig {
    /// Format used when `--format` is omitted
    pub default_format: ExportFormat,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    pub theme_mode: ThemeMode,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ThemeStudio/config.toml`
/// - macOS: `~/Library/Application Support/ThemeStudio/config.toml`
/// - Windows: `%APPDATA%\ThemeStudio\config.toml`
///
/// `THEME_STUDIO_CONFIG_DIR` overrides the directory.
///
/// # Validation
///
/// - `debounce_ms` must be greater than zero
/// - `debounce_ms` must not exceed `max_wait_ms`
/// - `max_wait_ms` must not exceed 2000
/// - `target_level` must be AA or AAA
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Live preview settings
    #[serde(default)]
    pub preview: PreviewConfig,
    /// Accessibility targets
    #[serde(default)]
    pub accessibility: AccessibilityConfig,
    /// Export defaults
    #[serde(default)]
    pub export: ExportConfig,
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

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("ThemeStudio");

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

        Self::from_toml(&content).context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates configuration text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

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
    pub fn validate(&self) -> Result<()> {
        let preview = &self.preview;
        if preview.debounce_ms == 0 {
            anyhow::bail!("preview.debounce_ms must be greater than 0");
        }
        if preview.debounce_ms > preview.max_wait_ms {
            anyhow::bail!(
                "preview.debounce_ms ({}) must not exceed preview.max_wait_ms ({})",
                preview.debounce_ms,
                preview.max_wait_ms
            );
        }
        if preview.max_wait_ms > MAX_WAIT_LIMIT_MS {
            anyhow::bail!(
                "preview.max_wait_ms ({}) must not exceed {}",
                preview.max_wait_ms,
                MAX_WAIT_LIMIT_MS
            );
        }
        if self.accessibility.target_level == WcagLevel::Fail {
            anyhow::bail!("accessibility.target_level must be AA or AAA");
        }
        Ok(())
    }

    /// Debounce timing for the live preview.
    #[must_use]
    pub const fn debounce(&self) -> DebounceConfig {
        DebounceConfig {
            window: Duration::from_millis(self.preview.debounce_ms),
            max_wait: Duration::from_millis(self.preview.max_wait_ms),
        }
    }

    /// Live preview options derived from this configuration.
    #[must_use]
    pub fn preview_options(&self) -> PreviewOptions {
        PreviewOptions {
            debounce: self.debounce(),
            validation: self.preview.validate_contrast.then_some(ContrastValidation {
                target: self.accessibility.target_level,
                large_text: self.accessibility.large_text,
            }),
            ..PreviewOptions::default()
        }
    }
}
