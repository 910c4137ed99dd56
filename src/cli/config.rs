//! Configuration management CLI commands.

use crate::accessibility::WcagLevel;
use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::export::ExportFormat;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Live preview debounce window in milliseconds
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Forced flush after this many milliseconds of continuous edits
    #[arg(long, value_name = "MS")]
    max_wait_ms: Option<u64>,

    /// Target WCAG level (aa or aaa)
    #[arg(long, value_name = "LEVEL")]
    level: Option<WcagLevel>,

    /// Use large-text thresholds (true or false)
    #[arg(long, value_name = "BOOL")]
    large_text: Option<bool>,

    /// Fix low-contrast text before live preview applies (true or false)
    #[arg(long, value_name = "BOOL")]
    validate_contrast: Option<bool>,

    /// Default export format (json, qss, css, yaml)
    #[arg(long, value_name = "FORMAT")]
    format: Option<ExportFormat>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme_mode: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    preview: PreviewOutput,
    accessibility: AccessibilityOutput,
    export: ExportOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct PreviewOutput {
    debounce_ms: u64,
    max_wait_ms: u64,
    validate_contrast: bool,
}

#[derive(Serialize, Debug)]
struct AccessibilityOutput {
    target_level: WcagLevel,
    large_text: bool,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    default_format: ExportFormat,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme_mode: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&ConfigOutput::from(&config))
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    const fn is_empty(&self) -> bool {
        self.debounce_ms.is_none()
            && self.max_wait_ms.is_none()
            && self.level.is_none()
            && self.large_text.is_none()
            && self.validate_contrast.is_none()
            && self.format.is_none()
            && self.theme_mode.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --debounce-ms, --max-wait-ms, --level, --large-text, --validate-contrast, --format, or --theme-mode",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(ms) = self.debounce_ms {
            config.preview.debounce_ms = ms;
        }
        if let Some(ms) = self.max_wait_ms {
            config.preview.max_wait_ms = ms;
        }
        if let Some(level) = self.level {
            config.accessibility.target_level = level;
        }
        if let Some(large) = self.large_text {
            config.accessibility.large_text = large;
        }
        if let Some(validate) = self.validate_contrast {
            config.preview.validate_contrast = validate;
        }
        if let Some(format) = self.format {
            config.export.default_format = format;
        }
        if let Some(mode) = &self.theme_mode {
            config.ui.theme_mode = parse_theme_mode(mode)?;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

fn parse_theme_mode(value: &str) -> CliResult<ThemeMode> {
    match value.to_lowercase().as_str() {
        "auto" => Ok(ThemeMode::Auto),
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        _ => Err(CliError::validation(
            "Invalid theme mode. Must be 'auto', 'light', or 'dark'",
        )),
    }
}

fn theme_mode_name(mode: ThemeMode) -> String {
    format!("{mode:?}").to_lowercase()
}

impl From<&Config> for ConfigOutput {
    fn from(config: &Config) -> Self {
        Self {
            preview: PreviewOutput {
                debounce_ms: config.preview.debounce_ms,
                max_wait_ms: config.preview.max_wait_ms,
                validate_contrast: config.preview.validate_contrast,
            },
            accessibility: AccessibilityOutput {
                target_level: config.accessibility.target_level,
                large_text: config.accessibility.large_text,
            },
            export: ExportOutput {
                default_format: config.export.default_format,
            },
            ui: UiOutput {
                theme_mode: theme_mode_name(config.ui.theme_mode),
            },
        }
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Theme Studio Configuration");
    println!("==========================");
    println!();

    println!("Preview:");
    println!("  Debounce: {} ms", config.preview.debounce_ms);
    println!("  Max Wait: {} ms", config.preview.max_wait_ms);
    println!(
        "  Validate Contrast: {}",
        if config.preview.validate_contrast { "on" } else { "off" }
    );
    println!();

    println!("Accessibility:");
    println!("  Target Level: {}", config.accessibility.target_level);
    println!("  Large Text: {}", config.accessibility.large_text);
    println!();

    println!("Export:");
    println!("  Default Format: {}", config.export.default_format);
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", theme_mode_name(config.ui.theme_mode));
    println!();
}
