//! New theme command.

use crate::cli::common::{parse_color_arg, CliError, CliResult};
use crate::config::Config;
use crate::export::ExportFormat;
use crate::generator::{generate_preset, generate_theme, ThemePreset};
use crate::models::{ThemeDocument, ThemeVariant};
use crate::services::ThemeService;
use clap::Args;
use std::path::PathBuf;

/// Create a starter theme file
#[derive(Debug, Clone, Args)]
pub struct NewArgs {
    /// Theme name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Output file (defaults to <name>.json in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Starter variant (light or dark); follows the configured theme mode when omitted
    #[arg(long, value_name = "VARIANT")]
    pub variant: Option<String>,

    /// Generate the theme around this background color
    #[arg(long, value_name = "COLOR", conflicts_with_all = ["variant", "preset"])]
    pub background: Option<String>,

    /// Generate the theme from a preset (dark, light, blue, green, purple, orange)
    #[arg(long, value_name = "PRESET", conflicts_with = "variant")]
    pub preset: Option<ThemePreset>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl NewArgs {
    /// Execute the new command
    pub fn execute(&self) -> CliResult<()> {
        if self.name.trim().is_empty() {
            return Err(CliError::validation("Theme name cannot be empty"));
        }

        let name = self.name.trim();
        let mut doc = match (&self.background, self.preset) {
            (Some(background), _) => generate_theme(name, parse_color_arg(background)?),
            (None, Some(preset)) => generate_preset(name, preset),
            (None, None) => {
                let variant = match &self.variant {
                    Some(value) => parse_variant(value)?,
                    None => Config::load().unwrap_or_default().ui.theme_mode.variant(),
                };
                ThemeDocument::starter(name, variant)
            }
        };
        let path = self
            .output
            .clone()
            .unwrap_or_else(|| ThemeService::default_export_path(&doc, ExportFormat::Json));

        if path.exists() && !self.force {
            return Err(CliError::validation(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        ThemeService::save(&mut doc, &path).map_err(|e| CliError::io(format!("{e:#}")))?;
        println!("Created theme '{}' at {}", doc.name, path.display());
        Ok(())
    }
}

fn parse_variant(value: &str) -> CliResult<ThemeVariant> {
    match value.to_lowercase().as_str() {
        "light" => Ok(ThemeVariant::Light),
        "dark" => Ok(ThemeVariant::Dark),
        _ => Err(CliError::validation(
            "Invalid variant. Must be 'light' or 'dark'",
        )),
    }
}
