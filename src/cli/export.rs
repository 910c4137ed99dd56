//! Theme export command.

use crate::cli::common::{load_theme, CliError, CliResult};
use crate::config::Config;
use crate::export::{export_theme, validate_for_export, ExportFormat};
use crate::services::ThemeService;
use clap::Args;
use std::path::PathBuf;

/// Export a theme as JSON, QSS, CSS or YAML
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Path to theme JSON file
    #[arg(short, long, value_name = "FILE")]
    pub theme: PathBuf,

    /// Output format (json, qss, css, yaml); defaults to the configured format
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<ExportFormat>,

    /// Output file (prints to stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let doc = load_theme(&self.theme)?;

        let problems = validate_for_export(&doc);
        if !problems.is_empty() {
            return Err(CliError::validation(format!(
                "Theme cannot be exported: {}",
                problems.join(", ")
            )));
        }

        let format = match self.format {
            Some(format) => format,
            None => Config::load().unwrap_or_default().export.default_format,
        };

        match &self.output {
            Some(path) => {
                ThemeService::export_to_file(&doc, format, path)
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("Exported {} to {}", format, path.display());
            }
            None => {
                let content = export_theme(&doc, format)
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                print!("{content}");
                if !content.ends_with('\n') {
                    println!();
                }
            }
        }

        Ok(())
    }
}
