//! Theme import command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::import::ImportFormat;
use crate::services::ThemeService;
use clap::Args;
use std::path::PathBuf;

/// Import a theme from a JSON, QSS or CSS file
#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// File to import (.json, .qss or .css)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Save the imported theme here (prints the theme JSON when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

impl ImportArgs {
    /// Execute the import command
    pub fn execute(&self) -> CliResult<()> {
        ImportFormat::from_path(&self.file).map_err(|e| CliError::validation(e.to_string()))?;

        let imported = ThemeService::import(&self.file).map_err(|e| CliError::io(format!("{e:#}")))?;
        for warning in &imported.warnings {
            eprintln!("Warning: {warning}");
        }

        let mut doc = imported.document;
        match &self.output {
            Some(path) => {
                if path.exists() && !self.force {
                    return Err(CliError::validation(format!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    )));
                }
                ThemeService::save(&mut doc, path).map_err(|e| CliError::io(format!("{e:#}")))?;
                println!(
                    "Imported '{}' from {} ({} colors) to {}",
                    doc.name,
                    imported.format,
                    doc.colors.len(),
                    path.display()
                );
            }
            None => print_json(&doc)?,
        }
        Ok(())
    }
}
