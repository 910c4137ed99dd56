//! Theme file I/O service.
//!
//! This module centralizes theme document loading and saving, and writing
//! exports to disk, so every file operation shares the same error context
//! and atomic-write behavior.

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::export::{export_theme, ExportFormat};
use crate::import::{import_theme, ImportFormat, ImportedTheme};
use crate::models::ThemeDocument;

/// Service for managing theme file I/O operations.
pub struct ThemeService;

impl ThemeService {
    /// Loads a theme document from a JSON file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use theme_studio::services::ThemeService;
    ///
    /// let theme = ThemeService::load(Path::new("ocean.json"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<ThemeDocument> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))
    }

    /// Saves a theme document as pretty JSON, stamping its modification time.
    ///
    /// The write is atomic: content goes to a temp file that is then renamed
    /// over the target.
    pub fn save(doc: &mut ThemeDocument, path: &Path) -> Result<()> {
        doc.modified = Some(Utc::now());
        let content = serde_json::to_string_pretty(doc).context("Failed to serialize theme")?;
        write_atomic(path, &content)
            .with_context(|| format!("Failed to save theme to {}", path.display()))?;
        info!("Saved theme '{}' to {}", doc.name, path.display());
        Ok(())
    }

    /// Imports a theme from a JSON, QSS or CSS file.
    ///
    /// The format follows the file extension; the file stem names the theme
    /// when the content does not.
    pub fn import(path: &Path) -> Result<ImportedTheme> {
        let format = ImportFormat::from_path(path)?;
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();

        let imported = import_theme(&content, format, stem)
            .with_context(|| format!("Failed to import {}", path.display()))?;
        info!(
            "Imported '{}' from {} ({} colors, {} warnings)",
            imported.document.name,
            format,
            imported.document.colors.len(),
            imported.warnings.len()
        );
        Ok(imported)
    }

    /// Exports a theme and writes the result to `path`.
    pub fn export_to_file(doc: &ThemeDocument, format: ExportFormat, path: &Path) -> Result<()> {
        let content = export_theme(doc, format)?;
        write_atomic(path, &content)
            .with_context(|| format!("Failed to write {format} export to {}", path.display()))?;
        info!("Exported theme '{}' as {} to {}", doc.name, format, path.display());
        Ok(())
    }

    /// Default file name for an export of `doc`.
    #[must_use]
    pub fn default_export_path(doc: &ThemeDocument, format: ExportFormat) -> PathBuf {
        PathBuf::from(format!("{}.{}", sanitize_filename(&doc.name), format.extension()))
    }
}

/// Writes `content` to a sibling temp file, then renames it over `path`.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to {}", path.display()))?;
    Ok(())
}

/// Sanitizes a theme name for use as a filename.
///
/// Replaces problematic characters with underscores and lowercases the result.
///
/// # Examples
///
/// ```
/// # use theme_studio::services::themes::sanitize_filename;
/// assert_eq!(sanitize_filename("Ocean Breeze"), "ocean_breeze");
/// assert_eq!(sanitize_filename("Dark/High:Contrast"), "dark_high_contrast");
/// ```
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    name.replace(['/', '\\', ':', ' '], "_").to_lowercase()
}
