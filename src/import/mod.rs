//! Theme import from JSON documents and existing stylesheets.
//!
//! JSON themes from other editors are normalized into a [`ThemeDocument`]:
//! role aliases ("bg", "fg", "main", ...) map onto the standard roles and
//! color values in hex, `0x`, RGB object or RGB array form are converted.
//! QSS and CSS files are scanned for color, font and size declarations.
//! Anything that cannot be converted is skipped and reported as a warning.

pub mod json;
pub mod stylesheet;

pub use json::import_json;
pub use stylesheet::import_stylesheet;

use anyhow::{bail, Result};
use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::models::ThemeDocument;

/// Input format of an import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportFormat {
    /// Theme document as JSON
    Json,
    /// Qt stylesheet
    Qss,
    /// Web stylesheet
    Css,
}

impl ImportFormat {
    /// Every supported format.
    pub const ALL: [Self; 3] = [Self::Json, Self::Qss, Self::Css];

    /// Lowercase identifier, also the file extension.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Qss => "qss",
            Self::Css => "css",
        }
    }

    /// Detects the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "qss" => Ok(Self::Qss),
            "css" => Ok(Self::Css),
            _ => bail!(
                "Unsupported import format '{}' (expected .json, .qss or .css)",
                path.display()
            ),
        }
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A theme converted from an external file.
#[derive(Debug, Clone, Serialize)]
pub struct ImportedTheme {
    /// Format the theme was read from
    pub format: ImportFormat,
    /// The converted theme
    pub document: ThemeDocument,
    /// Values that were skipped during conversion
    pub warnings: Vec<String>,
}

/// Converts file content in `format` into a theme.
///
/// `fallback_name` names the theme when the content does not, usually the
/// file stem.
pub fn import_theme(content: &str, format: ImportFormat, fallback_name: &str) -> Result<ImportedTheme> {
    match format {
        ImportFormat::Json => import_json(content, fallback_name),
        ImportFormat::Qss | ImportFormat::Css => import_stylesheet(content, format, fallback_name),
    }
}

/// Theme name to use when the source has none.
fn fallback_theme_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        "imported_theme".to_string()
    } else {
        trimmed.to_string()
    }
}
