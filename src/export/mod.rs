//! Theme export in stylesheet and data formats.
//!
//! QSS and CSS are generated from the theme's resolved role colors; JSON and
//! YAML serialize the document itself.

pub mod css;
pub mod qss;

pub use css::generate_css;
pub use qss::generate_qss;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::ThemeDocument;

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Pretty-printed theme document
    Json,
    /// Qt stylesheet
    #[default]
    Qss,
    /// Web stylesheet with custom properties
    Css,
    /// Theme document as YAML
    Yaml,
}

impl ExportFormat {
    /// Every supported format.
    pub const ALL: [Self; 4] = [Self::Json, Self::Qss, Self::Css, Self::Yaml];

    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Qss => "qss",
            Self::Css => "css",
            Self::Yaml => "yaml",
        }
    }

    /// Conventional file extension (without the dot).
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Yaml => "yml",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "qss" => Ok(Self::Qss),
            "css" => Ok(Self::Css),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(format!(
                "unknown export format '{s}' (expected json, qss, css or yaml)"
            )),
        }
    }
}

/// Problems that make a theme unsuitable for export.
///
/// An empty list means the theme can be exported.
#[must_use]
pub fn validate_for_export(doc: &ThemeDocument) -> Vec<String> {
    let mut problems = Vec::new();
    if doc.name.trim().is_empty() {
        problems.push("theme name is empty".to_string());
    }
    if doc.version.trim().is_empty() {
        problems.push("theme version is empty".to_string());
    }
    if doc.colors.is_empty() {
        problems.push("theme defines no colors".to_string());
    }
    problems
}

/// Renders a theme in the requested format.
pub fn export_theme(doc: &ThemeDocument, format: ExportFormat) -> Result<String> {
    let problems = validate_for_export(doc);
    if !problems.is_empty() {
        anyhow::bail!("Theme '{}' cannot be exported: {}", doc.name, problems.join(", "));
    }

    match format {
        ExportFormat::Json => {
            serde_json::to_string_pretty(doc).context("Failed to serialize theme to JSON")
        }
        ExportFormat::Yaml => serde_yml::to_string(doc).context("Failed to serialize theme to YAML"),
        ExportFormat::Qss => Ok(generate_qss(doc)),
        ExportFormat::Css => Ok(generate_css(doc)),
    }
}
