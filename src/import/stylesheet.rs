//! Color, font and size extraction from QSS and CSS files.

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{debug, warn};

use super::{fallback_theme_name, ImportFormat, ImportedTheme};
use crate::models::{Color, FontSpec, ThemeDocument};

/// Declarations whose first color becomes a role, in priority order.
const PROPERTY_ROLES: &[(&str, &str)] = &[
    ("selection-background-color", "selection_background"),
    ("selection-color", "selection_text"),
    ("background-color", "background"),
    ("background", "background"),
    ("border-color", "border"),
    ("border", "border"),
    ("color", "text"),
];

/// Declarations whose first pixel value becomes a size.
const PROPERTY_SIZES: &[(&str, &str)] = &[
    ("border-radius", "border_radius"),
    ("padding", "padding"),
    ("border-width", "border_width"),
];

/// Compiled patterns shared by one import.
struct Patterns {
    comment: Regex,
    declaration: Regex,
    custom_property: Regex,
    color_token: Regex,
    pixels: Regex,
}

impl Patterns {
    fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).with_context(|| format!("Invalid import pattern {pattern}"))
        };
        Ok(Self {
            comment: compile(r"(?s)/\*.*?\*/")?,
            declaration: compile(r"(?i)(?:^|[\s;{])([a-z][a-z-]*)\s*:\s*([^;{}]+)")?,
            custom_property: compile(r"--([A-Za-z0-9_-]+)\s*:\s*([^;{}]+)")?,
            color_token: compile(
                r"#[0-9a-fA-F]{6}\b|#[0-9a-fA-F]{3}\b|(?i:rgba?)\(\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d{1,3}\s*(?:,[^)]*)?\)|\b[a-zA-Z]+\b",
            )?,
            pixels: compile(r"^\s*(\d+)\s*(?:px)?\b")?,
        })
    }

    /// First color in a declaration value, skipping words that are not
    /// color names ("solid", "var", ...).
    fn first_color(&self, value: &str) -> Option<Color> {
        self.color_token
            .find_iter(value)
            .find_map(|m| parse_color_token(m.as_str()))
    }

    fn first_pixels(&self, value: &str) -> Option<u32> {
        self.pixels
            .captures(value)
            .and_then(|caps| caps[1].parse().ok())
    }
}

fn parse_color_token(token: &str) -> Option<Color> {
    if token.starts_with('#') {
        return Color::from_hex(token).ok();
    }
    if let Some(args) = token
        .split_once('(')
        .and_then(|(func, rest)| func.to_ascii_lowercase().starts_with("rgb").then_some(rest))
    {
        let mut channels = args
            .trim_end_matches(')')
            .split(',')
            .map(|c| c.trim().parse::<u8>().ok());
        return Some(Color::new(channels.next()??, channels.next()??, channels.next()??));
    }
    Color::from_name(token)
}

/// Extracts a theme from QSS or CSS text.
///
/// The first color of each well-known property becomes a role
/// (`background-color` becomes `background`, `color` becomes `text`, ...).
/// CSS custom properties named `--color-*` and `--size-*` map back onto
/// roles and sizes; other custom properties holding a color keep their
/// name. Remaining distinct colors are kept as `extracted_color_N`.
pub fn import_stylesheet(content: &str, format: ImportFormat, fallback_name: &str) -> Result<ImportedTheme> {
    let patterns = Patterns::new()?;
    let content = patterns.comment.replace_all(content, "");

    let mut doc = ThemeDocument::new(fallback_theme_name(fallback_name));
    doc.description = format!("Imported from {}", format.as_str().to_uppercase());
    let mut warnings = Vec::new();

    for caps in patterns.custom_property.captures_iter(&content) {
        let name = caps[1].to_ascii_lowercase();
        let value = caps[2].trim();
        if let Some(size_key) = name.strip_prefix("size-") {
            match patterns.first_pixels(value) {
                Some(px) => {
                    doc.sizes.insert(size_key.replace('-', "_"), px);
                }
                None => warnings.push(format!("Skipped --{name}: '{value}' is not a pixel size")),
            }
            continue;
        }
        if let Some(color) = patterns.first_color(value) {
            let role = name.strip_prefix("color-").unwrap_or(&name).replace('-', "_");
            doc.colors.insert(role, color);
        } else {
            debug!("Ignoring custom property --{} = {}", name, value);
        }
    }

    let mut extracted: Vec<Color> = Vec::new();
    let mut font_family = None;
    let mut font_size = None;
    let mut bold = false;

    for caps in patterns.declaration.captures_iter(&content) {
        let property = caps[1].to_ascii_lowercase();
        let value = caps[2].trim();
        // Values built from custom properties only hold fallbacks
        if value.contains("var(") {
            continue;
        }

        match property.as_str() {
            "font-family" => {
                if font_family.is_none() {
                    font_family = Some(first_family(value));
                }
                continue;
            }
            "font-size" => {
                if font_size.is_none() {
                    font_size = parse_font_size(value);
                }
                continue;
            }
            "font-weight" => {
                bold |= matches!(
                    value.to_ascii_lowercase().as_str(),
                    "bold" | "bolder" | "600" | "700" | "800" | "900"
                );
                continue;
            }
            _ => {}
        }

        if let Some((_, key)) = PROPERTY_SIZES.iter().find(|(p, _)| *p == property) {
            if !doc.sizes.contains_key(*key) {
                if let Some(px) = patterns.first_pixels(value) {
                    doc.sizes.insert((*key).to_string(), px);
                }
            }
        }

        let Some(color) = patterns.first_color(value) else {
            continue;
        };
        match PROPERTY_ROLES.iter().find(|(p, _)| *p == property) {
            Some((_, role)) if !doc.colors.contains(role) => {
                doc.colors.insert(*role, color);
            }
            _ => {
                if !extracted.contains(&color) {
                    extracted.push(color);
                }
            }
        }
    }

    let named: Vec<Color> = doc.colors.iter().map(|(_, c)| c).collect();
    for (i, color) in extracted.into_iter().filter(|c| !named.contains(c)).enumerate() {
        doc.colors.insert(format!("extracted_color_{i}"), color);
    }

    if let Some(family) = font_family.filter(|f| !f.is_empty()) {
        doc.fonts.insert(
            "default".to_string(),
            FontSpec {
                family,
                size: font_size.unwrap_or(10),
                bold,
            },
        );
    }

    if doc.colors.is_empty() {
        warnings.push("No colors found".to_string());
    }
    for warning in &warnings {
        warn!("Import: {}", warning);
    }

    Ok(ImportedTheme {
        format,
        document: doc,
        warnings,
    })
}

/// First family of a `font-family` list, unquoted.
fn first_family(value: &str) -> String {
    value
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string()
}

/// Reads a font size in points; pixel sizes are converted at 96 dpi.
fn parse_font_size(value: &str) -> Option<u32> {
    let value = value.trim().to_ascii_lowercase();
    if let Some(pt) = value.strip_suffix("pt") {
        return pt.trim().parse().ok();
    }
    let px: u64 = value.strip_suffix("px").unwrap_or(&value).trim().parse().ok()?;
    u32::try_from((px * 3 + 2) / 4).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::generate_css;
    use crate::models::ThemeVariant;

    const SAMPLE_QSS: &str = r"
/* Dark theme: color: #123456 in a comment is ignored */
QWidget {
    background-color: #2b2b2b;
    color: #f0f0f0;
    font-family: 'Segoe UI', sans-serif;
    font-size: 16px;
}
QPushButton {
    background-color: #3c7dd9;
    border: 1px solid #1e5bb0;
    border-radius: 6px;
    padding: 4px 10px;
    color: white;
}
QLineEdit { selection-background-color: rgb(61, 174, 233); }
";

    #[test]
    fn test_qss_roles_and_extras() {
        let imported = import_stylesheet(SAMPLE_QSS, ImportFormat::Qss, "dark").unwrap();
        let doc = &imported.document;

        assert_eq!(doc.name, "dark");
        assert_eq!(doc.colors.get("background"), Some(Color::new(0x2b, 0x2b, 0x2b)));
        assert_eq!(doc.colors.get("text"), Some(Color::new(0xf0, 0xf0, 0xf0)));
        assert_eq!(doc.colors.get("border"), Some(Color::new(0x1e, 0x5b, 0xb0)));
        assert_eq!(doc.colors.get("selection_background"), Some(Color::new(61, 174, 233)));
        assert_eq!(doc.colors.get("extracted_color_0"), Some(Color::new(0x3c, 0x7d, 0xd9)));
        assert_eq!(doc.colors.get("extracted_color_1"), Some(Color::WHITE));
        assert!(!doc.colors.iter().any(|(_, c)| c == Color::new(0x12, 0x34, 0x56)));

        assert_eq!(doc.sizes["border_radius"], 6);
        assert_eq!(doc.sizes["padding"], 4);
        let font = &doc.fonts["default"];
        assert_eq!(font.family, "Segoe UI");
        assert_eq!(font.size, 12);
        assert!(imported.warnings.is_empty());
    }

    #[test]
    fn test_exported_css_imports_back() {
        let original = ThemeDocument::starter("ocean", ThemeVariant::Dark);
        let css = generate_css(&original);

        let imported = import_stylesheet(&css, ImportFormat::Css, "ocean").unwrap();
        let doc = &imported.document;
        for (role, color) in original.colors.iter() {
            assert_eq!(doc.colors.get(role), Some(color), "role {role}");
        }
        assert_eq!(doc.sizes, original.sizes);
        assert!(doc.colors.iter().all(|(role, _)| !role.starts_with("extracted_color")));
    }

    #[test]
    fn test_no_colors_warns() {
        let imported = import_stylesheet("QWidget { margin: 2px; }", ImportFormat::Qss, "").unwrap();
        assert_eq!(imported.document.name, "imported_theme");
        assert!(imported.document.colors.is_empty());
        assert_eq!(imported.warnings, ["No colors found"]);
    }

    #[test]
    fn test_parse_color_token() {
        assert_eq!(parse_color_token("#fff"), Some(Color::WHITE));
        assert_eq!(parse_color_token("RGB(0, 0, 0)"), Some(Color::BLACK));
        assert_eq!(parse_color_token("rgba(255, 0, 0, 0.5)"), Some(Color::new(255, 0, 0)));
        assert_eq!(parse_color_token("solid"), None);
        assert_eq!(parse_color_token("rgb(300, 0, 0)"), None);
    }

    #[test]
    fn test_parse_font_size() {
        assert_eq!(parse_font_size("11pt"), Some(11));
        assert_eq!(parse_font_size("16px"), Some(12));
        assert_eq!(parse_font_size("13"), Some(10));
        assert_eq!(parse_font_size("large"), None);
        assert_eq!(parse_font_size("4294967295px"), Some(3_221_225_471));
    }
}
