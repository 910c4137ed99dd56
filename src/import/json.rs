//! JSON theme normalization.

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::{fallback_theme_name, ImportFormat, ImportedTheme};
use crate::models::{Color, FontSpec, ThemeDocument};

/// Keys that hold the color table, in lookup order.
const COLOR_TABLE_KEYS: &[&str] = &["color_scheme", "colors", "palette"];

/// Alternative role names used by other theme formats.
const ROLE_ALIASES: &[(&str, &str)] = &[
    ("bg", "background"),
    ("base", "background"),
    ("fg", "text"),
    ("foreground", "text"),
    ("main", "primary"),
    ("highlight", "accent"),
    ("alternate", "secondary"),
    ("card", "surface"),
    ("panel", "surface"),
    ("outline", "border"),
    ("danger", "error"),
    ("caution", "warning"),
    ("ok", "success"),
    ("information", "info"),
    ("text_muted", "text_secondary"),
    ("subtitle", "text_secondary"),
    ("selection", "selection_background"),
    ("selected", "selection_background"),
];

/// Point size used when a font entry gives only a family.
const DEFAULT_FONT_SIZE: u32 = 10;

/// Normalizes a JSON theme, taking the first entry of a top-level array.
///
/// Colors are read from `color_scheme`, `colors` or `palette`, whichever
/// comes first. A canonical role name always wins over its aliases.
pub fn import_json(content: &str, fallback_name: &str) -> Result<ImportedTheme> {
    let value: Value = serde_json::from_str(content).context("Failed to parse theme JSON")?;

    let value = match value {
        Value::Array(items) => {
            let Some(first) = items.into_iter().next() else {
                bail!("Theme JSON is an empty array");
            };
            debug!("Theme JSON is an array; importing the first entry");
            first
        }
        other => other,
    };
    let Value::Object(obj) = value else {
        bail!("Theme JSON must be an object");
    };

    let mut warnings = Vec::new();
    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .map_or_else(|| fallback_theme_name(fallback_name), fallback_theme_name);

    let mut doc = ThemeDocument::new(name);
    doc.display_name = obj
        .get("display_name")
        .and_then(Value::as_str)
        .map(ToString::to_string);
    if let Some(version) = obj.get("version").and_then(Value::as_str) {
        doc.version = version.to_string();
    }
    if let Some(description) = obj.get("description").and_then(Value::as_str) {
        doc.description = description.to_string();
    }

    match COLOR_TABLE_KEYS.iter().find_map(|key| obj.get(*key).map(|v| (*key, v))) {
        Some((_, Value::Object(table))) => read_colors(table, &mut doc, &mut warnings),
        Some((key, _)) => warnings.push(format!("'{key}' is not an object; no colors imported")),
        None => warnings.push("No color table found".to_string()),
    }

    match obj.get("fonts") {
        Some(Value::Object(fonts)) => read_fonts(fonts, &mut doc, &mut warnings),
        Some(_) => warnings.push("'fonts' is not an object".to_string()),
        None => {}
    }

    match obj.get("sizes") {
        Some(Value::Object(sizes)) => read_sizes(sizes, &mut doc, &mut warnings),
        Some(_) => warnings.push("'sizes' is not an object".to_string()),
        None => {}
    }

    for warning in &warnings {
        warn!("Import: {}", warning);
    }

    Ok(ImportedTheme {
        format: ImportFormat::Json,
        document: doc,
        warnings,
    })
}

fn canonical_role(key: &str) -> Option<&'static str> {
    ROLE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, role)| *role)
}

fn read_colors(table: &Map<String, Value>, doc: &mut ThemeDocument, warnings: &mut Vec<String>) {
    // Canonical names first so an alias never overrides them
    for (key, value) in table.iter().filter(|(k, _)| canonical_role(k).is_none()) {
        match color_value(value) {
            Some(color) => {
                doc.colors.insert(key.clone(), color);
            }
            None => warnings.push(format!("Skipped color '{key}': unrecognized value {value}")),
        }
    }

    for (key, value) in table {
        let Some(role) = canonical_role(key) else {
            continue;
        };
        if doc.colors.contains(role) {
            debug!("Alias '{}' ignored; '{}' already set", key, role);
            continue;
        }
        match color_value(value) {
            Some(color) => {
                doc.colors.insert(role, color);
            }
            None => warnings.push(format!("Skipped color '{key}': unrecognized value {value}")),
        }
    }
}

/// Converts a JSON color value.
///
/// Accepts `#rrggbb`/`#rgb`, `0xrrggbb`, bare hex digits, color names,
/// `{"r":..,"g":..,"b":..}` objects and `[r, g, b]` arrays.
pub fn color_value(value: &Value) -> Option<Color> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                return Color::from_hex(hex).ok();
            }
            Color::parse(s).ok().or_else(|| Color::from_hex(s).ok())
        }
        Value::Object(obj) => {
            let channel = |key: &str| obj.get(key).and_then(channel_value);
            Some(Color::new(channel("r")?, channel("g")?, channel("b")?))
        }
        Value::Array(items) if items.len() >= 3 => Some(Color::new(
            channel_value(&items[0])?,
            channel_value(&items[1])?,
            channel_value(&items[2])?,
        )),
        _ => None,
    }
}

fn channel_value(value: &Value) -> Option<u8> {
    value.as_u64().and_then(|v| u8::try_from(v).ok())
}

fn read_fonts(fonts: &Map<String, Value>, doc: &mut ThemeDocument, warnings: &mut Vec<String>) {
    for (key, value) in fonts {
        let font = match value {
            Value::String(family) => Some(FontSpec {
                family: family.clone(),
                size: DEFAULT_FONT_SIZE,
                bold: false,
            }),
            Value::Object(obj) => obj.get("family").and_then(Value::as_str).map(|family| FontSpec {
                family: family.to_string(),
                size: obj.get("size").and_then(size_value).unwrap_or(DEFAULT_FONT_SIZE),
                bold: is_bold(obj),
            }),
            _ => None,
        };
        match font {
            Some(font) => {
                doc.fonts.insert(key.clone(), font);
            }
            None => warnings.push(format!("Skipped font '{key}': no family given")),
        }
    }
}

fn is_bold(obj: &Map<String, Value>) -> bool {
    if let Some(bold) = obj.get("bold").and_then(Value::as_bool) {
        return bold;
    }
    match obj.get("weight") {
        Some(Value::String(w)) => matches!(w.to_ascii_lowercase().as_str(), "bold" | "bolder"),
        Some(Value::Number(n)) => n.as_u64().is_some_and(|w| w >= 600),
        _ => false,
    }
}

fn read_sizes(sizes: &Map<String, Value>, doc: &mut ThemeDocument, warnings: &mut Vec<String>) {
    for (key, value) in sizes {
        match size_value(value) {
            Some(size) => {
                doc.sizes.insert(key.clone(), size);
            }
            None => warnings.push(format!("Skipped size '{key}': unrecognized value {value}")),
        }
    }
}

/// Reads a pixel or point size from a number or a string like `"12px"`.
fn size_value(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .or_else(|| n.as_f64().and_then(round_size)),
        Value::String(s) => {
            let digits = s
                .trim()
                .trim_end_matches(|c: char| c.is_ascii_alphabetic())
                .trim();
            digits
                .parse::<u32>()
                .ok()
                .or_else(|| digits.parse::<f64>().ok().and_then(round_size))
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_size(value: f64) -> Option<u32> {
    let rounded = value.round();
    (0.0..=f64::from(u32::MAX))
        .contains(&rounded)
        .then_some(rounded as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_aliases_map_to_roles() {
        let content = json!({
            "name": "nord",
            "colors": {"bg": "#2e3440", "fg": "#eceff4", "main": "0x88c0d0", "warning": "ebcb8b"}
        })
        .to_string();

        let imported = import_json(&content, "file").unwrap();
        let colors = &imported.document.colors;
        assert_eq!(imported.document.name, "nord");
        assert_eq!(colors.get("background"), Some(Color::new(0x2e, 0x34, 0x40)));
        assert_eq!(colors.get("text"), Some(Color::new(0xec, 0xef, 0xf4)));
        assert_eq!(colors.get("primary"), Some(Color::new(0x88, 0xc0, 0xd0)));
        assert_eq!(colors.get("warning"), Some(Color::new(0xeb, 0xcb, 0x8b)));
        assert!(!colors.contains("bg"));
        assert!(imported.warnings.is_empty());
    }

    #[test]
    fn test_canonical_role_beats_alias() {
        let content = json!({"colors": {"base": "#000000", "background": "#ffffff"}}).to_string();
        let imported = import_json(&content, "pair").unwrap();
        assert_eq!(imported.document.colors.get("background"), Some(Color::WHITE));
        assert_eq!(imported.document.colors.len(), 1);
    }

    #[test]
    fn test_color_value_forms() {
        assert_eq!(color_value(&json!({"r": 0, "g": 122, "b": 204})), Some(Color::new(0, 122, 204)));
        assert_eq!(color_value(&json!([255, 255, 255])), Some(Color::WHITE));
        assert_eq!(color_value(&json!("Navy")), Some(Color::new(0, 0, 128)));
        assert_eq!(color_value(&json!("abc")), Some(Color::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(color_value(&json!([300, 0, 0])), None);
        assert_eq!(color_value(&json!("transparent")), None);
        assert_eq!(color_value(&json!(42)), None);
    }

    #[test]
    fn test_array_takes_first_and_names_from_file() {
        let content = json!([{"palette": {"primary": "#007acc"}}, {"name": "second"}]).to_string();
        let imported = import_json(&content, "ocean").unwrap();
        assert_eq!(imported.document.name, "ocean");
        assert_eq!(imported.document.colors.get("primary"), Some(Color::new(0, 122, 204)));

        assert!(import_json("[]", "x").is_err());
        assert!(import_json("\"just a string\"", "x").is_err());
        assert!(import_json("{ broken", "x").is_err());
    }

    #[test]
    fn test_invalid_values_become_warnings() {
        let content = json!({
            "name": "partial",
            "colors": {"primary": "#007acc", "accent": "not-a-color"},
            "sizes": {"padding": "12px", "border_radius": 4.6, "gap": "wide"},
            "fonts": {"default": "Inter", "heading": {"family": "Inter", "size": "14pt", "weight": 700}, "mono": 3}
        })
        .to_string();

        let imported = import_json(&content, "x").unwrap();
        let doc = &imported.document;
        assert_eq!(doc.colors.len(), 1);
        assert_eq!(doc.sizes["padding"], 12);
        assert_eq!(doc.sizes["border_radius"], 5);
        assert!(!doc.sizes.contains_key("gap"));
        assert_eq!(doc.fonts["default"].size, DEFAULT_FONT_SIZE);
        assert_eq!(doc.fonts["heading"].size, 14);
        assert!(doc.fonts["heading"].bold);
        assert!(!doc.fonts.contains_key("mono"));

        assert_eq!(imported.warnings.len(), 3, "{:?}", imported.warnings);
        assert!(imported.warnings.iter().any(|w| w.contains("accent")));
    }

    #[test]
    fn test_missing_color_table_warns() {
        let imported = import_json(r#"{"name": "bare"}"#, "x").unwrap();
        assert!(imported.document.colors.is_empty());
        assert_eq!(imported.warnings, ["No color table found"]);
    }
}
