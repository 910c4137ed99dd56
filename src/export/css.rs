//! Web CSS export built on custom properties.

use std::fmt::Write as _;

use crate::constants::APP_NAME;
use crate::models::ThemeDocument;

/// Custom property name for a theme key: `button_text` -> `--color-button-text`.
fn var_name(prefix: &str, key: &str) -> String {
    format!("--{prefix}-{}", key.replace('_', "-"))
}

/// Generates a CSS file for a theme.
///
/// Every color role becomes a `--color-*` custom property and every size a
/// `--size-*` property in `:root`. Base rules for `body`, buttons and form
/// inputs are emitted when the roles they reference exist.
#[must_use]
pub fn generate_css(doc: &ThemeDocument) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "/* {} */", doc.display_name());
    let _ = writeln!(output, "/* Version: {} */", doc.version);
    let _ = writeln!(output, "/* Generated by {APP_NAME} */");
    output.push('\n');

    output.push_str(":root {\n");
    for (role, color) in doc.colors.iter() {
        let _ = writeln!(output, "    {}: {};", var_name("color", role), color);
    }
    for (name, size) in &doc.sizes {
        let _ = writeln!(output, "    {}: {}px;", var_name("size", name), size);
    }
    output.push_str("}\n\n");

    output.push_str("body {\n");
    if doc.colors.contains("background") {
        output.push_str("    background-color: var(--color-background);\n");
    }
    if doc.colors.contains("text") {
        output.push_str("    color: var(--color-text);\n");
    }
    if let Some(font) = doc.fonts.get("default") {
        let _ = writeln!(output, "    font-family: \"{}\";", font.family);
        let _ = writeln!(output, "    font-size: {}pt;", font.size);
        if font.bold {
            output.push_str("    font-weight: bold;\n");
        }
    }
    output.push_str("}\n");

    if doc.colors.contains("primary") {
        output.push_str(
            "
button, .btn {
    background-color: var(--color-button-background, var(--color-primary));
    color: var(--color-button-text, #ffffff);
    border: var(--size-border-width, 1px) solid var(--color-border, var(--color-primary));
    border-radius: var(--size-border-radius, 4px);
    padding: var(--size-padding, 8px);
    cursor: pointer;
}

button:hover, .btn:hover {
    background-color: var(--color-button-hover, var(--color-accent, var(--color-primary)));
}
",
        );
    }

    if doc.colors.contains("surface") || doc.colors.contains("input_background") {
        output.push_str(
            "
input, textarea, select {
    background-color: var(--color-input-background, var(--color-surface));
    color: var(--color-input-text, var(--color-text));
    border: var(--size-border-width, 1px) solid var(--color-input-border, var(--color-border, #cccccc));
    border-radius: var(--size-border-radius, 4px);
    padding: var(--size-padding, 8px);
}
",
        );
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Color, ThemeVariant};

    #[test]
    fn test_var_name() {
        assert_eq!(var_name("color", "button_text"), "--color-button-text");
        assert_eq!(var_name("size", "padding"), "--size-padding");
    }

    #[test]
    fn test_root_properties() {
        let doc = ThemeDocument::starter("ocean", ThemeVariant::Light);
        let css = generate_css(&doc);

        assert!(css.starts_with("/* ocean */\n/* Version: 1.0.0 */"));
        assert!(css.contains("    --color-primary: #005a9e;"));
        assert!(css.contains("    --color-background: #ffffff;"));
        assert!(css.contains("    --size-border-radius: 4px;"));
        assert!(css.contains("button, .btn {"));
        assert!(css.contains("input, textarea, select {"));
        assert!(css.contains("font-size: 10pt;"));
    }

    #[test]
    fn test_rules_skipped_without_roles() {
        let mut doc = ThemeDocument::new("bare");
        doc.colors.insert("text", Color::BLACK);

        let css = generate_css(&doc);
        assert!(css.contains("color: var(--color-text);"));
        assert!(!css.contains("background-color: var(--color-background);"));
        assert!(!css.contains("button, .btn"));
        assert!(!css.contains("input, textarea"));
    }
}
