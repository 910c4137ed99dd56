//! Qt stylesheet (QSS) export.

use std::fmt::Write as _;

use crate::constants::APP_NAME;
use crate::models::{ThemeDocument, WidgetCategory};
use crate::preview::{generate_window_stylesheet, StyleMetrics, StyleSheetSet};

/// Generates a complete QSS file for a theme.
///
/// The file starts with a comment header naming the theme and its version,
/// followed by the window-level rules and one section per widget category.
/// The category sections are the same stylesheets the live preview applies.
///
/// # Example
///
/// ```
/// use theme_studio::export::generate_qss;
/// use theme_studio::models::{ThemeDocument, ThemeVariant};
///
/// let doc = ThemeDocument::starter("ocean", ThemeVariant::Light);
/// let qss = generate_qss(&doc);
/// assert!(qss.starts_with("/* ocean */"));
/// assert!(qss.contains("QPushButton"));
/// ```
#[must_use]
pub fn generate_qss(doc: &ThemeDocument) -> String {
    let metrics = StyleMetrics::from_document(doc);
    let styles = StyleSheetSet::generate(&doc.colors, &metrics);
    let mut output = String::new();

    let _ = writeln!(output, "/* {} */", doc.display_name());
    let _ = writeln!(output, "/* Version: {} */", doc.version);
    let _ = writeln!(output, "/* Generated by {APP_NAME} */");
    if !doc.description.is_empty() {
        let _ = writeln!(output, "/* {} */", doc.description.replace("*/", "* /"));
    }
    output.push('\n');

    output.push_str(&generate_window_stylesheet(&doc.colors, &metrics));

    for category in WidgetCategory::ALL {
        let _ = writeln!(output, "\n/* {category} widgets */");
        output.push_str(&styles.get(category).stylesheet);
    }

    output
}
