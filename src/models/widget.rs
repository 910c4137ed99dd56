//! Widget categories used to route preview widgets to stylesheet generators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stylesheet category of a preview widget.
///
/// Assigned once when the widget is registered and never re-derived on the
/// apply path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetCategory {
    /// Push buttons, tool buttons
    Button,
    /// Line edits, text edits, spin boxes
    Input,
    /// Combo boxes, lists, tables, check boxes, radio buttons
    Selection,
    /// Labels and group boxes
    Display,
    /// Frames, scroll areas, tab widgets and anything unclassified
    Container,
    /// Progress bars and sliders
    Progress,
}

impl WidgetCategory {
    /// Every category in generation order.
    pub const ALL: [Self; 6] = [
        Self::Button,
        Self::Input,
        Self::Selection,
        Self::Display,
        Self::Container,
        Self::Progress,
    ];

    /// Classifies a widget from its registered name or toolkit type name.
    ///
    /// Matching is case-insensitive and keyword based; names that match no
    /// keyword land in [`WidgetCategory::Container`].
    ///
    /// ```
    /// use theme_studio::models::WidgetCategory;
    ///
    /// assert_eq!(WidgetCategory::classify("push_button"), WidgetCategory::Button);
    /// assert_eq!(WidgetCategory::classify("QLineEdit"), WidgetCategory::Input);
    /// assert_eq!(WidgetCategory::classify("scroll_area"), WidgetCategory::Container);
    /// ```
    #[must_use]
    pub fn classify(name: &str) -> Self {
        const RULES: &[(WidgetCategory, &[&str])] = &[
            (WidgetCategory::Button, &["button"]),
            (WidgetCategory::Progress, &["progress", "slider", "bar"]),
            (WidgetCategory::Input, &["input", "edit", "line", "spin"]),
            (
                WidgetCategory::Selection,
                &["combo", "list", "table", "check", "radio"],
            ),
            (WidgetCategory::Display, &["label", "text", "group"]),
        ];

        let lower = name.to_ascii_lowercase();
        RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map_or(Self::Container, |(category, _)| *category)
    }

    /// Position of this category in [`WidgetCategory::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase identifier used in CLI arguments and logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Input => "input",
            Self::Selection => "selection",
            Self::Display => "display",
            Self::Container => "container",
            Self::Progress => "progress",
        }
    }
}

impl fmt::Display for WidgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown widget category '{s}' (expected one of: button, input, selection, display, container, progress)"
                )
            })
    }
}
