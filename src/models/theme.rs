//! Theme documents and their semantic color maps.
//!
//! A theme is a set of role colors ("primary", "button_background", ...)
//! plus optional font and size tables. Role names form an open namespace;
//! only `primary`, `accent`, `background` and `text` carry special meaning
//! as the roots of every fallback chain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::color::{Color, ColorError};

/// Base role: brand/primary color.
pub const ROLE_PRIMARY: &str = "primary";
/// Base role: accent color for hover and focus states.
pub const ROLE_ACCENT: &str = "accent";
/// Base role: window/background color.
pub const ROLE_BACKGROUND: &str = "background";
/// Base role: default text color.
pub const ROLE_TEXT: &str = "text";

/// Mapping from semantic role names to colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeColorMap(BTreeMap<String, Color>);

impl ThemeColorMap {
    /// Creates an empty color map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from `(role, color-string)` pairs.
    ///
    /// ```
    /// use theme_studio::models::ThemeColorMap;
    ///
    /// let map = ThemeColorMap::from_pairs(&[("primary", "#007acc"), ("text", "black")]).unwrap();
    /// assert_eq!(map.len(), 2);
    /// assert!(ThemeColorMap::from_pairs(&[("primary", "#12")]).is_err());
    /// ```
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, ColorError> {
        pairs
            .iter()
            .map(|(role, value)| Ok(((*role).to_string(), Color::parse(value)?)))
            .collect()
    }

    /// Sets a role color, returning the previous value.
    pub fn insert(&mut self, role: impl Into<String>, color: Color) -> Option<Color> {
        self.0.insert(role.into(), color)
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, role: impl Into<String>, color: Color) -> Self {
        self.insert(role, color);
        self
    }

    /// Removes a role.
    pub fn remove(&mut self, role: &str) -> Option<Color> {
        self.0.remove(role)
    }

    /// Returns the color for a role, if present.
    #[must_use]
    pub fn get(&self, role: &str) -> Option<Color> {
        self.0.get(role).copied()
    }

    /// Returns the first role in `chain` that is present.
    #[must_use]
    pub fn first_of(&self, chain: &[&str]) -> Option<Color> {
        chain.iter().find_map(|role| self.get(role))
    }

    /// Whether the role is present.
    #[must_use]
    pub fn contains(&self, role: &str) -> bool {
        self.0.contains_key(role)
    }

    /// Number of roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no roles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates roles in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.0.iter().map(|(role, color)| (role.as_str(), *color))
    }
}

impl FromIterator<(String, Color)> for ThemeColorMap {
    fn from_iter<I: IntoIterator<Item = (String, Color)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Font assignment for a text role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Font family name
    pub family: String,
    /// Point size
    pub size: u32,
    /// Bold weight
    #[serde(default)]
    pub bold: bool,
}

/// Light or dark flavor of the starter themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Dark background, light text
    Dark,
    /// Light background, dark text
    Light,
}

impl ThemeVariant {
    /// Detects the OS appearance, falling back to light.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => Self::Dark,
            Ok(dark_light::Mode::Light | dark_light::Mode::Unspecified) | Err(_) => Self::Light,
        }
    }
}

/// A complete theme as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDocument {
    /// Machine name of the theme
    pub name: String,
    /// Human-readable name (defaults to `name`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Theme version string
    #[serde(default = "default_version")]
    pub version: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Role colors
    #[serde(default)]
    pub colors: ThemeColorMap,
    /// Fonts by role ("default", "heading", ...)
    #[serde(default)]
    pub fonts: BTreeMap<String, FontSpec>,
    /// Pixel sizes by name ("padding", "border_radius", ...)
    #[serde(default)]
    pub sizes: BTreeMap<String, u32>,
    /// Last save time, stamped by the theme service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl ThemeDocument {
    /// Creates an empty theme with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            version: default_version(),
            description: String::new(),
            colors: ThemeColorMap::new(),
            fonts: BTreeMap::new(),
            sizes: BTreeMap::new(),
            modified: None,
        }
    }

    /// Display name, falling back to the machine name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Creates a starter theme for the given variant.
    ///
    /// Both starters pass WCAG AA for every standard text/background pair.
    #[must_use]
    pub fn starter(name: impl Into<String>, variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::Light => ThemeColorMap::new()
                .with(ROLE_PRIMARY, Color::new(0, 90, 158))
                .with(ROLE_ACCENT, Color::new(180, 100, 0))
                .with(ROLE_BACKGROUND, Color::WHITE)
                .with(ROLE_TEXT, Color::new(51, 51, 51))
                .with("surface", Color::new(245, 245, 245))
                .with("border", Color::new(180, 180, 180))
                .with("success", Color::new(0, 128, 0))
                .with("error", Color::new(179, 0, 0)),
            ThemeVariant::Dark => ThemeColorMap::new()
                .with(ROLE_PRIMARY, Color::new(100, 181, 246))
                .with(ROLE_ACCENT, Color::new(255, 193, 7))
                .with(ROLE_BACKGROUND, Color::new(18, 18, 18))
                .with(ROLE_TEXT, Color::new(230, 230, 230))
                .with("surface", Color::new(30, 30, 30))
                .with("border", Color::new(90, 90, 90))
                .with("success", Color::new(76, 175, 80))
                .with("error", Color::new(244, 67, 54)),
        };

        let mut fonts = BTreeMap::new();
        fonts.insert(
            "default".to_string(),
            FontSpec {
                family: "Sans Serif".to_string(),
                size: 10,
                bold: false,
            },
        );

        let mut sizes = BTreeMap::new();
        sizes.insert("padding".to_string(), 8);
        sizes.insert("border_radius".to_string(), 4);
        sizes.insert("border_width".to_string(), 1);

        Self {
            colors,
            fonts,
            sizes,
            ..Self::new(name)
        }
    }
}
