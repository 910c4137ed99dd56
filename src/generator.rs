//! Theme generation from a single background color.
//!
//! The background decides light or dark; primary and accent are derived by
//! pushing its lightness away from the background, and every text role is
//! the better of black or white against the color it sits on, so generated
//! themes meet WCAG AA for the standard pairs.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::accessibility::best_text_color;
use crate::models::{Color, ThemeDocument, ThemeVariant};

/// Named starting points for [`generate_theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    /// Near-black background
    Dark,
    /// White background
    Light,
    /// Deep navy background
    Blue,
    /// Forest green background
    Green,
    /// Dark violet background
    Purple,
    /// Warm dark red background
    Orange,
}

impl ThemePreset {
    /// Every preset.
    pub const ALL: [Self; 6] = [
        Self::Dark,
        Self::Light,
        Self::Blue,
        Self::Green,
        Self::Purple,
        Self::Orange,
    ];

    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
        }
    }

    /// Background color the preset generates from.
    #[must_use]
    pub const fn background(&self) -> Color {
        match self {
            Self::Dark => Color::new(0x1a, 0x1a, 0x1a),
            Self::Light => Color::WHITE,
            Self::Blue => Color::new(0x1e, 0x3a, 0x5f),
            Self::Green => Color::new(0x1a, 0x2e, 0x1a),
            Self::Purple => Color::new(0x2d, 0x1b, 0x45),
            Self::Orange => Color::new(0x4a, 0x1c, 0x1c),
        }
    }

    /// One-line description stored in generated themes.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Dark => "Low-glare dark theme",
            Self::Light => "Standard light theme",
            Self::Blue => "Professional blue theme",
            Self::Green => "Natural green theme",
            Self::Purple => "Elegant purple theme",
            Self::Orange => "Warm orange theme",
        }
    }
}

impl fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| {
                format!("unknown preset '{s}' (expected dark, light, blue, green, purple or orange)")
            })
    }
}

/// Whether a color reads as a dark background (HSL lightness below 50%).
#[must_use]
pub fn is_dark(color: Color) -> bool {
    color.to_hsl().2 < 0.5
}

/// Moves lightness towards white (`amount > 0.5`) or black, scaled by
/// `amount`, and boosts saturation by a fifth.
fn contrasting(base: Color, amount: f64) -> Color {
    let (h, s, l) = base.to_hsl();
    let lightness = if amount > 0.5 {
        l + (1.0 - l) * amount
    } else {
        l * amount
    };
    Color::from_hsl(h, (s * 1.2).min(1.0), lightness)
}

/// Shifts lightness and saturation by percentage points.
fn adjust(color: Color, lightness: f64, saturation: f64) -> Color {
    let (h, s, l) = color.to_hsl();
    Color::from_hsl(h, s + saturation / 100.0, l + lightness / 100.0)
}

/// Generates a complete theme around `background`.
///
/// Fonts and sizes come from the matching light or dark starter.
///
/// ```
/// use theme_studio::generator::generate_theme;
/// use theme_studio::models::Color;
///
/// let doc = generate_theme("night", Color::new(0x1a, 0x1a, 0x1a));
/// assert_eq!(doc.colors.get("text"), Some(Color::WHITE));
/// ```
#[must_use]
pub fn generate_theme(name: impl Into<String>, background: Color) -> ThemeDocument {
    let dark = is_dark(background);
    let (variant, primary, accent, surface) = if dark {
        (
            ThemeVariant::Dark,
            contrasting(background, 0.7),
            contrasting(background, 0.8),
            adjust(background, 20.0, 0.0),
        )
    } else {
        (
            ThemeVariant::Light,
            contrasting(background, 0.3),
            contrasting(background, 0.4),
            adjust(background, -20.0, 0.0),
        )
    };
    debug!("Generating {:?} theme from {}", variant, background);

    let mut doc = ThemeDocument::starter(name, variant);
    doc.description = format!("Generated from background {background}");
    doc.colors = doc
        .colors
        .iter()
        .filter(|(role, _)| matches!(*role, "success" | "error"))
        .map(|(role, color)| (role.to_string(), color))
        .collect();

    let button_hover = adjust(primary, 20.0, 10.0);
    let button_pressed = adjust(primary, -20.0, -10.0);
    let colors = [
        ("background", background),
        ("text", best_text_color(background)),
        ("primary", primary),
        ("accent", accent),
        ("surface", surface),
        ("border", adjust(surface, -30.0, 0.0)),
        ("button_background", primary),
        ("button_text", best_text_color(primary)),
        ("button_hover", button_hover),
        ("button_pressed", button_pressed),
        ("input_background", surface),
        ("input_text", best_text_color(surface)),
        ("selection_background", accent),
        ("selection_text", best_text_color(accent)),
        ("alternate_background", adjust(surface, 5.0, 0.0)),
    ];
    for (role, color) in colors {
        doc.colors.insert(role, color);
    }
    doc
}

/// Generates a theme from a preset, using the preset's description.
#[must_use]
pub fn generate_preset(name: impl Into<String>, preset: ThemePreset) -> ThemeDocument {
    let mut doc = generate_theme(name, preset.background());
    doc.description = preset.description().to_string();
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessibility::{analyze_theme, WcagLevel};

    #[test]
    fn test_presets_are_aa_compliant() {
        for preset in ThemePreset::ALL {
            let doc = generate_preset(preset.as_str(), preset);
            let report = analyze_theme(&doc.colors, WcagLevel::Aa, false);
            assert!(report.is_compliant(), "{preset}: {:?}", report.violations);
            assert_eq!(report.pairs.len(), 4, "{preset}");
        }
    }

    #[test]
    fn test_dark_background_gets_light_roles() {
        let doc = generate_theme("night", ThemePreset::Dark.background());
        let (_, _, bg_l) = ThemePreset::Dark.background().to_hsl();
        let (_, _, primary_l) = doc.colors.get("primary").unwrap().to_hsl();

        assert_eq!(doc.colors.get("text"), Some(Color::WHITE));
        assert!(primary_l > bg_l);
        assert_eq!(doc.fonts["default"].family, "Sans Serif");
    }

    #[test]
    fn test_light_background_gets_dark_roles() {
        let doc = generate_theme("day", Color::WHITE);
        let (_, _, primary_l) = doc.colors.get("primary").unwrap().to_hsl();

        assert_eq!(doc.colors.get("text"), Some(Color::BLACK));
        assert!(primary_l < 0.5);
        assert_eq!(doc.colors.get("surface"), Some(Color::new(204, 204, 204)));
    }

    #[test]
    fn test_is_dark() {
        assert!(is_dark(Color::BLACK));
        assert!(is_dark(ThemePreset::Blue.background()));
        assert!(!is_dark(Color::WHITE));
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("Purple".parse::<ThemePreset>(), Ok(ThemePreset::Purple));
        assert!("teal".parse::<ThemePreset>().is_err());
    }
}
