//! RGB color handling with hex/name parsing and HSL conversion.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while constructing a [`Color`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is neither a hex color nor a known color name.
    #[error("invalid color format '{0}': expected #RRGGBB, #RGB or a color name")]
    InvalidColorFormat(String),
}

/// Named colors accepted in theme files (SVG/Qt names, lowercase).
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::new(0, 0, 0)),
    ("white", Color::new(255, 255, 255)),
    ("red", Color::new(255, 0, 0)),
    ("green", Color::new(0, 128, 0)),
    ("lime", Color::new(0, 255, 0)),
    ("blue", Color::new(0, 0, 255)),
    ("navy", Color::new(0, 0, 128)),
    ("yellow", Color::new(255, 255, 0)),
    ("cyan", Color::new(0, 255, 255)),
    ("aqua", Color::new(0, 255, 255)),
    ("magenta", Color::new(255, 0, 255)),
    ("fuchsia", Color::new(255, 0, 255)),
    ("gray", Color::new(128, 128, 128)),
    ("grey", Color::new(128, 128, 128)),
    ("darkgray", Color::new(169, 169, 169)),
    ("darkgrey", Color::new(169, 169, 169)),
    ("lightgray", Color::new(211, 211, 211)),
    ("lightgrey", Color::new(211, 211, 211)),
    ("silver", Color::new(192, 192, 192)),
    ("maroon", Color::new(128, 0, 0)),
    ("olive", Color::new(128, 128, 0)),
    ("purple", Color::new(128, 0, 128)),
    ("teal", Color::new(0, 128, 128)),
    ("orange", Color::new(255, 165, 0)),
    ("darkred", Color::new(139, 0, 0)),
    ("darkblue", Color::new(0, 0, 139)),
    ("darkgreen", Color::new(0, 100, 0)),
];

/// An opaque RGB color.
///
/// Colors are immutable values; every channel is an 8-bit value so the
/// `[0, 255]` range holds by construction. Parsing accepts `#RRGGBB`,
/// `#RGB` and the color names in [`Color::from_name`]. The canonical
/// external form is lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Color {
    /// Pure black (`#000000`).
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white (`#ffffff`).
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new `Color` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a color from a `#`-prefixed hex string or a color name.
    ///
    /// Bare hex digits are rejected here so words like "fed" are not read
    /// as colors; use [`Color::from_hex`] where bare hex is expected.
    ///
    /// # Examples
    ///
    /// ```
    /// use theme_studio::models::Color;
    ///
    /// assert_eq!(Color::parse("#007acc").unwrap(), Color::new(0, 122, 204));
    /// assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
    /// assert_eq!(Color::parse("Navy").unwrap(), Color::new(0, 0, 128));
    /// assert!(Color::parse("not-a-color").is_err());
    /// assert!(Color::parse("fed").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed);
        }
        Self::from_name(trimmed).ok_or_else(|| ColorError::InvalidColorFormat(input.to_string()))
    }

    /// Parses a color from `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidColorFormat(hex.to_string());
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(invalid()),
        };

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16).map_err(|_| invalid())
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Looks up a named color (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, color)| *color)
    }

    /// Converts the color to a lowercase `#rrggbb` string.
    ///
    /// ```
    /// use theme_studio::models::Color;
    ///
    /// assert_eq!(Color::new(0, 122, 204).to_hex(), "#007acc");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to HSL.
    ///
    /// Returns `(h, s, l)` with hue in degrees `[0, 360)` and saturation and
    /// lightness in `[0, 1]`. Grayscale colors report hue and saturation 0.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return (0.0, 0.0, l);
        }

        let s = if l < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let h = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        } * 60.0;

        (h.rem_euclid(360.0), s, l)
    }

    /// Creates a color from HSL components.
    ///
    /// Hue wraps around 360 degrees; saturation and lightness are clamped to
    /// `[0, 1]`.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = h.rem_euclid(360.0);
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h_prime = h / 60.0;
        let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h_prime as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let to_channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(to_channel(r), to_channel(g), to_channel(b))
    }

    /// Returns this color with its HSL lightness replaced.
    #[must_use]
    pub fn with_lightness(&self, lightness: f64) -> Self {
        let (h, s, _) = self.to_hsl();
        Self::from_hsl(h, s, lightness)
    }

    /// Returns this color with its hue rotated by `degrees`.
    #[must_use]
    pub fn rotate_hue(&self, degrees: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h + degrees, s, l)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Color {
    /// Default color is black (#000000).
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        assert_eq!(Color::from_hex("#FF0000").unwrap(), Color::new(255, 0, 0));
        assert_eq!(Color::from_hex("00ff00").unwrap(), Color::new(0, 255, 0));
        assert_eq!(Color::from_hex("  #0000ff  ").unwrap(), Color::new(0, 0, 255));
        assert_eq!(Color::from_hex("#abc").unwrap(), Color::new(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Color::from_hex("#FFFF").is_err());
        assert!(Color::from_hex("#FFFFFFF").is_err());
        assert!(Color::from_hex("GGGGGG").is_err());
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("#").is_err());
        // Multi-byte characters must not panic on slicing
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(Color::parse("white").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("BLACK").unwrap(), Color::BLACK);
        assert_eq!(Color::parse(" Orange ").unwrap(), Color::new(255, 165, 0));
        assert_eq!(Color::parse("grey").unwrap(), Color::parse("gray").unwrap());
    }

    #[test]
    fn test_parse_requires_hash_for_hex() {
        for word in ["bad", "fed", "add", "c0ffee"] {
            assert!(Color::parse(word).is_err(), "{word} parsed as a color");
        }
        assert_eq!(Color::parse("#fed").unwrap(), Color::new(0xff, 0xee, 0xdd));
        assert_eq!(Color::from_hex("fed").unwrap(), Color::new(0xff, 0xee, 0xdd));
    }

    #[test]
    fn test_parse_error_carries_input() {
        let err = Color::parse("blurple").unwrap_err();
        assert_eq!(err, ColorError::InvalidColorFormat("blurple".to_string()));
        assert!(err.to_string().contains("blurple"));
    }

    #[test]
    fn test_to_hex_lowercase() {
        assert_eq!(Color::new(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(Color::new(0, 128, 255).to_hex(), "#0080ff");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::new(0, 122, 204)).unwrap();
        assert_eq!(json, "\"#007acc\"");

        let parsed: Color = serde_json::from_str("\"#333\"").unwrap();
        assert_eq!(parsed, Color::new(0x33, 0x33, 0x33));

        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    #[test]
    fn test_to_hsl_primaries() {
        let (h, s, l) = Color::new(255, 0, 0).to_hsl();
        assert!(h.abs() < 1e-9);
        assert!((s - 1.0).abs() < 1e-9);
        assert!((l - 0.5).abs() < 1e-9);

        let (h, _, _) = Color::new(0, 255, 0).to_hsl();
        assert!((h - 120.0).abs() < 1e-9);

        let (h, _, _) = Color::new(0, 0, 255).to_hsl();
        assert!((h - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_to_hsl_grayscale() {
        let (h, s, l) = Color::new(128, 128, 128).to_hsl();
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!((l - 0.502).abs() < 0.01);
    }

    #[test]
    fn test_hsl_roundtrip_within_one_step() {
        let colors = [
            Color::new(0, 122, 204),
            Color::new(255, 255, 0),
            Color::new(128, 64, 192),
            Color::new(200, 100, 50),
            Color::new(51, 51, 51),
        ];

        for color in colors {
            let (h, s, l) = color.to_hsl();
            let converted = Color::from_hsl(h, s, l);
            assert!((i16::from(color.r) - i16::from(converted.r)).abs() <= 1);
            assert!((i16::from(color.g) - i16::from(converted.g)).abs() <= 1);
            assert!((i16::from(color.b) - i16::from(converted.b)).abs() <= 1);
        }
    }

    #[test]
    fn test_with_lightness_extremes() {
        let color = Color::new(0, 122, 204);
        assert_eq!(color.with_lightness(0.0), Color::BLACK);
        assert_eq!(color.with_lightness(1.0), Color::WHITE);
    }

    #[test]
    fn test_rotate_hue_wraps() {
        let red = Color::new(255, 0, 0);
        assert_eq!(red.rotate_hue(120.0), Color::new(0, 255, 0));
        assert_eq!(red.rotate_hue(-120.0), Color::new(0, 0, 255));
        assert_eq!(red.rotate_hue(360.0), red);
    }
}
