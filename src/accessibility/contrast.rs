//! WCAG 2.1 luminance and contrast-ratio math.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::Color;

/// Minimum ratio for AA, normal text.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for AAA, normal text.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for AA, large text (18pt, or 14pt bold).
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for AAA, large text.
pub const AAA_LARGE: f64 = 4.5;

/// Highest possible contrast ratio (black on white).
pub const MAX_CONTRAST: f64 = 21.0;

/// WCAG conformance level met by a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WcagLevel {
    /// Below the AA threshold
    Fail,
    /// Meets AA
    Aa,
    /// Meets AAA
    Aaa,
}

impl WcagLevel {
    /// Minimum contrast ratio required to reach this level.
    #[must_use]
    pub const fn min_ratio(&self, large_text: bool) -> f64 {
        match (self, large_text) {
            (Self::Fail, _) => 1.0,
            (Self::Aa, false) => AA_NORMAL,
            (Self::Aa, true) => AA_LARGE,
            (Self::Aaa, false) => AAA_NORMAL,
            (Self::Aaa, true) => AAA_LARGE,
        }
    }

    /// Uppercase label ("FAIL", "AA", "AAA").
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fail => "FAIL",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WcagLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AA" => Ok(Self::Aa),
            "AAA" => Ok(Self::Aaa),
            "FAIL" => Ok(Self::Fail),
            _ => Err(format!("unknown WCAG level '{s}' (expected AA or AAA)")),
        }
    }
}

/// Outcome of checking one foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastResult {
    /// Contrast ratio, always >= 1.0
    pub ratio: f64,
    /// Highest level the ratio meets
    pub level: WcagLevel,
    /// Foreground color
    pub foreground: Color,
    /// Background color
    pub background: Color,
}

impl ContrastResult {
    /// Whether the pair meets `level`.
    #[must_use]
    pub fn meets(&self, level: WcagLevel) -> bool {
        self.level >= level
    }
}

/// Linearizes one sRGB channel.
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.1, in `[0, 1]`.
///
/// ```
/// use theme_studio::accessibility::relative_luminance;
/// use theme_studio::models::Color;
///
/// assert_eq!(relative_luminance(Color::BLACK), 0.0);
/// assert!((relative_luminance(Color::WHITE) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast ratio between two colors, in `[1, 21]`.
///
/// Argument order does not matter.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Highest WCAG level met by `ratio`. Thresholds are inclusive.
#[must_use]
pub fn wcag_level(ratio: f64, large_text: bool) -> WcagLevel {
    if ratio >= WcagLevel::Aaa.min_ratio(large_text) {
        WcagLevel::Aaa
    } else if ratio >= WcagLevel::Aa.min_ratio(large_text) {
        WcagLevel::Aa
    } else {
        WcagLevel::Fail
    }
}

/// Computes ratio and level for a foreground/background pair.
#[must_use]
pub fn check_contrast(foreground: Color, background: Color, large_text: bool) -> ContrastResult {
    let ratio = contrast_ratio(foreground, background);
    ContrastResult {
        ratio,
        level: wcag_level(ratio, large_text),
        foreground,
        background,
    }
}

/// Black or white, whichever contrasts more with `background`.
#[must_use]
pub fn best_text_color(background: Color) -> Color {
    if contrast_ratio(Color::BLACK, background) >= contrast_ratio(Color::WHITE, background) {
        Color::BLACK
    } else {
        Color::WHITE
    }
}
