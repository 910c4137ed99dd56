//! Hue-rotation color harmonies.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::models::Color;

/// Classic harmony schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmonyKind {
    /// Opposite hue (+180°)
    Complementary,
    /// Neighbors (-30°, +30°)
    Analogous,
    /// Thirds of the wheel (+120°, +240°)
    Triadic,
    /// Either side of the complement (+150°, +210°)
    SplitComplementary,
}

impl HarmonyKind {
    /// Every scheme.
    pub const ALL: [Self; 4] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::SplitComplementary,
    ];

    /// Hue offsets in degrees.
    #[must_use]
    pub const fn offsets(&self) -> &'static [f64] {
        match self {
            Self::Complementary => &[180.0],
            Self::Analogous => &[-30.0, 30.0],
            Self::Triadic => &[120.0, 240.0],
            Self::SplitComplementary => &[150.0, 210.0],
        }
    }

    /// Identifier used on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split",
        }
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "complementary" => Ok(Self::Complementary),
            "analogous" => Ok(Self::Analogous),
            "triadic" => Ok(Self::Triadic),
            "split" | "split_complementary" | "split-complementary" => {
                Ok(Self::SplitComplementary)
            }
            _ => Err(format!(
                "unknown harmony '{s}' (expected complementary, analogous, triadic or split)"
            )),
        }
    }
}

/// Variants of `base` for one harmony scheme, in offset order.
#[must_use]
pub fn harmony(base: Color, kind: HarmonyKind) -> Vec<Color> {
    kind.offsets()
        .iter()
        .map(|offset| base.rotate_hue(*offset))
        .collect()
}

/// Six hue-rotated variants of `base`.
///
/// Order: complementary (+180°), analogous (-30°, +30°), triadic
/// (+120°, +240°), split-complementary (+150°). Saturation and lightness
/// are preserved.
#[must_use]
pub fn color_harmony(base: Color) -> [Color; 6] {
    [180.0, -30.0, 30.0, 120.0, 240.0, 150.0].map(|offset| base.rotate_hue(offset))
}
