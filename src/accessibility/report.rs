//! Whole-theme accessibility audit.

use serde::Serialize;
use tracing::debug;

use super::contrast::{check_contrast, ContrastResult, WcagLevel};
use super::improve::suggest_improved_color;
use crate::models::{Color, ThemeColorMap};

/// A foreground/background role pair checked by [`analyze_theme`].
struct RolePair {
    name: &'static str,
    foreground: &'static [&'static str],
    background: &'static [&'static str],
}

/// Standard text/background pairs, resolved through the same fallbacks the
/// preview uses. Input text falls back to `text`; the other foregrounds must
/// be set explicitly since the preview derives them from the background.
const STANDARD_PAIRS: &[RolePair] = &[
    RolePair {
        name: "text",
        foreground: &["text"],
        background: &["background"],
    },
    RolePair {
        name: "button",
        foreground: &["button_text"],
        background: &["button_background", "primary"],
    },
    RolePair {
        name: "input",
        foreground: &["input_text", "text"],
        background: &["input_background", "background"],
    },
    RolePair {
        name: "selection",
        foreground: &["selection_text"],
        background: &["selection_background", "primary"],
    },
    RolePair {
        name: "status",
        foreground: &["status_text"],
        background: &["status_background", "background"],
    },
];

/// Checked role pair.
#[derive(Debug, Clone, Serialize)]
pub struct PairResult {
    /// Pair name ("text", "button", ...)
    pub name: String,
    /// Contrast outcome
    #[serde(flatten)]
    pub contrast: ContrastResult,
}

/// A pair below the target level, with a suggested replacement foreground.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    /// Pair name
    pub name: String,
    /// Measured ratio
    pub ratio: f64,
    /// Ratio the target level requires
    pub required_ratio: f64,
    /// Current foreground
    pub foreground: Color,
    /// Background the foreground sits on
    pub background: Color,
    /// Suggested foreground; may still fall short if the target is unreachable
    pub suggestion: Color,
    /// Ratio of the suggestion against the background
    pub suggested_ratio: f64,
}

/// Result of auditing a theme.
#[derive(Debug, Clone, Serialize)]
pub struct AccessibilityReport {
    /// Level the audit checked against
    pub target: WcagLevel,
    /// Whether large-text thresholds were used
    pub large_text: bool,
    /// Every pair that could be resolved
    pub pairs: Vec<PairResult>,
    /// Pairs below the target
    pub violations: Vec<Violation>,
    /// Lowest level across all pairs (AAA when no pair was checked)
    pub overall_level: WcagLevel,
    /// Share of compliant pairs, 0-100
    pub score: f64,
}

impl AccessibilityReport {
    /// Whether every checked pair meets the target.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Audits the standard text/background pairs of a theme against `target`.
///
/// Pairs whose roles cannot be resolved are skipped.
#[must_use]
pub fn analyze_theme(colors: &ThemeColorMap, target: WcagLevel, large_text: bool) -> AccessibilityReport {
    let required_ratio = target.min_ratio(large_text);
    let mut pairs = Vec::new();
    let mut violations = Vec::new();

    for pair in STANDARD_PAIRS {
        let (Some(fg), Some(bg)) = (colors.first_of(pair.foreground), colors.first_of(pair.background))
        else {
            debug!("Skipping '{}' pair: roles not set", pair.name);
            continue;
        };

        let contrast = check_contrast(fg, bg, large_text);
        if !contrast.meets(target) {
            let suggestion = suggest_improved_color(fg, bg, required_ratio);
            violations.push(Violation {
                name: pair.name.to_string(),
                ratio: contrast.ratio,
                required_ratio,
                foreground: fg,
                background: bg,
                suggestion,
                suggested_ratio: check_contrast(suggestion, bg, large_text).ratio,
            });
        }
        pairs.push(PairResult {
            name: pair.name.to_string(),
            contrast,
        });
    }

    let overall_level = pairs
        .iter()
        .map(|p| p.contrast.level)
        .min()
        .unwrap_or(WcagLevel::Aaa);

    #[allow(clippy::cast_precision_loss)]
    let score = if pairs.is_empty() {
        100.0
    } else {
        (pairs.len() - violations.len()) as f64 / pairs.len() as f64 * 100.0
    };

    AccessibilityReport {
        target,
        large_text,
        pairs,
        violations,
        overall_level,
        score,
    }
}
