//! Color accessibility engine.
//!
//! Pure color math: WCAG luminance and contrast, conformance levels,
//! lightness-based contrast fixes, hue harmonies and whole-theme audits.
//! Nothing here performs I/O; the only fallible step is parsing a
//! [`Color`](crate::models::Color), which happens before any of these
//! functions are called.

pub mod contrast;
pub mod harmony;
pub mod improve;
pub mod report;

pub use contrast::{
    best_text_color, check_contrast, contrast_ratio, relative_luminance, wcag_level,
    ContrastResult, WcagLevel, AAA_LARGE, AAA_NORMAL, AA_LARGE, AA_NORMAL, MAX_CONTRAST,
};
pub use harmony::{color_harmony, harmony, HarmonyKind};
pub use improve::suggest_improved_color;
pub use report::{analyze_theme, AccessibilityReport, PairResult, Violation};
