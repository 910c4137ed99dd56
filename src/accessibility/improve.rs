//! Contrast improvement by lightness search.

use tracing::debug;

use super::contrast::contrast_ratio;
use crate::models::Color;

/// Lightness increment used when searching for a compliant color.
const LIGHTNESS_STEP: f64 = 0.005;

/// Walks lightness from `start` in `direction` (+1 or -1) until the contrast
/// against `background` reaches `target` or the lightness range ends.
///
/// Returns the first satisfying color and its lightness delta.
fn search_lightness(
    (hue, saturation, start): (f64, f64, f64),
    background: Color,
    target: f64,
    direction: f64,
) -> Option<(Color, f64)> {
    let mut step = 1_u32;
    loop {
        let lightness = (start + direction * f64::from(step) * LIGHTNESS_STEP).clamp(0.0, 1.0);
        let candidate = Color::from_hsl(hue, saturation, lightness);
        if contrast_ratio(candidate, background) >= target {
            return Some((candidate, (lightness - start).abs()));
        }
        if lightness <= 0.0 || lightness >= 1.0 {
            return None;
        }
        step += 1;
    }
}

/// Adjusts `foreground` so it reaches `target_ratio` against `background`.
///
/// Hue and saturation are preserved; only HSL lightness moves. Both the
/// darker and the lighter direction are searched and the candidate with the
/// smaller lightness change wins. A foreground that already meets the target
/// is returned unchanged.
///
/// When no lightness reaches the target, black or white is returned,
/// whichever contrasts more. This is best effort: callers that need a
/// guarantee must re-check the result with [`contrast_ratio`].
///
/// ```
/// use theme_studio::accessibility::{contrast_ratio, suggest_improved_color};
/// use theme_studio::models::Color;
///
/// let fg = Color::parse("#999999").unwrap();
/// let bg = Color::WHITE;
/// let improved = suggest_improved_color(fg, bg, 4.5);
/// assert!(contrast_ratio(improved, bg) >= 4.5);
/// ```
#[must_use]
pub fn suggest_improved_color(foreground: Color, background: Color, target_ratio: f64) -> Color {
    if contrast_ratio(foreground, background) >= target_ratio {
        return foreground;
    }

    let hsl = foreground.to_hsl();
    let darker = search_lightness(hsl, background, target_ratio, -1.0);
    let lighter = search_lightness(hsl, background, target_ratio, 1.0);

    let chosen = match (darker, lighter) {
        (Some(d), Some(l)) => Some(if d.1 <= l.1 { d } else { l }),
        (Some(d), None) => Some(d),
        (None, Some(l)) => Some(l),
        (None, None) => None,
    };

    if let Some((color, delta)) = chosen {
        debug!(
            "Adjusted {} -> {} (lightness delta {:.3}) for {:.2}:1 on {}",
            foreground, color, delta, target_ratio, background
        );
        return color;
    }

    let extremal = if contrast_ratio(Color::BLACK, background) >= contrast_ratio(Color::WHITE, background)
    {
        Color::BLACK
    } else {
        Color::WHITE
    };
    debug!(
        "Target {:.2}:1 unreachable on {}; falling back to {}",
        target_ratio, background, extremal
    );
    extremal
}
