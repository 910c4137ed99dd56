//! Contrast check command.

use crate::accessibility::{check_contrast, WcagLevel};
use crate::cli::common::{parse_color_arg, print_json, CliError, CliResult};
use clap::Args;
use serde::Serialize;

/// Check the WCAG contrast of a foreground/background pair
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// Foreground color (#RRGGBB, #RGB or a color name)
    #[arg(value_name = "FG")]
    pub foreground: String,

    /// Background color
    #[arg(value_name = "BG")]
    pub background: String,

    /// Use large-text thresholds (18pt, or 14pt bold)
    #[arg(long)]
    pub large: bool,

    /// Exit with code 3 unless the pair reaches this level (aa or aaa)
    #[arg(long, value_name = "LEVEL")]
    pub require: Option<WcagLevel>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ContrastOutput {
    foreground: String,
    background: String,
    ratio: f64,
    level: WcagLevel,
    large_text: bool,
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<()> {
        let fg = parse_color_arg(&self.foreground)?;
        let bg = parse_color_arg(&self.background)?;
        let result = check_contrast(fg, bg, self.large);

        if self.json {
            print_json(&ContrastOutput {
                foreground: fg.to_hex(),
                background: bg.to_hex(),
                ratio: round2(result.ratio),
                level: result.level,
                large_text: self.large,
            })?;
        } else {
            println!("Foreground: {fg}");
            println!("Background: {bg}");
            println!("Contrast ratio: {:.2}:1", result.ratio);
            println!(
                "WCAG level: {} ({} text)",
                result.level,
                if self.large { "large" } else { "normal" }
            );
        }

        if let Some(required) = self.require {
            if !result.meets(required) {
                return Err(CliError::check_failed(format!(
                    "Contrast {:.2}:1 does not meet {} (needs {:.1}:1)",
                    result.ratio,
                    required,
                    required.min_ratio(self.large)
                )));
            }
        }

        Ok(())
    }
}

/// Rounds to two decimals for display.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
