//! Contrast fix suggestion command.

use crate::accessibility::{check_contrast, suggest_improved_color, WcagLevel};
use crate::cli::common::{parse_color_arg, print_json, CliError, CliResult};
use crate::cli::contrast::round2;
use crate::config::Config;
use clap::Args;
use serde::Serialize;

/// Suggest a foreground color that reaches a contrast target
#[derive(Debug, Clone, Args)]
pub struct SuggestArgs {
    /// Foreground color to adjust
    #[arg(value_name = "FG")]
    pub foreground: String,

    /// Background color (kept fixed)
    #[arg(value_name = "BG")]
    pub background: String,

    /// Target contrast ratio (1-21)
    #[arg(long, value_name = "RATIO", conflicts_with = "level")]
    pub target: Option<f64>,

    /// Target WCAG level (aa or aaa); defaults to the configured level
    #[arg(long, value_name = "LEVEL")]
    pub level: Option<WcagLevel>,

    /// Use large-text thresholds for --level
    #[arg(long)]
    pub large: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SuggestOutput {
    original: String,
    suggested: String,
    background: String,
    target_ratio: f64,
    original_ratio: f64,
    suggested_ratio: f64,
    reached: bool,
}

impl SuggestArgs {
    /// Execute the suggest command
    pub fn execute(&self) -> CliResult<()> {
        let fg = parse_color_arg(&self.foreground)?;
        let bg = parse_color_arg(&self.background)?;
        let target = self.target_ratio()?;

        let suggested = suggest_improved_color(fg, bg, target);
        let before = check_contrast(fg, bg, self.large);
        let after = check_contrast(suggested, bg, self.large);
        let reached = after.ratio >= target;

        if self.json {
            print_json(&SuggestOutput {
                original: fg.to_hex(),
                suggested: suggested.to_hex(),
                background: bg.to_hex(),
                target_ratio: target,
                original_ratio: round2(before.ratio),
                suggested_ratio: round2(after.ratio),
                reached,
            })?;
        } else {
            println!("{suggested}");
            println!(
                "Contrast: {:.2}:1 -> {:.2}:1 (target {:.2}:1)",
                before.ratio, after.ratio, target
            );
        }

        if !reached {
            return Err(CliError::check_failed(format!(
                "Target {target:.2}:1 is unreachable on {bg}; best effort is {suggested}"
            )));
        }
        Ok(())
    }

    fn target_ratio(&self) -> CliResult<f64> {
        if let Some(ratio) = self.target {
            if !(1.0..=21.0).contains(&ratio) {
                return Err(CliError::validation(format!(
                    "Target ratio must be between 1 and 21, got {ratio}"
                )));
            }
            return Ok(ratio);
        }

        let level = match self.level {
            Some(level) => level,
            None => Config::load().unwrap_or_default().accessibility.target_level,
        };
        if level == WcagLevel::Fail {
            return Err(CliError::validation("Target level must be AA or AAA"));
        }
        Ok(level.min_ratio(self.large))
    }
}
