//! Theme accessibility audit command.

use crate::accessibility::{analyze_theme, WcagLevel};
use crate::cli::common::{load_theme, print_json, CliError, CliResult};
use crate::config::Config;
use clap::Args;
use std::path::PathBuf;

/// Audit a theme's text/background pairs against WCAG
#[derive(Debug, Clone, Args)]
pub struct AuditArgs {
    /// Path to theme JSON file
    #[arg(short, long, value_name = "FILE")]
    pub theme: PathBuf,

    /// Target level (aa or aaa); defaults to the configured level
    #[arg(long, value_name = "LEVEL")]
    pub level: Option<WcagLevel>,

    /// Use large-text thresholds
    #[arg(long)]
    pub large: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AuditArgs {
    /// Execute the audit command
    pub fn execute(&self) -> CliResult<()> {
        let doc = load_theme(&self.theme)?;
        let config = Config::load().unwrap_or_default();
        let target = self.level.unwrap_or(config.accessibility.target_level);
        if target == WcagLevel::Fail {
            return Err(CliError::validation("Target level must be AA or AAA"));
        }
        let large = self.large || config.accessibility.large_text;

        let report = analyze_theme(&doc.colors, target, large);

        if self.json {
            print_json(&report)?;
        } else {
            println!("Accessibility audit: {}", doc.display_name());
            println!("Target: WCAG {target}{}", if large { " (large text)" } else { "" });
            println!();
            for pair in &report.pairs {
                println!(
                    "  {:<10} {} on {}  {:>6.2}:1  {}",
                    pair.name,
                    pair.contrast.foreground,
                    pair.contrast.background,
                    pair.contrast.ratio,
                    pair.contrast.level
                );
            }
            if !report.violations.is_empty() {
                println!();
                println!("Suggested fixes:");
                for v in &report.violations {
                    println!(
                        "  {}: {} -> {} ({:.2}:1)",
                        v.name, v.foreground, v.suggestion, v.suggested_ratio
                    );
                }
            }
            println!();
            println!("Score: {:.0}/100", report.score);
        }

        if report.is_compliant() {
            Ok(())
        } else {
            Err(CliError::check_failed(format!(
                "{} of {} pairs fail WCAG {}",
                report.violations.len(),
                report.pairs.len(),
                target
            )))
        }
    }
}
