//! Theme Studio - Qt theme accessibility and live preview toolkit
//!
//! Command-line front end for checking color contrast, auditing themes,
//! generating widget stylesheets, importing and exporting themes, and
//! simulating the live preview.

use clap::{Parser, Subcommand};
use theme_studio::cli::{
    AuditArgs, ConfigArgs, ContrastArgs, CliResult, ExportArgs, HarmonyArgs, ImportArgs, NewArgs,
    PreviewArgs, StylesheetArgs, SuggestArgs,
};
use theme_studio::constants::APP_BINARY_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Theme Studio - Qt theme accessibility and live preview toolkit
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the contrast of a color pair
    Contrast(ContrastArgs),
    /// Suggest a foreground color that reaches a contrast target
    Suggest(SuggestArgs),
    /// Generate harmony colors from a base color
    Harmony(HarmonyArgs),
    /// Audit a theme against WCAG
    Audit(AuditArgs),
    /// Export a theme
    Export(ExportArgs),
    /// Import a theme from JSON, QSS or CSS
    Import(ImportArgs),
    /// Print generated widget stylesheets
    Stylesheet(StylesheetArgs),
    /// Create a starter or generated theme
    New(NewArgs),
    /// Simulate the live preview against console widgets
    Preview(PreviewArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Contrast(args) => args.execute(),
            Self::Suggest(args) => args.execute(),
            Self::Harmony(args) => args.execute(),
            Self::Audit(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Import(args) => args.execute(),
            Self::Stylesheet(args) => args.execute(),
            Self::New(args) => args.execute(),
            Self::Preview(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code.code());
    }
}
