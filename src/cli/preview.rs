//! Headless live preview simulation.
//!
//! Registers console widgets in a [`WidgetRegistry`], feeds a burst of theme
//! updates through [`LivePreview`] on a simulated clock and prints the
//! resulting [`ApplyReport`]s.

use crate::cli::common::{load_theme, print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::{Color, WidgetCategory};
use crate::preview::{ApplyReport, LivePreview, StyleMetrics, WidgetError, WidgetHandle, WidgetRegistry};
use clap::Args;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Widgets registered when `--widget` is not given.
const SHOWCASE_WIDGETS: &[&str] = &[
    "push_button",
    "disabled_button",
    "line_edit",
    "spinbox",
    "combo",
    "checkbox",
    "label",
    "group_box",
    "progress_bar",
    "slider",
    "tab_widget",
];

/// Simulate the live preview against console widgets
#[derive(Debug, Clone, Args)]
pub struct PreviewArgs {
    /// Path to theme JSON file
    #[arg(short, long, value_name = "FILE")]
    pub theme: PathBuf,

    /// Widget to register (repeatable; defaults to a showcase set)
    #[arg(short, long = "widget", value_name = "NAME")]
    pub widgets: Vec<String>,

    /// Make the named widget reject stylesheets (repeatable)
    #[arg(long = "fail", value_name = "NAME")]
    pub failing: Vec<String>,

    /// Number of edits in the simulated burst
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub burst: u32,

    /// Milliseconds between simulated edits
    #[arg(long, value_name = "MS", default_value_t = 20)]
    pub interval_ms: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct PreviewOutput {
    widgets: Vec<WidgetOutput>,
    passes: Vec<ApplyReport>,
}

#[derive(Serialize)]
struct WidgetOutput {
    name: String,
    category: WidgetCategory,
    stylesheet_bytes: usize,
}

/// Stand-in for a toolkit widget that records what it was given.
struct ConsoleWidget {
    name: String,
    reject: bool,
    stylesheet_bytes: Cell<usize>,
}

impl WidgetHandle for ConsoleWidget {
    fn set_stylesheet(&self, stylesheet: &str) -> Result<(), WidgetError> {
        if self.reject {
            return Err(WidgetError::Rejected("simulated failure".to_string()));
        }
        self.stylesheet_bytes.set(stylesheet.len());
        Ok(())
    }

    fn set_colors(&self, background: Color, foreground: Color) -> Result<(), WidgetError> {
        debug!("{}: background {} foreground {}", self.name, background, foreground);
        Ok(())
    }

    fn request_repaint(&self) -> Result<(), WidgetError> {
        Ok(())
    }
}

impl PreviewArgs {
    /// Execute the preview command
    pub fn execute(&self) -> CliResult<()> {
        if self.burst == 0 {
            return Err(CliError::validation("--burst must be at least 1"));
        }

        let doc = load_theme(&self.theme)?;
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let names: Vec<String> = if self.widgets.is_empty() {
            SHOWCASE_WIDGETS.iter().map(ToString::to_string).collect()
        } else {
            self.widgets.clone()
        };

        let registry = Rc::new(RefCell::new(WidgetRegistry::new()));
        let widgets: Vec<Rc<ConsoleWidget>> = names
            .iter()
            .map(|name| {
                Rc::new(ConsoleWidget {
                    name: name.clone(),
                    reject: self.failing.contains(name),
                    stylesheet_bytes: Cell::new(0),
                })
            })
            .collect();
        for widget in &widgets {
            registry.borrow_mut().register_named(widget.name.clone(), widget);
        }

        let mut preview = LivePreview::new(Rc::clone(&registry), config.preview_options());
        preview.set_metrics(StyleMetrics::from_document(&doc));

        let passes = simulate_burst(&mut preview, &doc.colors, self.burst, self.interval_ms);

        let widget_rows: Vec<WidgetOutput> = widgets
            .iter()
            .map(|w| WidgetOutput {
                name: w.name.clone(),
                category: registry
                    .borrow()
                    .get(&w.name)
                    .map_or(WidgetCategory::Container, |entry| entry.category()),
                stylesheet_bytes: w.stylesheet_bytes.get(),
            })
            .collect();

        if self.json {
            print_json(&PreviewOutput {
                widgets: widget_rows,
                passes: passes.clone(),
            })?;
        } else {
            println!("Preview of {} ({} edits)", doc.display_name(), self.burst);
            println!();
            for row in &widget_rows {
                println!(
                    "  {:<18} {:<10} {} bytes",
                    row.name, row.category, row.stylesheet_bytes
                );
            }
            println!();
            for (i, report) in passes.iter().enumerate() {
                println!(
                    "Pass {}: {}/{} widgets styled",
                    i + 1,
                    report.succeeded,
                    report.attempted
                );
                for name in &report.failed_widget_names {
                    println!("  failed: {name}");
                }
            }
        }

        let failed: usize = passes.iter().map(|r| r.failed_widget_names.len()).sum();
        if failed > 0 {
            return Err(CliError::check_failed(format!(
                "{failed} widget update(s) failed"
            )));
        }
        Ok(())
    }
}

/// Schedules `burst` copies of `colors` `interval_ms` apart, then ticks the
/// preview at each deadline until it goes idle.
fn simulate_burst(
    preview: &mut LivePreview,
    colors: &crate::models::ThemeColorMap,
    burst: u32,
    interval_ms: u64,
) -> Vec<ApplyReport> {
    let start = Instant::now();
    let interval = Duration::from_millis(interval_ms);
    let mut passes = Vec::new();

    let mut now = start;
    for _ in 0..burst {
        if let Some(report) = preview.tick(now) {
            passes.push(report);
        }
        preview.schedule_update_at(colors.clone(), now);
        now += interval;
    }

    while let Some(deadline) = preview.next_deadline() {
        now = now.max(deadline);
        match preview.tick(now) {
            Some(report) => passes.push(report),
            None => now += Duration::from_millis(1),
        }
    }
    passes
}
