//! Stylesheet generation command.

use crate::cli::common::{load_theme, CliResult};
use crate::models::WidgetCategory;
use crate::preview::{generate_stylesheet, generate_window_stylesheet, StyleMetrics, StyleSheetSet};
use clap::Args;
use std::path::PathBuf;

/// Print the Qt stylesheet the live preview applies to a widget category
#[derive(Debug, Clone, Args)]
pub struct StylesheetArgs {
    /// Path to theme JSON file
    #[arg(short, long, value_name = "FILE")]
    pub theme: PathBuf,

    /// Widget category (button, input, selection, display, container, progress)
    #[arg(short, long, value_name = "CATEGORY", conflicts_with_all = ["widget", "window"])]
    pub category: Option<WidgetCategory>,

    /// Classify a widget name and print its stylesheet
    #[arg(short, long, value_name = "NAME", conflicts_with = "window")]
    pub widget: Option<String>,

    /// Print the window-level stylesheet (menus, tool bar, status bar)
    #[arg(long)]
    pub window: bool,
}

impl StylesheetArgs {
    /// Execute the stylesheet command
    pub fn execute(&self) -> CliResult<()> {
        let doc = load_theme(&self.theme)?;
        let metrics = StyleMetrics::from_document(&doc);

        if self.window {
            print!("{}", generate_window_stylesheet(&doc.colors, &metrics));
            return Ok(());
        }

        let category = match (&self.category, &self.widget) {
            (Some(category), _) => Some(*category),
            (None, Some(name)) => {
                let category = WidgetCategory::classify(name);
                eprintln!("Widget '{name}' is in category '{category}'");
                Some(category)
            }
            (None, None) => None,
        };

        match category {
            Some(category) => print!("{}", generate_stylesheet(&doc.colors, category, &metrics)),
            None => {
                for style in StyleSheetSet::generate(&doc.colors, &metrics).iter() {
                    println!("/* {} */", style.category);
                    print!("{}", style.stylesheet);
                    println!();
                }
            }
        }
        Ok(())
    }
}
