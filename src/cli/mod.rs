//! CLI command handlers for Theme Studio.
//!
//! This module provides headless, scriptable access to the accessibility
//! engine, stylesheet generation, imports, exports and the live preview for
//! automation, testing, and CI/CD integration.

pub mod audit;
pub mod common;
pub mod config;
pub mod contrast;
pub mod export;
pub mod harmony;
pub mod import;
pub mod new;
pub mod preview;
pub mod stylesheet;
pub mod suggest;

// Re-export types used by main.rs and tests
pub use audit::AuditArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use contrast::ContrastArgs;
pub use export::ExportArgs;
pub use harmony::HarmonyArgs;
pub use import::ImportArgs;
pub use new::NewArgs;
pub use preview::PreviewArgs;
pub use stylesheet::StylesheetArgs;
pub use suggest::SuggestArgs;
