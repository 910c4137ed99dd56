//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;
use theme_studio::models::{Color, ThemeColorMap, ThemeDocument, ThemeVariant};

/// Path to the theme-studio binary
pub fn theme_studio_bin() -> &'static str {
    env!("CARGO_BIN_EXE_theme-studio")
}

/// Runs the binary with an isolated config directory.
pub fn run_isolated(args: &[&str], config_dir: &Path) -> Output {
    Command::new(theme_studio_bin())
        .env("THEME_STUDIO_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Light starter theme; passes WCAG AA for every standard pair.
pub fn test_theme_accessible() -> ThemeDocument {
    let mut doc = ThemeDocument::starter("test_light", ThemeVariant::Light);
    doc.display_name = Some("Test Light".to_string());
    doc.description = "E2E test theme".to_string();
    doc
}

/// Theme whose body text fails AA (#999999 on white is about 2.85:1).
pub fn test_theme_low_contrast() -> ThemeDocument {
    let mut doc = ThemeDocument::new("low_contrast");
    doc.colors = ThemeColorMap::new()
        .with("primary", Color::new(0x00, 0x7a, 0xcc))
        .with("background", Color::WHITE)
        .with("text", Color::new(0x99, 0x99, 0x99));
    doc
}

/// Theme with no colors at all; refused by export.
pub fn test_theme_empty() -> ThemeDocument {
    ThemeDocument::new("empty")
}

/// Writes a theme as JSON into `dir` and returns its path.
pub fn write_theme(dir: &TempDir, file_name: &str, doc: &ThemeDocument) -> PathBuf {
    let path = dir.path().join(file_name);
    let json = serde_json::to_string_pretty(doc).expect("serialize theme");
    fs::write(&path, json).expect("write theme");
    path
}

/// Temp dir holding one accessible theme at `theme.json`.
pub fn temp_accessible_theme() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_theme(&dir, "theme.json", &test_theme_accessible());
    (dir, path)
}

/// Temp dir holding one low-contrast theme at `theme.json`.
pub fn temp_low_contrast_theme() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_theme(&dir, "theme.json", &test_theme_low_contrast());
    (dir, path)
}

/// Lossy stdout.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Lossy stderr.
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
