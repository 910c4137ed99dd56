//! End-to-end tests for `theme-studio export`.

mod fixtures;
use fixtures::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_export_qss_to_stdout() {
    let config_dir = TempDir::new().unwrap();
    let (_dir, theme) = temp_accessible_theme();

    let output = run_isolated(
        &["export", "--theme", theme.to_str().unwrap(), "--format", "qss"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("/* Test Light */"));
    assert!(stdout.contains("/* Version: 1.0.0 */"));
    assert!(stdout.contains("/* Generated by Theme Studio */"));
    assert!(stdout.contains("/* button widgets */"));
    assert!(stdout.contains("QPushButton"));
    assert!(stdout.contains("#005a9e"));
}

#[test]
fn test_export_default_format_is_qss() {
    let config_dir = TempDir::new().unwrap();
    let (_dir, theme) = temp_accessible_theme();

    let output = run_isolated(&["export", "--theme", theme.to_str().unwrap()], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("QPushButton"));
}

#[test]
fn test_export_css_to_file() {
    let config_dir = TempDir::new().unwrap();
    let (dir, theme) = temp_accessible_theme();
    let out_path = dir.path().join("out").join("theme.css");

    let output = run_isolated(
        &[
            "export",
            "--theme",
            theme.to_str().unwrap(),
            "--format",
            "css",
            "--output",
            out_path.to_str().unwrap(),
        ],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let css = fs::read_to_string(&out_path).expect("export written");
    assert!(css.contains(":root {"));
    assert!(css.contains("--color-primary: #005a9e;"));
    assert!(css.contains("--color-background: #ffffff;"));
    assert!(css.contains("background-color: var(--color-background);"));
    assert!(!dir.path().join("out").join("theme.css.tmp").exists());
}

#[test]
fn test_export_json_round_trips_document() {
    let config_dir = TempDir::new().unwrap();
    let (_dir, theme) = temp_accessible_theme();

    let output = run_isolated(
        &["export", "--theme", theme.to_str().unwrap(), "--format", "json"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let doc: theme_studio::models::ThemeDocument =
        serde_json::from_slice(&output.stdout).expect("valid theme JSON");
    assert_eq!(doc, test_theme_accessible());
}

#[test]
fn test_export_yaml() {
    let config_dir = TempDir::new().unwrap();
    let (_dir, theme) = temp_accessible_theme();

    let output = run_isolated(
        &["export", "--theme", theme.to_str().unwrap(), "--format", "yaml"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("name: test_light"));
    assert!(stdout.contains("primary:"));
    assert!(stdout.contains("#005a9e"));
}

#[test]
fn test_export_configured_default_format() {
    let config_dir = TempDir::new().unwrap();
    let (_dir, theme) = temp_accessible_theme();

    let set = run_isolated(&["config", "set", "--format", "css"], config_dir.path());
    assert_eq!(set.status.code(), Some(0), "stderr: {}", stderr_of(&set));

    let output = run_isolated(&["export", "--theme", theme.to_str().unwrap()], config_dir.path());
    assert!(stdout_of(&output).contains(":root {"));
}

#[test]
fn test_export_refuses_empty_theme() {
    let config_dir = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let theme = write_theme(&dir, "empty.json", &test_theme_empty());

    let output = run_isolated(&["export", "--theme", theme.to_str().unwrap()], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("no colors"));
}

#[test]
fn test_export_invalid_format() {
    let config_dir = TempDir::new().unwrap();
    let (_dir, theme) = temp_accessible_theme();

    let output = run_isolated(
        &["export", "--theme", theme.to_str().unwrap(), "--format", "pdf"],
        config_dir.path(),
    );
    assert_ne!(output.status.code(), Some(0));
}
