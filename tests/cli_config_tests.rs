//! End-to-end tests for `theme-studio config` commands.

use std::fs;

mod fixtures;
use fixtures::*;
use tempfile::TempDir;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let config_dir = TempDir::new().unwrap();
    let output = run_isolated(&["config", "show"], config_dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        stderr_of(&output)
    );
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Theme Studio Configuration"));
    assert!(stdout.contains("Debounce: 100 ms"));
    assert!(stdout.contains("Max Wait: 500 ms"));
}

#[test]
fn test_config_show_json_format() {
    let config_dir = TempDir::new().unwrap();
    let output = run_isolated(&["config", "show", "--json"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["preview"]["debounce_ms"], 100);
    assert_eq!(json["preview"]["validate_contrast"], false);
    assert_eq!(json["accessibility"]["target_level"], "AA");
    assert_eq!(json["export"]["default_format"], "qss");
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_persists_values() {
    let config_dir = TempDir::new().unwrap();

    let set = run_isolated(
        &[
            "config",
            "set",
            "--debounce-ms",
            "150",
            "--max-wait-ms",
            "800",
            "--validate-contrast",
            "true",
            "--theme-mode",
            "dark",
        ],
        config_dir.path(),
    );
    assert_eq!(set.status.code(), Some(0), "stderr: {}", stderr_of(&set));
    assert!(stdout_of(&set).contains("Configuration updated successfully."));

    let toml = fs::read_to_string(config_dir.path().join("config.toml")).expect("config written");
    assert!(toml.contains("debounce_ms = 150"));
    assert!(toml.contains("max_wait_ms = 800"));

    let show = run_isolated(&["config", "show", "--json"], config_dir.path());
    let json: serde_json::Value = serde_json::from_slice(&show.stdout).unwrap();
    assert_eq!(json["preview"]["debounce_ms"], 150);
    assert_eq!(json["preview"]["max_wait_ms"], 800);
    assert_eq!(json["preview"]["validate_contrast"], true);
    assert_eq!(json["ui"]["theme_mode"], "dark");
}

#[test]
fn test_config_set_requires_an_option() {
    let config_dir = TempDir::new().unwrap();
    let output = run_isolated(&["config", "set"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("At least one configuration option"));
}

#[test]
fn test_config_set_rejects_debounce_above_max_wait() {
    let config_dir = TempDir::new().unwrap();
    let output = run_isolated(&["config", "set", "--debounce-ms", "900"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("max_wait_ms"));
    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_rejects_zero_debounce() {
    let config_dir = TempDir::new().unwrap();
    let output = run_isolated(&["config", "set", "--debounce-ms", "0"], config_dir.path());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_rejects_fail_level() {
    let config_dir = TempDir::new().unwrap();
    let output = run_isolated(&["config", "set", "--level", "fail"], config_dir.path());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_invalid_theme_mode() {
    let config_dir = TempDir::new().unwrap();
    let output = run_isolated(&["config", "set", "--theme-mode", "sepia"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Invalid theme mode"));
}

#[test]
fn test_config_show_rejects_invalid_file() {
    let config_dir = TempDir::new().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[preview]\ndebounce_ms = 0\n",
    )
    .unwrap();

    let output = run_isolated(&["config", "show"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Failed to load configuration"));
}
