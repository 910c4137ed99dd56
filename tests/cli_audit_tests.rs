//! End-to-end tests for `theme-studio audit`.

mod fixtures;
use fixtures::*;
use tempfile::TempDir;

#[test]
fn test_audit_accessible_theme_passes() {
    let config_dir = TempDir::new().unwrap();
    let (_dir, theme) = temp_accessible_theme();

    let output = run_isolated(&["audit", "--theme", theme.to_str().unwrap()], config_dir.path());

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Test Light"));
    assert!(stdout.contains("Score: 100/100"));
}

#[test]
fn test_audit_low_contrast_fails_with_suggestion() {
    let config_dir = TempDir::new().unwrap();
    let (_dir, theme) = temp_low_contrast_theme();

    let output = run_isolated(
        &["audit", "--theme", theme.to_str().unwrap(), "--json"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["target"], "AA");
    assert_eq!(json["overall_level"], "FAIL");
    assert_eq!(json["score"], 0.0);

    let violation = &json["violations"][0];
    assert_eq!(violation["name"], "text");
    assert_eq!(violation["foreground"], "#999999");
    assert!(violation["suggested_ratio"].as_f64().unwrap() >= 4.5);
}

#[test]
fn test_audit_large_text_relaxes_threshold() {
    // #999999 on white (2.85:1) still fails even the 3:1 large-text bar
    let config_dir = TempDir::new().unwrap();
    let (_dir, theme) = temp_low_contrast_theme();

    let output = run_isolated(
        &["audit", "--theme", theme.to_str().unwrap(), "--large"],
        config_dir.path(),
    );
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_audit_uses_configured_level() {
    let config_dir = TempDir::new().unwrap();
    let (_dir, theme) = temp_accessible_theme();

    let set = run_isolated(&["config", "set", "--level", "aaa"], config_dir.path());
    assert_eq!(set.status.code(), Some(0), "stderr: {}", stderr_of(&set));

    let output = run_isolated(
        &["audit", "--theme", theme.to_str().unwrap(), "--json"],
        config_dir.path(),
    );
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["target"], "AAA");
}

#[test]
fn test_audit_missing_file() {
    let config_dir = TempDir::new().unwrap();
    let output = run_isolated(
        &["audit", "--theme", "/nonexistent/theme.json"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Failed to load theme"));
}
