//! End-to-end tests for `theme-studio import`.

mod fixtures;
use fixtures::*;
use std::fs;
use tempfile::TempDir;
use theme_studio::models::{Color, ThemeDocument};

const DARK_QSS: &str = "
QWidget {
    background-color: #2b2b2b;
    color: #f0f0f0;
}
QPushButton {
    background-color: #3c7dd9;
    border: 1px solid transparent;
}
";

#[test]
fn test_import_qss_prints_theme_json() {
    let config_dir = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let qss = dir.path().join("darcula.qss");
    fs::write(&qss, DARK_QSS).unwrap();

    let output = run_isolated(&["import", qss.to_str().unwrap()], config_dir.path());

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let doc: ThemeDocument = serde_json::from_slice(&output.stdout).expect("theme JSON");
    assert_eq!(doc.name, "darcula");
    assert_eq!(doc.colors.get("background"), Some(Color::new(0x2b, 0x2b, 0x2b)));
    assert_eq!(doc.colors.get("text"), Some(Color::new(0xf0, 0xf0, 0xf0)));
    assert_eq!(doc.colors.get("extracted_color_0"), Some(Color::new(0x3c, 0x7d, 0xd9)));
}

#[test]
fn test_import_json_aliases_then_audit() {
    let config_dir = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("foreign.json");
    fs::write(
        &source,
        r##"{"name": "foreign", "palette": {"bg": "#ffffff", "fg": [34, 34, 34], "main": "0x005a9e", "glow": "sparkly"}}"##,
    )
    .unwrap();
    let saved = dir.path().join("saved.json");

    let output = run_isolated(
        &["import", source.to_str().unwrap(), "--output", saved.to_str().unwrap()],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Imported 'foreign' from json (3 colors)"));
    assert!(stderr_of(&output).contains("Warning: Skipped color 'glow'"));

    let doc: ThemeDocument = serde_json::from_str(&fs::read_to_string(&saved).unwrap()).unwrap();
    assert_eq!(doc.colors.get("background"), Some(Color::WHITE));
    assert_eq!(doc.colors.get("text"), Some(Color::new(34, 34, 34)));
    assert_eq!(doc.colors.get("primary"), Some(Color::new(0x00, 0x5a, 0x9e)));

    let audit = run_isolated(&["audit", "--theme", saved.to_str().unwrap()], config_dir.path());
    assert_eq!(audit.status.code(), Some(0), "stdout: {}", stdout_of(&audit));
}

#[test]
fn test_import_refuses_to_overwrite() {
    let config_dir = TempDir::new().unwrap();
    let (dir, theme) = temp_accessible_theme();
    let qss = dir.path().join("other.qss");
    fs::write(&qss, DARK_QSS).unwrap();
    let before = fs::read_to_string(&theme).unwrap();

    let output = run_isolated(
        &["import", qss.to_str().unwrap(), "--output", theme.to_str().unwrap()],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("--force"));
    assert_eq!(fs::read_to_string(&theme).unwrap(), before);
}

#[test]
fn test_import_unsupported_extension() {
    let config_dir = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme.xml");
    fs::write(&path, "<theme/>").unwrap();

    let output = run_isolated(&["import", path.to_str().unwrap()], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Unsupported import format"));
}

#[test]
fn test_import_missing_or_broken_file() {
    let config_dir = TempDir::new().unwrap();
    let missing = run_isolated(&["import", "/nonexistent/theme.qss"], config_dir.path());
    assert_eq!(missing.status.code(), Some(2));

    let dir = TempDir::new().unwrap();
    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    let output = run_isolated(&["import", broken.to_str().unwrap()], config_dir.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("broken.json"));
}
