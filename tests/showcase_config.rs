//! Showcase Config Tests
//!
//! Loading the showcase configuration from disk.

use component_showcase::{ShowcaseConfig, ShowcaseError, ShowcaseScreen};
use tempfile::TempDir;

#[test]
fn test_load_partial_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("showcase.json");
    std::fs::write(
        &path,
        r#"{"label": "Brightness", "slider": {"minimum": 0, "maximum": 10, "value": 2.5}}"#,
    )
    .unwrap();

    let config = ShowcaseConfig::from_path(&path).unwrap();
    assert_eq!(config.label, "Brightness");
    assert_eq!(config.slider.track_length, 250.0);
    assert_eq!(config.slider.knob_size, 20.0);

    let screen = ShowcaseScreen::new(config).unwrap();
    assert_eq!(screen.label(), "Brightness: 3%");
    assert_eq!(screen.slider().offset(), 57.5);
}

#[test]
fn test_empty_config_uses_defaults() {
    let config = ShowcaseConfig::from_json_str("{}").unwrap();
    assert_eq!(config, ShowcaseConfig::default());
    assert_eq!(config.slider.value, 50.0);
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = ShowcaseConfig::from_path(temp_dir.path().join("missing.json"));
    assert!(matches!(result, Err(ShowcaseError::Io(_))));
}

#[test]
fn test_malformed_config() {
    assert!(matches!(
        ShowcaseConfig::from_json_str("{ not json"),
        Err(ShowcaseError::Parse(_))
    ));
}

#[test]
fn test_invalid_geometry_config() {
    let result =
        ShowcaseConfig::from_json_str(r#"{"slider": {"trackLength": 10, "knobSize": 20}}"#);
    assert!(matches!(result, Err(ShowcaseError::Slider(_))));
}
