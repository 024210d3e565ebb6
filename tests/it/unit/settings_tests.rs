//! Unit tests for settings loading.

use dragboard::settings::{default_settings_path, Settings, SettingsError};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_defaults_match_container() {
    let settings = Settings::default();
    assert_eq!(settings.container_width, 384.0);
    assert_eq!(settings.container_height, 384.0);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_partial_file_overrides_named_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "container_width": 500.0 }"#).unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.container_width, 500.0);
    assert_eq!(settings.container_height, Settings::default().container_height);
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let settings = Settings {
        container_width: 640.0,
        container_height: 480.0,
        ..Settings::default()
    };

    settings.save_to(&path).unwrap();
    assert_eq!(Settings::load_from(&path).unwrap(), settings);
}

#[test]
fn test_malformed_file_is_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(Settings::load_from(&path), Err(SettingsError::Json(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");
    assert!(matches!(Settings::load_from(&path), Err(SettingsError::Io(_))));
}

#[test]
fn test_non_positive_size_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "container_height": 0.0 }"#).unwrap();

    match Settings::load_from(&path) {
        Err(SettingsError::Invalid { field, .. }) => assert_eq!(field, "container_height"),
        other => panic!("expected invalid setting, got {other:?}"),
    }
}

#[test]
fn test_default_path() {
    if let Some(path) = default_settings_path() {
        assert!(path.ends_with("dragboard/settings.json"));
    }
}
