//! Unit tests for settings persistence.

use photocollage::export::DirectorySink;
use photocollage::render::RenderStyle;
use photocollage::search::SearchSession;
use photocollage::settings::Settings;
use image::Rgba;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let settings = Settings {
        search_page_size: 30,
        unsplash_access_key: Some("abc".into()),
        export_dir: Some(PathBuf::from("/tmp/out")),
        ..Settings::default()
    };

    settings.save_to(&path).unwrap();
    let loaded = Settings::load_from(&path).unwrap();

    assert_eq!(loaded, settings);
}

#[test]
fn test_malformed_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("settings.json"));
}

#[test]
fn test_missing_file_is_an_error_for_explicit_paths() {
    let dir = TempDir::new().unwrap();
    assert!(Settings::load_from(&dir.path().join("absent.json")).is_err());
}

#[test]
fn test_render_style_follows_settings() {
    let settings = Settings {
        background_color: [255, 255, 255, 255],
        selection_color: [255, 0, 255, 255],
        ..Settings::default()
    };
    let style = RenderStyle::from_settings(&settings);

    assert_eq!(style.background, Rgba([255, 255, 255, 255]));
    assert_eq!(style.selection_color, Rgba([255, 0, 255, 255]));
}

#[test]
fn test_malformed_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ \"search_page_size\": ").unwrap();

    assert_eq!(Settings::load_or_default(&path), Settings::default());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let loaded = Settings::load_or_default(&dir.path().join("settings.json"));
    assert_eq!(loaded, Settings::default());
}

#[test]
fn test_valid_file_is_loaded_by_fallback_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"search_page_size": 40}"#).unwrap();

    assert_eq!(Settings::load_or_default(&path).search_page_size, 40);
}

#[test]
fn test_access_key_override() {
    let stored = Settings {
        unsplash_access_key: Some("from-file".into()),
        ..Settings::default()
    };

    let overridden = stored.clone().with_access_key_override(Some("from-env".into()));
    assert_eq!(overridden.unsplash_access_key.as_deref(), Some("from-env"));

    // Unset or empty leaves the stored key alone
    let unset = stored.clone().with_access_key_override(None);
    assert_eq!(unset.unsplash_access_key.as_deref(), Some("from-file"));
    let empty = stored.with_access_key_override(Some(String::new()));
    assert_eq!(empty.unsplash_access_key.as_deref(), Some("from-file"));
}

#[test]
fn test_constructors_read_settings() {
    let dir = TempDir::new().unwrap();
    let settings = Settings {
        search_page_size: 30,
        export_dir: Some(dir.path().to_path_buf()),
        ..Settings::default()
    };

    assert_eq!(SearchSession::from_settings(&settings).per_page(), 30);
    assert_eq!(DirectorySink::from_settings(&settings).unwrap().dir(), dir.path());
}
