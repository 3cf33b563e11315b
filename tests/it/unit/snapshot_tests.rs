//! Snapshot tests using the insta crate.
//!
//! Snapshots are kept inline so the expected JSON sits next to the test.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use photocollage::settings::Settings;
use photocollage::types::{CollageEntity, Point};

// ============================================================================
// Entity Serialization
// ============================================================================

#[test]
fn snapshot_collage_entity() {
    let entity = CollageEntity::new(
        "image-7",
        "https://images.test/photo.jpg",
        Point::new(12.5, -7.5),
        (150.5, 80.25),
    );
    insta::assert_json_snapshot!(entity, @r#"
    {
      "id": "image-7",
      "src": "https://images.test/photo.jpg",
      "x": 12.5,
      "y": -7.5,
      "width": 150.5,
      "height": 80.25
    }
    "#);
}

// ============================================================================
// Settings Serialization
// ============================================================================

#[test]
fn snapshot_default_settings() {
    insta::assert_json_snapshot!(Settings::default(), @r#"
    {
      "search_page_size": 12,
      "unsplash_access_key": null,
      "export_dir": null,
      "background_color": [
        0,
        0,
        0,
        0
      ],
      "selection_color": [
        0,
        161,
        255,
        255
      ],
      "log_filter": "photocollage=info"
    }
    "#);
}

#[test]
fn snapshot_settings_with_key_redacted() {
    let settings = Settings {
        unsplash_access_key: Some("secret-key".into()),
        search_page_size: 24,
        ..Settings::default()
    };
    insta::assert_json_snapshot!(settings, {
        ".unsplash_access_key" => "[key]",
        ".background_color" => "[color]",
        ".selection_color" => "[color]"
    }, @r#"
    {
      "search_page_size": 24,
      "unsplash_access_key": "[key]",
      "export_dir": null,
      "background_color": "[color]",
      "selection_color": "[color]",
      "log_filter": "photocollage=info"
    }
    "#);
}
