//! Unit tests for export artifacts and sinks.

use crate::helpers::{BLUE, RED, TestCanvasBuilder};
use chrono::{TimeZone, Utc};
use photocollage::CollageError;
use photocollage::export::{
    ArtifactSink, DirectorySink, ExportArtifact, MemorySink, decode_png_data_uri,
    encode_png_data_uri, export_file_name,
};
use image::{Rgba, RgbaImage};
use tempfile::TempDir;

#[test]
fn test_file_name_format() {
    let at = Utc.with_ymd_and_hms(2023, 12, 31, 23, 0, 5).unwrap();
    assert_eq!(export_file_name(&at), "export-photocollage-31-12-2023-23-0-5.png");

    let january = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    assert_eq!(export_file_name(&january), "export-photocollage-2-1-2024-0-0-0.png");
}

#[test]
fn test_export_returns_png_data_uri() {
    let mut canvas = TestCanvasBuilder::new()
        .with_viewport(64, 32)
        .with_image("red.png", 10, 10, RED)
        .with_entity("red.png", (0.0, 0.0))
        .build();
    let mut sink = MemorySink::default();

    let artifact = canvas.export(&mut sink).unwrap();

    assert!(artifact.data_uri.starts_with("data:image/png;base64,"));
    assert!(artifact.file_name.starts_with("export-photocollage-"));
    assert!(artifact.file_name.ends_with(".png"));
    assert_eq!(sink.saved, vec![artifact.clone()]);

    let png = image::load_from_memory(&decode_png_data_uri(&artifact.data_uri).unwrap()).unwrap();
    assert_eq!((png.width(), png.height()), (64, 32));
}

#[test]
fn test_export_on_detached_viewport_fails_cleanly() {
    let mut canvas = TestCanvasBuilder::new().detached().build();
    let mut sink = MemorySink::default();

    let err = canvas.export(&mut sink).unwrap_err();

    assert!(matches!(err, CollageError::ViewportNotReady { width: 0, height: 0 }));
    assert!(!canvas.is_exporting());
    assert!(sink.saved.is_empty());
}

#[test]
fn test_directory_sink_writes_png() {
    let dir = TempDir::new().unwrap();
    let mut sink = DirectorySink::new(dir.path().join("exports"));
    let frame = RgbaImage::from_pixel(2, 2, BLUE);
    let artifact = ExportArtifact {
        file_name: "export-photocollage-1-1-2024-0-0-0.png".into(),
        data_uri: encode_png_data_uri(&frame).unwrap(),
    };

    sink.save(&artifact).unwrap();

    let path = dir.path().join("exports").join(&artifact.file_name);
    let written = image::open(&path).unwrap().to_rgba8();
    assert_eq!(written.get_pixel(1, 1), &Rgba([0, 0, 255, 255]));
}

#[test]
fn test_directory_sink_rejects_bad_uri() {
    let dir = TempDir::new().unwrap();
    let mut sink = DirectorySink::new(dir.path());
    let artifact = ExportArtifact {
        file_name: "broken.png".into(),
        data_uri: "data:text/plain;base64,aGk=".into(),
    };

    assert!(matches!(sink.save(&artifact), Err(CollageError::InvalidDataUri(_))));
    assert!(!dir.path().join("broken.png").exists());
}
