//! Canvas Workflow Integration Tests

use crate::helpers::{RED, TestCanvasBuilder, assert_entity_count, click, drag, pt, solid_png};
use photocollage::drag::DragPayload;
use photocollage::export::{DirectorySink, MemorySink, decode_png_data_uri};
use photocollage::input::coords::CanvasOrigin;
use photocollage::types::Bounds;
use photocollage::upload::{DropZoneEvent, UploadDropZone, UploadFile, UploadIngestor};
use chrono::{TimeZone, Utc};
use image::Rgba;
use tempfile::TempDir;

#[test]
fn test_upload_place_edit_export() {
    let dir = TempDir::new().unwrap();
    let mut canvas = TestCanvasBuilder::new().with_viewport(200, 150).build();
    let mut ingestor = UploadIngestor::new();
    let mut zone = UploadDropZone::default();

    // Upload through the dedicated drop target
    zone.handle(DropZoneEvent::DragEnter);
    let files = zone
        .handle(DropZoneEvent::Drop(vec![UploadFile::new("photo.png", "image/png", solid_png(40, 30))]))
        .unwrap();
    let uploads = ingestor.ingest(files, canvas.library_mut());
    assert_eq!(uploads.len(), 1);

    // Drag the thumbnail onto the canvas
    let payload = DragPayload::from_upload(&uploads[0]);
    let id = canvas.handle_drop(Some(payload), pt(20.0, 20.0)).unwrap();
    assert_eq!(canvas.scene().get(&id).unwrap().bounds(), Bounds::new(20.0, 20.0, 40.0, 30.0));

    // Select, move, then resize from the right edge
    drag(&mut canvas, (30.0, 30.0), (50.0, 40.0));
    assert_eq!(canvas.selected_id(), Some(id.as_str()));
    assert_eq!(canvas.scene().get(&id).unwrap().bounds(), Bounds::new(40.0, 30.0, 40.0, 30.0));

    drag(&mut canvas, (80.0, 45.0), (100.0, 45.0));
    assert_eq!(canvas.scene().get(&id).unwrap().bounds(), Bounds::new(40.0, 30.0, 60.0, 30.0));

    // Export to disk
    let mut sink = DirectorySink::new(dir.path());
    let at = Utc.with_ymd_and_hms(2024, 6, 9, 14, 5, 0).unwrap();
    let artifact = canvas.export_at(&at, &mut sink).unwrap();

    assert_eq!(artifact.file_name, "export-photocollage-9-6-2024-14-5-0.png");
    let saved = image::open(dir.path().join(&artifact.file_name)).unwrap().to_rgba8();
    assert_eq!(saved.dimensions(), (200, 150));
    assert_eq!(saved.get_pixel(70, 45), &Rgba([9, 9, 9, 255]));
}

#[test]
fn test_export_hides_selection_decorations() {
    let mut canvas = TestCanvasBuilder::new()
        .with_viewport(60, 60)
        .with_image("red.png", 40, 40, RED)
        .with_entity("red.png", (5.0, 5.0))
        .build();
    click(&mut canvas, 20.0, 20.0);
    let selection_color = canvas.style().selection_color;

    // On screen the border and handles are drawn
    let frame = canvas.render().unwrap();
    assert_eq!(frame.get_pixel(15, 5), &selection_color);

    let mut sink = MemorySink::default();
    let artifact = canvas.export(&mut sink).unwrap();
    let exported = image::load_from_memory(&decode_png_data_uri(&artifact.data_uri).unwrap())
        .unwrap()
        .to_rgba8();

    assert_eq!(exported.get_pixel(15, 5), &RED);
    assert_eq!(exported.get_pixel(5, 5), &RED);
    assert_eq!(exported.get_pixel(44, 44), &RED);

    // Export leaves the selection and flag as they were
    assert!(!canvas.is_exporting());
    assert!(canvas.is_selected("image-1"));
}

#[test]
fn test_canvas_offset_applies_to_pointer_and_drop() {
    let mut canvas = TestCanvasBuilder::new()
        .with_image("red.png", 50, 50, RED)
        .build();
    canvas.set_origin(CanvasOrigin::new(pt(100.0, 20.0)));

    canvas.handle_drop(Some(crate::helpers::search_payload("red.png")), pt(110.0, 30.0));
    assert_eq!(canvas.entities()[0].bounds(), Bounds::new(10.0, 10.0, 50.0, 50.0));

    // Client (20, 20) is left of the canvas surface: misses the entity
    click(&mut canvas, 20.0, 20.0);
    assert_eq!(canvas.selected_id(), None);

    click(&mut canvas, 130.0, 50.0);
    assert_eq!(canvas.selected_id(), Some("image-1"));
}

#[test]
fn test_many_drops_keep_unique_ids() {
    let mut canvas = TestCanvasBuilder::new().build();
    for i in 0..20 {
        canvas.handle_drop(
            Some(crate::helpers::search_payload("a.jpg")),
            pt(i as f32 * 5.0, 0.0),
        );
    }
    assert_entity_count(&canvas, 20);

    let mut ids: Vec<&str> = canvas.entities().iter().map(|e| e.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[test]
fn test_oversized_entity_exports_at_viewport_size() {
    let mut canvas = TestCanvasBuilder::new()
        .with_viewport(10, 10)
        .with_image("red.png", 100, 100, RED)
        .with_entity("red.png", (0.0, 0.0))
        .build();
    click(&mut canvas, 50.0, 50.0);

    // One corner drag far past the visible surface
    drag(&mut canvas, (100.0, 100.0), (6000.0, 6000.0));
    assert_eq!(canvas.entities()[0].bounds(), Bounds::new(0.0, 0.0, 5900.0, 5900.0));

    let mut sink = MemorySink::default();
    let artifact = canvas.export(&mut sink).unwrap();
    let exported = image::load_from_memory(&decode_png_data_uri(&artifact.data_uri).unwrap())
        .unwrap()
        .to_rgba8();

    assert_eq!(exported.dimensions(), (10, 10));
    assert_eq!(exported.get_pixel(5, 5), &RED);
}
