//! Unit tests for selection and z-order.

use crate::helpers::{RED, TestCanvasBuilder, assert_sole_selection, click, entity_ids};

fn two_overlapping() -> photocollage::CollageCanvas {
    TestCanvasBuilder::new()
        .with_image("a.png", 100, 100, RED)
        .with_entity("a.png", (0.0, 0.0))
        .with_entity("a.png", (50.0, 50.0))
        .build()
}

#[test]
fn test_pointer_down_selects_topmost() {
    let mut canvas = two_overlapping();
    click(&mut canvas, 75.0, 75.0);
    assert_sole_selection(&canvas, "image-2");
}

#[test]
fn test_selecting_raises_to_top() {
    let mut canvas = two_overlapping();
    click(&mut canvas, 10.0, 10.0);

    assert_eq!(entity_ids(&canvas), vec!["image-2", "image-1"]);

    // image-1 now covers the overlap
    click(&mut canvas, 75.0, 75.0);
    assert_sole_selection(&canvas, "image-1");
}

#[test]
fn test_selecting_b_deselects_a() {
    let mut canvas = two_overlapping();
    click(&mut canvas, 10.0, 10.0);
    click(&mut canvas, 140.0, 140.0);

    assert!(!canvas.is_selected("image-1"));
    assert_sole_selection(&canvas, "image-2");
}

#[test]
fn test_empty_canvas_clears_selection() {
    let mut canvas = two_overlapping();
    click(&mut canvas, 10.0, 10.0);
    assert!(canvas.selected_id().is_some());

    assert!(canvas.handle_pointer_down(crate::helpers::pt(300.0, 250.0)));
    canvas.handle_pointer_up();

    assert_eq!(canvas.selected_id(), None);
    assert!(canvas.entities().iter().all(|e| !canvas.is_selected(&e.id)));
}

#[test]
fn test_empty_canvas_without_selection_needs_no_redraw() {
    let mut canvas = two_overlapping();
    assert!(!canvas.handle_pointer_down(crate::helpers::pt(300.0, 250.0)));
}

#[test]
fn test_unknown_id_cannot_be_selected() {
    let mut canvas = two_overlapping();
    assert!(!canvas.select("image-99"));
    assert_eq!(canvas.selected_id(), None);
}
