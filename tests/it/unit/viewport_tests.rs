//! Unit tests for viewport tracking.

use crate::helpers::TestCanvasBuilder;
use photocollage::viewport::{Viewport, ViewportManager};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_window_resize_reaches_canvas_listeners() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut canvas = TestCanvasBuilder::new().with_viewport(800, 600).build();
    let sink = Rc::clone(&seen);
    canvas.viewport_mut().subscribe(move |viewport| sink.borrow_mut().push(viewport));

    assert!(canvas.handle_window_resize(1024, 768));
    assert!(!canvas.handle_window_resize(1024, 768));
    canvas.viewport_mut().detach();

    assert_eq!(*seen.borrow(), vec![Viewport::new(1024, 768), Viewport::ZERO]);
    assert!(!canvas.viewport().is_ready());
}

#[test]
fn test_detached_manager_is_not_ready() {
    let manager = ViewportManager::detached();
    assert_eq!(manager.current(), Viewport::ZERO);
    assert!(!manager.is_ready());
}

#[test]
fn test_canvas_renders_at_window_size() {
    let mut canvas = TestCanvasBuilder::new().with_viewport(120, 80).build();
    assert_eq!(canvas.render().unwrap().dimensions(), (120, 80));

    canvas.handle_window_resize(60, 40);
    assert_eq!(canvas.render().unwrap().dimensions(), (60, 40));
}

#[test]
fn test_detached_canvas_refuses_to_render() {
    let canvas = TestCanvasBuilder::new().detached().build();
    assert!(canvas.render().is_err());
}
