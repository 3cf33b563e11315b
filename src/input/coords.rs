//! Coordinate conversion between the host's client space and the canvas.
//!
//! Pointer and drop events arrive in client (window) coordinates. The canvas
//! surface itself may sit at an offset inside the window, so positions must be
//! made relative to it before they are compared with entity geometry.

use crate::types::Point;

/// Screen placement of the canvas surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasOrigin {
    /// Top-left of the canvas surface in client coordinates
    pub offset: Point,
}

impl CanvasOrigin {
    pub const fn new(offset: Point) -> Self {
        Self { offset }
    }

    /// Convert a client position to canvas coordinates.
    #[inline]
    pub fn client_to_canvas(&self, client: Point) -> Point {
        client - self.offset
    }

    /// Convert a canvas position to client coordinates.
    #[inline]
    pub fn canvas_to_client(&self, canvas: Point) -> Point {
        canvas + self.offset
    }
}
