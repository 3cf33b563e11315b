//! Core types for the collage canvas.
//!
//! This module defines the placed-image entity, canvas geometry and the resize
//! handles drawn around the selected entity.

use crate::constants::MIN_ENTITY_SIZE;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

// ============================================================================
// Geometry
// ============================================================================

/// A position in canvas or client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// True when both sides reach the minimum entity size.
    pub fn meets_minimum(&self) -> bool {
        self.width >= MIN_ENTITY_SIZE && self.height >= MIN_ENTITY_SIZE
    }
}

// ============================================================================
// Entities
// ============================================================================

/// One image placed on the canvas.
///
/// Geometry is always stored unscaled: interactive resizes are folded into
/// `width`/`height` when the gesture ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollageEntity {
    /// Stable identifier, `image-<n>`
    pub id: String,
    /// Image resource reference (remote URL or local blob URL)
    pub src: String,
    /// Top-left position in canvas coordinates (may be negative)
    pub x: f32,
    pub y: f32,
    /// Rendered size in canvas pixels, never below the minimum entity size
    pub width: f32,
    pub height: f32,
}

impl CollageEntity {
    /// Create an entity, flooring its size at the minimum.
    pub fn new(
        id: impl Into<String>,
        src: impl Into<String>,
        position: Point,
        size: (f32, f32),
    ) -> Self {
        Self {
            id: id.into(),
            src: src.into(),
            x: position.x,
            y: position.y,
            width: floor_dimension(size.0),
            height: floor_dimension(size.1),
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    /// Copy of this entity moved to `position`, all other fields preserved.
    pub fn with_position(&self, position: Point) -> Self {
        Self {
            x: position.x,
            y: position.y,
            ..self.clone()
        }
    }
}

/// Floor a dimension at the minimum entity size; non-finite input collapses to it.
pub(crate) fn floor_dimension(value: f32) -> f32 {
    if value.is_finite() {
        value.max(MIN_ENTITY_SIZE)
    } else {
        MIN_ENTITY_SIZE
    }
}

// ============================================================================
// Resize Handles
// ============================================================================

/// The eight resize anchors drawn around the selected entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl Handle {
    pub fn all() -> &'static [Handle] {
        &[
            Handle::TopLeft,
            Handle::Top,
            Handle::TopRight,
            Handle::Right,
            Handle::BottomRight,
            Handle::Bottom,
            Handle::BottomLeft,
            Handle::Left,
        ]
    }

    /// Centre of this handle on the given bounds.
    pub fn anchor_point(self, b: Bounds) -> Point {
        let mid_x = b.x + b.width / 2.0;
        let mid_y = b.y + b.height / 2.0;
        match self {
            Handle::TopLeft => Point::new(b.x, b.y),
            Handle::Top => Point::new(mid_x, b.y),
            Handle::TopRight => Point::new(b.right(), b.y),
            Handle::Right => Point::new(b.right(), mid_y),
            Handle::BottomRight => Point::new(b.right(), b.bottom()),
            Handle::Bottom => Point::new(mid_x, b.bottom()),
            Handle::BottomLeft => Point::new(b.x, b.bottom()),
            Handle::Left => Point::new(b.x, mid_y),
        }
    }

    /// Propose new bounds after dragging this handle by `delta` from `start`.
    ///
    /// The opposite edges stay fixed. Edge handles change one axis freely;
    /// corner handles keep the aspect ratio of `start`, anchored at the
    /// opposite corner. The proposal is not validated here.
    pub fn drag(self, start: Bounds, delta: Point) -> Bounds {
        let free = self.drag_free(start, delta);
        if self.is_corner() {
            self.keep_ratio(start, free)
        } else {
            free
        }
    }

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Handle::TopLeft | Handle::TopRight | Handle::BottomRight | Handle::BottomLeft
        )
    }

    fn drag_free(self, start: Bounds, delta: Point) -> Bounds {
        let mut b = start;
        if self.moves_left_edge() {
            b.x += delta.x;
            b.width -= delta.x;
        }
        if self.moves_right_edge() {
            b.width += delta.x;
        }
        if self.moves_top_edge() {
            b.y += delta.y;
            b.height -= delta.y;
        }
        if self.moves_bottom_edge() {
            b.height += delta.y;
        }
        b
    }

    /// Project the free proposal onto the diagonal of `start`.
    fn keep_ratio(self, start: Bounds, free: Bounds) -> Bounds {
        let diagonal = start.width * start.width + start.height * start.height;
        if !diagonal.is_finite() || diagonal <= 0.0 {
            return free;
        }

        let scale = (free.width * start.width + free.height * start.height) / diagonal;
        let width = start.width * scale;
        let height = start.height * scale;
        let x = if self.moves_left_edge() {
            start.right() - width
        } else {
            start.x
        };
        let y = if self.moves_top_edge() {
            start.bottom() - height
        } else {
            start.y
        };
        Bounds::new(x, y, width, height)
    }

    fn moves_left_edge(self) -> bool {
        matches!(self, Handle::TopLeft | Handle::Left | Handle::BottomLeft)
    }

    fn moves_right_edge(self) -> bool {
        matches!(self, Handle::TopRight | Handle::Right | Handle::BottomRight)
    }

    fn moves_top_edge(self) -> bool {
        matches!(self, Handle::TopLeft | Handle::Top | Handle::TopRight)
    }

    fn moves_bottom_edge(self) -> bool {
        matches!(self, Handle::BottomLeft | Handle::Bottom | Handle::BottomRight)
    }
}
