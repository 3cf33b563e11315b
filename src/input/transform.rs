//! Resize geometry: bound checks during a gesture and normalization on commit.
//!
//! While a handle is dragged the entity is shown with a live scale relative to
//! its committed size. When the gesture ends the scale is folded back into
//! width and height so stored geometry is always unscaled.

use crate::constants::{HANDLE_HIT_SLOP, HANDLE_SIZE};
use crate::types::{floor_dimension, Bounds, CollageEntity, Handle, Point};

/// Accept or reject a proposed bounding box for an in-progress resize.
///
/// A proposal narrower or shorter than the minimum entity size (or with any
/// non-finite component) is rejected and the previous box is kept.
pub fn bound_box(old: Bounds, proposed: Bounds) -> Bounds {
    if proposed.is_finite() && proposed.meets_minimum() {
        proposed
    } else {
        old
    }
}

/// Position and scale of an entity mid-resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiveTransform {
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl LiveTransform {
    pub fn identity(at: Point) -> Self {
        Self {
            x: at.x,
            y: at.y,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Express `live` bounds as a transform of the committed `base` bounds.
    pub fn from_bounds(base: Bounds, live: Bounds) -> Self {
        Self {
            x: live.x,
            y: live.y,
            scale_x: ratio(live.width, base.width),
            scale_y: ratio(live.height, base.height),
        }
    }
}

fn ratio(value: f32, base: f32) -> f32 {
    if base > 0.0 { value / base } else { 1.0 }
}

/// Fold a live transform into the entity, resetting the scale to 1.
///
/// Width and height become `max(MIN_ENTITY_SIZE, size * scale)`. A
/// non-finite scale is treated as 1 and a non-finite position keeps the
/// entity's committed position.
pub fn commit_resize(entity: &CollageEntity, transform: &LiveTransform) -> CollageEntity {
    normalized(
        entity,
        Point::new(transform.x, transform.y),
        entity.width * finite_or_one(transform.scale_x),
        entity.height * finite_or_one(transform.scale_y),
    )
}

/// Commit live bounds directly.
///
/// Same result as `commit_resize` with the scale implied by `live`, without
/// rounding through the ratio.
pub fn commit_bounds(entity: &CollageEntity, live: Bounds) -> CollageEntity {
    let width = if live.width.is_finite() { live.width } else { entity.width };
    let height = if live.height.is_finite() { live.height } else { entity.height };
    normalized(entity, Point::new(live.x, live.y), width, height)
}

fn normalized(entity: &CollageEntity, position: Point, width: f32, height: f32) -> CollageEntity {
    let position = if position.is_finite() {
        position
    } else {
        entity.position()
    };

    CollageEntity {
        x: position.x,
        y: position.y,
        width: floor_dimension(width),
        height: floor_dimension(height),
        ..entity.clone()
    }
}

fn finite_or_one(scale: f32) -> f32 {
    if scale.is_finite() { scale } else { 1.0 }
}

/// Handle of `bounds` under `point`, if any.
pub fn handle_at(bounds: Bounds, point: Point) -> Option<Handle> {
    let reach = HANDLE_SIZE / 2.0 + HANDLE_HIT_SLOP;
    Handle::all().iter().copied().find(|handle| {
        let anchor = handle.anchor_point(bounds);
        (point.x - anchor.x).abs() <= reach && (point.y - anchor.y).abs() <= reach
    })
}
