//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for hit testing on the canvas.
//! Point queries return every entity whose bounds contain the point; the
//! scene decides which of them is on top.

use crate::types::Bounds;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing an entity's bounding box.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub entity_id: String,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(entity_id: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            entity_id: entity_id.into(),
            min_x: bounds.x,
            min_y: bounds.y,
            max_x: bounds.right(),
            max_y: bounds.bottom(),
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.entity_id == other.entity_id
    }
}

/// Spatial index for placed entities using an R-tree.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<String, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or replace the bounds stored for `entity_id`.
    pub fn upsert(&mut self, entity_id: &str, bounds: Bounds) {
        if let Some(old_entry) = self.entries.remove(entity_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(entity_id, bounds);
        self.tree.insert(entry.clone());
        self.entries.insert(entity_id.to_string(), entry);
    }

    /// Query all entities that contain the given point (in canvas coordinates).
    pub fn query_point(&self, x: f32, y: f32) -> Vec<&str> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.entity_id.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("len", &self.entries.len())
            .finish()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
