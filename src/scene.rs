//! The scene - the ordered collection of placed images.
//!
//! Sequence order is render order: the last entity is drawn on top. The scene
//! only grows by appends, changes geometry by positional replacement, and is
//! reordered only when an entity is raised to the top.

use crate::constants::ENTITY_ID_PREFIX;
use crate::profile_scope;
use crate::spatial_index::SpatialIndex;
use crate::types::{CollageEntity, Point};
use tracing::debug;

#[derive(Debug, Default)]
pub struct Scene {
    entities: Vec<CollageEntity>,
    /// Next value of the id counter; ids are never reused
    next_entity_id: u64,
    index: SpatialIndex,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            next_entity_id: 1,
            index: SpatialIndex::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities in render order (bottom first).
    pub fn entities(&self) -> &[CollageEntity] {
        &self.entities
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollageEntity> {
        self.entities.iter()
    }

    pub fn get(&self, id: &str) -> Option<&CollageEntity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.entities.iter().position(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position_of(id).is_some()
    }

    /// Allocate the next entity id from the monotonic counter.
    pub fn allocate_id(&mut self) -> String {
        // Default-constructed scenes start the counter at zero.
        let n = self.next_entity_id.max(1);
        self.next_entity_id = n + 1;
        format!("{ENTITY_ID_PREFIX}{n}")
    }

    /// Append a new entity on top of the scene.
    pub fn append(&mut self, entity: CollageEntity) {
        self.index.upsert(&entity.id, entity.bounds());
        debug!(id = %entity.id, x = entity.x, y = entity.y, "Entity appended");
        self.entities.push(entity);
    }

    /// Replace the entity at `index` with `updated`.
    ///
    /// The id at that position must not change. Returns false (and leaves the
    /// scene untouched) when the index is out of range or the ids differ.
    pub fn replace_at(&mut self, index: usize, updated: CollageEntity) -> bool {
        let Some(slot) = self.entities.get_mut(index) else {
            return false;
        };
        if slot.id != updated.id {
            return false;
        }
        self.index.upsert(&updated.id, updated.bounds());
        *slot = updated;
        true
    }

    /// Move the entity with `id` to the end of the sequence.
    pub fn raise_to_top(&mut self, id: &str) -> bool {
        let Some(pos) = self.position_of(id) else {
            return false;
        };
        if pos + 1 != self.entities.len() {
            let entity = self.entities.remove(pos);
            self.entities.push(entity);
        }
        true
    }

    /// Topmost entity under `point` (canvas coordinates).
    pub fn hit_test(&self, point: Point) -> Option<&CollageEntity> {
        profile_scope!("hit_test_entities");

        let candidates = self.index.query_point(point.x, point.y);
        if candidates.is_empty() {
            return None;
        }

        // Check candidates in reverse render order (front to back)
        self.entities
            .iter()
            .rev()
            .find(|e| candidates.contains(&e.id.as_str()))
    }
}
