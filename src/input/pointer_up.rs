//! Pointer up handling - commit the active gesture to the scene.
//!
//! Release always commits; there is no cancel path.

use crate::app::CollageCanvas;
use crate::input::InteractionState;
use crate::input::transform::commit_bounds;
use crate::types::CollageEntity;
use tracing::{debug, warn};

impl CollageCanvas {
    /// Handle a pointer release. Returns true when the scene changed.
    ///
    /// The commit uses the last accepted live state, so the release position
    /// itself is not needed.
    pub fn handle_pointer_up(&mut self) -> bool {
        match self.input_state.take() {
            InteractionState::Idle => false,
            InteractionState::Moving {
                entity_id,
                position,
                ..
            } => self.commit_entity(&entity_id, |entity| entity.with_position(position)),
            InteractionState::Resizing {
                entity_id, bounds, ..
            } => self.commit_entity(&entity_id, |entity| commit_bounds(entity, bounds)),
        }
    }

    /// Replace the entity with `id` by `update(entity)` at its current index.
    fn commit_entity(
        &mut self,
        id: &str,
        update: impl FnOnce(&CollageEntity) -> CollageEntity,
    ) -> bool {
        let Some(index) = self.scene.position_of(id) else {
            warn!(id, "Gesture target vanished before commit");
            return false;
        };
        let Some(current) = self.scene.entities().get(index) else {
            return false;
        };

        let updated = update(current);
        if updated == *current {
            return false;
        }

        debug!(
            id,
            x = updated.x,
            y = updated.y,
            width = updated.width,
            height = updated.height,
            "Transform committed"
        );
        self.scene.replace_at(index, updated)
    }
}
