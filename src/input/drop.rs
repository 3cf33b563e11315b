//! Drop handling - placement of images dragged from the search results or
//! the upload list.

use crate::app::CollageCanvas;
use crate::constants::DEFAULT_ENTITY_SIZE;
use crate::drag::DragPayload;
use crate::types::{CollageEntity, Point};
use tracing::{debug, info};

impl CollageCanvas {
    /// Place the dragged image at the drop position (client coordinates).
    ///
    /// Returns the id of the new entity, or `None` when the drop carried no
    /// payload. Placement never changes the selection.
    pub fn handle_drop(&mut self, payload: Option<DragPayload>, client: Point) -> Option<String> {
        let Some(payload) = payload else {
            debug!("Drop without drag payload ignored");
            return None;
        };

        let pos = self.origin.client_to_canvas(client);
        let size = self
            .library
            .dimensions(&payload.src)
            .map(|(w, h)| (w as f32, h as f32))
            .unwrap_or(DEFAULT_ENTITY_SIZE);

        let id = self.scene.allocate_id();
        let entity = CollageEntity::new(id.clone(), payload.src, pos, size);
        info!(
            id = %entity.id,
            origin = ?payload.origin,
            x = entity.x,
            y = entity.y,
            width = entity.width,
            height = entity.height,
            "Image placed"
        );
        self.scene.append(entity);
        Some(id)
    }
}
