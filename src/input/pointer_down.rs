//! Pointer down handling - selection, deselection and gesture start.
//!
//! ## Performance Notes
//!
//! Pointer down is a hot path during user interaction. Hit testing goes
//! through the R-tree spatial index, then candidates are checked in reverse
//! scene order so the topmost entity wins.

use crate::app::CollageCanvas;
use crate::input::transform::handle_at;
use crate::profile_scope;
use crate::types::Point;
use tracing::debug;

impl CollageCanvas {
    /// Handle a pointer press at `client` (host window coordinates).
    ///
    /// Returns true when the frame needs to be redrawn.
    pub fn handle_pointer_down(&mut self, client: Point) -> bool {
        profile_scope!("handle_pointer_down");

        // A press without a preceding release still commits the open gesture
        let committed = if self.input_state.is_idle() {
            false
        } else {
            debug!("Pointer down during an active gesture, committing it");
            self.handle_pointer_up()
        };

        let pos = self.origin.client_to_canvas(client);

        // Handles only exist on the selected entity, and only while visible
        if !self.exporting {
            if let Some(id) = self.selected_id().map(str::to_owned) {
                if let Some(bounds) = self.displayed_bounds(&id) {
                    if let Some(handle) = handle_at(bounds, pos) {
                        debug!(id = %id, ?handle, "Resize started");
                        self.input_state.start_resizing(id, handle, bounds, pos);
                        return true;
                    }
                }
            }
        }

        let hit = self
            .scene
            .hit_test(pos)
            .map(|entity| (entity.id.clone(), entity.position()));

        match hit {
            Some((id, origin)) => {
                self.scene.raise_to_top(&id);
                self.selection.select(id.as_str());
                debug!(id = %id, x = pos.x, y = pos.y, "Entity selected, move started");
                self.input_state.start_moving(id, origin, pos);
                true
            }
            None => {
                if self.selection.is_empty() {
                    return committed;
                }
                debug!("Empty canvas pressed, selection cleared");
                self.selection.clear();
                true
            }
        }
    }
}
