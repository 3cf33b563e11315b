//! Pointer move handling - live move and resize updates.
//!
//! Only the interaction state changes here; the scene is written on pointer up.

use crate::app::CollageCanvas;
use crate::input::InteractionState;
use crate::input::transform::bound_box;
use crate::types::Point;

impl CollageCanvas {
    /// Handle pointer motion at `client`. Returns true when the frame needs
    /// to be redrawn.
    pub fn handle_pointer_move(&mut self, client: Point) -> bool {
        let pos = self.origin.client_to_canvas(client);

        match &mut self.input_state {
            InteractionState::Idle => false,
            InteractionState::Moving {
                grab_offset,
                position,
                ..
            } => {
                let next = pos - *grab_offset;
                if !next.is_finite() || next == *position {
                    return false;
                }
                *position = next;
                true
            }
            InteractionState::Resizing {
                handle,
                start_bounds,
                start_pointer,
                bounds,
                ..
            } => {
                let proposed = handle.drag(*start_bounds, pos - *start_pointer);
                let accepted = bound_box(*bounds, proposed);
                if accepted == *bounds {
                    return false;
                }
                *bounds = accepted;
                true
            }
        }
    }
}
