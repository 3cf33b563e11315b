//! Interaction state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Moving      (pointer down on an entity body)
//! Idle -> Resizing    (pointer down on a handle of the selected entity)
//! Moving -> Idle      (pointer up - commits the new position)
//! Resizing -> Idle    (pointer up - commits position and size)
//! ```
//!
//! Selection is tracked separately; `Idle` says nothing about whether an
//! entity is selected.

use crate::types::{Bounds, Handle, Point};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    /// No active manipulation
    #[default]
    Idle,

    /// Dragging an entity to a new position
    Moving {
        entity_id: String,
        /// Offset from the entity's top-left to the grab point
        grab_offset: Point,
        /// Live top-left position, not yet committed
        position: Point,
    },

    /// Dragging one of the selected entity's handles
    Resizing {
        entity_id: String,
        handle: Handle,
        /// Bounds when the gesture started
        start_bounds: Bounds,
        /// Pointer position (canvas coordinates) when the gesture started
        start_pointer: Point,
        /// Last accepted live bounds
        bounds: Bounds,
    },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, Self::Moving { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    /// Entity under manipulation, if any.
    pub fn entity_id(&self) -> Option<&str> {
        match self {
            Self::Moving { entity_id, .. } | Self::Resizing { entity_id, .. } => Some(entity_id),
            Self::Idle => None,
        }
    }

    /// Live bounds of the manipulated entity, given its committed bounds.
    pub fn live_bounds(&self, committed: Bounds) -> Bounds {
        match self {
            Self::Moving { position, .. } => Bounds::new(
                position.x,
                position.y,
                committed.width,
                committed.height,
            ),
            Self::Resizing { bounds, .. } => *bounds,
            Self::Idle => committed,
        }
    }

    pub fn start_moving(&mut self, entity_id: impl Into<String>, origin: Point, grab: Point) {
        *self = Self::Moving {
            entity_id: entity_id.into(),
            grab_offset: grab - origin,
            position: origin,
        };
    }

    pub fn start_resizing(
        &mut self,
        entity_id: impl Into<String>,
        handle: Handle,
        start_bounds: Bounds,
        start_pointer: Point,
    ) {
        *self = Self::Resizing {
            entity_id: entity_id.into(),
            handle,
            start_bounds,
            start_pointer,
            bounds: start_bounds,
        };
    }

    /// Reset to Idle, returning the state that was active.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
