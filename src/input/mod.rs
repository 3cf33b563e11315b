//! Pointer and drop input handling for the canvas.
//!
//! This module implements the selection and transform controller: which entity
//! a pointer interaction targets, how moves and resizes evolve while the
//! pointer is held, and how they are committed to the scene on release.
//!
//! ## Architecture
//!
//! The controller uses an explicit state machine (`InteractionState`). During
//! a gesture only the state machine changes; the scene is written once, on
//! pointer up.
//!
//! ## Modules
//!
//! - `state` - Interaction state machine enum and helper methods
//! - `coords` - Client to canvas coordinate conversion
//! - `transform` - Resize bound checks and commit normalization
//! - `pointer_down` - Selection, deselection and gesture start
//! - `pointer_move` - Live move and resize updates
//! - `pointer_up` - Commit of the active gesture
//! - `drop` - Placement of dragged images

pub mod coords;
mod drop;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;
pub mod transform;

pub use state::InteractionState;
