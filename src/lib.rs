//! Photocollage - a freeform photo collage canvas engine.
//!
//! Images dragged in from a search provider or a local upload are placed on an
//! infinite canvas, selected, moved and resized through a pointer-driven state
//! machine, and exported as a PNG data URI.
//!
//! The host owns the window and the event loop. It forwards pointer, drop and
//! resize events to a [`CollageCanvas`](app::CollageCanvas) and draws the frames
//! returned by [`render`].

pub mod app;
pub mod constants;
pub mod drag;
pub mod error;
pub mod export;
pub mod image_library;
pub mod input;
pub mod logging;
pub mod perf;
pub mod render;
pub mod scene;
pub mod search;
pub mod selection;
pub mod settings;
pub mod spatial_index;
pub mod types;
pub mod upload;
pub mod viewport;

pub use app::CollageCanvas;
pub use error::{CollageError, CollageResult};
