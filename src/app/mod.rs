//! Application module - the collage canvas state object and its operations.
//!
//! This module is organized into several submodules:
//! - `state` - The `CollageCanvas` struct and read accessors
//! - `lifecycle` - Construction and host window events
//! - `export_handlers` - Decoration-free rendering and PNG export
//!
//! Pointer and drop handling lives in `crate::input` as further
//! `impl CollageCanvas` blocks.

mod export_handlers;
mod lifecycle;
mod state;

pub use state::CollageCanvas;
