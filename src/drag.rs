//! Drag payloads carried from the image sources to the canvas drop target.
//!
//! The payload is attached to the drag gesture itself: the host creates it at
//! drag start and hands it back with the drop event.

use crate::search::SearchHit;
use crate::upload::UploadedImage;

/// Where a dragged image came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOrigin {
    SearchResult,
    Upload,
}

/// The image reference carried by an in-flight drag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragPayload {
    pub src: String,
    pub origin: DragOrigin,
}

impl DragPayload {
    pub fn new(src: impl Into<String>, origin: DragOrigin) -> Self {
        Self {
            src: src.into(),
            origin,
        }
    }

    /// Start dragging a search result thumbnail.
    pub fn from_search_hit(hit: &SearchHit) -> Self {
        Self::new(hit.image_url.clone(), DragOrigin::SearchResult)
    }

    /// Start dragging an uploaded file thumbnail.
    pub fn from_upload(upload: &UploadedImage) -> Self {
        Self::new(upload.src.clone(), DragOrigin::Upload)
    }
}
