//! Error types for canvas operations
//!
//! Provides unified error handling for image loading, upload ingestion and
//! export. Interaction handlers never fail: degenerate input is ignored at the
//! boundary instead.

use thiserror::Error;

/// Errors that can occur during collage operations
#[derive(Error, Debug)]
pub enum CollageError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding or encoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Uploaded file is not one of the accepted image types
    #[error("Unsupported upload type: {0}")]
    UnsupportedType(String),

    /// The rendering surface has no area yet
    #[error("Viewport not ready ({width}x{height})")]
    ViewportNotReady { width: u32, height: u32 },

    /// A data URI could not be decoded
    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Search provider failure
    #[error("Search failed: {0}")]
    Search(String),

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for collage operations
pub type CollageResult<T> = Result<T, CollageError>;

impl From<String> for CollageError {
    fn from(s: String) -> Self {
        CollageError::Other(s)
    }
}

impl From<&str> for CollageError {
    fn from(s: &str) -> Self {
        CollageError::Other(s.to_string())
    }
}
