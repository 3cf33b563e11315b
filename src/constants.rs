//! Application-wide constants.
//!
//! Centralizes magic numbers so the interaction, rendering and export code
//! agree on the same limits.

// ============================================================================
// Entity Geometry
// ============================================================================

/// Minimum width and height of a placed image, in canvas pixels
pub const MIN_ENTITY_SIZE: f32 = 5.0;

/// Size given to a placed image whose source cannot be resolved yet
pub const DEFAULT_ENTITY_SIZE: (f32, f32) = (150.0, 150.0);

/// Prefix of generated entity ids (`image-1`, `image-2`, ...)
pub const ENTITY_ID_PREFIX: &str = "image-";

// ============================================================================
// Selection Chrome
// ============================================================================

/// Side length of a square resize handle, in pixels
pub const HANDLE_SIZE: f32 = 10.0;

/// Extra slop around a handle that still counts as a hit
pub const HANDLE_HIT_SLOP: f32 = 4.0;

/// Thickness of the selection border
pub const SELECTION_BORDER_WIDTH: u32 = 1;

/// Default selection chrome colour
pub const DEFAULT_SELECTION_COLOR: [u8; 4] = [0, 161, 255, 255];

/// Default canvas background (fully transparent, like an empty stage)
pub const DEFAULT_BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 0];

// ============================================================================
// Search
// ============================================================================

/// Number of search results requested per page
pub const SEARCH_PAGE_SIZE: u32 = 12;

/// Base endpoint for Unsplash photo search
pub const UNSPLASH_SEARCH_ENDPOINT: &str = "https://api.unsplash.com/search/photos";

/// Environment variable that overrides the stored Unsplash access key
pub const UNSPLASH_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";

// ============================================================================
// Upload
// ============================================================================

/// MIME types accepted by the upload ingestor
pub const ACCEPTED_UPLOAD_TYPES: &[&str] = &["image/png", "image/jpeg", "image/webp"];

/// Scheme used for locally ingested image references
pub const BLOB_URL_PREFIX: &str = "blob:photocollage/";

// ============================================================================
// Export
// ============================================================================

/// Prefix of every exported data URI
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Prefix of every exported filename
pub const EXPORT_FILENAME_PREFIX: &str = "export-photocollage";

/// Threshold above which an export is logged as slow, in milliseconds
pub const EXPORT_SLOW_MS: f64 = 250.0;

// ============================================================================
// Logging
// ============================================================================

/// Default tracing filter when neither settings nor RUST_LOG provide one
pub const DEFAULT_LOG_FILTER: &str = "photocollage=info";
