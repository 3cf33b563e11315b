//! Local file ingestion.
//!
//! Selected or dropped files are checked against the accepted MIME types,
//! decoded, and registered in the image library under a fresh `blob:` URL. The
//! blob URL doubles as the stable id of the upload.

use crate::constants::{ACCEPTED_UPLOAD_TYPES, BLOB_URL_PREFIX};
use crate::error::{CollageError, CollageResult};
use crate::image_library::ImageLibrary;
use image::ImageFormat;
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

/// A file handed over by the host's file picker or upload drop target.
#[derive(Clone, Debug)]
pub struct UploadFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Read a file from disk, deriving its MIME type from the extension.
    pub fn from_path(path: &Path) -> CollageResult<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string());
        let mime = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(mime_from_extension)
            .unwrap_or("application/octet-stream");
        let bytes = std::fs::read(path)?;
        Ok(Self::new(name, mime, bytes))
    }
}

/// MIME type for a file extension, limited to the formats the canvas can show.
pub fn mime_from_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

pub fn is_accepted_type(mime: &str) -> bool {
    ACCEPTED_UPLOAD_TYPES.contains(&mime)
}

/// A successfully ingested upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedImage {
    /// Stable identifier (equal to `src`)
    pub id: String,
    /// Local blob reference usable as an entity `src`
    pub src: String,
    /// Original file name
    pub name: String,
}

/// Keeps the list of uploads shown as draggable thumbnails.
#[derive(Debug, Default)]
pub struct UploadIngestor {
    uploads: Vec<UploadedImage>,
}

impl UploadIngestor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uploads(&self) -> &[UploadedImage] {
        &self.uploads
    }

    /// Ingest one file; rejected files leave the upload list unchanged.
    pub fn ingest_one(
        &mut self,
        file: UploadFile,
        library: &mut ImageLibrary,
    ) -> CollageResult<UploadedImage> {
        if !is_accepted_type(&file.mime) {
            return Err(CollageError::UnsupportedType(file.mime));
        }
        let format = ImageFormat::from_mime_type(&file.mime)
            .ok_or_else(|| CollageError::UnsupportedType(file.mime.clone()))?;
        let image = image::load_from_memory_with_format(&file.bytes, format)?;

        let src = format!("{BLOB_URL_PREFIX}{}", Uuid::new_v4());
        library.insert(src.clone(), image);

        let upload = UploadedImage {
            id: src.clone(),
            src,
            name: file.name,
        };
        info!(name = %upload.name, src = %upload.src, "Upload ingested");
        self.uploads.push(upload.clone());
        Ok(upload)
    }

    /// Ingest a multi-file selection. Failures are logged and skipped.
    pub fn ingest(
        &mut self,
        files: Vec<UploadFile>,
        library: &mut ImageLibrary,
    ) -> Vec<UploadedImage> {
        files
            .into_iter()
            .filter_map(|file| {
                let name = file.name.clone();
                match self.ingest_one(file, library) {
                    Ok(upload) => Some(upload),
                    Err(e) => {
                        warn!(%name, error = %e, "Upload rejected");
                        None
                    }
                }
            })
            .collect()
    }
}

// ============================================================================
// Upload Drop Target
// ============================================================================

/// Events delivered to the dedicated upload drop target.
#[derive(Debug)]
pub enum DropZoneEvent {
    DragEnter,
    DragOver,
    DragLeave,
    PointerOut,
    Drop(Vec<UploadFile>),
}

/// Highlight state of the upload drop target.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UploadDropZone {
    active: bool,
}

impl UploadDropZone {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Update the highlight and return the dropped files, if any.
    pub fn handle(&mut self, event: DropZoneEvent) -> Option<Vec<UploadFile>> {
        match event {
            DropZoneEvent::DragEnter | DropZoneEvent::DragOver => {
                self.active = true;
                None
            }
            DropZoneEvent::DragLeave | DropZoneEvent::PointerOut => {
                self.active = false;
                None
            }
            DropZoneEvent::Drop(files) => {
                self.active = false;
                if files.is_empty() { None } else { Some(files) }
            }
        }
    }
}
