//! Decoded image resources keyed by their source reference.
//!
//! Entities only store a `src` string. The library maps those strings to
//! decoded pixels so the renderer can draw them. Remote images are fetched by
//! the host and handed over as bytes; uploads are registered by the upload
//! ingestor under their blob URL.

use crate::error::CollageResult;
use image::{DynamicImage, GenericImageView, RgbaImage};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default)]
pub struct ImageLibrary {
    images: HashMap<String, RgbaImage>,
}

impl ImageLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an already decoded image under `src`, replacing any previous one.
    pub fn insert(&mut self, src: impl Into<String>, image: DynamicImage) {
        let src = src.into();
        let (width, height) = image.dimensions();
        debug!(%src, width, height, "Image registered");
        self.images.insert(src, image.into_rgba8());
    }

    /// Decode `bytes` (format sniffed from content) and register them under `src`.
    pub fn load_bytes(&mut self, src: impl Into<String>, bytes: &[u8]) -> CollageResult<()> {
        let image = image::load_from_memory(bytes)?;
        self.insert(src, image);
        Ok(())
    }

    /// Decode the file at `path` and register it under `src`.
    pub fn load_file(&mut self, src: impl Into<String>, path: &Path) -> CollageResult<()> {
        let image = image::open(path)?;
        self.insert(src, image);
        Ok(())
    }

    pub fn get(&self, src: &str) -> Option<&RgbaImage> {
        self.images.get(src)
    }

    pub fn contains(&self, src: &str) -> bool {
        self.images.contains_key(src)
    }

    /// Natural pixel size of the image registered under `src`.
    pub fn dimensions(&self, src: &str) -> Option<(u32, u32)> {
        self.images.get(src).map(|img| img.dimensions())
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
