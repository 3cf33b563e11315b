//! PNG export artifacts and the sinks that receive them.
//!
//! An export produces a filename stamped with local wall-clock time and a
//! `data:image/png;base64,...` URI. What happens to the artifact afterwards is
//! up to the [`ArtifactSink`] the host supplies.

use crate::constants::{EXPORT_FILENAME_PREFIX, PNG_DATA_URI_PREFIX};
use crate::error::{CollageError, CollageResult};
use crate::settings::Settings;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Datelike, TimeZone, Timelike};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::info;

/// A finished export ready to be saved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub data_uri: String,
}

/// `export-photocollage-<day>-<month>-<year>-<hour>-<minute>-<second>.png`
///
/// No zero padding; the month is 1-indexed.
pub fn export_file_name<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    format!(
        "{EXPORT_FILENAME_PREFIX}-{}-{}-{}-{}-{}-{}.png",
        at.day(),
        at.month(),
        at.year(),
        at.hour(),
        at.minute(),
        at.second()
    )
}

/// Encode a frame as PNG and wrap it in a base64 data URI.
pub fn encode_png_data_uri(frame: &RgbaImage) -> CollageResult<String> {
    let mut bytes = Vec::new();
    frame.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(format!("{PNG_DATA_URI_PREFIX}{}", STANDARD.encode(&bytes)))
}

/// Decode the PNG bytes carried by a data URI produced by [`encode_png_data_uri`].
pub fn decode_png_data_uri(uri: &str) -> CollageResult<Vec<u8>> {
    let payload = uri
        .strip_prefix(PNG_DATA_URI_PREFIX)
        .ok_or_else(|| CollageError::InvalidDataUri("missing PNG data URI prefix".into()))?;
    STANDARD
        .decode(payload)
        .map_err(|e| CollageError::InvalidDataUri(e.to_string()))
}

/// Receives export artifacts (the client-side "save").
pub trait ArtifactSink {
    fn save(&mut self, artifact: &ExportArtifact) -> CollageResult<()>;
}

/// Writes the decoded PNG into a directory under the artifact's filename.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Sink for the configured export directory, or the platform download
    /// directory when none is set. None when neither is known.
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        settings.resolved_export_dir().map(Self::new)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for DirectorySink {
    fn save(&mut self, artifact: &ExportArtifact) -> CollageResult<()> {
        let bytes = decode_png_data_uri(&artifact.data_uri)?;
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&artifact.file_name);
        std::fs::write(&path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "Export saved");
        Ok(())
    }
}

/// Keeps artifacts in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub saved: Vec<ExportArtifact>,
}

impl ArtifactSink for MemorySink {
    fn save(&mut self, artifact: &ExportArtifact) -> CollageResult<()> {
        self.saved.push(artifact.clone());
        Ok(())
    }
}
