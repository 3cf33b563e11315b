//! User settings stored as JSON in the platform config directory.
//!
//! Missing or malformed files never block startup: `Settings::load` falls back
//! to defaults and logs a warning.

use crate::constants::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_LOG_FILTER, DEFAULT_SELECTION_COLOR, SEARCH_PAGE_SIZE,
    UNSPLASH_KEY_ENV,
};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Results requested per search page
    pub search_page_size: u32,
    /// Unsplash API access key (overridden by `UNSPLASH_ACCESS_KEY`)
    pub unsplash_access_key: Option<String>,
    /// Where `DirectorySink` writes exports; defaults to the download dir
    pub export_dir: Option<PathBuf>,
    /// RGBA fill behind all entities
    pub background_color: [u8; 4],
    /// RGBA colour of the selection border and handles
    pub selection_color: [u8; 4],
    /// Default tracing filter
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search_page_size: SEARCH_PAGE_SIZE,
            unsplash_access_key: None,
            export_dir: None,
            background_color: DEFAULT_BACKGROUND_COLOR,
            selection_color: DEFAULT_SELECTION_COLOR,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// `<config_dir>/photocollage/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("photocollage").join("settings.json"))
}

impl Settings {
    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        let settings = match default_settings_path() {
            Some(path) => Self::load_or_default(&path),
            None => {
                debug!("No config directory, using default settings");
                Self::default()
            }
        };
        settings.with_access_key_override(std::env::var(UNSPLASH_KEY_ENV).ok())
    }

    /// Load settings from `path`. A missing file gives defaults; an unreadable
    /// or malformed one gives defaults and a warning.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Self::default();
        }
        Self::load_from(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Failed to load settings, using defaults");
            Self::default()
        })
    }

    /// Load settings from an explicit path.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = serde_json::from_str(&text)
            .with_context(|| format!("parsing settings at {}", path.display()))?;
        Ok(settings)
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Apply the value of `UNSPLASH_ACCESS_KEY`; unset or empty keeps the stored key.
    pub fn with_access_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|key| !key.is_empty()) {
            self.unsplash_access_key = Some(key);
        }
        self
    }

    /// Export directory, falling back to the platform download directory.
    pub fn resolved_export_dir(&self) -> Option<PathBuf> {
        self.export_dir.clone().or_else(dirs::download_dir)
    }
}
