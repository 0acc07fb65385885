/// Persisted application settings
///
/// Only the chosen content folder survives restarts. Query state (search
/// term, selected tags, sort order) is deliberately transient.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Folder holding the exported recipe documents and their images
    pub content_dir: Option<PathBuf>,
}

impl Settings {
    /// Where the settings file lives:
    /// - Linux: ~/.local/share/recipe-shelf/settings.json
    /// - macOS: ~/Library/Application Support/recipe-shelf/settings.json
    /// - Windows: %APPDATA%\recipe-shelf\settings.json
    fn path() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .expect("Could not determine user data directory");

        path.push("recipe-shelf");
        path.push("settings.json");
        path
    }

    /// Load settings, falling back to defaults when the file is missing.
    /// A corrupt file is logged and ignored, never fatal.
    pub fn load() -> Self {
        let path = Self::path();
        match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(err) => {
                    log::warn!("ignoring corrupt settings at {}: {err}", path.display());
                    Settings::default()
                }
            },
            Err(_) => Settings::default(),
        }
    }

    /// Write settings to disk, creating the parent directory if needed
    pub fn save(&self) -> io::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(&path, json)
    }
}
