//! The settings store: a JSON key-value cache plus the load/save contract
//! for [`AppSettings`].
//!
//! Loading absorbs every failure into the default record; nothing saved
//! yet is not an error. Saving is explicit and a failed save surfaces as
//! [`AppError::SaveSettings`] so the action surface can show it.

use std::path::{Path, PathBuf};

use chordshell_common::error::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::AppSettings;

/// The fixed key the application settings record is stored under.
pub const SETTINGS_KEY: &str = "settings";

/// A key-value cache of pretty-printed JSON files in a single directory.
#[derive(Debug, Clone)]
pub struct SettingsCache {
    root: PathBuf,
}

impl SettingsCache {
    /// Cache at the standard per-user location.
    pub fn new() -> Self {
        Self {
            root: default_cache_dir(),
        }
    }

    /// Cache rooted at an explicit directory (tests, portable installs).
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Read and deserialize the value stored under `key`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> AppResult<T> {
        let path = self.entry_path(key);
        let content = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Serialize and write `value` under `key`, creating the cache
    /// directory when needed.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        std::fs::create_dir_all(&self.root)?;
        let json = serde_json::to_string_pretty(value)?;
        std::fs::write(self.entry_path(key), json)?;
        Ok(())
    }
}

impl Default for SettingsCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-user cache directory for Chordshell.
fn default_cache_dir() -> PathBuf {
    let base = std::env::var("XDG_CACHE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".cache")
        });
    base.join("chordshell")
}

impl AppSettings {
    /// Load the application settings from the cache.
    ///
    /// Any read or deserialization failure falls back to the default
    /// record; absence of data is not an error.
    pub fn load(cache: &SettingsCache) -> Self {
        match cache.get::<AppSettings>(SETTINGS_KEY) {
            Ok(settings) => settings,
            Err(AppError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                AppSettings::default()
            }
            Err(e) => {
                tracing::warn!("Could not load settings, using defaults: {e}");
                AppSettings::default()
            }
        }
    }

    /// Save the application settings to the cache.
    ///
    /// The persisted record carries a fresh modification stamp. Any
    /// failure is reported as the typed settings-save error, the prior
    /// stamp is restored, and the previously persisted record, if any,
    /// is left as it was.
    pub fn save(&mut self, cache: &SettingsCache) -> AppResult<()> {
        let previous = self.modified_at.clone();
        self.touch();
        if cache.set(SETTINGS_KEY, self).is_err() {
            self.modified_at = previous;
            return Err(AppError::SaveSettings);
        }
        Ok(())
    }
}
