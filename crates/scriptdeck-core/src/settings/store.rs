//! Settings persistence
//!
//! The store keeps two views: the persisted settings (exactly what is on disk)
//! and the effective settings (persisted plus environment overrides). Every
//! mutation goes through [`SettingsStore::update`], which writes the file
//! before returning.

use crate::error::{DeckError, DeckResult};
use crate::storage::{read_optional, write_atomic};
use std::path::{Path, PathBuf};

use super::locations::DeckLocations;
use super::types::Settings;

/// Loaded, file-backed settings
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    persisted: Settings,
    effective: Settings,
}

impl SettingsStore {
    /// Load settings, merging the file over defaults and rewriting it with all fields
    pub async fn load(locations: &DeckLocations) -> DeckResult<Self> {
        let path = locations.settings_file.clone();
        let (mut persisted, rewrite) = match read_optional(&path).await? {
            Some(content) if content.trim().is_empty() => {
                tracing::warn!("Settings file {:?} is empty, creating defaults", path);
                (Settings::default(), true)
            }
            Some(content) => match Self::parse_settings(&content, &path) {
                Ok(settings) => {
                    tracing::debug!("Loaded settings from {:?}", path);
                    (settings, true)
                }
                Err(e) => {
                    // Keep the unreadable file for the user to fix instead of clobbering it.
                    tracing::warn!("{}; falling back to defaults", e);
                    (Settings::default(), false)
                }
            },
            None => {
                tracing::debug!("No settings file at {:?}, creating defaults", path);
                (Settings::default(), true)
            }
        };

        persisted.fill_location_defaults(locations);

        let store = Self::from_parts(path, persisted);
        if rewrite {
            store.save().await?;
        }
        Ok(store)
    }

    /// Build a store without touching disk
    pub fn from_parts(path: impl Into<PathBuf>, persisted: Settings) -> Self {
        let mut effective = persisted.clone();
        effective.apply_env_overrides();
        Self {
            path: path.into(),
            persisted,
            effective,
        }
    }

    /// Parse settings from JSON string
    pub fn parse_settings(content: &str, path: &Path) -> DeckResult<Settings> {
        serde_json::from_str(content).map_err(|e| {
            DeckError::config(format!("Failed to parse settings file {:?}: {}", path, e))
        })
    }

    /// Effective settings (persisted values plus environment overrides)
    pub fn settings(&self) -> &Settings {
        &self.effective
    }

    /// Settings exactly as persisted
    pub fn persisted(&self) -> &Settings {
        &self.persisted
    }

    /// Settings file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Mutate the persisted settings and write them out before returning
    pub async fn update<F>(&mut self, mutate: F) -> DeckResult<&Settings>
    where
        F: FnOnce(&mut Settings),
    {
        let mut next = self.persisted.clone();
        mutate(&mut next);

        let previous = std::mem::replace(&mut self.persisted, next);
        if let Err(e) = self.save().await {
            self.persisted = previous;
            return Err(e);
        }

        self.effective = self.persisted.clone();
        self.effective.apply_env_overrides();
        Ok(&self.effective)
    }

    /// Write the persisted settings to disk
    pub async fn save(&self) -> DeckResult<()> {
        let content = serde_json::to_string_pretty(&self.persisted)
            .map_err(|e| DeckError::config(format!("Failed to serialize settings: {}", e)))?;
        write_atomic(&self.path, &content).await
    }
}
