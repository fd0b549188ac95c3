//! File-backed command registry

use crate::error::{DeckError, DeckResult};
use crate::storage::{read_optional, write_atomic};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::types::{RegistryEntry, validate_command_name};

type RegistryMap = BTreeMap<String, PathBuf>;

/// Registry store backed by a JSON file
///
/// There is no in-memory cache: each call reads the whole file, and each
/// mutation performs a full read-modify-write. Concurrent writers are not
/// coordinated and the last writer wins.
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    /// Open a registry at the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Registry file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Register a command, failing if the name is taken
    pub async fn register(&self, name: &str, location: impl AsRef<Path>) -> DeckResult<RegistryEntry> {
        let name = validate_command_name(name)?;
        let mut map = self.read_map().await?;

        if map.contains_key(&name) {
            return Err(DeckError::already_exists(name));
        }

        let location = location.as_ref().to_path_buf();
        map.insert(name.clone(), location.clone());
        self.write_map(&map).await?;

        tracing::debug!("Registered command '{}' at {:?}", name, location);
        Ok(RegistryEntry::new(name, location))
    }

    /// Unregister a command, returning the removed entry
    pub async fn unregister(&self, name: &str) -> DeckResult<RegistryEntry> {
        let name = name.trim();
        let mut map = self.read_map().await?;

        let location = map
            .remove(name)
            .ok_or_else(|| DeckError::not_found(name))?;
        self.write_map(&map).await?;

        tracing::debug!("Unregistered command '{}'", name);
        Ok(RegistryEntry::new(name, location))
    }

    /// List all entries, sorted by name
    pub async fn list(&self) -> DeckResult<Vec<RegistryEntry>> {
        let map = self.read_map().await?;
        Ok(map
            .into_iter()
            .map(|(name, location)| RegistryEntry::new(name, location))
            .collect())
    }

    /// Look up a single entry
    pub async fn get(&self, name: &str) -> DeckResult<Option<RegistryEntry>> {
        let map = self.read_map().await?;
        Ok(map
            .get_key_value(name.trim())
            .map(|(name, location)| RegistryEntry::new(name.clone(), location.clone())))
    }

    /// Check whether a name is registered
    pub async fn contains(&self, name: &str) -> DeckResult<bool> {
        Ok(self.read_map().await?.contains_key(name.trim()))
    }

    async fn read_map(&self) -> DeckResult<RegistryMap> {
        match read_optional(&self.path).await? {
            None => Ok(RegistryMap::new()),
            Some(content) if content.trim().is_empty() => Ok(RegistryMap::new()),
            Some(content) => serde_json::from_str(&content).map_err(|e| {
                DeckError::storage_with_path(
                    format!("Registry file {:?} is malformed: {}", self.path, e),
                    self.path.display().to_string(),
                )
            }),
        }
    }

    async fn write_map(&self, map: &RegistryMap) -> DeckResult<()> {
        let content = serde_json::to_string_pretty(map)?;
        write_atomic(&self.path, &content).await
    }
}
