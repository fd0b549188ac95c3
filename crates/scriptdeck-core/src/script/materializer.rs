//! Module directory creation and removal

use crate::error::{DeckError, DeckResult};
use crate::registry::{EntryKind, RegistryEntry, RegistryStore, validate_command_name};
use std::path::{Path, PathBuf};
use tokio::fs;

use super::shim::render_entry_shim;
use super::{ENTRY_SHIM_FILE, SCRIPT_EXTENSION};

/// Validated materialization input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedScript {
    /// Trimmed command name
    pub name: String,
    /// Source text, written verbatim
    pub source: String,
}

/// Creates and removes script modules under a root directory
#[derive(Debug, Clone)]
pub struct Materializer {
    script_root: PathBuf,
}

impl Materializer {
    /// Create a materializer rooted at `script_root`
    pub fn new(script_root: impl Into<PathBuf>) -> Self {
        Self {
            script_root: script_root.into(),
        }
    }

    /// Root directory for modules
    pub fn script_root(&self) -> &Path {
        &self.script_root
    }

    /// Directory a command's module lives in
    pub fn module_dir(&self, name: &str) -> PathBuf {
        self.script_root.join(name)
    }

    /// Validate a name and source text
    pub fn prepare(name: &str, source: &str) -> DeckResult<PreparedScript> {
        let name = validate_command_name(name)?;
        if source.trim().is_empty() {
            return Err(DeckError::empty_input("No text selected"));
        }
        Ok(PreparedScript {
            name,
            source: source.to_string(),
        })
    }

    /// Write the module and register it
    ///
    /// The name is checked against the registry and the filesystem before
    /// anything is written, and files are staged in a temporary directory that
    /// is renamed into place in one step. A rejected name never leaves files
    /// behind.
    pub async fn materialize(
        &self,
        registry: &RegistryStore,
        script: &PreparedScript,
    ) -> DeckResult<RegistryEntry> {
        if registry.contains(&script.name).await? {
            return Err(DeckError::already_exists(&script.name));
        }

        let module_dir = self.module_dir(&script.name);
        if fs::try_exists(&module_dir).await? {
            return Err(DeckError::already_exists_with_context(
                &script.name,
                format!("{} already exists on disk", module_dir.display()),
            ));
        }

        fs::create_dir_all(&self.script_root).await.map_err(|e| {
            DeckError::io_with_path(
                format!("Failed to create script root: {}", e),
                self.script_root.display().to_string(),
            )
        })?;

        let staging = self
            .script_root
            .join(format!(".staging-{}", uuid::Uuid::new_v4()));
        if let Err(e) = self.write_module(&staging, script).await {
            let _ = fs::remove_dir_all(&staging).await;
            return Err(e);
        }
        if let Err(e) = fs::rename(&staging, &module_dir).await {
            let _ = fs::remove_dir_all(&staging).await;
            return Err(DeckError::io_with_path(
                format!("Failed to move module into place: {}", e),
                module_dir.display().to_string(),
            ));
        }

        let location = module_dir.join(ENTRY_SHIM_FILE);
        match registry.register(&script.name, &location).await {
            Ok(entry) => {
                tracing::debug!("Materialized '{}' at {:?}", entry.name, module_dir);
                Ok(entry)
            }
            Err(e) => {
                // Registration failed (a lost race or a storage error); undo our files only.
                let _ = fs::remove_dir_all(&module_dir).await;
                Err(e)
            }
        }
    }

    async fn write_module(&self, dir: &Path, script: &PreparedScript) -> DeckResult<()> {
        fs::create_dir_all(dir).await?;

        let script_file = format!("{}.{}", script.name, SCRIPT_EXTENSION);
        fs::write(dir.join(&script_file), &script.source).await?;
        fs::write(dir.join(ENTRY_SHIM_FILE), render_entry_shim(&script_file)).await?;
        Ok(())
    }

    /// Remove an entry's files
    ///
    /// Module entries lose their whole directory. Direct entries lose the
    /// script file, and the parent directory too if that leaves it empty.
    pub async fn dematerialize(&self, entry: &RegistryEntry) -> DeckResult<()> {
        match entry.kind() {
            EntryKind::Module => {
                let Some(dir) = entry.module_dir() else {
                    return Ok(());
                };
                match fs::remove_dir_all(dir).await {
                    Ok(()) => Ok(()),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                    Err(e) => Err(DeckError::io_with_path(
                        format!("Failed to remove module directory: {}", e),
                        dir.display().to_string(),
                    )),
                }
            }
            EntryKind::Direct => {
                match fs::remove_file(&entry.location).await {
                    Ok(()) => {}
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                    Err(e) => {
                        return Err(DeckError::io_with_path(
                            format!("Failed to remove script: {}", e),
                            entry.location.display().to_string(),
                        ));
                    }
                }
                if let Some(dir) = entry.module_dir() {
                    if is_empty_dir(dir).await {
                        let _ = fs::remove_dir(dir).await;
                    }
                }
                Ok(())
            }
        }
    }
}

async fn is_empty_dir(dir: &Path) -> bool {
    match fs::read_dir(dir).await {
        Ok(mut entries) => matches!(entries.next_entry().await, Ok(None)),
        Err(_) => false,
    }
}
