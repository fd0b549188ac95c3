//! Registry entry types and name validation

use crate::error::{DeckError, DeckResult};
use crate::script::ENTRY_SHIM_FILE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How a registry entry's location is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Location is a generated entry shim inside a module directory
    Module,
    /// Location is a plain script file
    Direct,
}

/// A registered command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Unique command name
    pub name: String,
    /// Script file or entry shim
    pub location: PathBuf,
}

impl RegistryEntry {
    /// Create a new entry
    pub fn new(name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    /// Entry kind, derived from the location's file name
    pub fn kind(&self) -> EntryKind {
        match self.location.file_name() {
            Some(name) if name == ENTRY_SHIM_FILE => EntryKind::Module,
            _ => EntryKind::Direct,
        }
    }

    /// Directory that holds the entry's files
    pub fn module_dir(&self) -> Option<&Path> {
        self.location.parent()
    }
}

/// Validate a command name, returning the trimmed form
pub fn validate_command_name(raw: &str) -> DeckResult<String> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(DeckError::invalid_name(raw, "Command name is required"));
    }
    if name.contains(&['/', '\\'][..]) {
        return Err(DeckError::invalid_name(
            raw,
            "Command name must not contain path separators",
        ));
    }
    if name.starts_with('.') {
        return Err(DeckError::invalid_name(
            raw,
            "Command name must not start with '.'",
        ));
    }
    if name.chars().any(char::is_control) {
        return Err(DeckError::invalid_name(
            raw,
            "Command name must not contain control characters",
        ));
    }

    Ok(name.to_string())
}
