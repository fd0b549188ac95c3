//! Data directory discovery
//!
//! All persisted state lives under a single data directory:
//! - `settings.json` - the settings file
//! - `commands.json` - the command registry
//! - `scripts/` - default root for generated script modules

use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "SCRIPTDECK_HOME";

const SETTINGS_FILE: &str = "settings.json";
const REGISTRY_FILE: &str = "commands.json";

/// Locations of the files Scriptdeck persists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckLocations {
    /// Root data directory
    pub data_dir: PathBuf,
    /// Settings file path
    pub settings_file: PathBuf,
    /// Registry file path
    pub registry_file: PathBuf,
}

impl DeckLocations {
    /// Discover locations from the environment, falling back to the user config dir
    pub fn discover() -> Self {
        match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::from_data_dir(PathBuf::from(dir)),
            _ => Self::from_data_dir(Self::default_data_dir()),
        }
    }

    /// Build locations rooted at a specific data directory
    pub fn from_data_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        Self {
            settings_file: data_dir.join(SETTINGS_FILE),
            registry_file: data_dir.join(REGISTRY_FILE),
            data_dir,
        }
    }

    /// Default data directory (`~/.config/scriptdeck` on Linux)
    pub fn default_data_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("scriptdeck")
    }

    /// Default root for generated script modules
    pub fn default_script_root(&self) -> PathBuf {
        self.data_dir.join("scripts")
    }
}

impl Default for DeckLocations {
    fn default() -> Self {
        Self::discover()
    }
}
