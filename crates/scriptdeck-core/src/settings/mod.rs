//! Process-wide settings
//!
//! Settings are loaded once at startup and merged field-by-field over the
//! built-in defaults, so a settings file written by an older release gains new
//! fields without losing the ones it already has.
//!
//! # Loading Order
//!
//! 1. **Built-in defaults** - [`Settings::default_for`] the data directory
//! 2. **Settings file** - `<data_dir>/settings.json`, legacy key names accepted
//! 3. **Environment variables** - `SCRIPTDECK_INTERPRETER`, `SCRIPTDECK_SCRIPT_ROOT`
//!
//! Environment overrides only affect the in-memory copy; they are never
//! written back to disk.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use scriptdeck_core::settings::{DeckLocations, SettingsStore};
//!
//! let locations = DeckLocations::discover();
//! let mut store = SettingsStore::load(&locations).await?;
//! store.update(|s| s.prompt_for_arguments = true).await?;
//! ```

pub mod locations;
pub mod store;
pub mod types;

pub use locations::DeckLocations;
pub use store::SettingsStore;
pub use types::{OutputSinks, Settings};
