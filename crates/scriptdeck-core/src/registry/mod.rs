//! Command registry
//!
//! The registry is the single source of truth for which commands exist. It is
//! a pretty-printed JSON object mapping command name to script location,
//! re-read on every access and rewritten atomically on every mutation.

mod store;
mod types;


pub use store::RegistryStore;
pub use types::{EntryKind, RegistryEntry, validate_command_name};
