//! Script materialization
//!
//! Turns captured source text into an on-disk module:
//!
//! ```text
//! <script_root>/<name>/<name>.py      user script, verbatim
//! <script_root>/<name>/__entry__.py   generated shim, decodes the argument token
//! ```
//!
//! The registry entry points at the shim. Legacy entries that point straight
//! at a script file are still executed, but get no shim.

mod materializer;
mod shim;


pub use materializer::{Materializer, PreparedScript};
pub use shim::render_entry_shim;

/// File name of the generated entry shim
pub const ENTRY_SHIM_FILE: &str = "__entry__.py";

/// Extension for user script files
pub const SCRIPT_EXTENSION: &str = "py";
