//! Argument encoding
//!
//! Every registry entry is encoded one way, chosen by its kind:
//!
//! - **Module entries** get the transport encoding: all parts are joined into one
//!   string, base64-encoded, and passed as a single argv token. The entry shim
//!   decodes it (JSON, then Python literal, then quote stripping, then plain
//!   string), so quotes, commas and newlines survive untouched.
//! - **Direct entries** have no shim, so the typed text is split on commas with
//!   quote awareness and passed as separate words after the selection.
//!
//! Neither path can fail; malformed input always ends up as a plain string.

mod direct;
mod transport;

#[cfg(test)]
mod tests;

pub use direct::split_direct;
pub use transport::{PART_SEPARATOR, encode_token, join_parts};

use crate::params::ArgumentParts;
use crate::registry::EntryKind;

/// Build the argv tail for an entry of the given kind
pub fn encode_arguments(kind: EntryKind, parts: &ArgumentParts) -> Vec<String> {
    match kind {
        EntryKind::Module => {
            if parts.is_empty() {
                Vec::new()
            } else {
                vec![encode_token(&join_parts(&parts.to_vec()))]
            }
        }
        EntryKind::Direct => {
            let mut argv = Vec::new();
            if let Some(selection) = &parts.selection {
                argv.push(selection.clone());
            }
            if let Some(typed) = &parts.typed {
                argv.extend(split_direct(typed));
            }
            argv
        }
    }
}
