//! Single-token transport encoding for module entries
//!
//! Only the encoding half lives here. The entry shim written next to every
//! module decodes the token inside the interpreter.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Separator used when the selection and typed text are combined
pub const PART_SEPARATOR: &str = ", ";

/// Join argument parts, selection first
pub fn join_parts(parts: &[&str]) -> String {
    parts.join(PART_SEPARATOR)
}

/// Encode text as one shell-safe token
pub fn encode_token(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}
