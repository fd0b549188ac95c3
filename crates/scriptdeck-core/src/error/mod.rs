//! Error types for Scriptdeck
//!
//! Every fallible operation in the core returns [`DeckResult`]. Variants carry a
//! human-readable message plus optional context, and implement [`UnifiedError`]
//! so callers can branch on a stable error code instead of message text.

mod constructors;
mod conversions;
mod types;
mod unified_error;

pub use types::{DeckError, DeckResult, ResultExt, UnifiedError};
