//! From trait implementations for DeckError conversions

use super::types::DeckError;

impl From<anyhow::Error> for DeckError {
    fn from(error: anyhow::Error) -> Self {
        Self::other(error.to_string())
    }
}

impl From<std::io::Error> for DeckError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for DeckError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}
