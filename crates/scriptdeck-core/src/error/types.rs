//! Core error types and traits for Scriptdeck

use thiserror::Error;

/// Result type alias for Scriptdeck operations
pub type DeckResult<T> = Result<T, DeckError>;

/// Unified error trait that all Scriptdeck errors implement.
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Get the error code for programmatic handling
    fn error_code(&self) -> &str;

    /// Get the human-readable error message
    fn message(&self) -> &str;

    /// Get optional context about the error
    fn context(&self) -> Option<&str> {
        None
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context<C: std::fmt::Display>(self, context: C) -> DeckResult<T>;

    /// Add context lazily (only evaluated on error)
    fn with_context<C: std::fmt::Display, F: FnOnce() -> C>(self, f: F) -> DeckResult<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn context<C: std::fmt::Display>(self, context: C) -> DeckResult<T> {
        self.map_err(|e| DeckError::other(format!("{}: {}", context, e)))
    }

    fn with_context<C: std::fmt::Display, F: FnOnce() -> C>(self, f: F) -> DeckResult<T> {
        self.map_err(|e| DeckError::other(format!("{}: {}", f(), e)))
    }
}

/// Main error type for Scriptdeck
///
/// Process failures are deliberately absent: a script that exits non-zero or
/// fails to spawn is folded into the invocation report, not raised.
#[derive(Error, Debug, Clone)]
pub enum DeckError {
    /// Command name is empty, or contains path separators
    #[error("Invalid command name: {message}")]
    InvalidName {
        message: String,
        name: String,
        context: Option<String>,
    },

    /// Nothing to register
    #[error("Empty input: {message}")]
    EmptyInput {
        message: String,
        context: Option<String>,
    },

    /// Name collision in the registry or on disk
    #[error("Command '{name}' already exists")]
    AlreadyExists {
        name: String,
        context: Option<String>,
    },

    /// Unknown command
    #[error("Command '{name}' not found")]
    NotFound {
        name: String,
        context: Option<String>,
    },

    /// Interpreter path does not resolve to an existing file
    #[error("Invalid interpreter path: {path}")]
    InvalidInterpreter {
        path: String,
        context: Option<String>,
    },

    /// The user dismissed an interactive prompt
    #[error("Operation cancelled")]
    Cancelled,

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Storage/persistence errors
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        path: Option<String>,
        context: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
        context: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        context: Option<String>,
    },

    /// Generic error with context
    #[error("Error: {message}")]
    Other {
        message: String,
        context: Option<String>,
    },
}
