//! UnifiedError trait implementation for DeckError

use super::types::{DeckError, UnifiedError};

impl UnifiedError for DeckError {
    fn error_code(&self) -> &str {
        match self {
            Self::InvalidName { .. } => "DECK_INVALID_NAME",
            Self::EmptyInput { .. } => "DECK_EMPTY_INPUT",
            Self::AlreadyExists { .. } => "DECK_ALREADY_EXISTS",
            Self::NotFound { .. } => "DECK_NOT_FOUND",
            Self::InvalidInterpreter { .. } => "DECK_INVALID_INTERPRETER",
            Self::Cancelled => "DECK_CANCELLED",
            Self::Config { .. } => "DECK_CONFIG",
            Self::Storage { .. } => "DECK_STORAGE",
            Self::Io { .. } => "DECK_IO",
            Self::Json { .. } => "DECK_JSON",
            Self::Other { .. } => "DECK_OTHER",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::InvalidName { message, .. } => message,
            Self::EmptyInput { message, .. } => message,
            Self::AlreadyExists { .. } => "Command already exists",
            Self::NotFound { .. } => "Command not found",
            Self::InvalidInterpreter { .. } => "Invalid interpreter path",
            Self::Cancelled => "Operation cancelled",
            Self::Config { message, .. } => message,
            Self::Storage { message, .. } => message,
            Self::Io { message, .. } => message,
            Self::Json { message, .. } => message,
            Self::Other { message, .. } => message,
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            Self::InvalidName { context, .. } => context.as_deref(),
            Self::EmptyInput { context, .. } => context.as_deref(),
            Self::AlreadyExists { context, .. } => context.as_deref(),
            Self::NotFound { context, .. } => context.as_deref(),
            Self::InvalidInterpreter { context, .. } => context.as_deref(),
            Self::Cancelled => None,
            Self::Config { context, .. } => context.as_deref(),
            Self::Storage { context, .. } => context.as_deref(),
            Self::Io { context, .. } => context.as_deref(),
            Self::Json { context, .. } => context.as_deref(),
            Self::Other { context, .. } => context.as_deref(),
        }
    }
}
