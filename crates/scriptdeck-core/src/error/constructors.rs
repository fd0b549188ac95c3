//! Constructor methods for DeckError

use super::types::DeckError;

impl DeckError {
    /// Create an invalid-name error
    pub fn invalid_name(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidName {
            message: message.into(),
            name: name.into(),
            context: None,
        }
    }

    /// Create an empty-input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
            context: None,
        }
    }

    /// Create a name-collision error
    pub fn already_exists(name: impl Into<String>) -> Self {
        Self::AlreadyExists {
            name: name.into(),
            context: None,
        }
    }

    /// Create a name-collision error with context
    pub fn already_exists_with_context(
        name: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self::AlreadyExists {
            name: name.into(),
            context: Some(context.into()),
        }
    }

    /// Create a not-found error
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            name: name.into(),
            context: None,
        }
    }

    /// Create an invalid-interpreter error
    pub fn invalid_interpreter(path: impl Into<String>) -> Self {
        Self::InvalidInterpreter {
            path: path.into(),
            context: None,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a new storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
            path: None,
            context: None,
        }
    }

    /// Create a storage error tied to a file
    pub fn storage_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
            path: Some(path.into()),
            context: None,
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            context: None,
        }
    }

    /// Create an IO error with path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
            context: None,
        }
    }

    /// Create a new JSON error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
            context: None,
        }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            context: None,
        }
    }

    /// Attach context to an existing error, replacing any previous context
    pub fn with_context(self, ctx: impl Into<String>) -> Self {
        let ctx = Some(ctx.into());
        match self {
            Self::InvalidName { message, name, .. } => Self::InvalidName {
                message,
                name,
                context: ctx,
            },
            Self::EmptyInput { message, .. } => Self::EmptyInput {
                message,
                context: ctx,
            },
            Self::AlreadyExists { name, .. } => Self::AlreadyExists { name, context: ctx },
            Self::NotFound { name, .. } => Self::NotFound { name, context: ctx },
            Self::InvalidInterpreter { path, .. } => Self::InvalidInterpreter { path, context: ctx },
            Self::Cancelled => Self::Cancelled,
            Self::Config { message, .. } => Self::Config {
                message,
                context: ctx,
            },
            Self::Storage { message, path, .. } => Self::Storage {
                message,
                path,
                context: ctx,
            },
            Self::Io { message, path, .. } => Self::Io {
                message,
                path,
                context: ctx,
            },
            Self::Json { message, .. } => Self::Json {
                message,
                context: ctx,
            },
            Self::Other { message, .. } => Self::Other {
                message,
                context: ctx,
            },
        }
    }
}
