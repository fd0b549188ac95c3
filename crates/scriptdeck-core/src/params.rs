//! Parameter resolution
//!
//! Decides, from the two argument flags and the current selection, whether a
//! run needs the user to type arguments and which text parts make up the
//! argument list. Encoding the parts into argv is the codec's job.

use crate::settings::Settings;

/// Flags that drive resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolverFlags {
    /// Ask for arguments before running
    pub prompt: bool,
    /// Pass the selection as the first argument
    pub prepend_selection: bool,
}

impl From<&Settings> for ResolverFlags {
    fn from(settings: &Settings) -> Self {
        Self {
            prompt: settings.prompt_for_arguments,
            prepend_selection: settings.prepend_selected_text,
        }
    }
}

/// Why a run was skipped without invoking anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Selection is required but empty
    NoSelection,
}

impl SkipReason {
    /// User-facing notice text
    pub fn notice(&self) -> &'static str {
        match self {
            Self::NoSelection => "No text selected",
        }
    }
}

/// Ordered text parts that make up the argument list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgumentParts {
    /// Selected text, always first when present
    pub selection: Option<String>,
    /// Text typed at the prompt
    pub typed: Option<String>,
}

impl ArgumentParts {
    /// No arguments at all
    pub fn none() -> Self {
        Self::default()
    }

    /// Parts in concatenation order
    pub fn to_vec(&self) -> Vec<&str> {
        self.selection
            .as_deref()
            .into_iter()
            .chain(self.typed.as_deref())
            .collect()
    }

    /// Whether there is nothing to pass
    pub fn is_empty(&self) -> bool {
        self.selection.is_none() && self.typed.is_none()
    }
}

/// Outcome of resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Run now with these parts
    Invoke(ArgumentParts),
    /// Ask for a string first, then call [`Resolution::complete`]
    Prompt {
        /// Selection to put in front of the typed text
        selection: Option<String>,
    },
    /// Do not run
    Skip(SkipReason),
}

/// Resolve how a run gathers its arguments
///
/// With the selection flag on and a blank selection nothing runs, whether or
/// not prompting is enabled.
pub fn resolve(flags: ResolverFlags, selected_text: &str) -> Resolution {
    let has_selection = !selected_text.trim().is_empty();

    match (flags.prompt, flags.prepend_selection) {
        (false, false) => Resolution::Invoke(ArgumentParts::none()),
        (false, true) if has_selection => Resolution::Invoke(ArgumentParts {
            selection: Some(selected_text.to_string()),
            typed: None,
        }),
        (true, false) => Resolution::Prompt { selection: None },
        (true, true) if has_selection => Resolution::Prompt {
            selection: Some(selected_text.to_string()),
        },
        (_, true) => Resolution::Skip(SkipReason::NoSelection),
    }
}

impl Resolution {
    /// Finish a [`Resolution::Prompt`] with the user's answer
    ///
    /// `None` means the prompt was dismissed and yields `None` (cancelled).
    /// Non-prompt resolutions pass through unchanged.
    pub fn complete(self, typed: Option<String>) -> Option<Resolution> {
        match self {
            Resolution::Prompt { selection } => typed.map(|typed| {
                Resolution::Invoke(ArgumentParts {
                    selection,
                    typed: Some(typed.trim().to_string()),
                })
            }),
            other => Some(other),
        }
    }

    /// Whether the user must be asked for input first
    pub fn needs_prompt(&self) -> bool {
        matches!(self, Resolution::Prompt { .. })
    }
}
