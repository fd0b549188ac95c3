//! Normalized invocation output

use serde::Serialize;
use std::fmt;

/// Captured signals of one process run
///
/// Rendered in the fixed order error, stderr, stdout. Each non-empty signal
/// gets its own line; error and stderr are labelled, stdout is not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvocationReport {
    /// Spawn failure or non-zero exit
    pub error_text: Option<String>,
    /// Captured standard error
    pub stderr_text: Option<String>,
    /// Captured standard output
    pub stdout_text: Option<String>,
}

impl InvocationReport {
    /// Report carrying only an error
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            error_text: Some(message.into()),
            ..Self::default()
        }
    }

    /// Build from raw process output
    pub fn from_output(error: Option<String>, stdout: &[u8], stderr: &[u8]) -> Self {
        fn non_empty(bytes: &[u8]) -> Option<String> {
            (!bytes.is_empty()).then(|| String::from_utf8_lossy(bytes).into_owned())
        }

        Self {
            error_text: error.filter(|e| !e.is_empty()),
            stderr_text: non_empty(stderr),
            stdout_text: non_empty(stdout),
        }
    }

    /// Whether the run failed to start or exited non-zero
    pub fn failed(&self) -> bool {
        self.error_text.is_some()
    }

    /// Whether no signal carries any text
    pub fn is_empty(&self) -> bool {
        self.error_text.is_none() && self.stderr_text.is_none() && self.stdout_text.is_none()
    }

    /// Render into a single display string
    pub fn render(&self) -> String {
        let mut out = String::new();
        let signals = [
            ("Error: ", self.error_text.as_deref()),
            ("stderr: ", self.stderr_text.as_deref()),
            ("", self.stdout_text.as_deref()),
        ];

        for (label, text) in signals {
            let Some(text) = text.filter(|t| !t.is_empty()) else {
                continue;
            };
            out.push_str(label);
            out.push_str(text);
            if !text.ends_with('\n') {
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for InvocationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
