//! Output routing
//!
//! Fans one rendered report out to every enabled sink. Sinks are independent:
//! a sink that cannot accept the text is recorded in the [`RouteSummary`] and
//! noticed to the host, and the remaining sinks still fire.

use crate::host::{Host, append_existing};
use crate::settings::{OutputSinks, Settings};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Output destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    Transient,
    ActiveDocument,
    NamedFile,
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sink::Transient => "transient display",
            Sink::ActiveDocument => "active document",
            Sink::NamedFile => "named file",
        };
        f.write_str(name)
    }
}

/// Why a sink did not receive the text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// The destination does not exist right now
    #[error("{0}")]
    Unavailable(String),
    /// The destination exists but writing failed
    #[error("{0}")]
    Failed(String),
}

/// Result of one sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkOutcome {
    pub sink: Sink,
    pub result: Result<(), SinkError>,
}

/// Per-sink results of a route call, in firing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSummary {
    pub outcomes: Vec<SinkOutcome>,
}

impl RouteSummary {
    /// Sinks that received the text
    pub fn delivered(&self) -> Vec<Sink> {
        self.outcomes
            .iter()
            .filter(|o| o.result.is_ok())
            .map(|o| o.sink)
            .collect()
    }

    /// Sinks that failed, with their errors
    pub fn failures(&self) -> Vec<(Sink, &SinkError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.sink, e)))
            .collect()
    }

    /// Outcome for one sink, if it was enabled
    pub fn outcome(&self, sink: Sink) -> Option<&Result<(), SinkError>> {
        self.outcomes.iter().find(|o| o.sink == sink).map(|o| &o.result)
    }
}

/// Routes text to the sinks enabled in settings
#[derive(Debug, Clone)]
pub struct OutputRouter {
    sinks: OutputSinks,
    named_file: PathBuf,
}

impl OutputRouter {
    pub fn new(sinks: OutputSinks, named_file: impl Into<PathBuf>) -> Self {
        Self {
            sinks,
            named_file: named_file.into(),
        }
    }

    /// Router for the given settings, resolving the named file against `base_dir`
    pub fn from_settings(settings: &Settings, base_dir: &Path) -> Self {
        Self::new(settings.sinks(), settings.named_file_path(base_dir))
    }

    pub fn sinks(&self) -> OutputSinks {
        self.sinks
    }

    pub fn named_file(&self) -> &Path {
        &self.named_file
    }

    /// Deliver `text` to every enabled sink
    pub async fn route(&self, host: &dyn Host, title: &str, text: &str) -> RouteSummary {
        let mut summary = RouteSummary::default();

        if self.sinks.transient {
            host.show_transient(title, text).await;
            summary.outcomes.push(SinkOutcome {
                sink: Sink::Transient,
                result: Ok(()),
            });
        }

        if self.sinks.active_document {
            let result = match host.active_document().await {
                None => Err(SinkError::Unavailable("no active document".to_string())),
                Some(doc) => doc
                    .append(text)
                    .await
                    .map_err(|e| SinkError::Failed(format!("{}: {}", doc.name(), e))),
            };
            summary.outcomes.push(SinkOutcome {
                sink: Sink::ActiveDocument,
                result,
            });
        }

        if self.sinks.named_file {
            let result = self.append_named_file(text).await;
            summary.outcomes.push(SinkOutcome {
                sink: Sink::NamedFile,
                result,
            });
        }

        for (sink, error) in summary.failures() {
            tracing::warn!("Output to {} failed: {}", sink, error);
            host.notify(&format!("Could not write output to {}: {}", sink, error))
                .await;
        }

        summary
    }

    async fn append_named_file(&self, text: &str) -> Result<(), SinkError> {
        match tokio::fs::metadata(&self.named_file).await {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Err(SinkError::Unavailable("target is not a file".to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SinkError::Unavailable("target does not exist".to_string()));
            }
            Err(e) => return Err(SinkError::Failed(e.to_string())),
        }

        append_existing(&self.named_file, text)
            .await
            .map_err(|e| SinkError::Failed(e.to_string()))
    }
}
