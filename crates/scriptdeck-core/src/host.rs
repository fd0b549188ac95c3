//! Host abstraction
//!
//! The core never talks to a terminal or an editor directly. Everything the
//! user sees or types goes through a [`Host`], and text is appended to open
//! documents through [`Document`].

use crate::error::{DeckError, DeckResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;

/// A single-line input request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    /// Prompt heading
    pub title: String,
    /// Hint shown in an empty input
    pub placeholder: Option<String>,
}

impl PromptRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// Surface that can receive appended text
#[async_trait]
pub trait Document: Send + Sync {
    /// Display name
    fn name(&self) -> String;

    /// Append text at the end of the document
    async fn append(&self, text: &str) -> DeckResult<()>;
}

/// The user-facing side of the application
#[async_trait]
pub trait Host: Send + Sync {
    /// Currently selected text, empty when nothing is selected
    async fn selected_text(&self) -> String;

    /// Ask for a string; `None` means the prompt was dismissed
    async fn prompt(&self, request: PromptRequest) -> Option<String>;

    /// Show a short notice
    async fn notify(&self, message: &str);

    /// Show text in a display that goes away on its own
    async fn show_transient(&self, title: &str, text: &str);

    /// The document the user is working in, if any
    async fn active_document(&self) -> Option<Arc<dyn Document>>;

    /// Directory that relative output targets resolve against
    fn base_dir(&self) -> PathBuf;
}

/// A plain file treated as a document
///
/// Appending never creates the file.
#[derive(Debug, Clone)]
pub struct FileDocument {
    path: PathBuf,
}

impl FileDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Document for FileDocument {
    fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    async fn append(&self, text: &str) -> DeckResult<()> {
        append_existing(&self.path, text).await
    }
}

/// Append to an existing file, failing with `NotFound` io errors if it is absent
pub(crate) async fn append_existing(path: &Path, text: &str) -> DeckResult<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .append(true)
        .open(path)
        .await
        .map_err(|e| {
            DeckError::io_with_path(format!("Failed to open for append: {}", e), path.display().to_string())
        })?;
    file.write_all(text.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_document_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("note.md");
        std::fs::write(&path, "# Note\n").unwrap();

        let doc = FileDocument::new(&path);
        doc.append("2\n").await.unwrap();
        doc.append("3\n").await.unwrap();

        assert_eq!(doc.name(), "note.md");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Note\n2\n3\n");
    }

    #[tokio::test]
    async fn test_file_document_never_creates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.md");

        assert!(FileDocument::new(&path).append("x").await.is_err());
        assert!(!path.exists());
    }
}
