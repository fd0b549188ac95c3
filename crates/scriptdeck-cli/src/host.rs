//! Terminal implementation of the host traits

use crate::args::SelectionArgs;
use crate::console::CLIConsole;
use async_trait::async_trait;
use dialoguer::{Input, theme::ColorfulTheme};
use scriptdeck_core::error::{DeckResult, ResultExt};
use scriptdeck_core::{Document, FileDocument, Host, PromptRequest};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::io::AsyncReadExt;

/// Host backed by the terminal
///
/// The selection is fixed when the host is built. Output shown in the
/// "transient display" is printed to stdout.
pub struct TerminalHost {
    console: CLIConsole,
    selection: String,
    preset_answer: Mutex<Option<String>>,
    document: Option<Arc<dyn Document>>,
    base_dir: PathBuf,
    interactive: bool,
}

impl TerminalHost {
    pub fn new(console: CLIConsole) -> Self {
        Self {
            console,
            selection: String::new(),
            preset_answer: Mutex::new(None),
            document: None,
            base_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            interactive: std::io::stdin().is_terminal(),
        }
    }

    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = selection.into();
        self
    }

    /// Answer the next prompt with `answer` instead of asking
    pub fn with_preset_answer(mut self, answer: Option<String>) -> Self {
        self.preset_answer = Mutex::new(answer);
        self
    }

    /// Treat a file as the active document
    pub fn with_document(mut self, path: Option<PathBuf>) -> Self {
        self.document = path.map(|p| Arc::new(FileDocument::new(p)) as Arc<dyn Document>);
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    fn take_preset(&self) -> Option<String> {
        self.preset_answer.lock().ok().and_then(|mut slot| slot.take())
    }
}

#[async_trait]
impl Host for TerminalHost {
    async fn selected_text(&self) -> String {
        self.selection.clone()
    }

    async fn prompt(&self, request: PromptRequest) -> Option<String> {
        if let Some(answer) = self.take_preset() {
            return Some(answer);
        }
        if !self.interactive {
            tracing::debug!("Not a terminal, dismissing prompt '{}'", request.title);
            return None;
        }

        let label = match &request.placeholder {
            Some(hint) => format!("{} ({})", request.title, hint),
            None => request.title,
        };
        tokio::task::spawn_blocking(move || {
            Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(label)
                .allow_empty(true)
                .interact_text()
                .ok()
        })
        .await
        .ok()
        .flatten()
    }

    async fn notify(&self, message: &str) {
        self.console.notice(message);
    }

    async fn show_transient(&self, title: &str, text: &str) {
        if self.console.is_verbose() {
            self.console.print_header(title);
        }
        print!("{}", text);
    }

    async fn active_document(&self) -> Option<Arc<dyn Document>> {
        self.document.clone()
    }

    fn base_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }
}

impl SelectionArgs {
    /// Read the selection from the flag, a file, or stdin
    pub async fn read(&self) -> DeckResult<String> {
        if let Some(text) = &self.selection {
            return Ok(text.clone());
        }
        match self.selection_file.as_deref() {
            Some(path) if path == Path::new("-") => {
                let mut text = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut text)
                    .await
                    .context("Failed to read selection from stdin")?;
                Ok(text)
            }
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read selection from {}", path.display())),
            None => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn host() -> TerminalHost {
        TerminalHost::new(CLIConsole::new(false)).with_interactive(false)
    }

    #[tokio::test]
    async fn test_preset_answer_is_used_once() {
        let host = host().with_preset_answer(Some("1, 2".into()));

        assert_eq!(host.prompt(PromptRequest::new("Arguments")).await, Some("1, 2".into()));
        assert_eq!(host.prompt(PromptRequest::new("Arguments")).await, None);
    }

    #[tokio::test]
    async fn test_document_and_selection() {
        let temp_dir = TempDir::new().unwrap();
        let doc = temp_dir.path().join("out.md");
        let host = host()
            .with_selection("print(1)")
            .with_document(Some(doc.clone()));

        assert_eq!(host.selected_text().await, "print(1)");
        assert_eq!(host.active_document().await.unwrap().name(), "out.md");
        assert!(TerminalHost::new(CLIConsole::new(false)).active_document().await.is_none());
    }

    #[tokio::test]
    async fn test_selection_args_read() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("snippet.py");
        std::fs::write(&file, "print('file')\n").unwrap();

        let from_flag = SelectionArgs {
            selection: Some("inline".into()),
            selection_file: None,
        };
        let from_file = SelectionArgs {
            selection: None,
            selection_file: Some(file),
        };
        let missing = SelectionArgs {
            selection: None,
            selection_file: Some(temp_dir.path().join("missing.py")),
        };

        assert_eq!(from_flag.read().await.unwrap(), "inline");
        assert_eq!(from_file.read().await.unwrap(), "print('file')\n");
        assert_eq!(SelectionArgs::default().read().await.unwrap(), "");
        assert!(missing.read().await.is_err());
    }
}
