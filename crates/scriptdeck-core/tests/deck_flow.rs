//! End-to-end flows through `Deck` with a recording host

use async_trait::async_trait;
use scriptdeck_core::error::UnifiedError;
use scriptdeck_core::invoker::resolve_interpreter;
use scriptdeck_core::output::Sink;
use scriptdeck_core::{
    Deck, DeckLocations, Document, FileDocument, Host, InvokeOutcome, PromptRequest, SinkError,
    SkipReason,
};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

#[derive(Default)]
struct RecordingHost {
    selection: Mutex<String>,
    answers: Mutex<VecDeque<Option<String>>>,
    prompts: Mutex<Vec<PromptRequest>>,
    notices: Mutex<Vec<String>>,
    transient: Mutex<Vec<(String, String)>>,
    document: Mutex<Option<Arc<dyn Document>>>,
    base_dir: PathBuf,
}

impl RecordingHost {
    fn new(base_dir: &Path) -> Arc<Self> {
        Arc::new(Self {
            base_dir: base_dir.to_path_buf(),
            ..Self::default()
        })
    }

    fn select(&self, text: &str) {
        *self.selection.lock().unwrap() = text.to_string();
    }

    fn answer(&self, answer: Option<&str>) {
        self.answers
            .lock()
            .unwrap()
            .push_back(answer.map(str::to_string));
    }

    fn open_document(&self, path: &Path) {
        *self.document.lock().unwrap() = Some(Arc::new(FileDocument::new(path)));
    }

    fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    fn transient(&self) -> Vec<(String, String)> {
        self.transient.lock().unwrap().clone()
    }
}

#[async_trait]
impl Host for RecordingHost {
    async fn selected_text(&self) -> String {
        self.selection.lock().unwrap().clone()
    }

    async fn prompt(&self, request: PromptRequest) -> Option<String> {
        self.prompts.lock().unwrap().push(request);
        self.answers.lock().unwrap().pop_front().flatten()
    }

    async fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }

    async fn show_transient(&self, title: &str, text: &str) {
        self.transient
            .lock()
            .unwrap()
            .push((title.to_string(), text.to_string()));
    }

    async fn active_document(&self) -> Option<Arc<dyn Document>> {
        self.document.lock().unwrap().clone()
    }

    fn base_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

async fn load(temp_dir: &TempDir) -> (Deck, Arc<RecordingHost>) {
    init_tracing();
    let host = RecordingHost::new(temp_dir.path());
    let locations = DeckLocations::from_data_dir(temp_dir.path().join("data"));
    let deck = Deck::load(locations, host.clone()).await.unwrap();
    (deck, host)
}

fn python3() -> Option<PathBuf> {
    let found = resolve_interpreter(Path::new("python3"));
    if found.is_none() {
        eprintln!("python3 not found on PATH, skipping");
    }
    found
}

#[tokio::test]
async fn test_make_command_registers_and_binds() {
    let temp_dir = TempDir::new().unwrap();
    let (mut deck, host) = load(&temp_dir).await;
    host.select("print(1+1)");

    let entry = deck.make_command(Some("addone".into())).await.unwrap();

    let module_dir = temp_dir.path().join("data/scripts/addone");
    assert_eq!(entry.location, module_dir.join("__entry__.py"));
    assert_eq!(
        std::fs::read_to_string(module_dir.join("addone.py")).unwrap(),
        "print(1+1)"
    );
    assert!(deck.binder().get("addone").is_some());
    assert!(
        deck.list_commands()
            .iter()
            .any(|c| c.id == "run-addone" && c.title == "Run addone")
    );
    assert_eq!(host.notices(), vec!["Created command 'addone'".to_string()]);
}

#[tokio::test]
async fn test_make_command_rejects_blank_selection() {
    let temp_dir = TempDir::new().unwrap();
    let (mut deck, host) = load(&temp_dir).await;
    host.select("  \n");

    let err = deck.make_command(Some("x".into())).await.unwrap_err();

    assert_eq!(err.error_code(), "DECK_EMPTY_INPUT");
    assert!(host.notices()[0].contains("No text selected"));
    assert!(!deck.locations().registry_file.exists());
}

#[tokio::test]
async fn test_make_command_duplicate_keeps_original() {
    let temp_dir = TempDir::new().unwrap();
    let (mut deck, host) = load(&temp_dir).await;
    host.select("print('first')");
    deck.make_command(Some("dup".into())).await.unwrap();
    let registry_before = std::fs::read(&deck.locations().registry_file).unwrap();

    host.select("print('second')");
    let err = deck.make_command(Some("dup".into())).await.unwrap_err();

    assert_eq!(err.error_code(), "DECK_ALREADY_EXISTS");
    let script = temp_dir.path().join("data/scripts/dup/dup.py");
    assert_eq!(std::fs::read_to_string(script).unwrap(), "print('first')");
    assert_eq!(
        std::fs::read(&deck.locations().registry_file).unwrap(),
        registry_before
    );
}

#[tokio::test]
async fn test_make_command_prompts_for_name() {
    let temp_dir = TempDir::new().unwrap();
    let (mut deck, host) = load(&temp_dir).await;
    host.select("print(3)");

    host.answer(None);
    let err = deck.make_command(None).await.unwrap_err();
    assert_eq!(err.error_code(), "DECK_CANCELLED");

    host.answer(Some("  named  "));
    let entry = deck.make_command(None).await.unwrap();
    assert_eq!(entry.name, "named");
    assert_eq!(host.prompts.lock().unwrap()[0].title, "Command name");
}

#[tokio::test]
async fn test_make_command_rejects_reserved_name() {
    let temp_dir = TempDir::new().unwrap();
    let (mut deck, host) = load(&temp_dir).await;
    host.select("print(1)");

    let err = deck
        .make_command(Some("selected-text".into()))
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "DECK_INVALID_NAME");
    assert!(!temp_dir.path().join("data/scripts/selected-text").exists());
}

#[tokio::test]
async fn test_remove_command() {
    let temp_dir = TempDir::new().unwrap();
    let (mut deck, host) = load(&temp_dir).await;
    host.select("print(1)");
    deck.make_command(Some("gone".into())).await.unwrap();
    let module_dir = temp_dir.path().join("data/scripts/gone");
    assert!(module_dir.exists());

    deck.remove_command("gone").await.unwrap();

    assert!(!module_dir.exists());
    assert!(deck.binder().get("gone").is_none());
    assert!(deck.registry().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_remove_unknown_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let (mut deck, host) = load(&temp_dir).await;
    host.select("print(1)");
    deck.make_command(Some("kept".into())).await.unwrap();
    let registry_before = std::fs::read(&deck.locations().registry_file).unwrap();

    let err = deck.remove_command("missing").await.unwrap_err();

    assert_eq!(err.error_code(), "DECK_NOT_FOUND");
    assert_eq!(
        std::fs::read(&deck.locations().registry_file).unwrap(),
        registry_before
    );
    assert!(temp_dir.path().join("data/scripts/kept").exists());
}

#[tokio::test]
async fn test_invoke_unknown_command() {
    let temp_dir = TempDir::new().unwrap();
    let (deck, host) = load(&temp_dir).await;

    let err = deck.invoke("nothing").await.unwrap_err();

    assert_eq!(err.error_code(), "DECK_NOT_FOUND");
    assert_eq!(host.notices().len(), 1);
}

#[tokio::test]
async fn test_missing_interpreter_never_routes() {
    let temp_dir = TempDir::new().unwrap();
    let (mut deck, host) = load(&temp_dir).await;
    host.select("print(1)");
    deck.make_command(Some("addone".into())).await.unwrap();
    deck.update_settings(|s| s.interpreter = PathBuf::from("/no/such/python"))
        .await
        .unwrap();

    let err = deck.invoke("addone").await.unwrap_err();

    assert_eq!(err.error_code(), "DECK_INVALID_INTERPRETER");
    assert!(host.transient().is_empty());
}

#[tokio::test]
async fn test_prepend_without_selection_skips() {
    let temp_dir = TempDir::new().unwrap();
    let (mut deck, host) = load(&temp_dir).await;
    host.select("print(1)");
    deck.make_command(Some("needs".into())).await.unwrap();
    deck.update_settings(|s| {
        s.prompt_for_arguments = true;
        s.prepend_selected_text = true;
    })
    .await
    .unwrap();
    host.select("");

    let outcome = deck.invoke("needs").await.unwrap();

    assert_eq!(outcome, InvokeOutcome::Skipped(SkipReason::NoSelection));
    assert!(host.prompts.lock().unwrap().is_empty());
    assert!(host.notices().contains(&"No text selected".to_string()));
    assert!(host.transient().is_empty());
}

#[tokio::test]
async fn test_run_selected_text_without_selection_skips() {
    let temp_dir = TempDir::new().unwrap();
    let (deck, host) = load(&temp_dir).await;

    let outcome = deck.run_selected_text().await.unwrap();

    assert_eq!(outcome, InvokeOutcome::Skipped(SkipReason::NoSelection));
    assert_eq!(host.notices(), vec!["No text selected".to_string()]);
}

#[cfg(unix)]
mod direct_entries {
    use super::*;

    async fn deck_with_sh_script(temp_dir: &TempDir, body: &str) -> (Deck, Arc<RecordingHost>) {
        let data_dir = temp_dir.path().join("data");
        std::fs::create_dir_all(&data_dir).unwrap();
        let script = temp_dir.path().join("echo.sh");
        std::fs::write(&script, body).unwrap();
        let registry = serde_json::json!({ "echo": script });
        std::fs::write(data_dir.join("commands.json"), registry.to_string()).unwrap();

        let (mut deck, host) = load(temp_dir).await;
        deck.update_settings(|s| s.interpreter = PathBuf::from("/bin/sh"))
            .await
            .unwrap();
        (deck, host)
    }

    #[tokio::test]
    async fn test_direct_entry_gets_split_arguments() {
        let temp_dir = TempDir::new().unwrap();
        let (mut deck, host) = deck_with_sh_script(&temp_dir, "printf '%s\\n' \"$@\"\n").await;
        deck.update_settings(|s| {
            s.prompt_for_arguments = true;
            s.prepend_selected_text = true;
        })
        .await
        .unwrap();
        host.select("sel");
        host.answer(Some("a, 'b, c'"));

        let outcome = deck.invoke("echo").await.unwrap();

        let InvokeOutcome::Completed { report, summary } = outcome else {
            panic!("expected completion, got {:?}", outcome);
        };
        assert_eq!(report.render(), "sel\na\nb, c\n");
        assert_eq!(host.prompts.lock().unwrap()[0].title, "Arguments for echo");

        // No active document: the transient display still gets the text.
        assert_eq!(
            host.transient(),
            vec![("echo".to_string(), "sel\na\nb, c\n".to_string())]
        );
        assert_eq!(
            summary.outcome(Sink::ActiveDocument),
            Some(&Err(SinkError::Unavailable("no active document".to_string())))
        );
    }

    #[tokio::test]
    async fn test_cancelled_prompt_runs_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let marker = temp_dir.path().join("ran");
        let body = format!("touch '{}'\n", marker.display());
        let (mut deck, host) = deck_with_sh_script(&temp_dir, &body).await;
        deck.update_settings(|s| s.prompt_for_arguments = true)
            .await
            .unwrap();
        host.answer(None);

        let outcome = deck.invoke("echo").await.unwrap();

        assert_eq!(outcome, InvokeOutcome::Cancelled);
        assert!(!marker.exists());
        assert!(host.transient().is_empty());
    }

    #[tokio::test]
    async fn test_silent_command_still_reaches_sinks() {
        let temp_dir = TempDir::new().unwrap();
        let (deck, host) = deck_with_sh_script(&temp_dir, "exit 0\n").await;
        let doc = temp_dir.path().join("doc.md");
        std::fs::write(&doc, "# Doc\n").unwrap();
        host.open_document(&doc);

        let outcome = deck.invoke("echo").await.unwrap();

        let InvokeOutcome::Completed { report, summary } = outcome else {
            panic!("expected completion, got {:?}", outcome);
        };
        assert!(report.is_empty());
        assert_eq!(summary.delivered(), vec![Sink::Transient, Sink::ActiveDocument]);
        assert_eq!(host.transient(), vec![("echo".to_string(), String::new())]);
        assert_eq!(std::fs::read_to_string(&doc).unwrap(), "# Doc\n");
        assert_eq!(host.notices(), vec!["echo finished with no output".to_string()]);
    }

    #[tokio::test]
    async fn test_output_appends_to_document_and_named_file() {
        let temp_dir = TempDir::new().unwrap();
        let (mut deck, host) = deck_with_sh_script(&temp_dir, "echo out\necho warn >&2\nexit 1\n").await;
        let doc = temp_dir.path().join("doc.md");
        let console = temp_dir.path().join("Script Console.md");
        std::fs::write(&doc, "# Doc\n").unwrap();
        std::fs::write(&console, "").unwrap();
        host.open_document(&doc);
        deck.update_settings(|s| {
            s.show_transient = false;
            s.append_to_named_file = true;
        })
        .await
        .unwrap();

        let outcome = deck.invoke("echo").await.unwrap();

        let expected = "Error: process exited with status 1\nstderr: warn\nout\n";
        let InvokeOutcome::Completed { report, summary } = outcome else {
            panic!("expected completion");
        };
        assert!(report.failed());
        assert!(summary.failures().is_empty());
        assert_eq!(std::fs::read_to_string(&doc).unwrap(), format!("# Doc\n{}", expected));
        assert_eq!(std::fs::read_to_string(&console).unwrap(), expected);
        assert!(host.transient().is_empty());
    }

    #[tokio::test]
    async fn test_remove_direct_entry_deletes_file() {
        let temp_dir = TempDir::new().unwrap();
        let (mut deck, _host) = deck_with_sh_script(&temp_dir, "echo hi\n").await;
        let script = temp_dir.path().join("echo.sh");

        deck.remove_command("echo").await.unwrap();

        assert!(!script.exists());
        // The parent still holds the data directory, so it stays.
        assert!(temp_dir.path().exists());
    }
}

#[tokio::test]
async fn test_python_addone_end_to_end() {
    let Some(python) = python3() else {
        return;
    };
    let temp_dir = TempDir::new().unwrap();
    let (mut deck, host) = load(&temp_dir).await;
    deck.update_settings(|s| s.interpreter = python).await.unwrap();
    host.select("print(1+1)");
    deck.make_command(Some("addone".into())).await.unwrap();

    let outcome = deck.invoke("addone").await.unwrap();

    let InvokeOutcome::Completed { report, .. } = outcome else {
        panic!("expected completion, got {:?}", outcome);
    };
    assert_eq!(report.render(), "2\n");
    assert_eq!(host.transient(), vec![("addone".to_string(), "2\n".to_string())]);
}

#[tokio::test]
async fn test_python_shim_decodes_arguments() {
    let Some(python) = python3() else {
        return;
    };
    let temp_dir = TempDir::new().unwrap();
    let (mut deck, host) = load(&temp_dir).await;
    deck.update_settings(|s| {
        s.interpreter = python;
        s.prompt_for_arguments = true;
    })
    .await
    .unwrap();
    host.select("import sys\nprint(repr(sys.argv[1:]))");
    deck.make_command(Some("show".into())).await.unwrap();

    let deep = "[".repeat(5000);
    let cases = [
        (r#"[1, "two", true]"#.to_string(), "[1, 'two', True]\n".to_string()),
        ("hello world".to_string(), "['hello world']\n".to_string()),
        ("null".to_string(), "[None]\n".to_string()),
        ("'quoted text'".to_string(), "['quoted text']\n".to_string()),
        (r#""a, b""#.to_string(), "['a, b']\n".to_string()),
        ("(1, 2)".to_string(), "[1, 2]\n".to_string()),
        ("'it's'".to_string(), "[\"it's\"]\n".to_string()),
        (deep.clone(), format!("['{}']\n", deep)),
    ];

    for (typed, expected) in cases {
        host.answer(Some(typed.as_str()));
        let outcome = deck.invoke("show").await.unwrap();
        let InvokeOutcome::Completed { report, .. } = outcome else {
            panic!("expected completion for {:?}, got {:?}", typed, outcome);
        };
        assert_eq!(report.render(), expected, "typed {:?}", typed);
    }
}

#[tokio::test]
async fn test_python_run_selected_text() {
    let Some(python) = python3() else {
        return;
    };
    let temp_dir = TempDir::new().unwrap();
    let (mut deck, host) = load(&temp_dir).await;
    deck.update_settings(|s| s.interpreter = python).await.unwrap();
    host.select("print('it\\'s', 6 * 7)");

    let outcome = deck.run_selected_text().await.unwrap();

    let InvokeOutcome::Completed { report, .. } = outcome else {
        panic!("expected completion, got {:?}", outcome);
    };
    assert_eq!(report.render(), "it's 42\n");
}
