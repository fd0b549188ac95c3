//! Process spawning

use crate::error::{DeckError, DeckResult};
use crate::settings::Settings;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::instrument;

use super::interpreter::resolve_interpreter;
use super::report::InvocationReport;

/// Spawns the configured interpreter
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    interpreter: PathBuf,
    working_directory: Option<PathBuf>,
    log_invocations: bool,
}

impl ProcessInvoker {
    /// Create an invoker for an interpreter path or bare name
    pub fn new(interpreter: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
            working_directory: None,
            log_invocations: false,
        }
    }

    /// Create an invoker from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.interpreter).with_logging(settings.log_invocations)
    }

    /// Run processes in a specific working directory
    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    /// Log command lines and reports at info level
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.log_invocations = enabled;
        self
    }

    /// Configured interpreter
    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    /// Check that the interpreter resolves, without spawning anything
    pub fn resolve(&self) -> DeckResult<PathBuf> {
        resolve_interpreter(&self.interpreter)
            .ok_or_else(|| DeckError::invalid_interpreter(self.interpreter.display().to_string()))
    }

    /// Run `<interpreter> <script> [args...]`
    #[instrument(skip(self, args), fields(interpreter = %self.interpreter.display(), argc = args.len()))]
    pub async fn invoke(&self, script: &Path, args: &[String]) -> DeckResult<InvocationReport> {
        let interpreter = self.resolve()?;
        let mut argv: Vec<OsString> = Vec::with_capacity(args.len() + 1);
        argv.push(script.as_os_str().to_os_string());
        argv.extend(args.iter().map(OsString::from));
        Ok(self.run(&interpreter, argv).await)
    }

    /// Run `<interpreter> -c <source>` for ad-hoc text
    #[instrument(skip(self, source), fields(interpreter = %self.interpreter.display(), source_len = source.len()))]
    pub async fn run_inline(&self, source: &str) -> DeckResult<InvocationReport> {
        let interpreter = self.resolve()?;
        let argv = vec![OsString::from("-c"), OsString::from(source)];
        Ok(self.run(&interpreter, argv).await)
    }

    async fn run(&self, interpreter: &Path, argv: Vec<OsString>) -> InvocationReport {
        let command_line = format_command_line(interpreter, &argv);
        if self.log_invocations {
            tracing::info!("Executing command: {}", command_line);
        } else {
            tracing::debug!("Executing command: {}", command_line);
        }

        let mut cmd = Command::new(interpreter);
        cmd.args(&argv)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_directory {
            cmd.current_dir(dir);
        }

        let report = match cmd.output().await {
            Ok(output) => {
                let error = if output.status.success() {
                    None
                } else {
                    Some(match output.status.code() {
                        Some(code) => format!("process exited with status {}", code),
                        None => "process terminated by signal".to_string(),
                    })
                };
                InvocationReport::from_output(error, &output.stdout, &output.stderr)
            }
            Err(e) => InvocationReport::from_error(format!(
                "failed to start {}: {}",
                interpreter.display(),
                e
            )),
        };

        if self.log_invocations {
            tracing::info!(failed = report.failed(), "Command output:\n{}", report.render());
        } else {
            tracing::debug!(failed = report.failed(), "Command output:\n{}", report.render());
        }
        report
    }
}

fn format_command_line(interpreter: &Path, argv: &[OsString]) -> String {
    std::iter::once(interpreter.as_os_str())
        .chain(argv.iter().map(|a| a.as_os_str()))
        .map(|a| a.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
