//! The deck: every component wired to a host
//!
//! [`Deck`] owns the settings, the registry store and the command table, and
//! exposes the three user commands (make a command from the selection, run
//! the selection inline, run a registered command) plus management helpers.
//! Failures the user should see are also sent to [`Host::notify`].

use crate::binder::{BoundCommand, CommandBinder, is_reserved_name};
use crate::codec::encode_arguments;
use crate::error::{DeckError, DeckResult};
use crate::host::{Host, PromptRequest};
use crate::invoker::{InvocationReport, ProcessInvoker};
use crate::output::{OutputRouter, RouteSummary};
use crate::params::{Resolution, ResolverFlags, SkipReason, resolve};
use crate::registry::{RegistryEntry, RegistryStore};
use crate::script::Materializer;
use crate::settings::{DeckLocations, Settings, SettingsStore};
use std::sync::Arc;
use tracing::instrument;

/// Title used for inline runs of the selection
const INLINE_TITLE: &str = "Selected text";

/// How a run ended
#[derive(Debug, Clone, PartialEq)]
pub enum InvokeOutcome {
    /// The process ran and its output was routed
    Completed {
        report: InvocationReport,
        summary: RouteSummary,
    },
    /// Nothing ran
    Skipped(SkipReason),
    /// The argument prompt was dismissed
    Cancelled,
}

/// Application context
pub struct Deck {
    locations: DeckLocations,
    settings: SettingsStore,
    registry: RegistryStore,
    binder: CommandBinder,
    host: Arc<dyn Host>,
}

impl Deck {
    /// Load settings and registry, and bind every registered command
    pub async fn load(locations: DeckLocations, host: Arc<dyn Host>) -> DeckResult<Self> {
        let settings = SettingsStore::load(&locations).await?;
        let registry = RegistryStore::new(&locations.registry_file);

        let mut binder = CommandBinder::new();
        binder.rebuild(registry.list().await?);
        tracing::debug!("Loaded {} commands from {:?}", binder.len(), registry.path());

        Ok(Self {
            locations,
            settings,
            registry,
            binder,
            host,
        })
    }

    pub fn locations(&self) -> &DeckLocations {
        &self.locations
    }

    pub fn host(&self) -> &Arc<dyn Host> {
        &self.host
    }

    pub fn registry(&self) -> &RegistryStore {
        &self.registry
    }

    /// Effective settings
    pub fn settings(&self) -> &Settings {
        self.settings.settings()
    }

    pub fn settings_store(&self) -> &SettingsStore {
        &self.settings
    }

    /// Change settings and persist them
    pub async fn update_settings<F>(&mut self, mutate: F) -> DeckResult<&Settings>
    where
        F: FnOnce(&mut Settings),
    {
        match self.settings.update(mutate).await {
            Ok(settings) => Ok(settings),
            Err(e) => {
                self.host
                    .notify(&format!("Failed to save settings: {}", e))
                    .await;
                Err(e)
            }
        }
    }

    /// Built-ins followed by every registered command
    pub fn list_commands(&self) -> Vec<BoundCommand> {
        self.binder.commands()
    }

    pub fn binder(&self) -> &CommandBinder {
        &self.binder
    }

    fn materializer(&self) -> Materializer {
        Materializer::new(&self.settings().script_root)
    }

    fn invoker(&self) -> ProcessInvoker {
        ProcessInvoker::from_settings(self.settings())
    }

    fn router(&self) -> OutputRouter {
        OutputRouter::from_settings(self.settings(), &self.host.base_dir())
    }

    /// Turn the current selection into a named command
    ///
    /// Without a name the host is asked for one.
    #[instrument(skip(self))]
    pub async fn make_command(&mut self, name: Option<String>) -> DeckResult<RegistryEntry> {
        let source = self.host.selected_text().await;
        if source.trim().is_empty() {
            return self
                .fail(DeckError::empty_input(SkipReason::NoSelection.notice()))
                .await;
        }

        let name = match name {
            Some(name) => name,
            None => {
                let request = PromptRequest::new("Command name").with_placeholder("my-command");
                match self.host.prompt(request).await {
                    Some(name) => name,
                    None => return Err(DeckError::Cancelled),
                }
            }
        };

        let script = match Materializer::prepare(&name, &source) {
            Ok(script) if is_reserved_name(&script.name) => {
                return self
                    .fail(DeckError::invalid_name(
                        &script.name,
                        format!("'{}' is reserved for a built-in command", script.name),
                    ))
                    .await;
            }
            Ok(script) => script,
            Err(e) => return self.fail(e).await,
        };

        let entry = match self.materializer().materialize(&self.registry, &script).await {
            Ok(entry) => entry,
            Err(e) => return self.fail(e).await,
        };

        self.binder.bind(entry.clone());
        tracing::info!("Created command '{}' at {:?}", entry.name, entry.location);
        self.host
            .notify(&format!("Created command '{}'", entry.name))
            .await;
        Ok(entry)
    }

    /// Run the current selection as inline interpreter source
    #[instrument(skip(self))]
    pub async fn run_selected_text(&self) -> DeckResult<InvokeOutcome> {
        let source = self.host.selected_text().await;
        if source.trim().is_empty() {
            let reason = SkipReason::NoSelection;
            self.host.notify(reason.notice()).await;
            return Ok(InvokeOutcome::Skipped(reason));
        }

        let report = match self.invoker().run_inline(&source).await {
            Ok(report) => report,
            Err(e) => return self.fail(e).await,
        };
        Ok(self.complete(INLINE_TITLE, report).await)
    }

    /// Run a registered command
    #[instrument(skip(self))]
    pub async fn invoke(&self, name: &str) -> DeckResult<InvokeOutcome> {
        let Some(entry) = self.binder.get(name).and_then(|c| c.entry.clone()) else {
            return self.fail(DeckError::not_found(name)).await;
        };

        let selected = self.host.selected_text().await;
        let mut resolution = resolve(ResolverFlags::from(self.settings()), &selected);
        if resolution.needs_prompt() {
            let request = PromptRequest::new(format!("Arguments for {}", entry.name))
                .with_placeholder("comma separated values");
            let typed = self.host.prompt(request).await;
            match resolution.complete(typed) {
                Some(next) => resolution = next,
                None => {
                    tracing::debug!("Argument prompt for '{}' dismissed", entry.name);
                    return Ok(InvokeOutcome::Cancelled);
                }
            }
        }

        let parts = match resolution {
            Resolution::Invoke(parts) => parts,
            Resolution::Skip(reason) => {
                self.host.notify(reason.notice()).await;
                return Ok(InvokeOutcome::Skipped(reason));
            }
            Resolution::Prompt { .. } => return Ok(InvokeOutcome::Cancelled),
        };

        let argv = encode_arguments(entry.kind(), &parts);
        let report = match self.invoker().invoke(&entry.location, &argv).await {
            Ok(report) => report,
            Err(e) => return self.fail(e).await,
        };
        Ok(self.complete(&entry.name, report).await)
    }

    /// Unregister a command and delete its files
    ///
    /// An unknown name leaves the filesystem untouched.
    #[instrument(skip(self))]
    pub async fn remove_command(&mut self, name: &str) -> DeckResult<RegistryEntry> {
        let entry = match self.registry.unregister(name).await {
            Ok(entry) => entry,
            Err(e) => return self.fail(e).await,
        };
        self.binder.unbind(&entry.name);

        if let Err(e) = self.materializer().dematerialize(&entry).await {
            return self.fail(e).await;
        }

        tracing::info!("Removed command '{}'", entry.name);
        self.host
            .notify(&format!("Removed command '{}'", entry.name))
            .await;
        Ok(entry)
    }

    async fn complete(&self, title: &str, report: InvocationReport) -> InvokeOutcome {
        if report.is_empty() {
            self.host
                .notify(&format!("{} finished with no output", title))
                .await;
        }
        let summary = self
            .router()
            .route(self.host.as_ref(), title, &report.render())
            .await;
        InvokeOutcome::Completed { report, summary }
    }

    async fn fail<T>(&self, error: DeckError) -> DeckResult<T> {
        tracing::warn!("{}", error);
        self.host.notify(&error.to_string()).await;
        Err(error)
    }
}
