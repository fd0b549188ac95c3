//! Scriptdeck Core Library
//!
//! This crate turns text fragments into named, re-runnable interpreter scripts:
//! a durable command registry, script materialization, argument resolution and
//! encoding, process invocation, and output routing to host sinks.

pub mod binder;
pub mod codec;
pub mod deck;
pub mod error;
pub mod host;
pub mod invoker;
pub mod output;
pub mod params;
pub mod registry;
pub mod script;
pub mod settings;
pub mod storage;

// Re-export commonly used types
pub use binder::{BoundCommand, CommandBinder};
pub use deck::{Deck, InvokeOutcome};
pub use error::{DeckError, DeckResult, ResultExt, UnifiedError};
pub use host::{Document, FileDocument, Host, PromptRequest};
pub use invoker::{InvocationReport, ProcessInvoker};
pub use output::{OutputRouter, RouteSummary, Sink, SinkError};
pub use params::{ArgumentParts, Resolution, ResolverFlags, SkipReason};
pub use registry::{EntryKind, RegistryEntry, RegistryStore};
pub use script::Materializer;
pub use settings::{DeckLocations, OutputSinks, Settings, SettingsStore};
