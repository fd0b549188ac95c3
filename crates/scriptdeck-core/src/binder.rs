//! Command binding
//!
//! Keeps the list of invocable commands in sync with the registry. Each entry
//! becomes a `run-<name>` command; two built-ins are always present.

use crate::registry::RegistryEntry;
use serde::Serialize;
use std::collections::BTreeMap;

/// Built-in command that turns the selection into a new command
pub const MAKE_COMMAND_ID: &str = "make-command";

/// Built-in command that runs the selection as inline source
pub const RUN_SELECTED_TEXT_ID: &str = "run-selected-text";

const RUN_PREFIX: &str = "run-";

/// A command id built from a registry name
pub fn command_id(name: &str) -> String {
    format!("{}{}", RUN_PREFIX, name)
}

/// An invocable command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundCommand {
    pub id: String,
    pub title: String,
    /// Backing entry; `None` for built-ins
    pub entry: Option<RegistryEntry>,
}

impl BoundCommand {
    fn builtin(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            entry: None,
        }
    }

    fn for_entry(entry: RegistryEntry) -> Self {
        Self {
            id: command_id(&entry.name),
            title: format!("Run {}", entry.name),
            entry: Some(entry),
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.entry.is_none()
    }
}

/// In-memory command table
#[derive(Debug, Clone, Default)]
pub struct CommandBinder {
    bound: BTreeMap<String, BoundCommand>,
}

impl CommandBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every bound command with the given entries
    pub fn rebuild(&mut self, entries: impl IntoIterator<Item = RegistryEntry>) {
        self.bound.clear();
        for entry in entries {
            self.bind(entry);
        }
    }

    /// Bind one entry, replacing any command with the same name
    ///
    /// Returns `false` when the id would shadow a built-in.
    pub fn bind(&mut self, entry: RegistryEntry) -> bool {
        let command = BoundCommand::for_entry(entry);
        if is_builtin_id(&command.id) {
            tracing::warn!("Command '{}' would shadow a built-in, not bound", command.id);
            return false;
        }
        tracing::debug!("Bound {}", command.id);
        self.bound.insert(command.id.clone(), command);
        true
    }

    /// Drop the command for a registry name
    pub fn unbind(&mut self, name: &str) -> Option<BoundCommand> {
        self.bound.remove(&command_id(name.trim()))
    }

    /// Look up a bound command by registry name
    pub fn get(&self, name: &str) -> Option<&BoundCommand> {
        self.bound.get(&command_id(name.trim()))
    }

    /// Look up any command by id, built-ins included
    pub fn get_by_id(&self, id: &str) -> Option<BoundCommand> {
        match id {
            MAKE_COMMAND_ID | RUN_SELECTED_TEXT_ID => {
                builtins().into_iter().find(|c| c.id == id)
            }
            _ => self.bound.get(id).cloned(),
        }
    }

    /// Built-ins first, then bound commands sorted by id
    pub fn commands(&self) -> Vec<BoundCommand> {
        let mut commands = builtins();
        commands.extend(self.bound.values().cloned());
        commands
    }

    /// Number of bound entries, built-ins excluded
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}

/// Whether a registry name would map onto a built-in id
pub fn is_reserved_name(name: &str) -> bool {
    is_builtin_id(&command_id(name))
}

fn is_builtin_id(id: &str) -> bool {
    id == MAKE_COMMAND_ID || id == RUN_SELECTED_TEXT_ID
}

fn builtins() -> Vec<BoundCommand> {
    vec![
        BoundCommand::builtin(MAKE_COMMAND_ID, "Make command from selection"),
        BoundCommand::builtin(RUN_SELECTED_TEXT_ID, "Run selected text"),
    ]
}
