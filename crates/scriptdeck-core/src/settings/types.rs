//! Settings type definitions

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::locations::DeckLocations;

/// Default interpreter, looked up on `PATH`
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Default note that receives output when the named-file sink is on
pub const DEFAULT_NAMED_FILE: &str = "Script Console.md";

/// Main settings structure
///
/// Missing fields fall back to [`Default`], which is how older files pick up
/// fields added in later releases. Legacy key names are accepted on load and
/// replaced by the current names the next time the file is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Interpreter executable (absolute path, relative path, or bare name on `PATH`)
    #[serde(alias = "pythonExecutable")]
    pub interpreter: PathBuf,

    /// Directory that holds generated script modules
    #[serde(alias = "pythonScriptFolder")]
    pub script_root: PathBuf,

    /// Ask for arguments before each run
    #[serde(alias = "showModal")]
    pub prompt_for_arguments: bool,

    /// Pass the current selection as the first argument
    #[serde(alias = "passSelectedText")]
    pub prepend_selected_text: bool,

    /// Show output in a transient display
    #[serde(alias = "modal_out")]
    pub show_transient: bool,

    /// Append output to the active document
    #[serde(alias = "cursor_out")]
    pub append_to_active_document: bool,

    /// Append output to `named_file_target`
    #[serde(alias = "note_out")]
    pub append_to_named_file: bool,

    /// File that receives output when `append_to_named_file` is on
    #[serde(alias = "outputNoteName")]
    pub named_file_target: PathBuf,

    /// Log every invocation at info level
    #[serde(alias = "console_log")]
    pub log_invocations: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interpreter: PathBuf::from(DEFAULT_INTERPRETER),
            script_root: PathBuf::new(),
            prompt_for_arguments: false,
            prepend_selected_text: false,
            show_transient: true,
            append_to_active_document: true,
            append_to_named_file: false,
            named_file_target: PathBuf::from(DEFAULT_NAMED_FILE),
            log_invocations: true,
        }
    }
}

/// The three independently enabled output sinks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputSinks {
    pub transient: bool,
    pub active_document: bool,
    pub named_file: bool,
}

impl OutputSinks {
    /// Whether no sink is enabled at all
    pub fn is_empty(&self) -> bool {
        !(self.transient || self.active_document || self.named_file)
    }
}

impl Settings {
    /// Defaults with location-dependent fields filled in
    pub fn default_for(locations: &DeckLocations) -> Self {
        let mut settings = Self::default();
        settings.fill_location_defaults(locations);
        settings
    }

    /// Fill fields whose defaults depend on the data directory
    pub fn fill_location_defaults(&mut self, locations: &DeckLocations) {
        if self.script_root.as_os_str().is_empty() {
            self.script_root = locations.default_script_root();
        }
        if self.named_file_target.as_os_str().is_empty() {
            self.named_file_target = PathBuf::from(DEFAULT_NAMED_FILE);
        }
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        // SCRIPTDECK_INTERPRETER
        if let Some(interpreter) = std::env::var_os("SCRIPTDECK_INTERPRETER") {
            if !interpreter.is_empty() {
                self.interpreter = PathBuf::from(interpreter);
            }
        }

        // SCRIPTDECK_SCRIPT_ROOT
        if let Some(root) = std::env::var_os("SCRIPTDECK_SCRIPT_ROOT") {
            if !root.is_empty() {
                self.script_root = PathBuf::from(root);
            }
        }
    }

    /// Enabled output sinks
    pub fn sinks(&self) -> OutputSinks {
        OutputSinks {
            transient: self.show_transient,
            active_document: self.append_to_active_document,
            named_file: self.append_to_named_file,
        }
    }

    /// Resolve the named-file target against a base directory
    pub fn named_file_path(&self, base_dir: &Path) -> PathBuf {
        if self.named_file_target.is_absolute() {
            self.named_file_target.clone()
        } else {
            base_dir.join(&self.named_file_target)
        }
    }

    /// Set a field from its on-disk key and a textual value
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<(), String> {
        fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
            match value.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(true),
                "false" | "no" | "off" | "0" => Ok(false),
                other => Err(format!("'{}' expects a boolean, got '{}'", key, other)),
            }
        }

        match key {
            "interpreter" => self.interpreter = PathBuf::from(value),
            "script_root" => self.script_root = PathBuf::from(value),
            "named_file_target" => self.named_file_target = PathBuf::from(value),
            "prompt_for_arguments" => self.prompt_for_arguments = parse_bool(key, value)?,
            "prepend_selected_text" => self.prepend_selected_text = parse_bool(key, value)?,
            "show_transient" => self.show_transient = parse_bool(key, value)?,
            "append_to_active_document" => {
                self.append_to_active_document = parse_bool(key, value)?
            }
            "append_to_named_file" => self.append_to_named_file = parse_bool(key, value)?,
            "log_invocations" => self.log_invocations = parse_bool(key, value)?,
            other => return Err(format!("Unknown setting '{}'", other)),
        }
        Ok(())
    }
}
