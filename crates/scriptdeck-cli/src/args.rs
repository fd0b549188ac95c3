//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use scriptdeck_core::settings::locations::DATA_DIR_ENV;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scriptdeck")]
#[command(about = "Turn text snippets into named, re-runnable interpreter scripts")]
#[command(
    long_about = r#"Turn text snippets into named, re-runnable interpreter scripts

USAGE:
  scriptdeck make addone --selection 'print(1+1)'   # Register a command
  scriptdeck run addone                             # Run it
  scriptdeck exec --selection 'print(6*7)'          # Run text without registering
  scriptdeck list                                   # List commands
  scriptdeck remove addone                          # Delete a command

SETTINGS:
  scriptdeck config show                            # Show current settings
  scriptdeck config set prompt_for_arguments true"#
)]
#[command(version)]
pub struct Cli {
    /// Data directory holding settings, registry and scripts
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the "selected text" comes from
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Selected text
    #[arg(long, conflicts_with = "selection_file")]
    pub selection: Option<String>,

    /// Read the selected text from a file (`-` for stdin)
    #[arg(long)]
    pub selection_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a command from the selected text
    Make {
        /// Command name (prompted for when omitted)
        name: Option<String>,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Run the selected text as inline interpreter source
    Exec {
        #[command(flatten)]
        selection: SelectionArgs,

        /// File to treat as the active document
        #[arg(long)]
        document: Option<PathBuf>,
    },

    /// Run a registered command
    Run {
        /// Command name
        name: String,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Answer to the argument prompt, for non-interactive runs
        #[arg(long)]
        args: Option<String>,

        /// File to treat as the active document
        #[arg(long)]
        document: Option<PathBuf>,
    },

    /// List commands and their script locations
    List,

    /// Remove a command and its files
    Remove {
        /// Command name
        name: String,

        /// Skip confirmation
        #[arg(long, short)]
        force: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Display current settings
    Show,

    /// Write a settings file with defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Change one setting
    Set {
        /// Setting key, e.g. `interpreter`
        key: String,
        /// New value
        value: String,
    },

    /// Print the data file locations
    Path,
}
