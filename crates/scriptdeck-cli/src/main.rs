//! Scriptdeck CLI application
//!
//! Turns text into named commands and runs them from the terminal.
//!
//! ```bash
//! echo 'print(1+1)' | scriptdeck make addone --selection-file -
//! scriptdeck run addone
//! scriptdeck list
//! ```
//!
//! Output of a run goes to stdout; notices and logs go to stderr. Set
//! `RUST_LOG` to control log filtering, or pass `--verbose` for debug logs.

mod args;
mod commands;
mod console;
mod host;
mod router;

use args::Cli;
use clap::Parser;
use scriptdeck_core::error::DeckResult;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> DeckResult<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise --verbose selects debug
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    router::route(cli).await
}
