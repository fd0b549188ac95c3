//! CLI commands

pub mod config;
pub mod make;
pub mod manage;
pub mod run;

use crate::console::CLIConsole;
use crate::host::TerminalHost;
use scriptdeck_core::error::DeckResult;
use scriptdeck_core::{Deck, DeckLocations};
use std::sync::Arc;

/// Load a deck around a terminal host
pub(crate) async fn open_deck(locations: DeckLocations, host: TerminalHost) -> DeckResult<Deck> {
    Deck::load(locations, Arc::new(host)).await
}

/// Host with nothing selected, for commands that never read the selection
pub(crate) fn plain_host(console: CLIConsole) -> TerminalHost {
    TerminalHost::new(console)
}
