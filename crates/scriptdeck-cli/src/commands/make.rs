//! `scriptdeck make`

use super::open_deck;
use crate::args::SelectionArgs;
use crate::console::CLIConsole;
use crate::host::TerminalHost;
use scriptdeck_core::DeckLocations;
use scriptdeck_core::error::DeckResult;

/// Register the selection as a new command
pub async fn make(
    locations: DeckLocations,
    console: CLIConsole,
    name: Option<String>,
    selection: SelectionArgs,
) -> DeckResult<()> {
    let text = selection.read().await?;
    let host = TerminalHost::new(console).with_selection(text);
    let mut deck = open_deck(locations, host).await?;

    let entry = deck.make_command(name).await?;
    console.info(&format!("Script: {}", entry.location.display()));
    console.info(&format!("Run it with: scriptdeck run {}", entry.name));
    Ok(())
}
