//! `scriptdeck list` and `scriptdeck remove`

use super::{open_deck, plain_host};
use crate::console::CLIConsole;
use colored::*;
use dialoguer::{Confirm, theme::ColorfulTheme};
use scriptdeck_core::error::DeckResult;
use scriptdeck_core::{DeckLocations, EntryKind};

/// List built-in and registered commands
pub async fn list(locations: DeckLocations, console: CLIConsole) -> DeckResult<()> {
    let deck = open_deck(locations, plain_host(console)).await?;

    console.print_header("Commands");
    for command in deck.list_commands() {
        match &command.entry {
            None => println!(
                "  {} {}",
                command.id.cyan().bold(),
                format!("{} (built-in)", command.title).dimmed()
            ),
            Some(entry) => {
                let kind = match entry.kind() {
                    EntryKind::Module => "module",
                    EntryKind::Direct => "direct",
                };
                println!(
                    "  {} {} {}",
                    command.id.green().bold(),
                    entry.location.display(),
                    format!("[{}]", kind).dimmed()
                );
            }
        }
    }

    if deck.binder().is_empty() {
        println!();
        println!("{}", "No commands registered yet.".dimmed());
    }
    Ok(())
}

/// Remove a command, confirming unless `force` is set
pub async fn remove(
    locations: DeckLocations,
    console: CLIConsole,
    name: &str,
    force: bool,
) -> DeckResult<()> {
    let mut deck = open_deck(locations, plain_host(console)).await?;

    if !force {
        if let Some(entry) = deck.binder().get(name).and_then(|c| c.entry.as_ref()) {
            println!("  Location: {}", entry.location.display());

            let confirm = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Are you sure you want to remove '{}'?", name))
                .default(false)
                .interact()
                .unwrap_or(false);

            if !confirm {
                println!("{}", "Removal cancelled.".dimmed());
                return Ok(());
            }
        }
    }

    deck.remove_command(name).await?;
    Ok(())
}
