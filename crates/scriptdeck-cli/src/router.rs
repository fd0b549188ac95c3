//! Command routing logic for CLI

use crate::args::{Cli, Commands, ConfigAction};
use crate::commands;
use crate::console::CLIConsole;
use scriptdeck_core::DeckLocations;
use scriptdeck_core::error::DeckResult;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> DeckResult<()> {
    let locations = match &cli.data_dir {
        Some(dir) => DeckLocations::from_data_dir(dir),
        None => DeckLocations::discover(),
    };
    let console = CLIConsole::new(cli.verbose);
    tracing::debug!("Using data directory {:?}", locations.data_dir);

    match cli.command {
        Commands::Make { name, selection } => {
            commands::make::make(locations, console, name, selection).await
        }
        Commands::Exec {
            selection,
            document,
        } => commands::run::exec(locations, console, selection, document).await,
        Commands::Run {
            name,
            selection,
            args,
            document,
        } => {
            commands::run::run(
                locations,
                console,
                commands::run::RunArgs {
                    name,
                    selection,
                    args,
                    document,
                },
            )
            .await
        }
        Commands::List => commands::manage::list(locations, console).await,
        Commands::Remove { name, force } => {
            commands::manage::remove(locations, console, &name, force).await
        }
        Commands::Config { action } => route_config(locations, console, action).await,
    }
}

async fn route_config(
    locations: DeckLocations,
    console: CLIConsole,
    action: ConfigAction,
) -> DeckResult<()> {
    match action {
        ConfigAction::Show => commands::config::show(&locations, &console).await,
        ConfigAction::Init { force } => commands::config::init(&locations, &console, force).await,
        ConfigAction::Set { key, value } => {
            commands::config::set(&locations, &console, &key, &value).await
        }
        ConfigAction::Path => {
            commands::config::path(&locations);
            Ok(())
        }
    }
}
