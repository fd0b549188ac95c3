//! `scriptdeck run` and `scriptdeck exec`

use super::open_deck;
use crate::args::SelectionArgs;
use crate::console::CLIConsole;
use crate::host::TerminalHost;
use scriptdeck_core::error::DeckResult;
use scriptdeck_core::{DeckLocations, InvokeOutcome};
use std::path::PathBuf;

/// Arguments for a registered-command run
#[derive(Debug, Clone)]
pub struct RunArgs {
    pub name: String,
    pub selection: SelectionArgs,
    pub args: Option<String>,
    pub document: Option<PathBuf>,
}

/// Run a registered command
pub async fn run(locations: DeckLocations, console: CLIConsole, args: RunArgs) -> DeckResult<()> {
    let text = args.selection.read().await?;
    let host = TerminalHost::new(console)
        .with_selection(text)
        .with_preset_answer(args.args)
        .with_document(args.document);
    let deck = open_deck(locations, host).await?;

    let outcome = deck.invoke(&args.name).await?;
    report_outcome(&console, &outcome);
    Ok(())
}

/// Run the selection as inline source
pub async fn exec(
    locations: DeckLocations,
    console: CLIConsole,
    selection: SelectionArgs,
    document: Option<PathBuf>,
) -> DeckResult<()> {
    let text = selection.read().await?;
    let host = TerminalHost::new(console)
        .with_selection(text)
        .with_document(document);
    let deck = open_deck(locations, host).await?;

    let outcome = deck.run_selected_text().await?;
    report_outcome(&console, &outcome);
    Ok(())
}

fn report_outcome(console: &CLIConsole, outcome: &InvokeOutcome) {
    match outcome {
        InvokeOutcome::Completed { report, summary } => {
            if report.failed() {
                console.warn("Script failed");
            }
            for sink in summary.delivered() {
                console.info(&format!("Output sent to {}", sink));
            }
        }
        InvokeOutcome::Skipped(reason) => {
            console.info(&format!("Skipped: {}", reason.notice()));
        }
        InvokeOutcome::Cancelled => console.warn("Cancelled"),
    }
}
