//! Settings management commands

use crate::console::CLIConsole;
use colored::*;
use scriptdeck_core::error::{DeckError, DeckResult};
use scriptdeck_core::{DeckLocations, Settings, SettingsStore};

/// Show current settings
pub async fn show(locations: &DeckLocations, console: &CLIConsole) -> DeckResult<()> {
    let store = SettingsStore::load(locations).await?;
    console.print_header("Settings");
    console.info(&format!("Loaded settings from: {}", store.path().display()));

    let persisted = to_fields(store.persisted())?;
    let effective = to_fields(store.settings())?;
    for (key, value) in &effective {
        let overridden = persisted.get(key) != Some(value);
        let shown = display_value(value);
        if overridden {
            println!(
                "  {}: {} {}",
                key.bold(),
                shown.yellow(),
                "(environment override)".dimmed()
            );
        } else {
            println!("  {}: {}", key.bold(), shown);
        }
    }
    Ok(())
}

/// Write a settings file with defaults
pub async fn init(locations: &DeckLocations, console: &CLIConsole, force: bool) -> DeckResult<()> {
    console.print_header("Settings Initialization");

    let path = &locations.settings_file;
    if tokio::fs::try_exists(path).await? && !force {
        console.error(&format!("Settings file already exists: {}", path.display()));
        console.warn("Use --force to overwrite");
        return Err(DeckError::config("Settings file already exists"));
    }

    SettingsStore::from_parts(path, Settings::default_for(locations))
        .save()
        .await?;
    console.success(&format!("Created settings file: {}", path.display()));
    Ok(())
}

/// Change one setting by key
pub async fn set(
    locations: &DeckLocations,
    console: &CLIConsole,
    key: &str,
    value: &str,
) -> DeckResult<()> {
    let mut store = SettingsStore::load(locations).await?;

    let mut next = store.persisted().clone();
    if let Err(message) = next.set_field(key, value) {
        console.error(&message);
        return Err(DeckError::config(message));
    }

    store.update(|settings| *settings = next).await?;
    console.success(&format!("Set {} = {}", key, value));
    Ok(())
}

/// Print the data file locations
pub fn path(locations: &DeckLocations) {
    println!("data_dir:  {}", locations.data_dir.display());
    println!("settings:  {}", locations.settings_file.display());
    println!("registry:  {}", locations.registry_file.display());
}

fn to_fields(settings: &Settings) -> DeckResult<serde_json::Map<String, serde_json::Value>> {
    match serde_json::to_value(settings)? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(DeckError::config(format!(
            "Settings serialized to {} instead of an object",
            other
        ))),
    }
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
