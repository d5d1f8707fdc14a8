use anyhow::Result;
use log::info;

use crate::catalog::{self, Source};
use crate::cli::commands::catalog::{CatalogCommands, CatalogSubcommands};
use crate::config::Config;
use crate::places::sample_locations;
use crate::questionnaire::default_questions;
use crate::storage::{PLACES_KEY, QUESTIONS_KEY};
use crate::ui::prompts::confirm;

pub async fn catalog_command(args: CatalogCommands) -> Result<()> {
    match args.command {
        CatalogSubcommands::Show => show_command().await,
        CatalogSubcommands::Seed { force } => seed_command(force).await,
        CatalogSubcommands::Reset { force } => reset_command(force).await,
    }
}

/// Show which catalog the questionnaire and search will use
pub async fn show_command() -> Result<()> {
    info!("Showing catalog");

    let config = Config::load()?;
    let store = config.open_store()?;
    let use_stored = config.get_settings().use_stored_catalog;

    let (questions, question_source) = if use_stored {
        catalog::questions(&store)
    } else {
        (default_questions(), Source::BuiltIn)
    };
    let (locations, place_source) = if use_stored {
        catalog::search_locations(&store)
    } else {
        (sample_locations(), Source::BuiltIn)
    };

    println!("Catalog");
    println!("{}", "=".repeat(20));
    println!();
    println!("Storage directory: {}", store.dir().display());
    println!("Stored catalog enabled: {}", use_stored);
    println!();

    println!("Questions ({}): {}", question_source, questions.len());
    for question in &questions {
        println!("  {} {} [{} options]", question.id, question.text, question.options.len());
    }
    println!();

    println!("Places ({}): {}", place_source, locations.len());
    for location in &locations {
        println!("  {} {} ({}, {})", location.id, location.name, location.city, location.country);
    }

    let keys = store.keys()?;
    if !keys.is_empty() {
        println!();
        println!("Stored keys: {}", keys.join(", "));
    }

    Ok(())
}

/// Write the built-in catalog to storage
pub async fn seed_command(force: bool) -> Result<()> {
    info!("Seeding catalog");

    let config = Config::load()?;
    let store = config.open_store()?;

    let existing = store.contains(QUESTIONS_KEY)? || store.contains(PLACES_KEY)?;
    if existing && !force && !confirm("Stored questions or places exist. Overwrite them?", false)? {
        println!("Operation cancelled.");
        return Ok(());
    }

    catalog::seed(&store)?;
    println!("✓ Stored built-in questions under '{}'", QUESTIONS_KEY);
    println!("✓ Stored sample places under '{}'", PLACES_KEY);
    println!("Edit the JSON files in {} to customise them.", store.dir().display());

    Ok(())
}

/// Remove stored records
pub async fn reset_command(force: bool) -> Result<()> {
    info!("Resetting stored catalog");

    if !force && !confirm("Remove stored questions and places?", false)? {
        println!("Operation cancelled.");
        return Ok(());
    }

    let config = Config::load()?;
    let store = config.open_store()?;
    let removed = catalog::reset(&store)?;

    if removed == 0 {
        println!("Nothing stored; already using the built-in catalog.");
    } else {
        println!("✓ Removed {} stored key(s); using the built-in catalog.", removed);
    }

    Ok(())
}
