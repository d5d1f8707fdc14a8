use anyhow::{Context, Result};
use colored::*;
use is_terminal::IsTerminal;
use log::info;

use super::{catalog_store, log_source};
use crate::catalog;
use crate::cli::commands::search::SearchCommands;
use crate::config::Config;
use crate::places::sample_locations;
use crate::search::{SearchCriteria, search};
use crate::ui::display::{card_line, print_cards, print_detail};
use crate::ui::{optional_text_input, select};

pub async fn search_command(args: SearchCommands) -> Result<()> {
    let no_filters = args.country.is_none() && args.city.is_none() && args.name.is_none();
    let interactive = std::io::stdin().is_terminal() && !args.json;

    let criteria = if no_filters && interactive {
        prompt_criteria()?
    } else {
        SearchCriteria::new(
            args.country.unwrap_or_default().trim(),
            args.city.unwrap_or_default().trim(),
            args.name.unwrap_or_default().trim(),
        )
    };
    info!("Searching with: {:?}", criteria);

    let config = Config::load()?;
    let locations = match catalog_store(&config)? {
        Some(store) => {
            let (locations, source) = catalog::search_locations(&store);
            log_source("places", source);
            locations
        }
        None => sample_locations(),
    };

    let results = search(&locations, &criteria);
    info!("Search matched {} of {} locations", results.len(), locations.len());

    if args.json {
        let json = serde_json::to_string_pretty(&results)
            .context("Failed to serialize search results")?;
        println!("{}", json);
        return Ok(());
    }

    let found = format!("{} locations found", results.len());
    println!("{} ({})", "Search Results".bold(), found.as_str().dimmed());
    println!();

    if results.is_empty() {
        println!("No locations found matching your search criteria.");
        println!("Try adjusting your search terms or remove some filters.");
        return Ok(());
    }

    print_cards(&results);
    println!();

    if interactive {
        browse_details(&results)?;
    }

    Ok(())
}

fn prompt_criteria() -> Result<SearchCriteria> {
    println!("{}", "Find Tourist Locations".bold());
    println!("{}", "Leave a field empty to match everything.".dimmed());

    let country = optional_text_input("Country")?;
    let city = optional_text_input("City")?;
    let name = optional_text_input("Place name")?;

    Ok(SearchCriteria::new(country, city, name))
}

fn browse_details<D: crate::places::Destination>(results: &[D]) -> Result<()> {
    let mut items: Vec<String> = results.iter().map(card_line).collect();
    items.push("Done".to_string());
    let done = items.len() - 1;

    let mut default = 0;
    loop {
        let index = select("View location details", &items, default)?;
        if index == done {
            return Ok(());
        }
        print_detail(&results[index]);
        default = index;
    }
}
