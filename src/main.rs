use anyhow::Result;
use clap::Parser;
use log::info;

use travelnexa_cli::cli::{Cli, Commands};
use travelnexa_cli::commands::{catalog, questionnaire, search, settings};

#[tokio::main]
async fn main() -> Result<()> {
    // Log to file (truncated on each run) so prompts stay clean
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("travelnexa-cli.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting travelnexa-cli");

    match cli.command {
        Commands::Questionnaire(args) => questionnaire::questionnaire_command(args).await,
        Commands::Search(args) => search::search_command(args).await,
        Commands::Catalog(args) => catalog::catalog_command(args).await,
        Commands::Settings(args) => settings::settings_command(args).await,
    }
}
