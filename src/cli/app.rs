use super::commands::catalog::CatalogCommands;
use super::commands::questionnaire::QuestionnaireCommands;
use super::commands::search::SearchCommands;
use super::commands::settings::SettingsCommands;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "travelnexa-cli")]
#[command(about = "Find your next travel destination from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a short preference questionnaire and get destination recommendations
    Questionnaire(QuestionnaireCommands),
    /// Search tourist locations by country, city or name
    Search(SearchCommands),
    /// Manage the stored questions and places
    Catalog(CatalogCommands),
    /// Application settings management
    Settings(SettingsCommands),
}
