use clap::{Args, Subcommand};

#[derive(Args)]
pub struct CatalogCommands {
    #[command(subcommand)]
    pub command: CatalogSubcommands,
}

#[derive(Subcommand)]
pub enum CatalogSubcommands {
    /// Show where questions and places are loaded from
    Show,
    /// Write the built-in questions and places to storage for editing
    Seed {
        /// Overwrite existing stored records without confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Remove stored questions and places, reverting to the built-in set
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}
