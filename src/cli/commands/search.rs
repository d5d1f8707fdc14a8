use clap::Args;

#[derive(Args)]
pub struct SearchCommands {
    /// Country to match (case-insensitive, partial)
    #[arg(long)]
    pub country: Option<String>,
    /// City to match (case-insensitive, partial)
    #[arg(long)]
    pub city: Option<String>,
    /// Place name to match (case-insensitive, partial)
    #[arg(long)]
    pub name: Option<String>,
    /// Print matches as JSON
    #[arg(long)]
    pub json: bool,
}
