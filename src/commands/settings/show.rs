use crate::config::Config;
use anyhow::Result;
use log::info;

/// Show all current settings
///
/// # Returns
/// * `Ok(())` - Settings displayed successfully
/// * `Err(anyhow::Error)` - Configuration error
pub async fn show_command() -> Result<()> {
    info!("Showing all settings");

    let config = Config::load()?;
    let settings = config.get_settings();

    println!("Current Settings:");
    println!("{}", "=".repeat(20));
    println!();

    println!("Storage Settings:");
    println!("  data-dir: {}", config.data_dir()?.display());
    println!("  use-stored-catalog: {}", settings.use_stored_catalog);
    println!();

    println!("Questionnaire Settings:");
    println!("  recommendation-delay-ms: {}", settings.recommendation_delay_ms);

    println!();
    println!("Use 'settings set <name> <value>' to change a setting");
    println!("Use 'settings reset <name>' to reset a setting to default");

    Ok(())
}
