use crate::config::Config;
use anyhow::Result;
use log::info;

/// Get the value of a specific setting
///
/// # Arguments
/// * `name` - Setting name
///
/// # Returns
/// * `Ok(())` - Setting value displayed successfully
/// * `Err(anyhow::Error)` - Configuration error or unknown setting
pub async fn get_command(name: String) -> Result<()> {
    info!("Getting setting: {}", name);

    let config = Config::load()?;
    println!("{}", config.get_settings().get(&name)?);

    Ok(())
}
