use anyhow::Result;
use log::info;
use crate::config::Config;

/// Set the value of a specific setting
///
/// # Arguments
/// * `name` - Setting name
/// * `value` - Setting value
///
/// # Returns
/// * `Ok(())` - Setting updated successfully
/// * `Err(anyhow::Error)` - Configuration error or invalid setting/value
pub async fn set_command(name: String, value: String) -> Result<()> {
    info!("Setting {} to {}", name, value);

    let mut config = Config::load()?;
    config.update_setting(&name, &value)?;

    if name == "data-dir" && config.get_settings().data_dir.is_none() {
        println!("Cleared data-dir; storage will use {}", config.data_dir()?.display());
    } else {
        println!("Set {} to {}", name, config.get_settings().get(&name)?);
    }

    Ok(())
}
