pub mod catalog;
pub mod questionnaire;
pub mod search;
pub mod settings;

use anyhow::Result;
use log::info;

use crate::catalog::Source;
use crate::config::Config;
use crate::storage::LocalStore;

/// Opens the configured store when stored records are enabled
pub(crate) fn catalog_store(config: &Config) -> Result<Option<LocalStore>> {
    if !config.get_settings().use_stored_catalog {
        info!("Stored catalog disabled, using built-in data");
        return Ok(None);
    }
    Ok(Some(config.open_store()?))
}

pub(crate) fn log_source(what: &str, source: Source) {
    info!("Loaded {} from {} catalog", what, source);
}
