use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::storage::LocalStore;

const APP_DIR_NAME: &str = "travelnexa-cli";
const STORAGE_DIR_NAME: &str = "storage";

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Storage directory override; defaults to `<config dir>/storage`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_use_stored_catalog")]
    pub use_stored_catalog: bool,
    #[serde(default = "default_recommendation_delay_ms")]
    pub recommendation_delay_ms: u64,
}

fn default_use_stored_catalog() -> bool {
    true
}

fn default_recommendation_delay_ms() -> u64 {
    600
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            use_stored_catalog: default_use_stored_catalog(),
            recommendation_delay_ms: default_recommendation_delay_ms(),
        }
    }
}

/// Names accepted by the `settings` commands
pub const SETTING_NAMES: &[&str] = &["data-dir", "use-stored-catalog", "recommendation-delay-ms"];

impl Settings {
    pub fn get(&self, name: &str) -> Result<String> {
        match name {
            "data-dir" => Ok(self
                .data_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "use-stored-catalog" => Ok(self.use_stored_catalog.to_string()),
            "recommendation-delay-ms" => Ok(self.recommendation_delay_ms.to_string()),
            _ => anyhow::bail!("Unknown setting: {}", name),
        }
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "data-dir" => {
                let value = value.trim();
                self.data_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "use-stored-catalog" => {
                self.use_stored_catalog = value.parse().map_err(|_| {
                    anyhow::anyhow!(
                        "Invalid value for use-stored-catalog: '{}'. Must be 'true' or 'false'.",
                        value
                    )
                })?;
            }
            "recommendation-delay-ms" => {
                let delay: u64 = value.parse().map_err(|_| {
                    anyhow::anyhow!(
                        "Invalid value for recommendation-delay-ms: '{}'. Must be a non-negative integer.",
                        value
                    )
                })?;

                if delay > 10_000 {
                    anyhow::bail!("recommendation-delay-ms must be at most 10000");
                }
                self.recommendation_delay_ms = delay;
            }
            _ => anyhow::bail!("Unknown setting: {}", name),
        }
        Ok(())
    }

    pub fn reset(&mut self, name: &str) -> Result<()> {
        let defaults = Settings::default();
        match name {
            "data-dir" => self.data_dir = defaults.data_dir,
            "use-stored-catalog" => self.use_stored_catalog = defaults.use_stored_catalog,
            "recommendation-delay-ms" => {
                self.recommendation_delay_ms = defaults.recommendation_delay_ms
            }
            _ => anyhow::bail!("Unknown setting: {}", name),
        }
        Ok(())
    }
}

impl Config {
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join(APP_DIR_NAME)
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(format!(".{}", APP_DIR_NAME))
        };

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir)
    }

    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::get_config_dir()?.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        Self::from_toml(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        debug!("Saving config to: {:?}", config_path);

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.settings.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::get_config_dir()?.join(STORAGE_DIR_NAME)),
        }
    }

    pub fn open_store(&self) -> Result<LocalStore> {
        LocalStore::open(self.data_dir()?)
    }

    pub fn update_setting(&mut self, name: &str, value: &str) -> Result<()> {
        info!("Updating setting {} to: {}", name, value);
        self.settings.set(name, value)?;
        self.save()
    }

    pub fn reset_setting(&mut self, name: &str) -> Result<()> {
        info!("Resetting setting {} to default", name);
        self.settings.reset(name)?;
        self.save()
    }

    pub fn reset_all_settings(&mut self) -> Result<()> {
        info!("Resetting all settings to defaults");
        self.settings = Settings::default();
        self.save()
    }
}
