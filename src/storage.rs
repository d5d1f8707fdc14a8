//! Key-value JSON storage
//!
//! Each key is stored as `<dir>/<key>.json`. Values are whatever `serde_json`
//! produces for the stored type; there is no schema versioning.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub const PLACES_KEY: &str = "travelnexa_places";
pub const QUESTIONS_KEY: &str = "travelnexa_questions";

const FILE_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Opens the store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();

        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create storage directory: {:?}", dir))?;
            info!("Created storage directory: {:?}", dir);
        }

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            debug!("Store key '{}' not set", key);
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read store key '{}' from {:?}", key, path))?;
        let value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse store key '{}'", key))?;

        Ok(Some(value))
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path_for(key)?;
        let content = serde_json::to_string(value)
            .with_context(|| format!("Failed to serialize store key '{}'", key))?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write store key '{}' to {:?}", key, path))?;

        debug!("Stored key '{}'", key);
        Ok(())
    }

    /// Removes a key; returns whether it existed
    pub fn remove(&self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove store key '{}' at {:?}", key, path))?;
        info!("Removed store key '{}'", key);
        Ok(true)
    }

    pub fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.path_for(key)?.exists())
    }

    /// All keys currently set, sorted
    pub fn keys(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to list storage directory: {:?}", self.dir))?;

        let mut keys = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if is_valid_key(stem) {
                    keys.push(stem.to_string());
                }
            }
        }

        keys.sort();
        Ok(keys)
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if !is_valid_key(key) {
            anyhow::bail!(
                "Invalid store key '{}': only letters, digits, '_' and '-' are allowed",
                key
            );
        }
        Ok(self.dir.join(format!("{}.{}", key, FILE_EXTENSION)))
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn temp_store() -> LocalStore {
        let dir = std::env::temp_dir().join(format!("travelnexa-store-{}", uuid::Uuid::new_v4()));
        LocalStore::open(dir).unwrap()
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = temp_store();
        let value: Option<Vec<String>> = store.get("nothing_here").unwrap();
        assert!(value.is_none());
        assert!(!store.contains("nothing_here").unwrap());
    }

    #[test]
    fn test_set_get_remove() {
        let store = temp_store();
        let mut value = HashMap::new();
        value.insert("q1".to_string(), "beach".to_string());

        store.set("answers", &value).unwrap();
        let loaded: Option<HashMap<String, String>> = store.get("answers").unwrap();
        assert_eq!(loaded, Some(value));
        assert_eq!(store.keys().unwrap(), vec!["answers".to_string()]);

        assert!(store.remove("answers").unwrap());
        assert!(!store.remove("answers").unwrap());
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let store = temp_store();
        assert!(store.set("../escape", &1).is_err());
        assert!(store.set("", &1).is_err());
        assert!(store.get::<i32>("a/b").is_err());
    }

    #[test]
    fn test_corrupt_value_is_error() {
        let store = temp_store();
        fs::write(store.dir().join("broken.json"), "{not json").unwrap();
        assert!(store.get::<Vec<String>>("broken").is_err());
    }
}
