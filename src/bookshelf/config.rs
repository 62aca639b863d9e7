use crate::error::{Result, ShelfError};
use crate::persistence::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
/// Keys whose value file would land on the config file.
const RESERVED_STORAGE_KEYS: &[&str] = &["config"];

/// Configuration for the bookshelf, stored in `<data_dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookshelfConfig {
    /// Key the collection is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Log level used when neither BOOKSHELF_LOG nor RUST_LOG is set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for BookshelfConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            log_level: default_log_level(),
        }
    }
}

impl BookshelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: BookshelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        validate_storage_key(&config.storage_key)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn set_storage_key(&mut self, key: &str) -> Result<()> {
        validate_storage_key(key)?;
        self.storage_key = key.to_string();
        Ok(())
    }

    pub fn set_log_level(&mut self, level: &str) -> Result<()> {
        let level = level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ShelfError::Config(format!(
                "Invalid log level: {} (expected one of {})",
                level,
                LOG_LEVELS.join(", ")
            )));
        }
        self.log_level = level;
        Ok(())
    }
}

/// Storage keys become file names next to `config.json`, so keep them to a
/// safe alphabet and away from the config file itself.
pub fn validate_storage_key(key: &str) -> Result<()> {
    let safe = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !safe {
        return Err(ShelfError::Config(format!("Invalid storage key: {}", key)));
    }
    // Case-insensitive filesystems map CONFIG.json onto config.json.
    if RESERVED_STORAGE_KEYS
        .iter()
        .any(|reserved| key.eq_ignore_ascii_case(reserved))
    {
        return Err(ShelfError::Config(format!(
            "Storage key {} is reserved for the config file",
            key
        )));
    }
    Ok(())
}
