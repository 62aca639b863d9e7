use crate::commands::{CmdMessage, CmdResult};
use crate::config::BookshelfConfig;
use crate::error::{Result, ShelfError};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = BookshelfConfig::load(config_dir)?;

    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let value = match key.as_str() {
                "storage-key" => config.storage_key.clone(),
                "log-level" => config.log_level.clone(),
                other => return Err(unknown_key(other)),
            };
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            match key.as_str() {
                "storage-key" => config.set_storage_key(&value)?,
                "log-level" => config.set_log_level(&value)?,
                other => return Err(unknown_key(other)),
            }
            config.save(config_dir)?;

            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
            Ok(result.with_config(config))
        }
    }
}

fn unknown_key(key: &str) -> ShelfError {
    ShelfError::Config(format!(
        "Unknown config key: {} (expected storage-key or log-level)",
        key
    ))
}
