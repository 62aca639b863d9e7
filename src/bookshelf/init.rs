use crate::api::{BookshelfApi, CmdMessage};
use crate::config::BookshelfConfig;
use crate::error::Result;
use crate::persistence::Persistence;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const LOCAL_DIR_NAME: &str = ".bookshelf";

pub struct BookshelfContext {
    pub api: BookshelfApi<FileStore>,
    pub config: BookshelfConfig,
    pub data_dir: PathBuf,
}

/// Where books and config live: the explicit directory if given, else the
/// platform data directory, else `.bookshelf` under `cwd`.
pub fn resolve_data_dir(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    ProjectDirs::from("com", "bookshelf", "bookshelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| cwd.join(LOCAL_DIR_NAME))
}

/// Reads the config from `data_dir`, using defaults when it is missing.
///
/// An unreadable or invalid config also falls back to defaults; that case is
/// logged and returned as a warning for the caller to show, since it usually
/// runs before logging is set up.
pub fn load_config(data_dir: &Path) -> (BookshelfConfig, Option<CmdMessage>) {
    match BookshelfConfig::load(data_dir) {
        Ok(config) => (config, None),
        Err(e) => {
            warn!(data_dir = %data_dir.display(), error = %e, "unreadable config, using defaults");
            let message =
                CmdMessage::warning(format!("Config could not be read, using defaults ({})", e));
            (BookshelfConfig::default(), Some(message))
        }
    }
}

pub fn initialize(data_dir: PathBuf, config: BookshelfConfig) -> Result<BookshelfContext> {
    debug!(data_dir = %data_dir.display(), key = %config.storage_key, "opening bookshelf");

    let store = FileStore::new(data_dir.clone());
    let persistence = Persistence::with_key(store, config.storage_key.clone());
    let api = BookshelfApi::open(persistence)?;

    Ok(BookshelfContext {
        api,
        config,
        data_dir,
    })
}
