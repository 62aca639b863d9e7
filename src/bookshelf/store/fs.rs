use super::KeyValueStore;
use crate::error::{Result, ShelfError};
use std::fs;
use std::path::PathBuf;

const VALUE_EXT: &str = ".json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}{}", key, VALUE_EXT))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn is_available(&self) -> bool {
        self.ensure_dir().is_ok() && self.root.is_dir()
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ShelfError::Io)?;
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        // Write to a sibling file first so a crash never leaves half a collection.
        let path = self.value_path(key);
        let tmp = self.root.join(format!(".{}{}.tmp", key, VALUE_EXT));
        fs::write(&tmp, value).map_err(ShelfError::Io)?;
        fs::rename(&tmp, &path).map_err(ShelfError::Io)?;
        Ok(())
    }
}
