//! # Persistence Adapter
//!
//! Mirrors the whole collection into a [`KeyValueStore`] under one fixed key,
//! as a JSON array of book records. The in-memory collection stays
//! authoritative: the stored copy is written after every mutation and read
//! once when the bookshelf opens.
//!
//! - Missing key: the collection starts empty.
//! - Store unavailable: saves are skipped with a warning.
//! - Unparseable data: [`ShelfError::CorruptStorage`], left to the caller to
//!   recover from.

use crate::error::{Result, ShelfError};
use crate::model::Book;
use crate::store::KeyValueStore;
use tracing::{debug, warn};

/// Key the web version of the bookshelf used in `localStorage`.
pub const DEFAULT_STORAGE_KEY: &str = "BOOK_APPS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The store had no persistence capability; nothing was written.
    Skipped,
}

pub struct Persistence<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_available(&self) -> bool {
        self.store.is_available()
    }

    pub fn save(&mut self, books: &[Book]) -> Result<SaveOutcome> {
        if !self.store.is_available() {
            warn!(key = %self.key, "storage unavailable, skipping save");
            return Ok(SaveOutcome::Skipped);
        }

        let serialized = serde_json::to_string(books).map_err(ShelfError::Serialization)?;
        self.store.set(&self.key, &serialized)?;
        debug!(key = %self.key, books = books.len(), "collection saved");
        Ok(SaveOutcome::Saved)
    }

    pub fn load(&self) -> Result<Vec<Book>> {
        let Some(serialized) = self.store.get(&self.key)? else {
            debug!(key = %self.key, "no stored collection, starting empty");
            return Ok(Vec::new());
        };

        // A stored `null` or an empty value means no books, not corruption.
        if serialized.trim().is_empty() || serialized.trim() == "null" {
            return Ok(Vec::new());
        }

        let books: Vec<Book> = serde_json::from_str(&serialized)
            .map_err(|e| ShelfError::CorruptStorage(e.to_string()))?;
        debug!(key = %self.key, books = books.len(), "collection loaded");
        Ok(books)
    }
}
