use super::KeyValueStore;
use crate::error::{Result, ShelfError};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    available: bool,
    writes: usize,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
            available: true,
            writes: 0,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that reports no persistence capability, like a browser
    /// without `localStorage`.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Number of successful `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for InMemoryStore {
    fn is_available(&self) -> bool {
        self.available
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        if !self.available {
            return Err(ShelfError::StorageUnavailable);
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if !self.available {
            return Err(ShelfError::StorageUnavailable);
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Book, BookId, NewBook};
    use crate::persistence::DEFAULT_STORAGE_KEY;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        books: Vec<Book>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                books: Vec::new(),
            }
        }

        pub fn with_book(mut self, id: i64, title: &str, is_complete: bool) -> Self {
            let mut book = Book::new(BookId(id), NewBook::new(title, "Author", 2000).unwrap());
            book.is_complete = is_complete;
            self.books.push(book);
            self
        }

        /// Writes the accumulated books under the default key and returns the store.
        pub fn build(self) -> InMemoryStore {
            let json = serde_json::to_string(&self.books).unwrap();
            self.store.with_value(DEFAULT_STORAGE_KEY, &json)
        }
    }
}
