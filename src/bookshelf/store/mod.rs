//! # Storage Layer
//!
//! Persistence is modelled as a plain string-keyed store with get/set, the
//! same capability a browser's `localStorage` offers. The [`KeyValueStore`]
//! trait lets the rest of the crate stay independent of where bytes land.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - One file per key: `<data_dir>/<key>.json`
//!   - Unavailable when the data directory cannot be created
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can be built unavailable to exercise the degraded path
//!
//! ## Storage Format
//!
//! ```text
//! <data_dir>/
//! ├── BOOK_APPS.json      # The whole collection (JSON array)
//! └── config.json         # Configuration
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract string-keyed persistent store.
pub trait KeyValueStore {
    /// Whether the host can persist anything at all. When this is false,
    /// callers skip writes and keep working in memory.
    fn is_available(&self) -> bool;

    /// Read the value under `key`, `None` when it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
