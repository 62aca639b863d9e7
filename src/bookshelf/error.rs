use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Stored data exists but cannot be read back as a book list.
    #[error("Stored bookshelf data is corrupt: {0}")]
    CorruptStorage(String),

    #[error("Persistent storage is not available")]
    StorageUnavailable,

    #[error("No book ids left after {0}")]
    IdsExhausted(i64),

    #[error("Invalid year: {0}")]
    InvalidYear(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
