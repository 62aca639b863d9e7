use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identity of a book. Timestamp-shaped (milliseconds) but only
/// guaranteed to be unique and increasing, see [`crate::collection::IdGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub i64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map(BookId)
            .map_err(|_| ShelfError::Api(format!("Invalid book id: {}", s)))
    }
}

// Field names match the records the bookshelf web page wrote to localStorage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// `None` for older records saved with a `null` (or no) year.
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(rename = "isComplete")]
    pub is_complete: bool,
}

impl Book {
    pub fn new(id: BookId, book: NewBook) -> Self {
        Self {
            id,
            title: book.title,
            author: book.author,
            year: Some(book.year),
            is_complete: false,
        }
    }
}

/// Validated input for adding a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ShelfError::Api("Title cannot be empty".into()));
        }
        Ok(Self {
            title,
            author: author.into(),
            year,
        })
    }

    /// Builds a book from raw form input, where the year is still text.
    pub fn parse(title: impl Into<String>, author: impl Into<String>, year: &str) -> Result<Self> {
        let year = parse_year(year)?;
        Self::new(title, author, year)
    }
}

pub fn parse_year(input: &str) -> Result<i32> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| ShelfError::InvalidYear(input.to_string()))
}
