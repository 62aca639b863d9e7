use crate::config::BookshelfConfig;
use crate::model::Book;

pub mod add;
pub mod completion;
pub mod config;
pub mod remove;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Books created, changed or removed by the command.
    pub affected_books: Vec<Book>,
    /// Books the command wants shown (list, search).
    pub listed_books: Vec<Book>,
    pub config: Option<BookshelfConfig>,
    pub messages: Vec<CmdMessage>,
    /// Whether the collection was touched and must be persisted.
    pub mutated: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_config(mut self, config: BookshelfConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn mutated(mut self) -> Self {
        self.mutated = true;
        self
    }
}
