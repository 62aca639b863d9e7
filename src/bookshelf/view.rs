//! # View Renderer
//!
//! Turns a sequence of books into two shelves, one per completion status.
//! Each render is a full rebuild: the previous [`Shelves`] is discarded and
//! nothing is reused.
//!
//! Cards carry their actions as data ([`BookAction`]). A UI shows them as
//! buttons (or commands) and hands the chosen one back to
//! [`crate::api::BookshelfApi::dispatch`].

use crate::bridge::CollectionObserver;
use crate::model::{Book, BookId};
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BookAction {
    MarkComplete(BookId),
    MarkIncomplete(BookId),
    Remove(BookId),
}

impl BookAction {
    pub fn label(&self) -> &'static str {
        match self {
            BookAction::MarkComplete(_) => "Mark complete",
            BookAction::MarkIncomplete(_) => "Mark incomplete",
            BookAction::Remove(_) => "Delete",
        }
    }
}

impl fmt::Display for BookAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One rendered book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookCard {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
    /// Status toggle first, then delete.
    pub actions: [BookAction; 2],
}

impl BookCard {
    pub fn from_book(book: &Book) -> Self {
        let toggle = if book.is_complete {
            BookAction::MarkIncomplete(book.id)
        } else {
            BookAction::MarkComplete(book.id)
        };
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year,
            actions: [toggle, BookAction::Remove(book.id)],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Shelves {
    pub incomplete: Vec<BookCard>,
    pub complete: Vec<BookCard>,
}

impl Shelves {
    pub fn build(books: &[Book]) -> Self {
        let mut shelves = Shelves::default();
        for book in books {
            let card = BookCard::from_book(book);
            if book.is_complete {
                shelves.complete.push(card);
            } else {
                shelves.incomplete.push(card);
            }
        }
        shelves
    }

    pub fn len(&self) -> usize {
        self.incomplete.len() + self.complete.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle to the renderer's output, readable after the renderer has been
/// handed to the bridge.
#[derive(Debug, Clone, Default)]
pub struct ShelvesHandle {
    inner: Rc<RefCell<Rendered>>,
}

#[derive(Debug, Default)]
struct Rendered {
    shelves: Shelves,
    renders: usize,
}

impl ShelvesHandle {
    pub fn shelves(&self) -> Shelves {
        self.inner.borrow().shelves.clone()
    }

    /// How many times the view was rebuilt.
    pub fn renders(&self) -> usize {
        self.inner.borrow().renders
    }
}

/// The bridge's subscriber: rebuilds [`Shelves`] on every notification.
#[derive(Debug, Default)]
pub struct ViewRenderer {
    output: ShelvesHandle,
}

impl ViewRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> ShelvesHandle {
        self.output.clone()
    }
}

impl CollectionObserver for ViewRenderer {
    fn on_collection_changed(&mut self, books: &[Book]) {
        let mut rendered = self.output.inner.borrow_mut();
        rendered.shelves = Shelves::build(books);
        rendered.renders += 1;
    }
}
