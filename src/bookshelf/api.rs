//! # API Facade
//!
//! [`BookshelfApi`] is the controller every UI talks to. It owns the
//! [`Collection`], the [`Persistence`] adapter and the [`RenderBridge`], and
//! runs each operation in the same order:
//!
//! ```text
//! command (mutates Collection) → Persistence::save → RenderBridge::notify
//! ```
//!
//! Search skips the first two steps and notifies with the filtered books.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O to the user**: No stdout, stderr, or formatting
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `BookshelfApi<FileStore>`
//! - Testing: `BookshelfApi<InMemoryStore>`

use crate::bridge::{CollectionObserver, RenderBridge};
use crate::collection::Collection;
use crate::commands;
use crate::error::{Result, ShelfError};
use crate::model::{Book, BookId, NewBook};
use crate::persistence::{Persistence, SaveOutcome};
use crate::store::KeyValueStore;
use crate::view::BookAction;
use tracing::warn;

pub struct BookshelfApi<S: KeyValueStore> {
    collection: Collection,
    persistence: Persistence<S>,
    bridge: RenderBridge,
    startup_messages: Vec<CmdMessage>,
}

impl<S: KeyValueStore> BookshelfApi<S> {
    /// Loads the stored collection once.
    ///
    /// Corrupt data is discarded and the shelf starts empty; an unavailable
    /// store also starts empty. Both leave a warning in
    /// [`startup_messages`](Self::startup_messages).
    pub fn open(persistence: Persistence<S>) -> Result<Self> {
        let mut startup_messages = Vec::new();

        let books = if !persistence.is_available() {
            warn!("storage unavailable, books will only be kept in memory");
            startup_messages.push(CmdMessage::warning(
                "Storage is unavailable; changes will not be saved",
            ));
            Vec::new()
        } else {
            match persistence.load() {
                Ok(books) => books,
                Err(ShelfError::CorruptStorage(reason)) => {
                    warn!(key = %persistence.key(), %reason, "discarding corrupt stored collection");
                    startup_messages.push(CmdMessage::warning(format!(
                        "Stored books could not be read and were discarded ({})",
                        reason
                    )));
                    Vec::new()
                }
                Err(e) => return Err(e),
            }
        };

        Ok(Self {
            collection: Collection::from_books(books),
            persistence,
            bridge: RenderBridge::new(),
            startup_messages,
        })
    }

    pub fn startup_messages(&self) -> &[CmdMessage] {
        &self.startup_messages
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn books(&self) -> &[Book] {
        self.collection.books()
    }

    pub fn find_by_id(&self, id: BookId) -> Option<&Book> {
        self.collection.find_by_id(id)
    }

    pub fn subscribe(&mut self, observer: Box<dyn CollectionObserver>) {
        self.bridge.subscribe(observer);
    }

    /// Requests a render of the full collection.
    pub fn render(&mut self) {
        self.bridge.notify(self.collection.books());
    }

    pub fn add_book(&mut self, book: NewBook) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.collection, book)?;
        self.commit(result)
    }

    pub fn mark_complete(&mut self, ids: &[BookId]) -> Result<CmdResult> {
        let result = commands::completion::mark_complete(&mut self.collection, ids);
        self.commit(result)
    }

    pub fn mark_incomplete(&mut self, ids: &[BookId]) -> Result<CmdResult> {
        let result = commands::completion::mark_incomplete(&mut self.collection, ids);
        self.commit(result)
    }

    pub fn remove_books(&mut self, ids: &[BookId]) -> Result<CmdResult> {
        let result = commands::remove::run(&mut self.collection, ids);
        self.commit(result)
    }

    /// Renders the books whose title contains `query`. Never persists.
    pub fn search(&mut self, query: &str) -> CmdResult {
        let result = commands::search::run(self.collection.books(), query);
        self.bridge.notify(&result.listed_books);
        result
    }

    /// Runs the operation behind a rendered card's action.
    pub fn dispatch(&mut self, action: BookAction) -> Result<CmdResult> {
        match action {
            BookAction::MarkComplete(id) => self.mark_complete(&[id]),
            BookAction::MarkIncomplete(id) => self.mark_incomplete(&[id]),
            BookAction::Remove(id) => self.remove_books(&[id]),
        }
    }

    fn commit(&mut self, mut result: CmdResult) -> Result<CmdResult> {
        if !result.mutated {
            return Ok(result);
        }

        if self.persistence.save(self.collection.books())? == SaveOutcome::Skipped {
            result.add_message(CmdMessage::warning(
                "Storage is unavailable; change kept in memory only",
            ));
        }
        self.bridge.notify(self.collection.books());
        Ok(result)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::DEFAULT_STORAGE_KEY;
    use crate::store::fs::FileStore;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::view::ViewRenderer;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn open_empty() -> BookshelfApi<InMemoryStore> {
        BookshelfApi::open(Persistence::new(InMemoryStore::new())).unwrap()
    }

    fn dune() -> NewBook {
        NewBook::new("Dune", "Herbert", 1965).unwrap()
    }

    #[test]
    fn dune_scenario() {
        let mut api = open_empty();

        let added = api.add_book(dune()).unwrap();
        let id = added.affected_books[0].id;
        assert_eq!(api.books().len(), 1);
        assert!(!api.books()[0].is_complete);

        api.mark_complete(&[id]).unwrap();
        assert!(api.find_by_id(id).unwrap().is_complete);

        let reloaded = api.persistence().load().unwrap();
        assert_eq!(reloaded, api.books());

        api.remove_books(&[id]).unwrap();
        assert!(api.books().is_empty());
        assert!(api.persistence().load().unwrap().is_empty());
    }

    #[test]
    fn open_loads_stored_books_in_order() {
        let store = StoreFixture::new()
            .with_book(10, "First", false)
            .with_book(20, "Second", true)
            .build();
        let api = BookshelfApi::open(Persistence::new(store)).unwrap();

        let titles: Vec<_> = api.books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
        assert!(api.startup_messages().is_empty());
    }

    #[test]
    fn new_ids_follow_loaded_ones() {
        let future = i64::MAX / 2;
        let store = StoreFixture::new().with_book(future, "Loaded", false).build();
        let mut api = BookshelfApi::open(Persistence::new(store)).unwrap();

        let result = api.add_book(dune()).unwrap();
        assert!(result.affected_books[0].id > BookId(future));
    }

    #[test]
    fn add_after_the_largest_id_fails_without_saving() {
        let store = StoreFixture::new().with_book(i64::MAX, "Last", false).build();
        let mut api = BookshelfApi::open(Persistence::new(store)).unwrap();
        let renderer = ViewRenderer::new();
        let handle = renderer.handle();
        api.subscribe(Box::new(renderer));
        let writes = api.persistence().store().writes();

        let err = api.add_book(dune()).unwrap_err();
        assert!(matches!(err, ShelfError::IdsExhausted(_)));
        assert_eq!(api.books().len(), 1);
        assert_eq!(api.persistence().store().writes(), writes);
        assert_eq!(handle.renders(), 0);
    }

    #[test]
    fn corrupt_storage_starts_empty_with_warning() {
        let store = InMemoryStore::new().with_value(DEFAULT_STORAGE_KEY, "[{broken");
        let mut api = BookshelfApi::open(Persistence::new(store)).unwrap();

        assert!(api.books().is_empty());
        assert_eq!(api.startup_messages().len(), 1);
        assert_eq!(api.startup_messages()[0].level, MessageLevel::Warning);

        // The next save replaces the unreadable data.
        api.add_book(dune()).unwrap();
        assert_eq!(api.persistence().load().unwrap().len(), 1);
    }

    #[test]
    fn unavailable_storage_keeps_working_in_memory() {
        let mut api = BookshelfApi::open(Persistence::new(InMemoryStore::unavailable())).unwrap();
        assert_eq!(api.startup_messages()[0].level, MessageLevel::Warning);

        let result = api.add_book(dune()).unwrap();
        assert_eq!(api.books().len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
        assert_eq!(api.persistence().store().writes(), 0);
    }

    #[test]
    fn lookup_miss_neither_saves_nor_renders() {
        let mut api = open_empty();
        let renderer = ViewRenderer::new();
        let handle = renderer.handle();
        api.subscribe(Box::new(renderer));

        api.mark_complete(&[BookId(1)]).unwrap();
        api.mark_incomplete(&[BookId(1)]).unwrap();
        api.remove_books(&[BookId(1)]).unwrap();

        assert_eq!(api.persistence().store().writes(), 0);
        assert_eq!(handle.renders(), 0);
    }

    #[test]
    fn every_mutation_renders_full_collection() {
        let mut api = open_empty();
        let renderer = ViewRenderer::new();
        let handle = renderer.handle();
        api.subscribe(Box::new(renderer));

        let id = api.add_book(dune()).unwrap().affected_books[0].id;
        api.add_book(NewBook::new("Emma", "Austen", 1815).unwrap())
            .unwrap();
        api.mark_complete(&[id]).unwrap();

        let shelves = handle.shelves();
        assert_eq!(handle.renders(), 3);
        assert_eq!(shelves.complete[0].title, "Dune");
        assert_eq!(shelves.incomplete[0].title, "Emma");
    }

    #[test]
    fn search_renders_projection_without_saving() {
        let mut api = open_empty();
        api.add_book(NewBook::new("The Hobbit", "Tolkien", 1937).unwrap())
            .unwrap();
        api.add_book(dune()).unwrap();
        let writes = api.persistence().store().writes();

        let renderer = ViewRenderer::new();
        let handle = renderer.handle();
        api.subscribe(Box::new(renderer));

        let result = api.search("hob");
        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(handle.shelves().len(), 1);
        assert_eq!(api.books().len(), 2);
        assert_eq!(api.persistence().store().writes(), writes);

        api.search("");
        assert_eq!(handle.shelves().len(), 2);
    }

    #[test]
    fn notification_sees_persisted_state() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_path_buf();
        let mut api = BookshelfApi::open(Persistence::new(FileStore::new(root.clone()))).unwrap();

        let checks = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&checks);
        api.subscribe(Box::new(move |books: &[Book]| {
            let on_disk = FileStore::new(root.clone());
            let stored = Persistence::new(on_disk).load().unwrap();
            sink.borrow_mut().push(stored == books);
        }));

        let id = api.add_book(dune()).unwrap().affected_books[0].id;
        api.mark_complete(&[id]).unwrap();
        api.remove_books(&[id]).unwrap();

        assert_eq!(*checks.borrow(), vec![true, true, true]);
    }

    #[test]
    fn dispatch_runs_card_actions() {
        let mut api = open_empty();
        let renderer = ViewRenderer::new();
        let handle = renderer.handle();
        api.subscribe(Box::new(renderer));
        api.add_book(dune()).unwrap();

        let toggle = handle.shelves().incomplete[0].actions[0];
        api.dispatch(toggle).unwrap();
        assert!(api.books()[0].is_complete);

        let undo = handle.shelves().complete[0].actions[0];
        assert!(matches!(undo, BookAction::MarkIncomplete(_)));
        api.dispatch(undo).unwrap();
        assert!(!api.books()[0].is_complete);

        let delete = handle.shelves().incomplete[0].actions[1];
        api.dispatch(delete).unwrap();
        assert!(api.books().is_empty());
        assert!(handle.shelves().is_empty());
    }

    #[test]
    fn render_emits_current_collection() {
        let store = StoreFixture::new().with_book(1, "Loaded", true).build();
        let mut api = BookshelfApi::open(Persistence::new(store)).unwrap();
        let renderer = ViewRenderer::new();
        let handle = renderer.handle();
        api.subscribe(Box::new(renderer));

        api.render();
        assert_eq!(handle.shelves().complete.len(), 1);
    }
}
