//! # Collection Store
//!
//! [`Collection`] owns the ordered sequence of books and is the single source
//! of truth while the process runs. It knows nothing about persistence or
//! rendering; the API layer persists and notifies after each mutation.
//!
//! Lookups are linear scans that act on the **first** matching id. Duplicate
//! ids can only come from hand-edited storage and are left untouched.
//!
//! Operations on an unknown id are no-ops, reported through their return
//! value rather than as errors.

use crate::error::{Result, ShelfError};
use crate::model::{Book, BookId, NewBook};
use chrono::Utc;

/// Issues book ids: timestamp-seeded, strictly increasing.
///
/// Each id is the current time in milliseconds, bumped past the last issued
/// id when the clock has not moved (or moved backwards).
#[derive(Debug, Clone)]
pub struct IdGenerator {
    last: i64,
    clock: fn() -> i64,
}

fn system_millis() -> i64 {
    Utc::now().timestamp_millis()
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::with_clock(system_millis)
    }
}

impl IdGenerator {
    pub fn with_clock(clock: fn() -> i64) -> Self {
        Self { last: 0, clock }
    }

    /// Never issue an id at or below `id`.
    pub fn observe(&mut self, id: BookId) {
        self.last = self.last.max(id.0);
    }

    /// Fails once the last issued id is `i64::MAX`; the generator is left as it was.
    pub fn next_id(&mut self) -> Result<BookId> {
        let now = (self.clock)();
        self.last = if now > self.last {
            now
        } else {
            self.last
                .checked_add(1)
                .ok_or(ShelfError::IdsExhausted(self.last))?
        };
        Ok(BookId(self.last))
    }
}

/// Result of a completion toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    NotFound,
    /// Found, and the flag already had the requested value.
    Unchanged,
    Changed,
}

impl StatusChange {
    pub fn is_found(self) -> bool {
        !matches!(self, StatusChange::NotFound)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Collection {
    books: Vec<Book>,
    ids: IdGenerator,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps books read from storage, keeping their order.
    pub fn from_books(books: Vec<Book>) -> Self {
        Self::with_id_generator(books, IdGenerator::default())
    }

    pub fn with_id_generator(books: Vec<Book>, mut ids: IdGenerator) -> Self {
        for book in &books {
            ids.observe(book.id);
        }
        Self { books, ids }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn count_complete(&self) -> usize {
        self.books.iter().filter(|b| b.is_complete).count()
    }

    pub fn count_incomplete(&self) -> usize {
        self.books.iter().filter(|b| !b.is_complete).count()
    }

    pub fn add(&mut self, book: NewBook) -> Result<&Book> {
        let id = self.ids.next_id()?;
        self.books.push(Book::new(id, book));
        Ok(&self.books[self.books.len() - 1])
    }

    pub fn find_by_id(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    pub fn mark_complete(&mut self, id: BookId) -> StatusChange {
        self.set_complete(id, true)
    }

    pub fn mark_incomplete(&mut self, id: BookId) -> StatusChange {
        self.set_complete(id, false)
    }

    fn set_complete(&mut self, id: BookId, is_complete: bool) -> StatusChange {
        match self.books.iter_mut().find(|b| b.id == id) {
            None => StatusChange::NotFound,
            Some(book) if book.is_complete == is_complete => StatusChange::Unchanged,
            Some(book) => {
                book.is_complete = is_complete;
                StatusChange::Changed
            }
        }
    }

    /// Removes the first book with `id`, returning it.
    pub fn remove(&mut self, id: BookId) -> Option<Book> {
        let index = self.position(id)?;
        Some(self.books.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fixed_clock() -> i64 {
        1_000
    }

    fn dune() -> NewBook {
        NewBook::new("Dune", "Herbert", 1965).unwrap()
    }

    #[test]
    fn add_appends_incomplete_book() {
        let mut collection = Collection::new();
        let book = collection.add(dune()).unwrap().clone();

        assert_eq!(collection.len(), 1);
        assert_eq!(book.title, "Dune");
        assert!(!book.is_complete);
        assert_eq!(collection.books()[0], book);
    }

    #[test]
    fn ids_increase_when_clock_stands_still() {
        let mut collection =
            Collection::with_id_generator(Vec::new(), IdGenerator::with_clock(fixed_clock));
        let a = collection.add(dune()).unwrap().id;
        let b = collection.add(dune()).unwrap().id;
        let c = collection.add(dune()).unwrap().id;

        assert_eq!(a, BookId(1_000));
        assert!(a < b && b < c);
    }

    #[test]
    fn ids_skip_past_loaded_books() {
        let existing = Book::new(BookId(5_000), dune());
        let mut collection =
            Collection::with_id_generator(vec![existing], IdGenerator::with_clock(fixed_clock));

        assert_eq!(collection.add(dune()).unwrap().id, BookId(5_001));
    }

    #[test]
    fn add_fails_once_ids_run_out() {
        let existing = Book::new(BookId(i64::MAX), dune());
        let mut collection =
            Collection::with_id_generator(vec![existing], IdGenerator::with_clock(fixed_clock));
        let before = collection.books().to_vec();

        let err = collection.add(dune()).unwrap_err();
        assert!(matches!(err, ShelfError::IdsExhausted(i64::MAX)));
        assert_eq!(collection.books(), before.as_slice());
    }

    #[test]
    fn clock_past_the_last_id_is_used_as_is() {
        fn late_clock() -> i64 {
            i64::MAX
        }
        let mut ids = IdGenerator::with_clock(late_clock);
        ids.observe(BookId(i64::MAX - 1));

        assert_eq!(ids.next_id().unwrap(), BookId(i64::MAX));
        assert!(ids.next_id().is_err());
    }

    #[test]
    fn mark_complete_and_back() {
        let mut collection = Collection::new();
        let id = collection.add(dune()).unwrap().id;

        assert_eq!(collection.mark_complete(id), StatusChange::Changed);
        assert!(collection.find_by_id(id).unwrap().is_complete);

        assert_eq!(collection.mark_incomplete(id), StatusChange::Changed);
        assert!(!collection.find_by_id(id).unwrap().is_complete);
    }

    #[test]
    fn marking_twice_is_idempotent() {
        let mut collection = Collection::new();
        let id = collection.add(dune()).unwrap().id;
        collection.mark_complete(id);
        let before = collection.books().to_vec();

        assert_eq!(collection.mark_complete(id), StatusChange::Unchanged);
        assert_eq!(collection.books(), before.as_slice());
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut collection = Collection::new();
        collection.add(dune()).unwrap();
        let before = collection.books().to_vec();

        assert_eq!(collection.mark_complete(BookId(-1)), StatusChange::NotFound);
        assert_eq!(collection.mark_incomplete(BookId(-1)), StatusChange::NotFound);
        assert!(collection.remove(BookId(-1)).is_none());
        assert_eq!(collection.books(), before.as_slice());
    }

    #[test]
    fn duplicate_ids_act_on_first_match() {
        let first = Book::new(BookId(1), NewBook::new("First", "A", 1).unwrap());
        let second = Book::new(BookId(1), NewBook::new("Second", "B", 2).unwrap());
        let mut collection = Collection::from_books(vec![first, second]);

        assert_eq!(collection.find_by_id(BookId(1)).unwrap().title, "First");
        collection.mark_complete(BookId(1));
        assert!(collection.books()[0].is_complete);
        assert!(!collection.books()[1].is_complete);

        let removed = collection.remove(BookId(1)).unwrap();
        assert_eq!(removed.title, "First");
        assert_eq!(collection.books()[0].title, "Second");
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut collection = Collection::new();
        let a = collection.add(NewBook::new("A", "x", 1).unwrap()).unwrap().id;
        let b = collection.add(NewBook::new("B", "x", 1).unwrap()).unwrap().id;
        let c = collection.add(NewBook::new("C", "x", 1).unwrap()).unwrap().id;

        collection.remove(b);
        let ids: Vec<_> = collection.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(String),
        Complete(usize),
        Incomplete(usize),
        Remove(usize),
        RemoveMissing,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[A-Za-z ]{1,12}".prop_map(Op::Add),
            any::<usize>().prop_map(Op::Complete),
            any::<usize>().prop_map(Op::Incomplete),
            any::<usize>().prop_map(Op::Remove),
            Just(Op::RemoveMissing),
        ]
    }

    fn pick(collection: &Collection, n: usize) -> BookId {
        if collection.is_empty() {
            BookId(-1)
        } else {
            collection.books()[n % collection.len()].id
        }
    }

    proptest! {
        #[test]
        fn partitions_always_cover_the_collection(ops in prop::collection::vec(op_strategy(), 0..60)) {
            let mut collection = Collection::new();

            for op in ops {
                match op {
                    Op::Add(title) => {
                        collection.add(NewBook::new(format!("t{title}"), "a", 2000).unwrap()).unwrap();
                    }
                    Op::Complete(n) => {
                        let id = pick(&collection, n);
                        collection.mark_complete(id);
                    }
                    Op::Incomplete(n) => {
                        let id = pick(&collection, n);
                        collection.mark_incomplete(id);
                    }
                    Op::Remove(n) => {
                        let id = pick(&collection, n);
                        collection.remove(id);
                    }
                    Op::RemoveMissing => {
                        let before = collection.books().to_vec();
                        collection.remove(BookId(-1));
                        prop_assert_eq!(collection.books(), before.as_slice());
                    }
                }

                prop_assert_eq!(
                    collection.count_complete() + collection.count_incomplete(),
                    collection.len()
                );
            }

            let mut ids: Vec<_> = collection.books().iter().map(|b| b.id).collect();
            let total = ids.len();
            ids.dedup();
            prop_assert_eq!(ids.len(), total);
        }
    }
}
