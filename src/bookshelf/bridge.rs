//! # Render Bridge
//!
//! One-directional notification from the API to the view. After a mutation
//! has been persisted, the API calls [`RenderBridge::notify`] with the books
//! to show: the full collection, or a search projection.
//!
//! There is a single subscriber. Subscribing again replaces it.

use crate::model::Book;

/// Receives every render request.
pub trait CollectionObserver {
    fn on_collection_changed(&mut self, books: &[Book]);
}

impl<F> CollectionObserver for F
where
    F: FnMut(&[Book]),
{
    fn on_collection_changed(&mut self, books: &[Book]) {
        self(books)
    }
}

#[derive(Default)]
pub struct RenderBridge {
    subscriber: Option<Box<dyn CollectionObserver>>,
}

impl RenderBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn CollectionObserver>) {
        self.subscriber = Some(observer);
    }

    pub fn notify(&mut self, books: &[Book]) {
        if let Some(subscriber) = self.subscriber.as_mut() {
            subscriber.on_collection_changed(books);
        }
    }
}
