use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::BookId;
use tracing::debug;

pub fn run(collection: &mut Collection, ids: &[BookId]) -> CmdResult {
    let mut result = CmdResult::default();

    for &id in ids {
        match collection.remove(id) {
            Some(book) => {
                debug!(%id, "book removed");
                result.mutated = true;
                result.add_message(CmdMessage::success(format!(
                    "Book deleted ({}): {}",
                    id, book.title
                )));
                result.affected_books.push(book);
            }
            None => {
                result.add_message(CmdMessage::info(format!("No book with id {}", id)));
            }
        }
    }

    result
}
