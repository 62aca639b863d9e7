use crate::collection::{Collection, StatusChange};
use crate::commands::{CmdMessage, CmdResult};
use crate::model::BookId;
use tracing::debug;

pub fn mark_complete(collection: &mut Collection, ids: &[BookId]) -> CmdResult {
    completion_state(collection, ids, true)
}

pub fn mark_incomplete(collection: &mut Collection, ids: &[BookId]) -> CmdResult {
    completion_state(collection, ids, false)
}

fn completion_state(collection: &mut Collection, ids: &[BookId], is_complete: bool) -> CmdResult {
    let mut result = CmdResult::default();

    for &id in ids {
        let change = if is_complete {
            collection.mark_complete(id)
        } else {
            collection.mark_incomplete(id)
        };

        let found = collection.find_by_id(id).cloned();
        let Some(book) = found.filter(|_| change.is_found()) else {
            result.add_message(CmdMessage::info(format!("No book with id {}", id)));
            continue;
        };

        // A found book is saved and re-rendered even when the flag was already set.
        result.mutated = true;
        debug!(%id, is_complete, ?change, "completion updated");

        let message = match (change, is_complete) {
            (StatusChange::Unchanged, true) => format!("Already complete ({}): {}", id, book.title),
            (StatusChange::Unchanged, false) => {
                format!("Already incomplete ({}): {}", id, book.title)
            }
            (_, true) => format!("Marked complete ({}): {}", id, book.title),
            (_, false) => format!("Marked incomplete ({}): {}", id, book.title),
        };
        result.add_message(CmdMessage::success(message));
        result.affected_books.push(book);
    }

    result
}
