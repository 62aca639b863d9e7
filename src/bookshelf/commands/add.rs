use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewBook;
use tracing::debug;

pub fn run(collection: &mut Collection, book: NewBook) -> Result<CmdResult> {
    let added = collection.add(book)?.clone();
    debug!(id = %added.id, title = %added.title, "book added");

    let mut result = CmdResult::default().mutated();
    result.add_message(CmdMessage::success(format!(
        "Book added ({}): {}",
        added.id, added.title
    )));
    Ok(result.with_affected_books(vec![added]))
}
