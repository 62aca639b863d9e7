use crate::commands::CmdResult;
use crate::model::Book;

/// Case-insensitive title substring filter. An empty query keeps everything.
pub fn filter_by_title(books: &[Book], query: &str) -> Vec<Book> {
    if query.is_empty() {
        return books.to_vec();
    }

    let query_lower = query.to_lowercase();
    books
        .iter()
        .filter(|book| book.title.to_lowercase().contains(&query_lower))
        .cloned()
        .collect()
}

pub fn run(books: &[Book], query: &str) -> CmdResult {
    CmdResult::default().with_listed_books(filter_by_title(books, query))
}
