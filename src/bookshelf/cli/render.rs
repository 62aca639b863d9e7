//! Terminal output for the two shelves and command messages.
//!
//! Layout math (widths, truncation, padding) is unicode-aware; colors come
//! from `colored` and switch off automatically when stdout is not a tty.

use bookshelf::api::{CmdMessage, MessageLevel};
use bookshelf::view::{BookCard, Shelves};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 15;
const YEAR_WIDTH: usize = 6;
const TITLE_SHARE: usize = 60;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_shelves(shelves: &Shelves) {
    print!("{}", render_shelves(shelves));
}

pub fn render_shelves(shelves: &Shelves) -> String {
    let mut output = String::new();
    render_shelf(&mut output, "Incomplete", &shelves.incomplete);
    output.push('\n');
    render_shelf(&mut output, "Complete", &shelves.complete);
    output
}

fn render_shelf(output: &mut String, heading: &str, cards: &[BookCard]) {
    let heading = format!("{} ({})", heading, cards.len());
    output.push_str(&format!("{}\n", heading.bold()));

    if cards.is_empty() {
        output.push_str(&format!("    {}\n", "No books.".dimmed()));
        return;
    }

    for card in cards {
        output.push_str(&render_card(card));
        output.push('\n');
    }
}

fn render_card(card: &BookCard) -> String {
    let actions = card
        .actions
        .iter()
        .map(|a| format!("[{}]", a.label()))
        .collect::<Vec<_>>()
        .join(" ");

    let fixed = 4 + ID_WIDTH + YEAR_WIDTH + actions.width() + 1;
    let available = LINE_WIDTH.saturating_sub(fixed);
    let title_width = available * TITLE_SHARE / 100;
    let author_width = available.saturating_sub(title_width);

    let title = pad_to_width(&truncate_to_width(&card.title, title_width), title_width);
    let author = pad_to_width(&truncate_to_width(&card.author, author_width), author_width);
    let id = format!("{:<width$}", card.id.to_string(), width = ID_WIDTH);
    let year = card.year.map_or_else(|| "-".to_string(), |y| y.to_string());
    let year = format!("{:<width$}", year, width = YEAR_WIDTH);

    format!(
        "    {}{}{}{} {}",
        id.yellow(),
        title.bold(),
        author,
        year,
        actions.dimmed()
    )
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() < max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(2) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
