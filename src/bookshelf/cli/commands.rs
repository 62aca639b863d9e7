//! # CLI Layer
//!
//! This module is **one possible UI client** for the bookshelf. It stands in
//! for the web page: the `add` command is the submission form, `complete`,
//! `incomplete` and `remove` are the per-book buttons, and `search` is the
//! search box.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data dir, config and logging, opens the API
//! - `handle_*()`: Per-command handlers that call the API
//!
//! Every handler ends by printing whatever the view renderer last built, so
//! the user always sees the shelves as of the latest operation.

use super::render::{print_messages, print_shelves};
use super::setup::{Cli, Commands};
use bookshelf::api::{BookshelfApi, CmdResult, ConfigAction};
use bookshelf::commands;
use bookshelf::error::Result;
use bookshelf::init::{initialize, load_config, resolve_data_dir};
use bookshelf::logging;
use bookshelf::model::{BookId, NewBook};
use bookshelf::store::fs::FileStore;
use bookshelf::view::{ShelvesHandle, ViewRenderer};
use clap::Parser;
use std::path::PathBuf;

struct AppContext {
    api: BookshelfApi<FileStore>,
    view: ShelvesHandle,
    data_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            year,
            complete,
        }) => handle_add(&mut ctx, title, author, year, complete),
        Some(Commands::List) | None => handle_list(&mut ctx),
        Some(Commands::Search { query }) => handle_search(&mut ctx, query),
        Some(Commands::Complete { ids }) => handle_complete(&mut ctx, ids),
        Some(Commands::Incomplete { ids }) => handle_incomplete(&mut ctx, ids),
        Some(Commands::Remove { ids }) => handle_remove(&mut ctx, ids),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let data_dir = resolve_data_dir(cli.data_dir.as_deref(), &cwd);
    let (config, config_warning) = load_config(&data_dir);

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    logging::init(level);
    print_messages(config_warning.as_slice());

    let mut ctx = initialize(data_dir, config)?;
    print_messages(ctx.api.startup_messages());

    let renderer = ViewRenderer::new();
    let view = renderer.handle();
    ctx.api.subscribe(Box::new(renderer));

    Ok(AppContext {
        api: ctx.api,
        view,
        data_dir: ctx.data_dir,
    })
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    author: String,
    year: String,
    complete: bool,
) -> Result<()> {
    let book = NewBook::parse(title, author, &year)?;
    let mut result = ctx.api.add_book(book)?;

    if complete {
        let ids: Vec<BookId> = result.affected_books.iter().map(|b| b.id).collect();
        let completed = ctx.api.mark_complete(&ids)?;
        result.messages.extend(completed.messages);
    }

    finish(ctx, result);
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    ctx.api.render();
    print_shelves(&ctx.view.shelves());
    Ok(())
}

fn handle_search(ctx: &mut AppContext, query: String) -> Result<()> {
    let result = ctx.api.search(&query);
    if result.listed_books.is_empty() {
        println!("No books match \"{}\".", query);
        return Ok(());
    }
    print_shelves(&ctx.view.shelves());
    Ok(())
}

fn handle_complete(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let ids = parse_ids(&ids)?;
    let result = ctx.api.mark_complete(&ids)?;
    finish(ctx, result);
    Ok(())
}

fn handle_incomplete(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let ids = parse_ids(&ids)?;
    let result = ctx.api.mark_incomplete(&ids)?;
    finish(ctx, result);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let ids = parse_ids(&ids)?;
    let result = ctx.api.remove_books(&ids)?;
    finish(ctx, result);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(&ctx.data_dir, action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            println!("storage-key = {}", config.storage_key);
            println!("log-level = {}", config.log_level);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Prints messages, then the shelves. A command that changed nothing did not
/// trigger a render, so ask for one.
fn finish(ctx: &mut AppContext, result: CmdResult) {
    print_messages(&result.messages);
    if !result.mutated {
        ctx.api.render();
    }
    println!();
    print_shelves(&ctx.view.shelves());
}

fn parse_ids(inputs: &[String]) -> Result<Vec<BookId>> {
    inputs.iter().map(|s| s.parse()).collect()
}
