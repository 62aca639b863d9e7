//! # Bookshelf Architecture
//!
//! Bookshelf keeps track of books you are reading and books you have
//! finished. It is a **UI-agnostic library** with a CLI client on top; the
//! same core could back a web page or a TUI.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints shelves and messages            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Runs a command, persists, then notifies the view         │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                               │
//!                 ▼                               ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │ Command Layer (commands/)     │ │ Render Bridge (bridge.rs) │
//! │ Collection Store              │ │ View Renderer (view.rs)   │
//! │ (collection.rs)               │ └───────────────────────────┘
//! └───────────────────────────────┘
//!                 │
//!                 ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence (persistence.rs) over a KeyValueStore (store/) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! The in-memory [`collection::Collection`] is the single source of truth.
//! Every mutation is mirrored to the key-value store and then pushed to the
//! single [`bridge::CollectionObserver`], which rebuilds the view from
//! scratch. Storage is read once, when [`api::BookshelfApi::open`] runs.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`collection`]: The ordered book collection and id generation
//! - [`persistence`]: JSON mirror of the collection under one key
//! - [`store`]: Key-value storage abstraction and implementations
//! - [`bridge`]: Observer interface between API and view
//! - [`view`]: Shelves view model and the renderer that rebuilds it
//! - [`model`]: Core data types (`Book`, `BookId`, `NewBook`)
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context setup
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod bridge;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod persistence;
pub mod store;
pub mod view;
