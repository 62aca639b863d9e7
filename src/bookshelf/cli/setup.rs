use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "bookshelf", bin_name = "bookshelf", version = get_version())]
#[command(about = "Keep track of the books you are reading and have finished", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the stored books and config
    #[arg(long, global = true, env = "BOOKSHELF_DATA_DIR", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the shelf
    #[command(alias = "a")]
    Add {
        /// Title of the book
        title: String,

        /// Author of the book
        author: String,

        /// Publication year (e.g. 1965)
        year: String,

        /// Put the book straight on the complete shelf
        #[arg(long)]
        complete: bool,
    },

    /// List both shelves
    #[command(alias = "ls")]
    List,

    /// Show only books whose title contains the query (case-insensitive)
    #[command(alias = "s")]
    Search {
        /// Text to look for; empty shows everything
        #[arg(default_value = "")]
        query: String,
    },

    /// Mark one or more books as complete
    #[command(alias = "done")]
    Complete {
        /// Ids of the books
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Move one or more books back to the incomplete shelf
    #[command(alias = "undo")]
    Incomplete {
        /// Ids of the books
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Delete one or more books
    #[command(alias = "rm")]
    Remove {
        /// Ids of the books
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
