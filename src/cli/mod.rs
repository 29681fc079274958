//! Command-line interface for book-catalog.
//!
//! Without a subcommand the interactive menu is started. The one-shot
//! subcommands cover the same operations for scripting:
//!
//! - **add**: Add a book (status starts as `available`)
//! - **delete**: Delete a book by ID
//! - **status**: Change the status of a book
//! - **search**: Find books by title, author, or year
//! - **list**: Show every book in the catalog
//! - **menu**: Start the interactive menu
//!
//! ## Usage
//!
//! ```text
//! # Interactive menu on ./library.json
//! book-catalog
//!
//! # Add a book to a specific catalog file
//! book-catalog --data-file ~/books.json add --title Dune --author "Frank Herbert" --year 1965
//!
//! # Mark it checked out
//! book-catalog status 1 checked-out
//!
//! # JSON output for scripting
//! book-catalog --format json search --by author "frank herbert"
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod books;
pub mod menu;

/// Default catalog file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "library.json";

#[derive(Parser)]
#[command(name = "book-catalog")]
#[command(version)]
#[command(about = "Maintain a catalog of books in a local JSON file")]
#[command(
    long_about = "book-catalog keeps a list of books (title, author, year, status) in a JSON file.\n\nRun it without a command for an interactive menu, or use the subcommands to add, delete, search, list, and change the status of books from scripts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to read and write
    #[arg(short, long, global = true, default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a book to the catalog
    Add(books::AddArgs),

    /// Delete a book by ID
    Delete(books::DeleteArgs),

    /// Change the status of a book
    Status(books::StatusArgs),

    /// Search books by title, author, or year
    Search(books::SearchArgs),

    /// List all books
    List,

    /// Start the interactive menu (the default)
    Menu,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
