//! # book-catalog
//!
//! A small library and command-line tool for keeping a catalog of books in a
//! local JSON file.
//!
//! Each book has an ID, a title, an author, a publication year, and a status
//! (`available` or `checked-out`). The whole catalog is loaded into memory
//! when opened and written back in full after every change.
//!
//! ## Example
//!
//! ```rust,no_run
//! use book_catalog::{BookCatalog, BookStatus};
//!
//! let mut catalog = BookCatalog::open("library.json").unwrap();
//! let id = catalog.add("The Hobbit", "J. R. R. Tolkien", "1937").unwrap().id;
//! catalog.update_status(id, BookStatus::CheckedOut).unwrap();
//!
//! for book in catalog.search_by_year("1937") {
//!     println!("{book}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Catalog store, JSON storage, and search
//! - [`core`]: Book record and its field types
//! - [`cli`]: Command-line interface and interactive menu
//! - [`utils`]: Input validation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::storage::{BookStorage, CatalogError, JsonFileStorage};
pub use catalog::store::BookCatalog;
pub use core::book::Book;
pub use core::types::*;
