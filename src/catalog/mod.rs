//! Book catalog storage and search.
//!
//! The catalog is an ordered list of [`Book`] records loaded wholesale from a
//! JSON file when opened and rewritten in full after every change. Searches
//! and listings only read the in-memory copy.
//!
//! ## Example
//!
//! ```rust,no_run
//! use book_catalog::{BookCatalog, BookId, BookStatus};
//!
//! let mut catalog = BookCatalog::open("library.json").unwrap();
//!
//! let id = catalog.add("Dune", "Frank Herbert", "1965").unwrap().id;
//! catalog.update_status(id, BookStatus::CheckedOut).unwrap();
//!
//! for book in catalog.search_by_author("frank herbert") {
//!     println!("{book}");
//! }
//!
//! if catalog.delete(BookId::new(42)).unwrap().is_none() {
//!     println!("No book with ID 42");
//! }
//! ```
//!
//! ## File format
//!
//! A JSON array of objects with the keys `id`, `title`, `author`, `year` and
//! `status`, indented with four spaces:
//!
//! ```text
//! [
//!     {
//!         "id": 1,
//!         "title": "Dune",
//!         "author": "Frank Herbert",
//!         "year": "1965",
//!         "status": "checked-out"
//!     }
//! ]
//! ```
//!
//! [`Book`]: crate::core::book::Book

pub mod search;
pub mod storage;
pub mod store;
