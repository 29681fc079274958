//! Core data types for the book catalog.
//!
//! - [`Book`]: One catalog record (id, title, author, year, status)
//! - [`BookId`]: Record identifier, unique within a catalog
//! - [`BookStatus`]: Availability, `available` or `checked-out`
//! - [`SearchField`]: Which field a search matches against
//!
//! [`Book`]: book::Book
//! [`BookId`]: types::BookId
//! [`BookStatus`]: types::BookStatus
//! [`SearchField`]: types::SearchField

pub mod book;
pub mod types;
