use serde::{Deserialize, Serialize};

use crate::core::types::{BookId, BookStatus};

/// A single book record in the catalog
///
/// Field order here is the key order of the persisted JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, immutable after creation
    pub id: BookId,

    /// Title, never empty
    pub title: String,

    /// Author, never empty
    pub author: String,

    /// Publication year, kept as entered (not validated as numeric)
    pub year: String,

    /// Availability
    pub status: BookStatus,
}

impl Book {
    pub fn new(
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        status: BookStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            year: year.into(),
            status,
        }
    }

    /// Case-insensitive exact title match
    #[must_use]
    pub fn title_matches(&self, query: &str) -> bool {
        self.title.to_lowercase() == query
    }

    /// Case-insensitive exact author match
    #[must_use]
    pub fn author_matches(&self, query: &str) -> bool {
        self.author.to_lowercase() == query
    }

    /// Exact year match; the stored year is compared as-is
    #[must_use]
    pub fn year_matches(&self, query: &str) -> bool {
        self.year == query
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Year: {}, Status: {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}
