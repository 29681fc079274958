use std::collections::HashSet;
use std::path::Path;

use crate::catalog::search::BookFinder;
use crate::catalog::storage::{BookStorage, CatalogError, JsonFileStorage};
use crate::core::book::Book;
use crate::core::types::{BookId, BookStatus, SearchField};
use crate::utils::validation::require_non_empty;

/// The book catalog: ordered records plus the storage they are saved to
#[derive(Debug)]
pub struct BookCatalog<S: BookStorage = JsonFileStorage> {
    /// All records, in insertion order
    books: Vec<Book>,

    storage: S,
}

impl BookCatalog<JsonFileStorage> {
    /// Open the catalog stored at `path`, starting empty if it does not exist
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Self::with_storage(JsonFileStorage::new(path.as_ref()))
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        self.storage.path()
    }
}

impl<S: BookStorage> BookCatalog<S> {
    /// Load the catalog from `storage`
    pub fn with_storage(storage: S) -> Result<Self, CatalogError> {
        let books = storage.load()?;
        warn_on_suspect_ids(&books);
        tracing::debug!(count = books.len(), "catalog loaded");
        Ok(Self { books, storage })
    }

    /// Write the whole catalog back to storage
    pub fn save(&self) -> Result<(), CatalogError> {
        self.storage.save(&self.books)
    }

    /// Id for the next added book: one past the id of the last record.
    ///
    /// This is not the maximum id; after the last record is deleted its id
    /// is handed out again.
    pub fn next_id(&self) -> Result<BookId, CatalogError> {
        match self.books.last() {
            None => Ok(BookId::new(1)),
            Some(book) => book.id.next().ok_or(CatalogError::IdOverflow(book.id)),
        }
    }

    /// Add a new available book and persist the catalog.
    ///
    /// Fields are trimmed; an empty field is rejected before anything is
    /// written.
    pub fn add(&mut self, title: &str, author: &str, year: &str) -> Result<&Book, CatalogError> {
        let title = require_non_empty("Title", title)?;
        let author = require_non_empty("Author", author)?;
        let year = require_non_empty("Year", year)?;

        let book = Book::new(self.next_id()?, title, author, year, BookStatus::Available);
        tracing::info!(id = %book.id, title = %book.title, "adding book");
        self.books.push(book);
        if let Err(e) = self.save() {
            self.books.pop();
            return Err(e);
        }

        let index = self.books.len() - 1;
        Ok(&self.books[index])
    }

    /// Remove the first book with `id` and persist.
    ///
    /// Returns `None` without touching storage if no book has that id.
    pub fn delete(&mut self, id: BookId) -> Result<Option<Book>, CatalogError> {
        let Some(index) = self.position(id) else {
            tracing::debug!(%id, "delete: no such book");
            return Ok(None);
        };

        let removed = self.books.remove(index);
        if let Err(e) = self.save() {
            self.books.insert(index, removed);
            return Err(e);
        }
        tracing::info!(%id, title = %removed.title, "deleted book");
        Ok(Some(removed))
    }

    /// Set the status of the first book with `id` and persist.
    ///
    /// Returns `None` without touching storage if no book has that id.
    pub fn update_status(
        &mut self,
        id: BookId,
        status: BookStatus,
    ) -> Result<Option<&Book>, CatalogError> {
        let Some(index) = self.position(id) else {
            tracing::debug!(%id, "update status: no such book");
            return Ok(None);
        };

        let previous = std::mem::replace(&mut self.books[index].status, status);
        if let Err(e) = self.save() {
            self.books[index].status = previous;
            return Err(e);
        }
        tracing::info!(%id, %status, "updated book status");
        Ok(Some(&self.books[index]))
    }

    /// Books whose title equals `query`, ignoring case
    pub fn search_by_title(&self, query: &str) -> Vec<&Book> {
        BookFinder::new(&self.books).by_title(query)
    }

    /// Books whose author equals `query`, ignoring case
    pub fn search_by_author(&self, query: &str) -> Vec<&Book> {
        BookFinder::new(&self.books).by_author(query)
    }

    /// Books whose year equals `query`
    pub fn search_by_year(&self, query: &str) -> Vec<&Book> {
        BookFinder::new(&self.books).by_year(query)
    }

    /// Search on the given field
    pub fn search(&self, field: SearchField, query: &str) -> Vec<&Book> {
        BookFinder::new(&self.books).find(field, query)
    }

    /// All books, in catalog order
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// Get a book by id
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Number of books in catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The storage backing this catalog
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }
}

fn warn_on_suspect_ids(books: &[Book]) {
    let mut seen = HashSet::new();
    for book in books {
        if book.id == BookId::new(0) {
            tracing::warn!(id = %book.id, "catalog contains a book with id 0");
        }
        if !seen.insert(book.id) {
            tracing::warn!(id = %book.id, "catalog contains duplicate book id");
        }
    }
}
