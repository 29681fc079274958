use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::book::Book;
use crate::core::types::BookId;
use crate::utils::validation::ValidationError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to write catalog {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No ID left after {0}: the last book already has the largest possible ID")]
    IdOverflow(BookId),
}

/// Backing store for the catalog contents
///
/// `load` is called once when a catalog is opened; `save` after every
/// mutation with the full, ordered record list.
pub trait BookStorage {
    /// Read every stored record, in stored order
    fn load(&self) -> Result<Vec<Book>, CatalogError>;

    /// Replace the stored records with `books`
    fn save(&self, books: &[Book]) -> Result<(), CatalogError>;
}

/// Storage backed by a pretty-printed JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Book>, CatalogError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "catalog file not found, starting empty");
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            CatalogError::ReadError {
                path: self.path.clone(),
                source,
            }
        })?;
        books_from_json(&content)
    }

    // Overwrites in place: a crash mid-write can leave a truncated file.
    fn save(&self, books: &[Book]) -> Result<(), CatalogError> {
        let json = books_to_json(books)?;
        std::fs::write(&self.path, json).map_err(|source| CatalogError::WriteError {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), count = books.len(), "catalog saved");
        Ok(())
    }
}

/// Parse a JSON array of book records
pub fn books_from_json(json: &str) -> Result<Vec<Book>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Render book records as a JSON array with four-space indentation.
///
/// Non-ASCII text is written as-is rather than escaped.
pub fn books_to_json(books: &[Book]) -> Result<String, CatalogError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    books.serialize(&mut ser)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::BookStatus;

    #[test]
    fn test_books_to_json_layout() {
        let books = vec![Book::new(1, "Книга 1", "Автор 1", "2020", BookStatus::Available)];
        let json = books_to_json(&books).unwrap();
        let expected = "[\n    {\n        \"id\": 1,\n        \"title\": \"Книга 1\",\n        \"author\": \"Автор 1\",\n        \"year\": \"2020\",\n        \"status\": \"available\"\n    }\n]";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_books_to_json_empty() {
        assert_eq!(books_to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_books_from_json_legacy_status() {
        let json = r#"[{"id": 2, "title": "Книга 2", "author": "Автор 2", "year": "2021", "status": "выдана"}]"#;
        let books = books_from_json(json).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].status, BookStatus::CheckedOut);
    }

    #[test]
    fn test_books_from_json_malformed() {
        assert!(matches!(
            books_from_json("{not json"),
            Err(CatalogError::ParseError(_))
        ));
        assert!(matches!(
            books_from_json(r#"{"id": 1}"#),
            Err(CatalogError::ParseError(_))
        ));
    }

    #[test]
    fn test_books_from_json_missing_field() {
        let json = r#"[{"id": 1, "title": "T", "year": "2020", "status": "available"}]"#;
        let err = books_from_json(json).unwrap_err();
        assert!(err.to_string().contains("missing field `author`"));
    }

    #[test]
    fn test_json_file_storage_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("library.json"));
        assert!(storage.load().unwrap().is_empty());
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_json_file_storage_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("library.json"));
        let books = vec![
            Book::new(3, "C", "X", "1999", BookStatus::Available),
            Book::new(1, "A", "Y", "2001", BookStatus::CheckedOut),
        ];
        storage.save(&books).unwrap();
        assert_eq!(storage.load().unwrap(), books);
    }

    #[test]
    fn test_json_file_storage_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("missing").join("library.json"));
        let err = storage.save(&[]).unwrap_err();
        assert!(matches!(err, CatalogError::WriteError { .. }));
    }
}
