//! Centralized input validation helpers.

use crate::core::types::{BookId, BookStatus};

/// Input validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("Invalid ID '{0}': expected a whole number")]
    InvalidId(String),
    #[error("Invalid status '{0}': expected one of 'available', 'checked-out'")]
    InvalidStatus(String),
}

/// Trim a required text field, rejecting values that are empty afterwards.
///
/// # Examples
///
/// ```
/// use book_catalog::utils::validation::require_non_empty;
///
/// assert_eq!(require_non_empty("title", "  Dune ").unwrap(), "Dune");
/// assert!(require_non_empty("title", "   ").is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::EmptyField` naming `field` if nothing is left
/// after trimming.
pub fn require_non_empty<'a>(
    field: &'static str,
    value: &'a str,
) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(trimmed)
    }
}

/// Parse a book ID typed by the operator.
///
/// Only ASCII digits are accepted (no sign, no whitespace inside), and the
/// value must fit in a `u64`.
///
/// # Errors
///
/// Returns `ValidationError::InvalidId` for anything else.
pub fn parse_book_id(input: &str) -> Result<BookId, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidId(trimmed.to_string()));
    }
    trimmed
        .parse::<u64>()
        .map(BookId::new)
        .map_err(|_| ValidationError::InvalidId(trimmed.to_string()))
}

/// Parse a status typed by the operator.
///
/// # Errors
///
/// Returns `ValidationError::InvalidStatus` if the text names no known status.
pub fn parse_status(input: &str) -> Result<BookStatus, ValidationError> {
    input.parse()
}
