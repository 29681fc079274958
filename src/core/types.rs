use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::utils::validation::ValidationError;

/// Unique identifier for a book in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u64);

impl BookId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The id following this one, `None` past `u64::MAX`
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BookId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Availability of a book
///
/// Data files written by older versions of the tool use the Russian labels
/// "в наличии" and "выдана"; both are accepted on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    #[serde(rename = "available", alias = "в наличии")]
    Available,
    #[serde(rename = "checked-out", alias = "выдана")]
    CheckedOut,
}

impl BookStatus {
    /// All statuses, in menu order
    pub const ALL: [BookStatus; 2] = [BookStatus::Available, BookStatus::CheckedOut];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::CheckedOut => "checked-out",
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" | "в наличии" => Ok(Self::Available),
            "checked-out" | "checked out" | "checked_out" | "выдана" => Ok(Self::CheckedOut),
            other => Err(ValidationError::InvalidStatus(other.to_string())),
        }
    }
}

/// Field a catalog search matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SearchField {
    Title,
    Author,
    Year,
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Author => write!(f, "author"),
            Self::Year => write!(f, "year"),
        }
    }
}
