use crate::core::book::Book;
use crate::core::types::SearchField;

/// Finds books matching a query on one field
///
/// Matching is exact on the whole field. The query is trimmed and
/// lower-cased; titles and authors are compared lower-cased, years as stored.
/// No match yields an empty result, never an error.
pub struct BookFinder<'a> {
    books: &'a [Book],
}

impl<'a> BookFinder<'a> {
    pub fn new(books: &'a [Book]) -> Self {
        Self { books }
    }

    pub fn by_title(&self, query: &str) -> Vec<&'a Book> {
        let query = normalize(query);
        self.filter(|b| b.title_matches(&query))
    }

    pub fn by_author(&self, query: &str) -> Vec<&'a Book> {
        let query = normalize(query);
        self.filter(|b| b.author_matches(&query))
    }

    pub fn by_year(&self, query: &str) -> Vec<&'a Book> {
        let query = normalize(query);
        self.filter(|b| b.year_matches(&query))
    }

    /// Dispatch on `field`
    pub fn find(&self, field: SearchField, query: &str) -> Vec<&'a Book> {
        match field {
            SearchField::Title => self.by_title(query),
            SearchField::Author => self.by_author(query),
            SearchField::Year => self.by_year(query),
        }
    }

    fn filter(&self, pred: impl Fn(&Book) -> bool) -> Vec<&'a Book> {
        self.books.iter().filter(|&b| pred(b)).collect()
    }
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}
