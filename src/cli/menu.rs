//! Interactive text menu over a [`BookCatalog`].
//!
//! Every prompt loops until the operator enters something acceptable, so the
//! catalog is only ever called with validated input. End of input at any
//! prompt leaves the menu as if "Exit" had been chosen.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::catalog::storage::BookStorage;
use crate::catalog::store::BookCatalog;
use crate::core::book::Book;
use crate::core::types::{BookId, BookStatus, SearchField};
use crate::utils::validation::{parse_book_id, parse_status, require_non_empty};

const MAIN_MENU: &str = "\nMenu:\n\
    1. Add a book\n\
    2. Delete a book\n\
    3. Find a book\n\
    4. Show all books\n\
    5. Change book status\n\
    6. Exit";

const SEARCH_MENU: &str = "\nSearch:\n\
    1. By title\n\
    2. By author\n\
    3. By publication year\n\
    4. Leave search";

const CHOICE_PROMPT: &str = "Choose an action: ";
const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
const NOT_FOUND: &str = "No book with that ID was found.";

/// Whether the loop that handled a command should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Menu<'c, S: BookStorage, R, W> {
    catalog: &'c mut BookCatalog<S>,
    input: R,
    out: W,
}

impl<'c, S: BookStorage, R: BufRead, W: Write> Menu<'c, S, R, W> {
    pub fn new(catalog: &'c mut BookCatalog<S>, input: R, out: W) -> Self {
        Self {
            catalog,
            input,
            out,
        }
    }

    /// Run the main menu until the operator exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.out, "{MAIN_MENU}")?;
            let Some(choice) = self.prompt(CHOICE_PROMPT)? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.add_book()?,
                "2" => self.delete_book()?,
                "3" => self.search_books()?,
                "4" => self.list_books()?,
                "5" => self.update_status()?,
                "6" => {
                    writeln!(self.out, "Exiting.")?;
                    Flow::Quit
                }
                _ => {
                    writeln!(self.out, "{INVALID_CHOICE}")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn add_book(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt_required("Enter the book title: ", "Title")? else {
            return Ok(Flow::Quit);
        };
        let Some(author) = self.prompt_required("Enter the book author: ", "Author")? else {
            return Ok(Flow::Quit);
        };
        let Some(year) = self.prompt_required("Enter the publication year: ", "Year")? else {
            return Ok(Flow::Quit);
        };

        let book = self.catalog.add(&title, &author, &year)?.clone();
        writeln!(self.out, "{book}")?;
        writeln!(self.out, "Book added successfully!")?;
        Ok(Flow::Continue)
    }

    fn delete_book(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_id()? else {
            return Ok(Flow::Quit);
        };

        match self.catalog.delete(id)? {
            Some(book) => writeln!(self.out, "Book \"{}\" deleted successfully!", book.title)?,
            None => writeln!(self.out, "{NOT_FOUND}")?,
        }
        Ok(Flow::Continue)
    }

    fn update_status(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_id()? else {
            return Ok(Flow::Quit);
        };

        let Some(book) = self.catalog.get(id) else {
            writeln!(self.out, "{NOT_FOUND}")?;
            return Ok(Flow::Continue);
        };
        writeln!(self.out, "{book}")?;

        let Some(status) = self.prompt_status()? else {
            return Ok(Flow::Quit);
        };
        if self.catalog.update_status(id, status)?.is_some() {
            writeln!(self.out, "Book status updated successfully!")?;
        }
        Ok(Flow::Continue)
    }

    fn search_books(&mut self) -> Result<Flow> {
        loop {
            writeln!(self.out, "{SEARCH_MENU}")?;
            let Some(choice) = self.prompt(CHOICE_PROMPT)? else {
                return Ok(Flow::Quit);
            };

            let field = match choice.as_str() {
                "1" => SearchField::Title,
                "2" => SearchField::Author,
                "3" => SearchField::Year,
                "4" => {
                    writeln!(self.out, "Leaving search.")?;
                    return Ok(Flow::Continue);
                }
                _ => {
                    writeln!(self.out, "{INVALID_CHOICE}")?;
                    continue;
                }
            };

            if self.search_by(field)? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn search_by(&mut self, field: SearchField) -> Result<Flow> {
        let label = match field {
            SearchField::Title => "Enter a title to search for: ",
            SearchField::Author => "Enter an author to search for: ",
            SearchField::Year => "Enter a publication year to search for: ",
        };
        let Some(query) = self.prompt(label)? else {
            return Ok(Flow::Quit);
        };

        let found: Vec<Book> = self
            .catalog
            .search(field, &query)
            .into_iter()
            .cloned()
            .collect();

        if found.is_empty() {
            match field {
                SearchField::Title => writeln!(self.out, "No books with that title were found.")?,
                SearchField::Author => writeln!(self.out, "No books by that author were found.")?,
                SearchField::Year => {
                    writeln!(self.out, "No books published in {} were found.", query.to_lowercase())?;
                }
            }
        } else {
            for book in &found {
                writeln!(self.out, "{book}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn list_books(&mut self) -> Result<Flow> {
        if self.catalog.is_empty() {
            writeln!(self.out, "The library is empty.")?;
        } else {
            for book in self.catalog.list() {
                writeln!(self.out, "{book}")?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Print `label` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_required(&mut self, label: &str, field: &'static str) -> Result<Option<String>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match require_non_empty(field, &line) {
                Ok(value) => return Ok(Some(value.to_string())),
                Err(e) => writeln!(self.out, "{e}. Please try again.")?,
            }
        }
    }

    fn prompt_id(&mut self) -> Result<Option<BookId>> {
        loop {
            let Some(line) = self.prompt("Enter the book ID: ")? else {
                return Ok(None);
            };
            match parse_book_id(&line) {
                Ok(id) => return Ok(Some(id)),
                Err(_) => writeln!(self.out, "Invalid ID. Please enter a number.")?,
            }
        }
    }

    fn prompt_status(&mut self) -> Result<Option<BookStatus>> {
        let choices = BookStatus::ALL.map(BookStatus::as_str).join("/");
        loop {
            let Some(line) = self.prompt(&format!("Enter the book status ({choices}): "))? else {
                return Ok(None);
            };
            match parse_status(&line) {
                Ok(status) => return Ok(Some(status)),
                Err(_) => writeln!(
                    self.out,
                    "Invalid status. Please enter 'available' or 'checked-out'."
                )?,
            }
        }
    }
}
