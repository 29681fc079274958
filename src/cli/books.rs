use std::path::Path;

use clap::Args;

use crate::catalog::store::BookCatalog;
use crate::cli::OutputFormat;
use crate::core::book::Book;
use crate::core::types::{BookStatus, SearchField};
use crate::utils::validation::{parse_book_id, parse_status};

#[derive(Args)]
pub struct AddArgs {
    /// Book title
    #[arg(long, required = true)]
    pub title: String,

    /// Book author
    #[arg(long, required = true)]
    pub author: String,

    /// Publication year (free text)
    #[arg(long, required = true)]
    pub year: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Book ID
    #[arg(required = true)]
    pub id: String,
}

#[derive(Args)]
pub struct StatusArgs {
    /// Book ID
    #[arg(required = true)]
    pub id: String,

    /// New status (available or checked-out)
    #[arg(required = true)]
    pub status: String,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Field to match against
    #[arg(long, value_enum, default_value = "title")]
    pub by: SearchField,

    /// Text to search for (exact match, case-insensitive)
    #[arg(required = true)]
    pub query: String,
}

fn open(data_file: &Path, verbose: bool) -> anyhow::Result<BookCatalog> {
    let catalog = BookCatalog::open(data_file)?;
    if verbose {
        eprintln!(
            "Loaded catalog with {} books from {}",
            catalog.len(),
            data_file.display()
        );
    }
    Ok(catalog)
}

pub fn run_add(
    args: AddArgs,
    data_file: &Path,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let mut catalog = open(data_file, verbose)?;
    let book = catalog.add(&args.title, &args.author, &args.year)?;

    match format {
        OutputFormat::Text => {
            println!("{book}");
            println!("Book added successfully!");
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(book)?),
        OutputFormat::Tsv => print_tsv(&[book]),
    }
    Ok(())
}

pub fn run_delete(
    args: DeleteArgs,
    data_file: &Path,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let id = parse_book_id(&args.id)?;
    let mut catalog = open(data_file, verbose)?;
    let book = catalog
        .delete(id)?
        .ok_or_else(|| anyhow::anyhow!("Book with ID {} not found", id))?;

    match format {
        OutputFormat::Text => println!("Book \"{}\" deleted successfully!", book.title),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&book)?),
        OutputFormat::Tsv => print_tsv(&[&book]),
    }
    Ok(())
}

pub fn run_status(
    args: StatusArgs,
    data_file: &Path,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let id = parse_book_id(&args.id)?;
    let status: BookStatus = parse_status(&args.status)?;
    let mut catalog = open(data_file, verbose)?;
    let book = catalog
        .update_status(id, status)?
        .ok_or_else(|| anyhow::anyhow!("Book with ID {} not found", id))?;

    match format {
        OutputFormat::Text => {
            println!("{book}");
            println!("Book status updated successfully!");
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(book)?),
        OutputFormat::Tsv => print_tsv(&[book]),
    }
    Ok(())
}

pub fn run_search(
    args: SearchArgs,
    data_file: &Path,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = open(data_file, verbose)?;
    let found = catalog.search(args.by, &args.query);

    if verbose {
        eprintln!("{} match(es) on {}", found.len(), args.by);
    }

    match format {
        OutputFormat::Text if found.is_empty() => {
            println!("No books found with {} '{}'.", args.by, args.query.trim());
        }
        _ => print_books(&found, format)?,
    }
    Ok(())
}

pub fn run_list(data_file: &Path, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = open(data_file, verbose)?;
    let books: Vec<&Book> = catalog.list().iter().collect();

    match format {
        OutputFormat::Text if books.is_empty() => println!("The library is empty."),
        _ => print_books(&books, format)?,
    }
    Ok(())
}

fn print_books(books: &[&Book], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for book in books {
                println!("{book}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(books)?),
        OutputFormat::Tsv => print_tsv(books),
    }
    Ok(())
}

fn print_tsv(books: &[&Book]) {
    println!("id\ttitle\tauthor\tyear\tstatus");
    for b in books {
        println!("{}\t{}\t{}\t{}\t{}", b.id, b.title, b.author, b.year, b.status);
    }
}
