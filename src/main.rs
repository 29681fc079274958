use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use book_catalog::catalog::store::BookCatalog;
use book_catalog::cli::{self, books, menu::Menu};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("book_catalog=debug,info")
    } else {
        EnvFilter::new("book_catalog=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let data_file = cli.data_file.as_path();
    match cli.command {
        Some(cli::Commands::Add(args)) => books::run_add(args, data_file, cli.format, cli.verbose)?,
        Some(cli::Commands::Delete(args)) => {
            books::run_delete(args, data_file, cli.format, cli.verbose)?;
        }
        Some(cli::Commands::Status(args)) => {
            books::run_status(args, data_file, cli.format, cli.verbose)?;
        }
        Some(cli::Commands::Search(args)) => {
            books::run_search(args, data_file, cli.format, cli.verbose)?;
        }
        Some(cli::Commands::List) => books::run_list(data_file, cli.format, cli.verbose)?,
        Some(cli::Commands::Menu) | None => {
            let mut catalog = BookCatalog::open(data_file)?;
            let stdin = io::stdin();
            Menu::new(&mut catalog, stdin.lock(), io::stdout()).run()?;
        }
    }

    Ok(())
}
