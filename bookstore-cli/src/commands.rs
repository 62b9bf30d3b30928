use anyhow::{Context, Result};
use bookstore_catalog::{format_cents, Book, BookId, Catalog};
use clap::Subcommand;
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print every book, ordered by id
    List,
    /// Print a single book
    Show { id: BookId },
    /// Sell one copy and print the updated book
    Buy { id: BookId },
    /// Print the discounted price of a book
    Price { id: BookId },
    /// File a book under a category
    Categorize { id: BookId, category: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Read a catalog fixture from disk
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let catalog = Catalog::from_json_str(&raw)
        .with_context(|| format!("Failed to parse catalog {}", path.display()))?;

    debug!("Loaded {} books from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Execute `command` against `catalog` and render its output.
///
/// Changes only live in memory; nothing is written back to the fixture.
pub fn run(command: Command, catalog: &mut Catalog, format: OutputFormat) -> Result<String> {
    match command {
        Command::List => {
            let books = catalog.books();
            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&books)?),
                OutputFormat::Text => Ok(books
                    .iter()
                    .map(render_book)
                    .collect::<Vec<_>>()
                    .join("\n")),
            }
        }
        Command::Show { id } => {
            let book = catalog.get(id)?;
            render(&book, format)
        }
        Command::Buy { id } => {
            let book = catalog.purchase(id)?;
            info!("Sold a copy of {:?}, {} left", book.title, book.copies);
            render(&book, format)
        }
        Command::Price { id } => {
            let book = catalog.get(id)?;
            let net = book.net_price_cents();
            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                    "id": book.id,
                    "price_cents": book.price_cents,
                    "discount_percent": book.discount_percent,
                    "net_price_cents": net,
                }))?),
                OutputFormat::Text => Ok(format!(
                    "{} (list {}, {}% off)",
                    format_cents(net),
                    format_cents(book.price_cents),
                    book.discount_percent
                )),
            }
        }
        Command::Categorize { id, category } => {
            let book = catalog.set_category(id, &category)?;
            render(&book, format)
        }
    }
}

fn render(book: &Book, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(book)?),
        OutputFormat::Text => Ok(render_book(book)),
    }
}

fn render_book(book: &Book) -> String {
    let category = book
        .category()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{:>4}  {} by {}  copies: {}  price: {}  category: {}",
        book.id,
        book.title,
        book.author,
        book.copies,
        format_cents(book.net_price_cents()),
        category
    )
}
