use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::book::{Book, BookError, BookId};

/// In-memory collection of books keyed by id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Book>", into = "Vec<Book>")]
pub struct Catalog {
    books: HashMap<BookId, Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            books: HashMap::new(),
        }
    }

    /// Build a catalog from a list of books, rejecting repeated ids
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for book in books {
            catalog.insert(book)?;
        }
        Ok(catalog)
    }

    /// Load a catalog fixture: a JSON array of books
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let books: Vec<Book> = serde_json::from_str(json)?;
        Self::from_books(books)
    }

    pub fn to_json_string(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.books())?)
    }

    /// Add a new book; the id must not already be present
    pub fn insert(&mut self, book: Book) -> Result<(), CatalogError> {
        if self.books.contains_key(&book.id) {
            return Err(CatalogError::DuplicateId(book.id));
        }

        debug!("Adding book {} to catalog", book.id);
        self.books.insert(book.id, book);
        Ok(())
    }

    /// Insert or replace a book, returning the previous entry
    pub fn upsert(&mut self, book: Book) -> Option<Book> {
        debug!("Upserting book {}", book.id);
        self.books.insert(book.id, book)
    }

    /// Look up a book by id, returning an independent copy
    pub fn get(&self, id: BookId) -> Result<Book, CatalogError> {
        self.books
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.books.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Copies of every book, ordered by id
    pub fn books(&self) -> Vec<Book> {
        let mut books: Vec<Book> = self.books.values().cloned().collect();
        books.sort_by_key(|book| book.id);
        books
    }

    /// Sell one copy of the book with `id` and store the result.
    ///
    /// The catalog is unchanged when the book is missing or out of stock.
    pub fn purchase(&mut self, id: BookId) -> Result<Book, CatalogError> {
        let entry = self.books.get_mut(&id).ok_or(CatalogError::NotFound(id))?;

        let sold = entry.buy().map_err(|e| {
            warn!("Purchase refused: {}", e);
            e
        })?;

        *entry = sold.clone();
        debug!("Sold one copy of book {}, {} left", id, sold.copies);
        Ok(sold)
    }

    /// Validate and assign a category to the stored book with `id`
    pub fn set_category(&mut self, id: BookId, category: &str) -> Result<Book, CatalogError> {
        let entry = self.books.get_mut(&id).ok_or(CatalogError::NotFound(id))?;

        entry.set_category(category)?;
        debug!("Book {} filed under {}", id, category);
        Ok(entry.clone())
    }
}

/// Look up `id` in `catalog`
pub fn get_book(catalog: &Catalog, id: BookId) -> Result<Book, CatalogError> {
    catalog.get(id)
}

impl TryFrom<Vec<Book>> for Catalog {
    type Error = CatalogError;

    fn try_from(books: Vec<Book>) -> Result<Self, Self::Error> {
        Self::from_books(books)
    }
}

impl From<Catalog> for Vec<Book> {
    fn from(catalog: Catalog) -> Self {
        catalog.books()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("book not found: {0}")]
    NotFound(BookId),

    #[error("duplicate book id: {0}")]
    DuplicateId(BookId),

    #[error(transparent)]
    Book(#[from] BookError),

    #[error("invalid catalog fixture: {0}")]
    Fixture(#[from] serde_json::Error),
}
