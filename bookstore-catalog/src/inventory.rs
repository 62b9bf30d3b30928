use crate::book::{Book, BookError};

/// Sell one copy of `book`.
///
/// Returns the updated copy; the caller's book is never modified.
pub fn buy(book: &Book) -> Result<Book, BookError> {
    if book.copies == 0 {
        return Err(BookError::OutOfStock { id: book.id });
    }

    let mut sold = book.clone();
    sold.copies -= 1;
    Ok(sold)
}

impl Book {
    /// See [`buy`]
    pub fn buy(&self) -> Result<Book, BookError> {
        buy(self)
    }
}
