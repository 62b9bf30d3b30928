use serde::{Deserialize, Serialize};
use crate::category::Category;

/// Identifier of a book, unique within a catalog
pub type BookId = u64;

/// A single book on the shelf
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,

    /// Copies left in stock
    #[serde(default)]
    pub copies: u32,

    /// List price in cents
    #[serde(default)]
    pub price_cents: u64,

    /// Discount applied at checkout, 0-100 by convention
    #[serde(default)]
    pub discount_percent: u8,

    /// Only assignable through `set_category`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<Category>,
}

impl Book {
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    pub fn with_copies(mut self, copies: u32) -> Self {
        self.copies = copies;
        self
    }

    pub fn with_price(mut self, price_cents: u64, discount_percent: u8) -> Self {
        self.price_cents = price_cents;
        self.discount_percent = discount_percent;
        self
    }

    pub fn in_stock(&self) -> bool {
        self.copies > 0
    }

    /// Current category, `None` until one has been assigned
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Validate `category` against the allow-list and assign it.
    ///
    /// The book is left untouched when the value is rejected.
    pub fn set_category(&mut self, category: &str) -> Result<(), BookError> {
        let category: Category = category.parse()?;
        self.category = Some(category);
        Ok(())
    }
}

/// Errors raised by operations on a single book
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookError {
    #[error("book {id} is out of stock")]
    OutOfStock {
        id: BookId,
    },

    #[error("unknown category {0:?}")]
    UnknownCategory(String),
}
