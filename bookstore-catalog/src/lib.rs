pub mod book;
pub mod category;
pub mod catalog;
pub mod inventory;
pub mod pricing;

pub use book::{Book, BookError, BookId};
pub use category::Category;
pub use catalog::{get_book, Catalog, CatalogError};
pub use inventory::buy;
pub use pricing::{format_cents, net_price_cents};
