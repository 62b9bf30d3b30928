use bookstore_catalog::{buy, get_book, Book, BookError, Catalog, CatalogError, Category};
use pretty_assertions::assert_eq;

fn shelf() -> Catalog {
    let mut memoir = Book::new(3, "I Know Why the Caged Bird Sings", "Maya Angelou")
        .with_copies(1)
        .with_price(1500, 0);
    memoir.set_category("Autobiography").unwrap();

    Catalog::from_books([
        Book::new(1, "A", "Author A").with_copies(2).with_price(4000, 25),
        Book::new(2, "B", "Author B").with_copies(0).with_price(2500, 100),
        memoir,
    ])
    .unwrap()
}

#[test]
fn test_lookup_scenario() {
    let catalog = Catalog::from_books([Book::new(1, "A", ""), Book::new(2, "B", "")]).unwrap();

    assert_eq!(catalog.get(2).unwrap(), Book::new(2, "B", ""));
    assert!(matches!(catalog.get(99), Err(CatalogError::NotFound(99))));
}

#[test]
fn test_lookup_every_present_id() {
    let catalog = shelf();

    for book in catalog.books() {
        assert_eq!(get_book(&catalog, book.id).unwrap(), book);
    }
    assert!(matches!(get_book(&catalog, 0), Err(CatalogError::NotFound(0))));
}

#[test]
fn test_checkout_flow() {
    let mut catalog = shelf();

    let original = catalog.get(1).unwrap();
    let sold = buy(&original).unwrap();
    assert_eq!(original.copies, 2);
    assert_eq!(sold.copies, 1);
    // Buying a copy does not touch the catalog
    assert_eq!(catalog.get(1).unwrap().copies, 2);

    catalog.purchase(1).unwrap();
    catalog.purchase(1).unwrap();
    let err = catalog.purchase(1).unwrap_err();
    assert!(matches!(err, CatalogError::Book(BookError::OutOfStock { id: 1 })));
    assert_eq!(catalog.get(1).unwrap().copies, 0);
}

#[test]
fn test_pricing_and_categories() {
    let catalog = shelf();

    assert_eq!(catalog.get(1).unwrap().net_price_cents(), 3000);
    assert_eq!(catalog.get(2).unwrap().net_price_cents(), 0);
    assert_eq!(catalog.get(3).unwrap().net_price_cents(), 1500);

    assert_eq!(catalog.get(3).unwrap().category(), Some(Category::Autobiography));
    assert_eq!(catalog.get(1).unwrap().category(), None);
}
