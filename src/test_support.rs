//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::book::{Book, ImageRef};
use crate::core::catalog::Catalog;
use crate::core::state::{App, Session};

pub fn test_book(title: &str) -> Book {
    Book::new(title, None).unwrap()
}

/// Three library books (the last without an image) and two recommendations.
pub fn test_catalog() -> Catalog {
    Catalog::new(
        vec![
            Book::new("Powerless by Lauren Roberts", Some(ImageRef::new("powerless"))).unwrap(),
            Book::new("Normal People by Sally Rooney", Some(ImageRef::new("normal"))).unwrap(),
            Book::new("The Bell Jar by Sylvia Plath", None).unwrap(),
        ],
        vec![
            Book::new("Fourth Wing by Rebecca Yarros", Some(ImageRef::new("fourth"))).unwrap(),
            Book::new("Bunny by Mona Awad", None).unwrap(),
        ],
    )
}

/// Creates a test App over `test_catalog()` with default progress.
pub fn test_app() -> App {
    App::new(test_catalog(), Session::default())
}
