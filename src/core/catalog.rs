//! # Catalog
//!
//! Two fixed, ordered lists of books: the library the picker and the grid
//! draw from, and the recommendations. Both are built once at startup and
//! never change afterwards.

use crate::core::book::{Book, BookId, ImageRef};

const BUILTIN_LIBRARY: &[(&str, &str)] = &[
    ("Powerless by Lauren Roberts", "powerless"),
    ("Normal People by Sally Rooney", "normal"),
    ("The Bell Jar by Sylvia Plath", "belljar"),
    ("Binding 13 by Chloe Walsh", "binding"),
    ("Pretty Girls by Karin Slaughter", "pretty"),
    ("Bride by Ali Hazelwood", "bride"),
];

const BUILTIN_RECOMMENDED: &[(&str, &str)] = &[
    ("A Court of Thorns and Roses by Sarah J. Mass", "acotar"),
    ("A Good Girl's Guide to Murder by Holly Jackson", "agggtm"),
    ("Persuasion by Jane Austen", "persuasion"),
    ("Fourth Wing by Rebecca Yarros", "fourth"),
    ("Bunny by Mona Awad", "bunny"),
    ("Then She Was Gone by Lisa Jewell", "tswg"),
];

#[derive(Debug, Clone)]
pub struct Catalog {
    library: Vec<Book>,
    recommended: Vec<Book>,
}

impl Catalog {
    pub fn new(library: Vec<Book>, recommended: Vec<Book>) -> Self {
        Self {
            library,
            recommended,
        }
    }

    /// The twelve titles the app ships with.
    pub fn builtin() -> Self {
        Self::new(builtin_library(), builtin_recommended())
    }

    pub fn library(&self) -> &[Book] {
        &self.library
    }

    pub fn recommended(&self) -> &[Book] {
        &self.recommended
    }

    /// Looks a book up by id in the library first, then the recommendations.
    pub fn find(&self, id: BookId) -> Option<&Book> {
        self.library
            .iter()
            .chain(self.recommended.iter())
            .find(|book| book.id() == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn builtin_library() -> Vec<Book> {
    books_from_table(BUILTIN_LIBRARY)
}

pub fn builtin_recommended() -> Vec<Book> {
    books_from_table(BUILTIN_RECOMMENDED)
}

fn books_from_table(table: &[(&str, &str)]) -> Vec<Book> {
    // Titles in the tables are non-empty, so nothing is dropped here.
    table
        .iter()
        .filter_map(|(title, image)| Book::new(*title, Some(ImageRef::new(*image))).ok())
        .collect()
}
