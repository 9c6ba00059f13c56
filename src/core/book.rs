//! # Book Records
//!
//! A `Book` is an immutable value: an id minted at construction, a title,
//! and an optional opaque image reference. Identity is the id, never the
//! title, so two books with the same title are still different books.

use std::fmt;

use uuid::Uuid;

/// Opaque, unique book identifier (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(Uuid);

impl BookId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle to a display asset. The core never resolves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    EmptyTitle,
}

impl fmt::Display for BookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookError::EmptyTitle => write!(f, "book title must not be empty"),
        }
    }
}

impl std::error::Error for BookError {}

#[derive(Debug, Clone)]
pub struct Book {
    id: BookId,
    title: String,
    image: Option<ImageRef>,
}

impl Book {
    /// Builds a book with a fresh id. Blank titles are rejected.
    pub fn new(title: impl Into<String>, image: Option<ImageRef>) -> Result<Self, BookError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(BookError::EmptyTitle);
        }
        Ok(Self {
            id: BookId::generate(),
            title,
            image,
        })
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Book {}
