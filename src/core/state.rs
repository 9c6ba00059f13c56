//! # Application State
//!
//! Core business state for the tracker. Domain logic only; presentation
//! state (active tab, cursors, scroll offsets) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog          // library + recommendations, fixed at startup
//! ├── session: Session          // what the user is reading, picker, progress
//! ├── search_query: String      // library search box contents
//! └── status_message: String    // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::info;

use crate::core::book::Book;
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::search;

pub const DEFAULT_TOTAL_PAGES: u32 = 480;
pub const DEFAULT_PROGRESS: f64 = 0.6;
/// Matches the slider granularity of the original reading view.
pub const DEFAULT_PROGRESS_STEP: f64 = 0.001;

/// Reading progress as a fraction in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Progress(f64);

impl Progress {
    /// Clamps into [0, 1]. NaN becomes 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Page reached for a book of `total_pages` pages.
    pub fn page_of(self, total_pages: u32) -> u32 {
        (self.0 * f64::from(total_pages)).round() as u32
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self(DEFAULT_PROGRESS)
    }
}

/// Selection and reading state shared by every view.
///
/// `current_book` is never cleared once set. `current_page` is not stored;
/// it is always derived from `progress`.
#[derive(Debug, Clone)]
pub struct Session {
    current_book: Option<Book>,
    adding_book: bool,
    selected_book: Option<Book>,
    progress: Progress,
    total_pages: u32,
}

impl Session {
    pub fn new(total_pages: u32, initial_progress: f64) -> Self {
        Self {
            current_book: None,
            adding_book: false,
            selected_book: None,
            progress: Progress::new(initial_progress),
            total_pages,
        }
    }

    pub fn current_book(&self) -> Option<&Book> {
        self.current_book.as_ref()
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.selected_book.as_ref()
    }

    pub fn adding_book(&self) -> bool {
        self.adding_book
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn current_page(&self) -> u32 {
        self.progress.page_of(self.total_pages)
    }

    pub fn open_picker(&mut self) {
        self.adding_book = true;
    }

    pub fn dismiss_picker(&mut self) {
        self.adding_book = false;
    }

    pub fn pick_book(&mut self, book: Book) {
        info!("Now reading: {}", book.title());
        self.selected_book = Some(book.clone());
        self.current_book = Some(book);
        self.adding_book = false;
    }

    /// "Add to Library" from the recommendations: adopt the book, then
    /// present the picker.
    pub fn recommend(&mut self, book: Book) {
        info!("Adopted recommendation: {}", book.title());
        self.selected_book = Some(book.clone());
        self.current_book = Some(book);
        self.adding_book = true;
    }

    pub fn set_progress(&mut self, value: f64) {
        self.progress = Progress::new(value);
    }

    pub fn nudge_progress(&mut self, delta: f64) {
        self.set_progress(self.progress.value() + delta);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL_PAGES, DEFAULT_PROGRESS)
    }
}

pub struct App {
    pub catalog: Catalog,
    pub session: Session,
    pub search_query: String,
    pub status_message: String,
    pub progress_step: f64,
}

impl App {
    pub fn new(catalog: Catalog, session: Session) -> Self {
        Self {
            catalog,
            session,
            search_query: String::new(),
            status_message: String::from("Welcome to Book Tracker!"),
            progress_step: DEFAULT_PROGRESS_STEP,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(
            config.catalog.clone(),
            Session::new(config.total_pages, config.initial_progress),
        );
        app.progress_step = config.progress_step;
        app
    }

    /// Library books matching the current search query.
    pub fn filtered_library(&self) -> Vec<&Book> {
        search::filter(self.catalog.library(), &self.search_query)
    }
}
