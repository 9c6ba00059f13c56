//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TabBar`: Tab strip across the top
//! - `StatusBar`: Status message and key hints along the bottom
//! - `BookCard`: One book in the library grid
//! - `MyBooks`: Currently-reading view with the progress gauge
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state between frames and emit events:
//! - `SearchBox`: Library search field
//! - `LibraryGrid`: Scrollable two-column grid with a cursor
//! - `Recommendations`: Recommended titles with "Add to Library"
//! - `BookPicker`: "Add Book" overlay
//!
//! Stateful components follow the persistent state + transient wrapper
//! pattern: `*State` lives in `TuiState`, the wrapper is built each frame
//! with borrowed state and props.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file, shared layout helpers)
//! ├── tab_bar.rs
//! ├── status_bar.rs
//! ├── book_card.rs
//! ├── my_books.rs
//! ├── search_box.rs
//! ├── library_grid.rs
//! ├── recommendations.rs
//! └── book_picker.rs
//! ```

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::UnicodeWidthStr;

pub mod book_card;
pub mod book_picker;
pub mod library_grid;
pub mod my_books;
pub mod recommendations;
pub mod search_box;
pub mod status_bar;
pub mod tab_bar;

pub use book_card::BookCard;
pub use book_picker::{BookPicker, BookPickerState, PickerEvent};
pub use library_grid::{LibraryGrid, LibraryGridState};
pub use my_books::MyBooks;
pub use recommendations::{RecommendationEvent, Recommendations, RecommendationsState};
pub use search_box::{SearchBox, SearchEvent};
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;

/// Placeholder shown where a book has no image reference.
pub const NO_IMAGE_PLACEHOLDER: &str = "[book]";

/// How an image reference is shown in place of the picture itself.
pub fn image_label(image: Option<&crate::core::book::ImageRef>) -> String {
    match image {
        Some(image) => format!("[image: {}]", image.as_str()),
        None => NO_IMAGE_PLACEHOLDER.to_string(),
    }
}

/// Truncate a string to fit within `max_width` display columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
