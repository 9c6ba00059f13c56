//! # Actions
//!
//! Everything that can happen in the tracker becomes an `Action`.
//! User picks a title in the picker? That's `Action::PickBook(id)`.
//! User drags the slider? That's `Action::NudgeProgress(step)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and tells the caller what to do next via `Effect`.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, warn};

use crate::core::book::BookId;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// "Add Book" pressed
    OpenPicker,
    /// Title chosen in the picker
    PickBook(BookId),
    /// Picker cancelled
    DismissPicker,
    /// "Add to Library" on a recommendation
    Recommend(BookId),
    /// Absolute slider position
    SetProgress(f64),
    /// Relative slider movement
    NudgeProgress(f64),
    SetSearch(String),
    ClearSearch,
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::OpenPicker => {
            app.session.open_picker();
            app.status_message = String::from("Choose a book");
        }
        Action::PickBook(id) => match app.catalog.find(id).cloned() {
            Some(book) => {
                app.status_message = format!("Reading {}", book.title());
                app.session.pick_book(book);
            }
            None => unknown_book(app, id),
        },
        Action::DismissPicker => {
            app.session.dismiss_picker();
            app.status_message.clear();
        }
        Action::Recommend(id) => match app.catalog.find(id).cloned() {
            Some(book) => {
                app.status_message = format!("Added {}", book.title());
                app.session.recommend(book);
            }
            None => unknown_book(app, id),
        },
        Action::SetProgress(value) => app.session.set_progress(value),
        Action::NudgeProgress(delta) => app.session.nudge_progress(delta),
        Action::SetSearch(query) => app.search_query = query,
        Action::ClearSearch => app.search_query.clear(),
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}

fn unknown_book(app: &mut App, id: BookId) {
    warn!("No book with id {} in the catalog", id);
    app.status_message = String::from("Unknown book");
}
