//! # Book Picker Component
//!
//! Overlay for choosing the book to read. Shown whenever the session's
//! picker is open; lists the library catalog.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `BookPickerState` lives in `TuiState`
//! - `BookPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::book::{Book, BookId};
use crate::tui::components::{centered_rect, image_label, truncate_str};
use crate::tui::event::TuiEvent;

/// Persistent state for the picker overlay.
pub struct BookPickerState {
    pub selected: usize,
    pub list_state: ListState,
}

impl Default for BookPickerState {
    fn default() -> Self {
        Self::new()
    }
}

impl BookPickerState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    /// Handle a key event, returning a PickerEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent, books: &[Book]) -> Option<PickerEvent> {
        match event {
            TuiEvent::Escape => Some(PickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                if !books.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !books.is_empty() {
                    self.selected = (self.selected + 1).min(books.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => books
                .get(self.selected)
                .map(|book| PickerEvent::Pick(book.id())),
            _ => None,
        }
    }
}

/// Events emitted by the picker.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEvent {
    Pick(BookId),
    Dismiss,
}

/// Transient render wrapper for the picker overlay.
pub struct BookPicker<'a> {
    state: &'a mut BookPickerState,
    books: &'a [Book],
    current: Option<BookId>,
}

impl<'a> BookPicker<'a> {
    pub fn new(state: &'a mut BookPickerState, books: &'a [Book], current: Option<BookId>) -> Self {
        Self {
            state,
            books,
            current,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 60, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Add Book ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Cancel ").centered())
            .padding(Padding::horizontal(1));

        if self.books.is_empty() {
            let empty = Paragraph::new("The library is empty.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        let inner_width = overlay.width.saturating_sub(4) as usize; // borders + padding

        let items: Vec<ListItem> = self
            .books
            .iter()
            .enumerate()
            .map(|(i, book)| {
                let is_current = self.current == Some(book.id());
                let marker = if is_current { " *" } else { "" };
                let icon = image_label(book.image());
                let title_width = inner_width
                    .saturating_sub(icon.width() + 1)
                    .saturating_sub(marker.len());
                let title = truncate_str(book.title(), title_width);

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_current {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(icon, Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                    Span::styled(title, style),
                    Span::styled(marker, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);

        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}
