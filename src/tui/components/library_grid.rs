//! # LibraryGrid Component
//!
//! Two-column grid of `BookCard`s for the filtered library, inside a
//! vertical `ScrollView`.
//!
//! `LibraryGridState` (cursor + scroll offset) persists in `TuiState`;
//! `LibraryGrid` wraps it each frame together with the filtered books.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::book::Book;
use crate::tui::component::Component;
use crate::tui::components::BookCard;
use crate::tui::components::book_card::CARD_HEIGHT;
use crate::tui::event::TuiEvent;

pub const GRID_COLUMNS: usize = 2;
const ROW_SPACING: u16 = 1;
const ROW_STRIDE: u16 = CARD_HEIGHT + ROW_SPACING;

/// Top of `row` in scroll-view coordinates, pinned at `u16::MAX` for huge grids.
fn row_top(row: usize) -> u16 {
    u16::try_from(row.saturating_mul(ROW_STRIDE as usize)).unwrap_or(u16::MAX)
}

#[derive(Default)]
pub struct LibraryGridState {
    pub selected: usize,
    pub scroll_state: ScrollViewState,
    /// Last known viewport height (for keeping the cursor on screen)
    pub viewport_height: u16,
}

impl LibraryGridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the cursor over a grid of `len` books. Returns true if it moved.
    pub fn handle_event(&mut self, event: &TuiEvent, len: usize) -> bool {
        if len == 0 {
            self.selected = 0;
            return false;
        }
        let before = self.selected;
        match event {
            TuiEvent::CursorLeft => self.selected = self.selected.saturating_sub(1),
            TuiEvent::CursorRight => self.selected = (self.selected + 1).min(len - 1),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(GRID_COLUMNS);
            }
            TuiEvent::CursorDown => {
                if self.selected + GRID_COLUMNS < len {
                    self.selected += GRID_COLUMNS;
                }
            }
            TuiEvent::Home => self.selected = 0,
            TuiEvent::End => self.selected = len - 1,
            _ => return false,
        }
        self.scroll_to_selected();
        self.selected != before
    }

    /// Keep the cursor inside a list that just shrank (e.g. after a search).
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
        self.scroll_to_selected();
    }

    /// Adjust the scroll offset so the selected card's row is visible.
    pub fn scroll_to_selected(&mut self) {
        let top = row_top(self.selected / GRID_COLUMNS);
        let bottom = top.saturating_add(CARD_HEIGHT);
        let offset = self.scroll_state.offset();

        let y = if top < offset.y {
            top
        } else if self.viewport_height > 0 && bottom > offset.y.saturating_add(self.viewport_height) {
            bottom - self.viewport_height
        } else {
            offset.y
        };
        self.scroll_state.set_offset(Position { x: 0, y });
    }
}

pub struct LibraryGrid<'a> {
    state: &'a mut LibraryGridState,
    books: &'a [&'a Book],
}

impl<'a> LibraryGrid<'a> {
    pub fn new(state: &'a mut LibraryGridState, books: &'a [&'a Book]) -> Self {
        Self { state, books }
    }

    pub fn content_height(len: usize) -> u16 {
        row_top(len.div_ceil(GRID_COLUMNS)).saturating_sub(ROW_SPACING)
    }
}

impl Component for LibraryGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.viewport_height = area.height;

        if self.books.is_empty() {
            let empty = Paragraph::new("No books match your search.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        // One column reserved for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let card_width = content_width / GRID_COLUMNS as u16;
        let total_height = Self::content_height(self.books.len());

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (index, book) in self.books.iter().enumerate() {
            let top = row_top(index / GRID_COLUMNS);
            // Rows past the scroll view's u16 height can't be drawn
            if top.saturating_add(CARD_HEIGHT) > total_height {
                break;
            }
            let col = (index % GRID_COLUMNS) as u16;
            let card_area = Rect::new(col * card_width, top, card_width, CARD_HEIGHT);
            scroll_view.render_widget(BookCard::new(book, index == self.state.selected), card_area);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
