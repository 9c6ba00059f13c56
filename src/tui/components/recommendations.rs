//! # Recommendations Component
//!
//! The static recommendations list. Enter on a title emits
//! `RecommendationEvent::Add`, the "Add to Library" button.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap};

use crate::core::book::{Book, BookId};
use crate::tui::component::Component;
use crate::tui::components::{image_label, truncate_str};
use crate::tui::event::TuiEvent;

pub const HEADING: &str = "If you like these books you will also love...";
const ADD_LABEL: &str = "[ Add to Library ]";

pub struct RecommendationsState {
    pub selected: usize,
    pub list_state: ListState,
}

impl Default for RecommendationsState {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationsState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent, books: &[Book]) -> Option<RecommendationEvent> {
        if books.is_empty() {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(books.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => books
                .get(self.selected)
                .map(|book| RecommendationEvent::Add(book.id())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationEvent {
    Add(BookId),
}

pub struct Recommendations<'a> {
    state: &'a mut RecommendationsState,
    books: &'a [Book],
}

impl<'a> Recommendations<'a> {
    pub fn new(state: &'a mut RecommendationsState, books: &'a [Book]) -> Self {
        Self { state, books }
    }
}

impl Component for Recommendations<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [heading_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                HEADING,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))
            .centered()
            .wrap(Wrap { trim: true }),
            heading_area,
        );

        let inner_width = list_area.width.saturating_sub(4) as usize;
        let title_width = inner_width.saturating_sub(ADD_LABEL.len() + 2);

        let items: Vec<ListItem> = self
            .books
            .iter()
            .enumerate()
            .map(|(i, book)| {
                let is_selected = i == self.state.selected;
                let title = truncate_str(book.title(), title_width);
                let padded_title = format!("{:<width$}", title, width = title_width);
                let title_style = if is_selected {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let add_style = if is_selected {
                    Style::default().fg(Color::Blue).add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Blue)
                };

                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(padded_title, title_style),
                        Span::raw("  "),
                        Span::styled(ADD_LABEL, add_style),
                    ]),
                    Line::styled(
                        format!("  {}", image_label(book.image())),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .title_bottom(Line::from(" ↑/↓ Move  Enter Add to Library ").centered())
            .padding(Padding::horizontal(1));

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}
