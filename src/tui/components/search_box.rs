//! # SearchBox Component
//!
//! Single-line search field above the library grid.
//!
//! The buffer is internal state; every edit emits the new query so the
//! parent can forward it to the core as `Action::SetSearch`. The cursor
//! always sits at the end of the text.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const SEARCH_BOX_HEIGHT: u16 = 3;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Query text changed
    Changed(String),
    /// Query cleared (Ctrl+U)
    Cleared,
}

pub struct SearchBox {
    pub buffer: String,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Tail of the buffer that fits in `width` columns.
    fn visible_text(&self, width: usize) -> &str {
        let mut start = 0;
        while self.buffer[start..].width() > width {
            match self.buffer[start..].chars().next() {
                Some(c) => start += c.len_utf8(),
                None => break,
            }
        }
        &self.buffer[start..]
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(3) as usize;
        let visible = self.visible_text(inner_width);

        let (text, style) = if self.buffer.is_empty() {
            ("Search", Style::default().fg(Color::DarkGray))
        } else {
            (visible, Style::default().fg(Color::White))
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Search ")
            .title_bottom(" Ctrl+U Clear ");

        frame.render_widget(Paragraph::new(text).style(style).block(block), area);

        let cursor_x = area.x + 1 + visible.width() as u16;
        frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => {
                let line: String = text.chars().filter(|c| !c.is_control()).collect();
                if line.is_empty() {
                    return None;
                }
                self.buffer.push_str(&line);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => self
                .buffer
                .pop()
                .map(|_| SearchEvent::Changed(self.buffer.clone())),
            TuiEvent::ClearLine => {
                if self.buffer.is_empty() {
                    None
                } else {
                    self.buffer.clear();
                    Some(SearchEvent::Cleared)
                }
            }
            _ => None,
        }
    }
}
