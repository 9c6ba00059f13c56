use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::core::book::Book;
use crate::tui::components::{image_label, truncate_str};

/// Lines of title text shown before the card truncates.
const TITLE_LINES: usize = 2;
/// Borders (2) + image line + spacer + title lines.
pub const CARD_HEIGHT: u16 = 2 + 1 + 1 + TITLE_LINES as u16;
/// Borders (1 left + 1 right) and one column of padding per side.
const HORIZONTAL_OVERHEAD: u16 = 4;

/// A single book tile in the library grid.
///
/// Transient: built each frame by `LibraryGrid` and rendered into the
/// scroll view buffer, hence `Widget` rather than `Component`.
pub struct BookCard<'a> {
    pub book: &'a Book,
    pub is_selected: bool,
}

impl<'a> BookCard<'a> {
    pub fn new(book: &'a Book, is_selected: bool) -> Self {
        Self { book, is_selected }
    }

    /// Title wrapped to the card's inner width, cut to `TITLE_LINES`.
    pub fn title_lines(title: &str, card_width: u16) -> Vec<String> {
        let inner = card_width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;
        if inner == 0 {
            return Vec::new();
        }
        let wrapped = textwrap::wrap(title, inner);
        let mut lines: Vec<String> = wrapped
            .iter()
            .take(TITLE_LINES)
            .map(|l| l.to_string())
            .collect();
        if wrapped.len() > TITLE_LINES
            && let Some(last) = lines.last_mut()
        {
            *last = truncate_str(&format!("{last}..."), inner);
        }
        lines
    }
}

impl Widget for BookCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_style, title_style) = if self.is_selected {
            (
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::Gray),
            )
        };

        let mut lines = vec![
            Line::styled(
                image_label(self.book.image()),
                Style::default().fg(Color::DarkGray),
            ),
            Line::default(),
        ];
        lines.extend(
            Self::title_lines(self.book.title(), area.width)
                .into_iter()
                .map(|l| Line::styled(l, title_style)),
        );

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .padding(Padding::horizontal(1)),
            )
            .render(area, buf);
    }
}
