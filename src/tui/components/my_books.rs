//! # MyBooks Component
//!
//! The "My Books" tab: what the user is currently reading and how far in.
//! Stateless; the session is a prop.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph, Wrap};

use crate::core::state::Session;
use crate::tui::component::Component;
use crate::tui::components::image_label;

pub const NO_BOOK_MESSAGE: &str = "No book currently being read.";
pub const NO_IMAGE_MESSAGE: &str = "No Image Available";

pub struct MyBooks<'a> {
    pub session: &'a Session,
}

impl<'a> MyBooks<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    fn header_lines() -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                "Book Tracker",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Reading Progress",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ]
    }
}

impl Component for MyBooks<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = Self::header_lines();

        let Some(book) = self.session.current_book() else {
            lines.push(Line::from(NO_BOOK_MESSAGE));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Press a to add a book",
                Style::default().fg(Color::DarkGray),
            )));
            let paragraph = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, area);
            return;
        };

        let image_line = match book.image() {
            Some(_) => image_label(book.image()),
            None => NO_IMAGE_MESSAGE.to_string(),
        };
        lines.push(Line::styled(image_line, Style::default().fg(Color::DarkGray)));
        lines.push(Line::default());
        lines.push(Line::from("Currently Reading:"));
        lines.push(Line::from(Span::styled(
            book.title(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
        lines.push(Line::from(format!("Page: {}", self.session.current_page())));

        let text_height = lines.len() as u16;
        let [text_area, gauge_area, hint_area] = Layout::vertical([
            Constraint::Length(text_height),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .flex(Flex::Start)
        .areas(area);

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            text_area,
        );

        let [gauge_area] = Layout::horizontal([Constraint::Percentage(80)])
            .flex(Flex::Center)
            .areas(gauge_area);
        let progress = self.session.progress().value();
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
            .ratio(progress)
            .label(format!("{:.1}%", progress * 100.0));
        frame.render_widget(gauge, gauge_area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::default(),
                Line::from("←/→ fine  ↑/↓ coarse  a Add Book"),
            ])
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
            hint_area,
        );
    }
}
