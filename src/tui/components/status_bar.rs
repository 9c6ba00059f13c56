//! # StatusBar Component
//!
//! Bottom line: the core status message on the left, key hints for the
//! current context on the right. Stateless; both are props.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub struct StatusBar<'a> {
    pub status_message: &'a str,
    pub hints: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new(status_message: &'a str, hints: &'a str) -> Self {
        Self {
            status_message,
            hints,
        }
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let hints_width = (self.hints.width() as u16).min(area.width);
        let [status_area, hints_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);

        frame.render_widget(
            Paragraph::new(self.status_message).style(Style::default().fg(Color::Green)),
            status_area,
        );
        frame.render_widget(
            Paragraph::new(self.hints)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Right),
            hints_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_status_and_hints_rendered() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = StatusBar::new("Reading Bunny", " q Quit ");

        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Reading Bunny"));
        assert!(text.contains("q Quit"));
    }
}
