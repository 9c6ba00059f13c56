//! # TabBar Component
//!
//! Top line: app name on the left, the three tabs after it. Purely
//! presentational; the active tab is a prop from `TuiState`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Tabs;

use crate::tui::Tab;
use crate::tui::component::Component;

const APP_NAME: &str = " Book Tracker ";

pub struct TabBar {
    pub active: Tab,
}

impl TabBar {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [name_area, tabs_area] = Layout::horizontal([
            Constraint::Length(APP_NAME.len() as u16),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(
            Span::styled(
                APP_NAME,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            name_area,
        );

        let titles = Tab::ALL.iter().map(|tab| tab.title());
        let tabs = Tabs::new(titles)
            .select(self.active.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        frame.render_widget(tabs, tabs_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_tab_bar_lists_all_tabs() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tab_bar = TabBar::new(Tab::Library);

        terminal.draw(|f| tab_bar.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Book Tracker"));
        assert!(text.contains("My Books"));
        assert!(text.contains("Library"));
        assert!(text.contains("Recommendations"));
    }
}
