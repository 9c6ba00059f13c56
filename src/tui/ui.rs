use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::book::Book;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::search_box::SEARCH_BOX_HEIGHT;
use crate::tui::components::{
    BookPicker, LibraryGrid, MyBooks, Recommendations, StatusBar, TabBar,
};
use crate::tui::{Tab, TuiState};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [tab_area, main_area, status_area] = layout.areas(frame.area());

    TabBar::new(tui.active_tab).render(frame, tab_area);

    match tui.active_tab {
        Tab::MyBooks => MyBooks::new(&app.session).render(frame, main_area),
        Tab::Library => draw_library(frame, main_area, app, tui),
        Tab::Recommendations => {
            Recommendations::new(&mut tui.recommendations, app.catalog.recommended())
                .render(frame, main_area)
        }
    }

    StatusBar::new(&app.status_message, hints(app, tui.active_tab)).render(frame, status_area);

    if app.session.adding_book() {
        let current = app.session.current_book().map(Book::id);
        BookPicker::new(&mut tui.picker, app.catalog.library(), current).render(frame, main_area);
    }
}

fn draw_library(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let [search_area, grid_area] =
        Layout::vertical([Constraint::Length(SEARCH_BOX_HEIGHT), Constraint::Min(0)]).areas(area);

    let books = app.filtered_library();
    tui.search_box.render(frame, search_area);
    LibraryGrid::new(&mut tui.library, &books).render(frame, grid_area);
}

/// Key hints for the status bar.
fn hints(app: &App, tab: Tab) -> &'static str {
    if app.session.adding_book() {
        return " ↑/↓ Move  Enter Select  Esc Cancel ";
    }
    match tab {
        Tab::MyBooks => " Tab Switch  a Add Book  ←/→ Progress  q Quit ",
        Tab::Library => " Tab Switch  Type to search  Arrows Move  Ctrl+C Quit ",
        Tab::Recommendations => " Tab Switch  Enter Add to Library  q Quit ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_ui_initial() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("No book currently being read."));
        assert!(text.contains("Welcome to Book Tracker!"));
    }

    #[test]
    fn test_draw_library_filtered() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.active_tab = Tab::Library;
        update(&mut app, Action::SetSearch("the".to_string()));

        let text = render(&app, &mut tui);
        assert!(text.contains("The Bell Jar"));
        assert!(!text.contains("Powerless"));
    }

    #[test]
    fn test_draw_picker_overlay_when_adding() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::OpenPicker);

        let text = render(&app, &mut tui);
        assert!(text.contains("Add Book"));
        assert!(text.contains("Normal People by Sally Rooney"));
        assert!(text.contains("Esc Cancel"));
    }

    #[test]
    fn test_draw_recommendations() {
        let app = test_app();
        let mut tui = TuiState::new();
        tui.active_tab = Tab::Recommendations;

        let text = render(&app, &mut tui);
        assert!(text.contains("If you like these books you will also love..."));
        assert!(text.contains("Bunny by Mona Awad"));
    }
}
