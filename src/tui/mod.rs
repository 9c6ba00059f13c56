//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! 1. Ctrl+C quits from anywhere.
//! 2. While the session's picker is open, every event goes to the picker.
//! 3. Tab / Shift+Tab switch tabs.
//! 4. Everything else goes to the active tab. On the Library tab, typed
//!    characters belong to the search box, so `q` only quits elsewhere.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an event (resize
//! included) and otherwise sleeps in `poll`.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    BookPickerState, LibraryGridState, PickerEvent, RecommendationEvent, RecommendationsState,
    SearchBox, SearchEvent,
};
pub use crate::tui::event::TuiEvent;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

/// Coarse slider movement (↑/↓) as a multiple of the configured step.
const COARSE_STEP_MULTIPLIER: f64 = 50.0;
const IDLE_POLL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    MyBooks,
    Library,
    Recommendations,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::MyBooks, Tab::Library, Tab::Recommendations];

    pub fn title(self) -> &'static str {
        match self {
            Tab::MyBooks => "My Books",
            Tab::Library => "Library",
            Tab::Recommendations => "Recommendations",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::MyBooks => 0,
            Tab::Library => 1,
            Tab::Recommendations => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub active_tab: Tab,
    pub search_box: SearchBox,
    pub library: LibraryGridState,
    pub recommendations: RecommendationsState,
    pub picker: BookPickerState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::MyBooks,
            search_box: SearchBox::new(),
            library: LibraryGridState::new(),
            recommendations: RecommendationsState::new(),
            picker: BookPickerState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Route one terminal event through the TUI state into the core.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Resize => return Effect::None,
        TuiEvent::ForceQuit => return dispatch(app, tui, Action::Quit),
        _ => {}
    }

    // Picker overlay captures everything while open
    if app.session.adding_book() {
        return match tui.picker.handle_event(&event, app.catalog.library()) {
            Some(PickerEvent::Pick(id)) => dispatch(app, tui, Action::PickBook(id)),
            Some(PickerEvent::Dismiss) => dispatch(app, tui, Action::DismissPicker),
            None => Effect::None,
        };
    }

    match event {
        TuiEvent::NextTab => {
            tui.active_tab = tui.active_tab.next();
            return Effect::None;
        }
        TuiEvent::PrevTab => {
            tui.active_tab = tui.active_tab.prev();
            return Effect::None;
        }
        _ => {}
    }

    match tui.active_tab {
        Tab::MyBooks => {
            let step = app.progress_step;
            match event {
                TuiEvent::InputChar('q') => dispatch(app, tui, Action::Quit),
                TuiEvent::InputChar('a') | TuiEvent::Submit => {
                    dispatch(app, tui, Action::OpenPicker)
                }
                TuiEvent::CursorLeft => dispatch(app, tui, Action::NudgeProgress(-step)),
                TuiEvent::CursorRight => dispatch(app, tui, Action::NudgeProgress(step)),
                TuiEvent::CursorDown => {
                    dispatch(app, tui, Action::NudgeProgress(-step * COARSE_STEP_MULTIPLIER))
                }
                TuiEvent::CursorUp => {
                    dispatch(app, tui, Action::NudgeProgress(step * COARSE_STEP_MULTIPLIER))
                }
                TuiEvent::Home => dispatch(app, tui, Action::SetProgress(0.0)),
                TuiEvent::End => dispatch(app, tui, Action::SetProgress(1.0)),
                _ => Effect::None,
            }
        }
        Tab::Library => {
            if let Some(search_event) = tui.search_box.handle_event(&event) {
                let action = match search_event {
                    SearchEvent::Changed(query) => Action::SetSearch(query),
                    SearchEvent::Cleared => Action::ClearSearch,
                };
                let effect = dispatch(app, tui, action);
                tui.library.clamp(app.filtered_library().len());
                return effect;
            }
            let len = app.filtered_library().len();
            tui.library.handle_event(&event, len);
            Effect::None
        }
        Tab::Recommendations => {
            if matches!(event, TuiEvent::InputChar('q')) {
                return dispatch(app, tui, Action::Quit);
            }
            match tui
                .recommendations
                .handle_event(&event, app.catalog.recommended())
            {
                Some(RecommendationEvent::Add(id)) => dispatch(app, tui, Action::Recommend(id)),
                None => Effect::None,
            }
        }
    }
}

/// Apply an action, resetting the picker cursor whenever the picker opens.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    let was_open = app.session.adding_book();
    let effect = update(app, action);
    if !was_open && app.session.adding_book() {
        tui.picker = BookPickerState::new();
    }
    effect
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => guard,
        Err(e) => {
            ratatui::restore();
            return Err(e);
        }
    };

    info!(
        "TUI started: {} library books, {} recommendations, {} pages",
        app.catalog.library().len(),
        app.catalog.recommended().len(),
        app.session.total_pages()
    );

    let mut needs_redraw = true; // Force first frame
    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = match poll_event_timeout(IDLE_POLL) {
            Ok(event) => event,
            Err(e) => break Err(e),
        };
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break Ok(());
        }
    };

    info!("Shutting down");
    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn type_str(app: &mut App, tui: &mut TuiState, s: &str) {
        for c in s.chars() {
            handle_event(app, tui, TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_tab_cycles_both_ways() {
        assert_eq!(Tab::MyBooks.next(), Tab::Library);
        assert_eq!(Tab::Recommendations.next(), Tab::MyBooks);
        assert_eq!(Tab::MyBooks.prev(), Tab::Recommendations);
    }

    #[test]
    fn test_add_book_then_pick() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        handle_event(&mut app, &mut tui, TuiEvent::InputChar('a'));
        assert!(app.session.adding_book());

        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, TuiEvent::Submit);

        assert!(!app.session.adding_book());
        assert_eq!(
            app.session.current_book().map(|b| b.title()),
            Some("Normal People by Sally Rooney")
        );
        assert_eq!(app.session.selected_book(), app.session.current_book());
    }

    #[test]
    fn test_picker_escape_keeps_current_book() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        let before = app.session.current_book().cloned();

        handle_event(&mut app, &mut tui, TuiEvent::InputChar('a'));
        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, TuiEvent::Escape);

        assert!(!app.session.adding_book());
        assert_eq!(app.session.current_book().cloned(), before);
    }

    #[test]
    fn test_picker_cursor_resets_on_reopen() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('a'));
        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, TuiEvent::Escape);
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('a'));
        assert_eq!(tui.picker.selected, 0);
    }

    #[test]
    fn test_tab_switch_blocked_while_picker_open() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('a'));
        handle_event(&mut app, &mut tui, TuiEvent::NextTab);
        assert_eq!(tui.active_tab, Tab::MyBooks);
    }

    #[test]
    fn test_arrow_keys_move_progress() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        app.progress_step = 0.1;

        handle_event(&mut app, &mut tui, TuiEvent::CursorLeft);
        assert_eq!(app.session.current_page(), 240);

        handle_event(&mut app, &mut tui, TuiEvent::End);
        assert_eq!(app.session.current_page(), 480);
        handle_event(&mut app, &mut tui, TuiEvent::CursorUp);
        assert_eq!(app.session.current_page(), 480);
        handle_event(&mut app, &mut tui, TuiEvent::Home);
        assert_eq!(app.session.current_page(), 0);
    }

    #[test]
    fn test_library_typing_filters_and_q_does_not_quit() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        handle_event(&mut app, &mut tui, TuiEvent::NextTab);
        assert_eq!(tui.active_tab, Tab::Library);

        let effect = handle_event(&mut app, &mut tui, TuiEvent::InputChar('q'));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.search_query, "q");
        assert!(app.filtered_library().is_empty());

        handle_event(&mut app, &mut tui, TuiEvent::ClearLine);
        type_str(&mut app, &mut tui, "the");
        let titles: Vec<&str> = app.filtered_library().iter().map(|b| b.title()).collect();
        assert_eq!(titles, vec!["The Bell Jar by Sylvia Plath"]);
    }

    #[test]
    fn test_library_cursor_clamped_by_search() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.active_tab = Tab::Library;
        handle_event(&mut app, &mut tui, TuiEvent::End);
        assert_eq!(tui.library.selected, 2);

        type_str(&mut app, &mut tui, "normal");
        assert_eq!(tui.library.selected, 0);
    }

    #[test]
    fn test_recommend_opens_picker() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.active_tab = Tab::Recommendations;

        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, TuiEvent::Submit);

        assert!(app.session.adding_book());
        assert_eq!(
            app.session.current_book().map(|b| b.title()),
            Some("Bunny by Mona Awad")
        );

        handle_event(&mut app, &mut tui, TuiEvent::Escape);
        assert_eq!(
            app.session.current_book().map(|b| b.title()),
            Some("Bunny by Mona Awad")
        );
    }

    #[test]
    fn test_quit_paths() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(
            handle_event(&mut app, &mut tui, TuiEvent::InputChar('q')),
            Effect::Quit
        );
        tui.active_tab = Tab::Library;
        assert_eq!(
            handle_event(&mut app, &mut tui, TuiEvent::ForceQuit),
            Effect::Quit
        );
    }
}
