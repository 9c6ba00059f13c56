use booktrack::core::action::{Action, Effect, update};
use booktrack::core::book::{Book, ImageRef};
use booktrack::core::catalog::Catalog;
use booktrack::core::config::{BookTrackConfig, resolve};
use booktrack::core::search::filter;
use booktrack::core::state::{App, Session};

// ============================================================================
// Helper Functions
// ============================================================================

fn three_book_catalog() -> Catalog {
    Catalog::new(
        vec![
            Book::new("Powerless by Lauren Roberts", Some(ImageRef::new("powerless"))).unwrap(),
            Book::new("Normal People by Sally Rooney", Some(ImageRef::new("normal"))).unwrap(),
            Book::new("The Bell Jar by Sylvia Plath", Some(ImageRef::new("belljar"))).unwrap(),
        ],
        Vec::new(),
    )
}

fn builtin_app() -> App {
    App::new(Catalog::builtin(), Session::default())
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_scenario_the() {
    let catalog = three_book_catalog();
    let titles: Vec<&str> = filter(catalog.library(), "the")
        .into_iter()
        .map(Book::title)
        .collect();
    assert_eq!(titles, vec!["The Bell Jar by Sylvia Plath"]);
}

#[test]
fn test_every_match_contains_query_and_comes_from_catalog() {
    let catalog = Catalog::builtin();
    for query in ["b", "BY", "ri", "ee", "z", " "] {
        let result = filter(catalog.library(), query);
        let mut last_index = None;
        for book in result {
            assert!(book.title().to_lowercase().contains(&query.to_lowercase()));
            let index = catalog
                .library()
                .iter()
                .position(|b| b == book)
                .expect("filter returned a book outside the catalog");
            if let Some(last) = last_index {
                assert!(index > last, "order not preserved for {query:?}");
            }
            last_index = Some(index);
        }
    }
}

#[test]
fn test_empty_query_returns_whole_library() {
    let app = builtin_app();
    let all: Vec<&Book> = app.catalog.library().iter().collect();
    assert_eq!(app.filtered_library(), all);
}

// ============================================================================
// Session flow
// ============================================================================

#[test]
fn test_full_reading_flow() {
    let mut app = builtin_app();
    assert!(app.session.current_book().is_none());
    assert_eq!(app.session.current_page(), 288);

    update(&mut app, Action::OpenPicker);
    assert!(app.session.adding_book());

    let normal_people = app.catalog.library()[1].clone();
    update(&mut app, Action::PickBook(normal_people.id()));
    assert_eq!(app.session.current_book(), Some(&normal_people));
    assert_eq!(app.session.selected_book(), Some(&normal_people));
    assert!(!app.session.adding_book());

    update(&mut app, Action::SetProgress(0.5));
    assert_eq!(app.session.current_page(), 240);

    update(&mut app, Action::OpenPicker);
    update(&mut app, Action::DismissPicker);
    assert_eq!(app.session.current_book(), Some(&normal_people));

    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}

#[test]
fn test_recommendation_flow() {
    let mut app = builtin_app();
    let persuasion = app.catalog.recommended()[2].clone();
    assert_eq!(persuasion.title(), "Persuasion by Jane Austen");

    update(&mut app, Action::Recommend(persuasion.id()));
    assert!(app.session.adding_book());
    assert_eq!(app.session.current_book(), Some(&persuasion));

    // Picking from the library afterwards replaces it
    let bride = app.catalog.library()[5].clone();
    update(&mut app, Action::PickBook(bride.id()));
    assert_eq!(app.session.current_book(), Some(&bride));
    assert!(!app.session.adding_book());
}

#[test]
fn test_progress_clamped_through_actions() {
    let mut app = builtin_app();
    update(&mut app, Action::SetProgress(-1.0));
    assert_eq!(app.session.current_page(), 0);
    update(&mut app, Action::SetProgress(2.0));
    assert_eq!(app.session.current_page(), 480);
    update(&mut app, Action::NudgeProgress(-0.25));
    assert_eq!(app.session.current_page(), 360);
}

// ============================================================================
// Config → App
// ============================================================================

#[test]
fn test_app_from_resolved_config() {
    let config: BookTrackConfig = toml::from_str(
        r#"
[general]
initial_progress = 0.5
progress_step = 0.01

[[library]]
title = "Bunny by Mona Awad"
"#,
    )
    .unwrap();
    let resolved = resolve(&config, Some(200)).unwrap();
    let app = App::from_config(&resolved);

    assert_eq!(app.session.total_pages(), 200);
    assert_eq!(app.session.current_page(), 100);
    assert_eq!(app.progress_step, 0.01);
    assert_eq!(app.catalog.library().len(), 1);
    assert!(app.catalog.library()[0].image().is_none());
    assert_eq!(app.catalog.recommended().len(), 6);
}
