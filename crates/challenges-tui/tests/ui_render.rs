use challenges_core::{AppConfig, ViewMode};
use challenges_domain::{Catalog, SkillSubcategory};
use challenges_tui::{ui, App};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::time::Instant;

fn app() -> App {
    App::new_plain(AppConfig::default(), Catalog::bundled().unwrap()).unwrap()
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
}

fn draw(app: &App) -> String {
    let backend = TestBackend::new(160, 50);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(app, frame)).unwrap();

    let buf = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            text.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_initial_screen() {
    let screen = draw(&app());
    assert!(screen.contains("Frontend Challenges"));
    assert!(screen.contains("10 coding challenges"));
    assert!(screen.contains("Recursive UI (1)"));
    assert!(screen.contains("Mid → Senior Level"));
    assert!(screen.contains("Nested Comments Thread"));
    assert!(screen.contains("Problem Statement"));
    assert!(screen.contains("Constraints & Edge Cases"));
    assert!(screen.contains("Solution Code"));
    assert!(screen.contains("Common Mistakes"));
    assert!(screen.contains("Challenge 1 of 10"));
}

#[test]
fn test_collapsed_domain_hides_subcategories() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    let screen = draw(&app);
    assert!(!screen.contains("Recursive UI ("));
    assert!(screen.contains("▸"));
}

#[test]
fn test_placeholder_for_challenges_without_demo() {
    let mut app = app();
    app.select_challenge("lru-cache");
    press(&mut app, KeyCode::Char('t'));
    let screen = draw(&app);
    assert!(screen.contains("Live preview not available for this challenge."));
}

#[test]
fn test_split_view_shows_code_and_demo() {
    let config = AppConfig {
        default_view_mode: Some(ViewMode::Split),
        ..AppConfig::default()
    };
    let mut app = App::new_plain(config, Catalog::bundled().unwrap()).unwrap();
    app.select_challenge("virtual-list");
    let screen = draw(&app);
    assert!(screen.contains("Solution Code"));
    assert!(screen.contains("Virtual List (10000 items)"));
    assert!(screen.contains("Rendering: 9 items"));
    assert!(screen.contains("Items 1 - 9 visible"));
    assert!(screen.contains("Product 1 "));
    assert!(!screen.contains("Product 10 "));
}

#[test]
fn test_search_demo_preview() {
    let mut app = app();
    app.select_subcategory(SkillSubcategory::NetworkCaching);
    press(&mut app, KeyCode::Char('3'));
    let screen = draw(&app);
    assert!(screen.contains("API calls: 0"));
    assert!(screen.contains("Start typing to search..."));
}

#[test]
fn test_selector_popup() {
    let mut app = app();
    app.select_subcategory(SkillSubcategory::ObjectLogic);
    press(&mut app, KeyCode::Char('s'));
    let screen = draw(&app);
    assert!(screen.contains("Select Challenge - Object & Logic"));
    assert!(screen.contains("Deep Merge Objects [Mid]"));
    assert!(screen.contains("Memoize with TTL [Senior]"));
}

#[test]
fn test_help_popup_lists_context_bindings() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    let screen = draw(&app);
    assert!(screen.contains("Help - Keybindings for Current Context"));
    assert!(screen.contains("Expand or collapse a domain"));
}

#[test]
fn test_last_challenge_footer() {
    let mut app = app();
    app.select_challenge("memoize-ttl");
    let screen = draw(&app);
    assert!(screen.contains("Challenge 10 of 10 (last)"));
}

#[test]
fn test_empty_catalog_renders() {
    let app = App::new_plain(AppConfig::default(), Catalog::default()).unwrap();
    let screen = draw(&app);
    assert!(screen.contains("No challenges available."));
    assert!(screen.contains("0 coding challenges"));
}
