// UI Tests - Testing UI helper functions and full-frame rendering

use crate::notify::{Notification, Severity};
use crate::studio::Studio;
use crate::tui::ui::{hex_color, severity_color, ui};
use crate::tui::App;
use chrono::NaiveTime;
use ratatui::backend::TestBackend;
use ratatui::style::Color;
use ratatui::Terminal;

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn draw(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 45)).expect("test terminal");
    terminal.draw(|f| ui(f, app)).expect("draw");
    screen_text(&terminal)
}

fn app() -> App {
    App::with_studio(
        Studio::default().with_clock(NaiveTime::from_hms_opt(12, 0, 0).expect("valid time")),
    )
}

#[test]
fn test_hex_color() {
    assert_eq!(hex_color("#DCF8C6"), Some(Color::Rgb(0xDC, 0xF8, 0xC6)));
    assert_eq!(hex_color("#000000"), Some(Color::Rgb(0, 0, 0)));
}

#[test]
fn test_hex_color_invalid() {
    assert_eq!(hex_color("DCF8C6"), None, "Missing # should be rejected");
    assert_eq!(hex_color("#FFF"), None, "Short form is not supported");
    assert_eq!(hex_color("#GGGGGG"), None);
}

#[test]
fn test_severity_colors_are_distinct() {
    let colors = [
        severity_color(Severity::Success),
        severity_color(Severity::Error),
        severity_color(Severity::Warning),
        severity_color(Severity::Info),
    ];

    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_editor_renders_empty_state() {
    let text = draw(&app());

    assert!(text.contains("Mockify - Chat Mockup Generator"));
    assert!(text.contains("No messages yet"));
}

#[test]
fn test_editor_renders_messages_and_toast() {
    let mut app = app();
    app.studio.set_conversation("You: ping\nAlex Johnson: pong");
    app.studio.post(Notification::success("Chat generated with 2 messages!"));

    let text = draw(&app);

    assert!(text.contains("ping"));
    assert!(text.contains("pong"));
    assert!(text.contains("Chat generated with 2 messages!"));
    assert!(!text.contains("No messages yet"));
}

#[test]
fn test_templates_screen_renders_catalog() {
    let mut app = app();
    app.show_templates_screen();

    let text = draw(&app);

    assert!(text.contains("Templates"));
    assert!(text.contains("Business Deal"));
    assert!(text.contains("Group Project"));
}
