// App Tests - Testing App key handling, exports and screen switching

use crate::chat::{ChatTheme, Platform};
use crate::export::capability::mock::MockClipboard;
use crate::export::{Capabilities, ClipboardProvider, ExportKind};
use crate::notify::Severity;
use crate::studio::Studio;
use crate::tui::types::EditorField;
use crate::tui::{App, Screen};
use chrono::NaiveTime;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tempfile::TempDir;

fn test_app() -> (App, MockClipboard) {
    let clipboard = MockClipboard::new();
    let studio = Studio::default()
        .with_clock(NaiveTime::from_hms_opt(12, 0, 0).expect("valid time"))
        .with_capabilities(Capabilities {
            clipboard: Some(Arc::new(clipboard.clone()) as Arc<dyn ClipboardProvider>),
            ..Capabilities::none()
        });
    (App::with_studio(studio), clipboard)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        if c == '\n' {
            press(app, KeyCode::Enter);
        } else {
            press(app, KeyCode::Char(c));
        }
    }
}

fn last_message(app: &App) -> String {
    app.studio.notifier().last().map(|n| n.message.clone()).unwrap_or_default()
}

#[test]
fn test_app_initialization() {
    let (app, _) = test_app();

    assert_eq!(app.current_screen, Screen::Editor, "Should start on the editor");
    assert_eq!(app.editor.focus, EditorField::Conversation);
    assert!(app.templates_screen.is_none());
    assert!(app.export_handles.is_empty());
    assert!(!app.should_quit, "Should not be quitting initially");
}

#[test]
fn test_app_with_settings_generates_random_chat() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let app = App::new_with_settings(temp_dir.path().join("settings.json"), Capabilities::none());

    assert!(!app.studio.conversation().is_empty(), "A random chat is preloaded");
    assert!(!app.studio.rendered().messages.is_empty());
    assert!(app.studio.rendered().markup.contains("background-color:#"), "Random avatar colour");
}

#[test]
fn test_typing_updates_preview_live() {
    let (mut app, _) = test_app();

    type_text(&mut app, "You: hi\nAlex: yo");

    assert_eq!(app.studio.conversation(), "You: hi\nAlex: yo");
    assert_eq!(app.studio.rendered().messages.len(), 2);
    assert_eq!(app.studio.notifier().posted_count(), 0, "Live preview is silent");
}

#[test]
fn test_backspace_in_conversation() {
    let (mut app, _) = test_app();
    type_text(&mut app, "You: hi!");

    press(&mut app, KeyCode::Backspace);

    assert_eq!(app.studio.conversation(), "You: hi");
}

#[test]
fn test_ctrl_g_generates() {
    let (mut app, _) = test_app();

    ctrl(&mut app, 'g');
    assert_eq!(last_message(&app), "Please enter a conversation first!");

    type_text(&mut app, "You: hi");
    ctrl(&mut app, 'g');
    assert_eq!(last_message(&app), "Chat generated with 1 message!");
}

#[test]
fn test_ctrl_g_does_not_type() {
    let (mut app, _) = test_app();
    type_text(&mut app, "You: hi");

    ctrl(&mut app, 'g');

    assert_eq!(app.studio.conversation(), "You: hi", "Ctrl chords are not inserted as text");
}

#[test]
fn test_editing_config_fields() {
    let (mut app, _) = test_app();

    app.editor.focus = EditorField::Contact;
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "X");
    assert_eq!(app.studio.config().contact_name, "Alex JohnsoX");

    app.editor.focus = EditorField::Status;
    for _ in 0.."Online".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "Away");
    assert_eq!(app.studio.config().status_text, "Away");
    assert!(app.studio.rendered().markup.contains(r#"<div class="chat-status">Away</div>"#));
}

#[test]
fn test_selectors_cycle_platform_and_theme() {
    let (mut app, _) = test_app();

    app.editor.focus = EditorField::Platform;
    press(&mut app, KeyCode::Right);
    assert_eq!(app.studio.config().platform, Platform::Instagram);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.studio.config().platform, Platform::WhatsApp);

    app.editor.focus = EditorField::Theme;
    press(&mut app, KeyCode::Left);
    assert_eq!(app.studio.config().theme, ChatTheme::Pink);
}

#[test]
fn test_enter_on_text_field_moves_focus() {
    let (mut app, _) = test_app();
    app.editor.focus = EditorField::Contact;

    press(&mut app, KeyCode::Enter);

    assert_eq!(app.editor.focus, EditorField::User);
}

#[test]
fn test_quick_add_submits_and_clears() {
    let (mut app, _) = test_app();
    app.editor.focus = EditorField::QuickAdd;

    type_text(&mut app, "hello");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.studio.conversation(), "You: hello");
    assert!(app.editor.quick_add.is_empty(), "Accepted input is cleared");
    assert_eq!(last_message(&app), "Message added");
}

#[test]
fn test_quick_add_as_contact() {
    let (mut app, _) = test_app();
    app.editor.focus = EditorField::QuickAdd;
    ctrl(&mut app, 't');

    type_text(&mut app, "hey");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.studio.conversation(), "Alex Johnson: hey");
}

#[test]
fn test_quick_add_blank_is_refused() {
    let (mut app, _) = test_app();
    app.editor.focus = EditorField::QuickAdd;

    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert!(app.studio.conversation().is_empty());
    assert_eq!(app.editor.quick_add, "   ", "Refused input stays in the buffer");
    assert_eq!(app.studio.notifier().last().map(|n| n.severity), Some(Severity::Warning));
}

#[test]
fn test_background_export_reports_once() {
    let (mut app, clipboard) = test_app();
    type_text(&mut app, "You: hi");

    press(&mut app, KeyCode::F(4));
    assert_eq!(app.export_handles.len(), 1);

    let completed = app.wait_for_exports();

    assert_eq!(completed, 1);
    assert!(app.export_handles.is_empty());
    assert_eq!(last_message(&app), "Chat text copied to clipboard!");
    assert_eq!(
        clipboard.get_content().as_deref(),
        Some("Chat with Alex Johnson:\n\nYou: hi")
    );
}

#[test]
fn test_export_snapshot_survives_edits() {
    let (mut app, clipboard) = test_app();
    type_text(&mut app, "You: before");

    app.trigger_export(ExportKind::CopyText);
    type_text(&mut app, "\nYou: after");
    app.wait_for_exports();

    let copied = clipboard.get_content().expect("clipboard written");
    assert!(!copied.contains("after"), "Export reflects the chat when requested");
}

#[test]
fn test_poll_exports_collects_finished_jobs() {
    let (mut app, _) = test_app();
    type_text(&mut app, "You: hi");
    app.trigger_export(ExportKind::CopyHtml);

    let mut completed = 0;
    for _ in 0..200 {
        completed += app.poll_exports();
        if app.export_handles.is_empty() {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(5));
    }

    assert_eq!(completed, 1);
    assert_eq!(last_message(&app), "HTML copied to clipboard!");
}

#[test]
fn test_unavailable_capture_reports_error() {
    let (mut app, _) = test_app();
    type_text(&mut app, "You: hi");

    press(&mut app, KeyCode::F(6));
    app.wait_for_exports();

    let last = app.studio.notifier().last().expect("notification");
    assert_eq!(last.severity, Severity::Error);
    assert!(last.message.starts_with("Screenshot library not available."));
}

#[test]
fn test_templates_screen_flow() {
    let (mut app, _) = test_app();

    press(&mut app, KeyCode::F(8));
    assert_eq!(app.current_screen, Screen::Templates);
    assert!(app.templates_screen.is_some());

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.current_screen, Screen::Editor);
    assert!(app.templates_screen.is_none());
    assert_eq!(last_message(&app), "\"Funny Memes\" template loaded!");
    assert!(app.studio.conversation().starts_with("Alex Johnson: OMG"));
}

#[test]
fn test_templates_screen_back() {
    let (mut app, _) = test_app();
    type_text(&mut app, "You: keep");

    press(&mut app, KeyCode::F(8));
    press(&mut app, KeyCode::Char('b'));

    assert_eq!(app.current_screen, Screen::Editor);
    assert_eq!(app.studio.conversation(), "You: keep");
    assert!(!app.should_quit, "Back from templates does not quit");
}

#[test]
fn test_random_chat_key() {
    let (mut app, _) = test_app();

    press(&mut app, KeyCode::F(2));

    assert!(!app.studio.rendered().messages.is_empty());
    assert!(last_message(&app).starts_with("Random "));
}

#[test]
fn test_quit_keys() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit);

    let (mut app, _) = test_app();
    press(&mut app, KeyCode::F(8));
    ctrl(&mut app, 'q');
    assert!(app.should_quit, "Ctrl-Q quits from any screen");
}

#[test]
fn test_quick_add_with_empty_contact_is_refused() {
    let (mut app, _) = test_app();
    app.editor.focus = EditorField::Contact;
    for _ in 0.."Alex Johnson".len() {
        press(&mut app, KeyCode::Backspace);
    }
    assert!(app.studio.config().contact_name.is_empty());

    app.editor.focus = EditorField::QuickAdd;
    ctrl(&mut app, 't');
    type_text(&mut app, "hello");
    press(&mut app, KeyCode::Enter);

    assert!(app.studio.conversation().is_empty(), "No malformed line is appended");
    assert_eq!(app.editor.quick_add, "hello", "Refused input stays in the buffer");
    assert_eq!(app.studio.notifier().last().map(|n| n.severity), Some(Severity::Warning));
}
