// Types Tests - Testing Screen and EditorField

use crate::tui::{EditorField, Screen};

#[test]
fn test_editor_field_order() {
    let all = EditorField::all();

    assert_eq!(all.len(), 7);
    assert_eq!(all[0], EditorField::Conversation, "Conversation is focused first");
    assert_eq!(all[6], EditorField::Theme);
}

#[test]
fn test_editor_field_next_wraps() {
    assert_eq!(EditorField::Conversation.next(), EditorField::QuickAdd);
    assert_eq!(EditorField::Theme.next(), EditorField::Conversation);
}

#[test]
fn test_editor_field_previous_wraps() {
    assert_eq!(EditorField::QuickAdd.previous(), EditorField::Conversation);
    assert_eq!(EditorField::Conversation.previous(), EditorField::Theme);
}

#[test]
fn test_editor_field_next_then_previous() {
    for field in EditorField::all() {
        assert_eq!(field.next().previous(), field);
    }
}

#[test]
fn test_editor_field_labels_and_selectors() {
    assert_eq!(EditorField::User.label(), "You are");
    assert!(EditorField::Platform.is_selector());
    assert!(EditorField::Theme.is_selector());
    assert!(!EditorField::Contact.is_selector());
    assert!(!EditorField::Conversation.is_selector());
}

#[test]
fn test_screen_equality() {
    assert_eq!(Screen::Editor, Screen::Editor);
    assert_ne!(Screen::Editor, Screen::Templates);
}
