// Screens Tests - Testing EditorScreen and TemplatesScreen

use crate::templates::{TemplateCategory, TemplateFilter};
use crate::tui::types::EditorField;
use crate::tui::{EditorScreen, TemplatesScreen};

// EditorScreen Tests

#[test]
fn test_editor_screen_creation() {
    let screen = EditorScreen::new();

    assert_eq!(screen.focus, EditorField::Conversation);
    assert!(screen.quick_add.is_empty());
    assert!(screen.quick_add_as_user, "Quick add starts as the user");
    assert_eq!(screen.scroll_offset, 0);
}

#[test]
fn test_editor_screen_focus_cycle() {
    let mut screen = EditorScreen::new();

    screen.focus_previous();
    assert_eq!(screen.focus, EditorField::Theme);

    screen.focus_next();
    screen.focus_next();
    assert_eq!(screen.focus, EditorField::QuickAdd);
}

#[test]
fn test_editor_screen_toggle_sender() {
    let mut screen = EditorScreen::new();

    screen.toggle_quick_add_sender();
    assert!(!screen.quick_add_as_user);
    screen.toggle_quick_add_sender();
    assert!(screen.quick_add_as_user);
}

#[test]
fn test_editor_screen_scroll_bounds() {
    let mut screen = EditorScreen::new();

    screen.scroll_up();
    assert_eq!(screen.scroll_offset, 0, "Should not scroll above the top");

    screen.scroll_down(2);
    screen.scroll_down(2);
    screen.scroll_down(2);
    assert_eq!(screen.scroll_offset, 2, "Should stop at max offset");

    screen.scroll_up();
    assert_eq!(screen.scroll_offset, 1);
}

// TemplatesScreen Tests

#[test]
fn test_templates_screen_creation() {
    let screen = TemplatesScreen::new();

    assert_eq!(screen.filter(), TemplateFilter::All);
    assert_eq!(screen.visible().len(), 8);
    assert_eq!(screen.selected_template().map(|t| t.id), Some(1));
}

#[test]
fn test_templates_screen_filter_cycle() {
    let mut screen = TemplatesScreen::new();
    screen.next();
    screen.next();

    screen.next_filter();
    assert_eq!(screen.filter(), TemplateFilter::Only(TemplateCategory::Business));
    assert_eq!(screen.selected_index, 0, "Changing filter resets the selection");

    screen.previous_filter();
    screen.previous_filter();
    assert_eq!(screen.filter(), TemplateFilter::Only(TemplateCategory::Social));
}

#[test]
fn test_templates_screen_selection_wraps() {
    let mut screen = TemplatesScreen::new();
    screen.next_filter(); // business: 3 templates

    screen.previous();
    assert_eq!(screen.selected_index, 2, "Should wrap to the last template");
    assert_eq!(screen.selected_template().map(|t| t.name), Some("Group Project"));

    screen.next();
    assert_eq!(screen.selected_index, 0, "Should wrap to the first template");
}
