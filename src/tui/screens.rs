//! Screen state structures for TUI

use crate::templates::{self, Template, TemplateFilter};
use crate::tui::types::EditorField;

/// Editor screen state
#[derive(Debug)]
pub struct EditorScreen {
    /// Focused field
    pub focus: EditorField,
    /// Quick-add input buffer
    pub quick_add: String,
    /// Whether quick-added messages are sent as the user (else as the contact)
    pub quick_add_as_user: bool,
    /// Preview scroll offset (messages skipped from the top)
    pub scroll_offset: usize,
}

impl EditorScreen {
    /// Create new editor screen
    pub fn new() -> Self {
        Self {
            focus: EditorField::Conversation,
            quick_add: String::new(),
            quick_add_as_user: true,
            scroll_offset: 0,
        }
    }

    /// Focus the next field
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Focus the previous field
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Toggle the quick-add sender
    pub fn toggle_quick_add_sender(&mut self) {
        self.quick_add_as_user = !self.quick_add_as_user;
    }

    /// Scroll preview up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll preview down
    pub fn scroll_down(&mut self, max_offset: usize) {
        if self.scroll_offset < max_offset {
            self.scroll_offset += 1;
        }
    }
}

impl Default for EditorScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Template catalog screen state
#[derive(Debug)]
pub struct TemplatesScreen {
    /// Index into `TemplateFilter::all()`
    pub filter_index: usize,
    /// Selected template within the filtered list
    pub selected_index: usize,
}

impl TemplatesScreen {
    /// Create new templates screen
    pub fn new() -> Self {
        Self {
            filter_index: 0,
            selected_index: 0,
        }
    }

    /// Active category filter
    pub fn filter(&self) -> TemplateFilter {
        let filters = TemplateFilter::all();
        filters[self.filter_index % filters.len()]
    }

    /// Templates passing the active filter
    pub fn visible(&self) -> Vec<Template> {
        templates::filter(self.filter())
    }

    /// Currently selected template
    pub fn selected_template(&self) -> Option<Template> {
        self.visible().get(self.selected_index).copied()
    }

    /// Next category filter; resets the selection
    pub fn next_filter(&mut self) {
        self.filter_index = (self.filter_index + 1) % TemplateFilter::all().len();
        self.selected_index = 0;
    }

    /// Previous category filter; resets the selection
    pub fn previous_filter(&mut self) {
        let count = TemplateFilter::all().len();
        self.filter_index = (self.filter_index + count - 1) % count;
        self.selected_index = 0;
    }

    /// Move to next template
    pub fn next(&mut self) {
        let count = self.visible().len();
        if count > 0 {
            self.selected_index = (self.selected_index + 1) % count;
        }
    }

    /// Move to previous template
    pub fn previous(&mut self) {
        let count = self.visible().len();
        if count > 0 {
            if self.selected_index > 0 {
                self.selected_index -= 1;
            } else {
                self.selected_index = count - 1;
            }
        }
    }
}

impl Default for TemplatesScreen {
    fn default() -> Self {
        Self::new()
    }
}
