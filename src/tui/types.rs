//! Core types for TUI screens and navigation

/// Application screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Conversation editor with live preview
    Editor,
    /// Template catalog
    Templates,
}

/// Editor input fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    /// Multi-line conversation script
    Conversation,
    /// Single message appended on Enter
    QuickAdd,
    /// Contact name
    Contact,
    /// Current user name
    User,
    /// Header status text
    Status,
    /// Platform selector
    Platform,
    /// Chat theme selector
    Theme,
}

impl EditorField {
    /// Get all fields in focus order
    pub fn all() -> Vec<Self> {
        vec![
            Self::Conversation,
            Self::QuickAdd,
            Self::Contact,
            Self::User,
            Self::Status,
            Self::Platform,
            Self::Theme,
        ]
    }

    /// Get display label for the field
    pub fn label(&self) -> &str {
        match self {
            Self::Conversation => "Conversation",
            Self::QuickAdd => "Quick add",
            Self::Contact => "Contact",
            Self::User => "You are",
            Self::Status => "Status",
            Self::Platform => "Platform",
            Self::Theme => "Theme",
        }
    }

    /// Whether the field is a ←/→ selector rather than free text
    pub fn is_selector(&self) -> bool {
        matches!(self, Self::Platform | Self::Theme)
    }

    /// Next field (wraps)
    pub fn next(&self) -> Self {
        let all = Self::all();
        let index = all.iter().position(|f| f == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    /// Previous field (wraps)
    pub fn previous(&self) -> Self {
        let all = Self::all();
        let index = all.iter().position(|f| f == self).unwrap_or(0);
        all[(index + all.len() - 1) % all.len()]
    }
}
