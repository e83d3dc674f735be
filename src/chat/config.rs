//! Render configuration

use serde::{Deserialize, Serialize};

/// Default contact display name
pub const DEFAULT_CONTACT_NAME: &str = "Alex Johnson";
/// Default name of the person "holding the phone"
pub const DEFAULT_USER_NAME: &str = "You";
/// Default header status line
pub const DEFAULT_STATUS: &str = "Online";

/// Sub-skins of the generic platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenericSkin {
    /// Messenger-style blue bubbles
    Facebook,
    /// Telegram-style bubbles
    Telegram,
    /// Plain SMS bubbles
    Sms,
}

/// Messaging platform skin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// WhatsApp skin (the fallback for unknown names)
    WhatsApp,
    /// Instagram direct messages skin
    Instagram,
    /// Generic skin with a sub-skin
    Generic(GenericSkin),
}

impl Default for Platform {
    fn default() -> Self {
        Self::WhatsApp
    }
}

impl Platform {
    /// Get all selectable platforms in display order
    pub fn all() -> Vec<Self> {
        vec![
            Self::WhatsApp,
            Self::Instagram,
            Self::Generic(GenericSkin::Facebook),
            Self::Generic(GenericSkin::Telegram),
            Self::Generic(GenericSkin::Sms),
        ]
    }

    /// Resolve a platform by name (case-insensitive)
    ///
    /// `"generic"` selects the SMS sub-skin; anything unrecognised falls back to WhatsApp.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "whatsapp" => Self::WhatsApp,
            "instagram" => Self::Instagram,
            "facebook" => Self::Generic(GenericSkin::Facebook),
            "telegram" => Self::Generic(GenericSkin::Telegram),
            "sms" | "generic" => Self::Generic(GenericSkin::Sms),
            _ => Self::WhatsApp,
        }
    }

    /// Stable lowercase identifier used in markup
    pub fn slug(&self) -> &'static str {
        match self {
            Self::WhatsApp => "whatsapp",
            Self::Instagram => "instagram",
            Self::Generic(GenericSkin::Facebook) => "facebook",
            Self::Generic(GenericSkin::Telegram) => "telegram",
            Self::Generic(GenericSkin::Sms) => "sms",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::Instagram => "Instagram",
            Self::Generic(GenericSkin::Facebook) => "Facebook",
            Self::Generic(GenericSkin::Telegram) => "Telegram",
            Self::Generic(GenericSkin::Sms) => "SMS",
        }
    }

    /// Next platform in display order (wraps)
    pub fn next(&self) -> Self {
        cycle(&Self::all(), self, 1)
    }

    /// Previous platform in display order (wraps)
    pub fn previous(&self) -> Self {
        let all = Self::all();
        cycle(&all, self, all.len() - 1)
    }
}

/// Colour theme applied to the rendered chat container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChatTheme {
    /// Platform default colours
    #[default]
    Default,
    /// Dark background
    Dark,
    /// Blue accent
    Blue,
    /// Pink accent
    Pink,
}

impl ChatTheme {
    /// Get all themes in display order
    pub fn all() -> Vec<Self> {
        vec![Self::Default, Self::Dark, Self::Blue, Self::Pink]
    }

    /// Resolve a theme by name; unknown names select `Default`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Self::Dark,
            "blue" => Self::Blue,
            "pink" => Self::Pink,
            _ => Self::Default,
        }
    }

    /// Stable lowercase identifier used in markup
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Blue => "blue",
            Self::Pink => "pink",
        }
    }

    /// Next theme in display order (wraps)
    pub fn next(&self) -> Self {
        cycle(&Self::all(), self, 1)
    }

    /// Previous theme in display order (wraps)
    pub fn previous(&self) -> Self {
        let all = Self::all();
        cycle(&all, self, all.len() - 1)
    }
}

fn cycle<T: Copy + PartialEq>(items: &[T], current: &T, step: usize) -> T {
    let index = items.iter().position(|item| item == current).unwrap_or(0);
    items[(index + step) % items.len()]
}

/// Everything the renderer needs besides the messages
///
/// Set once per render by the caller; the parser only needs `current_user_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Name shown in the chat header
    pub contact_name: String,
    /// Sender name that marks a line as outgoing
    pub current_user_name: String,
    /// Status line under the contact name
    pub status_text: String,
    /// Platform skin
    pub platform: Platform,
    /// Container theme
    pub theme: ChatTheme,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            contact_name: DEFAULT_CONTACT_NAME.to_string(),
            current_user_name: DEFAULT_USER_NAME.to_string(),
            status_text: DEFAULT_STATUS.to_string(),
            platform: Platform::default(),
            theme: ChatTheme::default(),
        }
    }
}
