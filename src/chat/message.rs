//! Parsed chat message

use serde::{Deserialize, Serialize};

/// Code point ranges treated as emoji
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F), // Emoticons
    (0x1F300, 0x1F5FF), // Symbols & pictographs
    (0x1F680, 0x1F6FF), // Transport & map symbols
    (0x1F1E6, 0x1F1FF), // Regional indicators
    (0x2600, 0x26FF),   // Miscellaneous symbols
    (0x2700, 0x27BF),   // Dingbats
    (0x1F900, 0x1F9FF), // Supplemental symbols & pictographs
    (0x1FA70, 0x1FAFF), // Symbols & pictographs extended-A
];

/// One parsed chat message
///
/// Created by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the sender (trimmed)
    pub sender: String,
    /// Message body (trimmed, unformatted)
    pub text: String,
    /// Whether the sender equals the configured current-user name
    pub is_from_current_user: bool,
    /// Display time, e.g. `"9:05 AM"`
    pub time: String,
    /// Minute of the day the display time was computed from
    pub minute_of_day: u16,
    /// Whether `text` contains at least one emoji
    pub has_emoji: bool,
}

impl Message {
    /// Create a new message, deriving the ownership and emoji flags
    pub fn new(sender: String, text: String, current_user: &str, minute_of_day: u16) -> Self {
        let is_from_current_user = sender == current_user;
        let has_emoji = contains_emoji(&text);

        Self {
            sender,
            text,
            is_from_current_user,
            time: crate::chat::clock::format_minute(minute_of_day),
            minute_of_day,
            has_emoji,
        }
    }

    /// Side of the conversation this message is drawn on
    pub fn side(&self) -> &'static str {
        if self.is_from_current_user {
            "outgoing"
        } else {
            "incoming"
        }
    }
}

/// Check whether text contains a code point from the emoji blocks
pub fn contains_emoji(text: &str) -> bool {
    text.chars().any(|c| {
        let cp = c as u32;
        EMOJI_RANGES
            .iter()
            .any(|&(start, end)| cp >= start && cp <= end)
    })
}
