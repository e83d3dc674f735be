//! Conversation model
//!
//! This module turns raw conversation text into an ordered list of messages:
//! - `message` - The parsed `Message` record and emoji detection
//! - `config` - Render configuration (names, status, platform, theme)
//! - `clock` - Minute-of-day arithmetic and 12-hour display formatting
//! - `parser` - The lenient `Name: message` line parser

pub mod clock;
pub mod config;
pub mod message;
pub mod parser;

// Re-export commonly used types
pub use config::{ChatTheme, Configuration, GenericSkin, Platform};
pub use message::{Message, contains_emoji};
pub use parser::{parse, parse_at};
