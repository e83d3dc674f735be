//! UI helper functions

use ratatui::style::{Color, Style};

use crate::notify::Severity;
use crate::storage::ThemePreference;

/// Convert a `#RRGGBB` colour into a terminal colour
pub fn hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some(Color::Rgb(
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ))
}

/// Base style for the light/dark preference
pub fn base_style(theme: ThemePreference) -> Style {
    match theme {
        ThemePreference::Light => Style::default().fg(Color::Black).bg(Color::White),
        ThemePreference::Dark => Style::default().fg(Color::White).bg(Color::Black),
    }
}

/// Muted text colour for the light/dark preference
pub fn muted_color(theme: ThemePreference) -> Color {
    match theme {
        ThemePreference::Light => Color::Gray,
        ThemePreference::Dark => Color::DarkGray,
    }
}

/// Toast colour for a severity
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::Cyan,
    }
}

/// Toast prefix symbol for a severity
pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✓",
        Severity::Error => "✗",
        Severity::Warning => "!",
        Severity::Info => "i",
    }
}
