//! UI rendering module - screen-specific rendering functions
//!
//! Each screen has its own file; `helpers` holds colour and toast helpers.

mod editor;
mod helpers;
mod templates;

use ratatui::Frame;
use crate::tui::types::Screen;
use crate::tui::app::App;

// Re-export render functions
pub use editor::render_editor;
pub use templates::render_templates;

// Re-export helper functions
pub use helpers::{hex_color, severity_color};

/// Main UI rendering function - dispatches to screen-specific render functions
pub fn ui(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Editor => render_editor(f, app),
        Screen::Templates => render_templates(f, app),
    }
}
