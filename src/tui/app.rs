//! Main TUI application state and logic

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::thread::JoinHandle;

use crate::chat::Configuration;
use crate::export::{Capabilities, ExportKind};
use crate::notify::Notification;
use crate::render::RenderOptions;
use crate::storage;
use crate::studio::{MessageSender, Studio};
use crate::tui::screens::*;
use crate::tui::types::{EditorField, Screen};

/// Application state
pub struct App {
    /// Current screen
    pub current_screen: Screen,
    /// The chat being edited
    pub studio: Studio,
    /// Editor screen state
    pub editor: EditorScreen,
    /// Templates screen (when active)
    pub templates_screen: Option<TemplatesScreen>,
    /// Exports running in the background
    pub export_handles: Vec<JoinHandle<Notification>>,
    /// Should quit
    pub should_quit: bool,
}

impl App {
    /// Create an application around an existing studio
    pub fn with_studio(studio: Studio) -> Self {
        Self {
            current_screen: Screen::Editor,
            studio,
            editor: EditorScreen::new(),
            templates_screen: None,
            export_handles: Vec::new(),
            should_quit: false,
        }
    }

    /// Create new application
    ///
    /// # Arguments
    /// * `settings_path` - Settings file holding the theme preference
    /// * `capabilities` - Export capabilities available on this machine
    pub fn new_with_settings<P: Into<PathBuf>>(settings_path: P, capabilities: Capabilities) -> Self {
        let studio = Studio::new(Configuration::default())
            .with_settings_file(settings_path)
            .with_capabilities(capabilities)
            .with_render_options(RenderOptions::with_random_avatar(&mut rand::thread_rng()));

        let mut app = Self::with_studio(studio);
        app.studio.generate_random(None, &mut rand::thread_rng());
        app
    }

    /// Create new application with the default data directory and system capabilities
    pub fn new() -> Self {
        Self::new_with_settings(
            storage::settings_path(),
            Capabilities::system(storage::export_dir()),
        )
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        match self.current_screen {
            Screen::Editor => self.handle_editor_key(key.code, ctrl),
            Screen::Templates => self.handle_templates_key(key.code),
        }
    }

    fn handle_editor_key(&mut self, code: KeyCode, ctrl: bool) {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.editor.focus_next(),
            KeyCode::BackTab => self.editor.focus_previous(),
            KeyCode::F(2) => self.studio.generate_random(None, &mut rand::thread_rng()),
            KeyCode::F(3) => self.trigger_export(ExportKind::CopyHtml),
            KeyCode::F(4) => self.trigger_export(ExportKind::CopyText),
            KeyCode::F(5) => self.trigger_export(ExportKind::Share),
            KeyCode::F(6) => self.trigger_export(ExportKind::Capture),
            KeyCode::F(7) => self.studio.toggle_theme_preference(),
            KeyCode::F(8) => self.show_templates_screen(),
            KeyCode::PageUp => self.editor.scroll_up(),
            KeyCode::PageDown => {
                let max_offset = self.studio.rendered().messages.len().saturating_sub(1);
                self.editor.scroll_down(max_offset);
            }
            KeyCode::Char('g') if ctrl => self.studio.generate(),
            KeyCode::Char('t') if ctrl => self.editor.toggle_quick_add_sender(),
            KeyCode::Char(c) if !ctrl => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Enter => self.enter(),
            KeyCode::Left if self.editor.focus.is_selector() => self.cycle_selector(false),
            KeyCode::Right if self.editor.focus.is_selector() => self.cycle_selector(true),
            _ => {}
        }
    }

    fn handle_templates_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('q') => self.back_to_editor(),
            KeyCode::Left => {
                if let Some(screen) = &mut self.templates_screen {
                    screen.previous_filter();
                }
            }
            KeyCode::Right => {
                if let Some(screen) = &mut self.templates_screen {
                    screen.next_filter();
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(screen) = &mut self.templates_screen {
                    screen.previous();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(screen) = &mut self.templates_screen {
                    screen.next();
                }
            }
            KeyCode::Enter => self.use_selected_template(),
            _ => {}
        }
    }

    /// Type a character into the focused field
    pub fn insert_char(&mut self, c: char) {
        match self.editor.focus {
            EditorField::Conversation => {
                let mut text = self.studio.conversation().to_string();
                text.push(c);
                self.studio.set_conversation(text);
            }
            EditorField::QuickAdd => self.editor.quick_add.push(c),
            EditorField::Contact => self.studio.update_config(|config| config.contact_name.push(c)),
            EditorField::User => self.studio.update_config(|config| config.current_user_name.push(c)),
            EditorField::Status => self.studio.update_config(|config| config.status_text.push(c)),
            EditorField::Platform | EditorField::Theme => {}
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        match self.editor.focus {
            EditorField::Conversation => {
                let mut text = self.studio.conversation().to_string();
                text.pop();
                self.studio.set_conversation(text);
            }
            EditorField::QuickAdd => {
                self.editor.quick_add.pop();
            }
            EditorField::Contact => self.studio.update_config(|config| {
                config.contact_name.pop();
            }),
            EditorField::User => self.studio.update_config(|config| {
                config.current_user_name.pop();
            }),
            EditorField::Status => self.studio.update_config(|config| {
                config.status_text.pop();
            }),
            EditorField::Platform | EditorField::Theme => {}
        }
    }

    /// Enter: newline in the conversation, submit in quick add, otherwise next field
    pub fn enter(&mut self) {
        match self.editor.focus {
            EditorField::Conversation => self.insert_char('\n'),
            EditorField::QuickAdd => self.submit_quick_add(),
            _ => self.editor.focus_next(),
        }
    }

    /// Append the quick-add buffer as a message
    ///
    /// The buffer is only cleared when the message was accepted.
    pub fn submit_quick_add(&mut self) {
        let sender = if self.editor.quick_add_as_user {
            MessageSender::User
        } else {
            MessageSender::Contact
        };
        let text = self.editor.quick_add.clone();
        if self.studio.add_message(sender, &text) {
            self.editor.quick_add.clear();
        }
    }

    fn cycle_selector(&mut self, forward: bool) {
        match self.editor.focus {
            EditorField::Platform => self.studio.update_config(|config| {
                config.platform = if forward {
                    config.platform.next()
                } else {
                    config.platform.previous()
                };
            }),
            EditorField::Theme => self.studio.update_config(|config| {
                config.theme = if forward {
                    config.theme.next()
                } else {
                    config.theme.previous()
                };
            }),
            _ => {}
        }
    }

    /// Start an export on a background thread
    ///
    /// The job captures the current render, so later edits do not affect it.
    pub fn trigger_export(&mut self, kind: ExportKind) {
        let job = self.studio.prepare_export(kind);
        tracing::info!("Starting export '{}'", kind.label());
        self.export_handles.push(std::thread::spawn(move || job.run()));
    }

    /// Collect finished exports and report their outcome
    ///
    /// Returns the number of exports completed this call.
    pub fn poll_exports(&mut self) -> usize {
        let mut completed = 0;
        let mut still_running = Vec::with_capacity(self.export_handles.len());

        for handle in std::mem::take(&mut self.export_handles) {
            if !handle.is_finished() {
                still_running.push(handle);
                continue;
            }

            let notification = match handle.join() {
                Ok(notification) => notification,
                Err(_) => Notification::error("Export failed unexpectedly"),
            };
            self.studio.complete_export(notification);
            completed += 1;
        }

        self.export_handles = still_running;
        completed
    }

    /// Wait for every running export (used on shutdown and in tests)
    pub fn wait_for_exports(&mut self) -> usize {
        let mut completed = 0;
        for handle in std::mem::take(&mut self.export_handles) {
            let notification = handle
                .join()
                .unwrap_or_else(|_| Notification::error("Export failed unexpectedly"));
            self.studio.complete_export(notification);
            completed += 1;
        }
        completed
    }

    /// Show templates screen
    pub fn show_templates_screen(&mut self) {
        self.templates_screen = Some(TemplatesScreen::new());
        self.current_screen = Screen::Templates;
    }

    /// Load the selected template and return to the editor
    pub fn use_selected_template(&mut self) {
        let selected = self
            .templates_screen
            .as_ref()
            .and_then(|screen| screen.selected_template());

        if let Some(template) = selected {
            self.studio.load_template(template.id);
            self.editor.scroll_offset = 0;
        }
        self.back_to_editor();
    }

    /// Return to the editor
    pub fn back_to_editor(&mut self) {
        self.templates_screen = None;
        self.current_screen = Screen::Editor;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
