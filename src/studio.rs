//! The render pipeline and its single mutable slot
//!
//! `Studio` owns the current configuration, the conversation text and the last
//! successful render. Every UI handler goes through it: change something, then
//! `refresh` (parse → render → store). User-facing actions report their outcome
//! through the studio's `Notifier`.

use std::path::PathBuf;

use chrono::{Local, NaiveTime};
use rand::Rng;

use crate::chat::{self, Configuration, Message};
use crate::export::{
    Capabilities, ExportJob, ExportKind, ExportSnapshot, parse_share_link, plain_text_export,
};
use crate::generator::{self, Category};
use crate::notify::{Notification, Notifier};
use crate::render::{self, RenderOptions};
use crate::storage::{Settings, ThemePreference};
use crate::templates;

/// Output of one successful parse + render cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Configuration the markup was rendered with
    pub config: Configuration,
    /// Conversation text the messages were parsed from
    pub conversation_text: String,
    /// Parsed messages
    pub messages: Vec<Message>,
    /// HTML fragment
    pub markup: String,
}

/// Which side a quick-added message comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSender {
    /// The configured current user
    User,
    /// The configured contact
    Contact,
}

/// Owner of the chat being edited
pub struct Studio {
    config: Configuration,
    conversation: String,
    rendered: Rendered,
    notifier: Notifier,
    capabilities: Capabilities,
    render_options: RenderOptions,
    clock: Option<NaiveTime>,
    settings: Settings,
    settings_path: Option<PathBuf>,
}

impl Studio {
    /// Create a studio with no capabilities and no persisted settings
    pub fn new(config: Configuration) -> Self {
        let rendered = Rendered {
            config: config.clone(),
            conversation_text: String::new(),
            messages: Vec::new(),
            markup: render::render_chat(&config, &[]),
        };

        Self {
            config,
            conversation: String::new(),
            rendered,
            notifier: Notifier::new(),
            capabilities: Capabilities::none(),
            render_options: RenderOptions::default(),
            clock: None,
            settings: Settings::default(),
            settings_path: None,
        }
    }

    /// Attach export capabilities
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Load the theme preference from a settings file and persist changes there
    pub fn with_settings_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        let path = path.into();
        self.settings = match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Using default settings: {}", e);
                Settings::default()
            }
        };
        self.settings_path = Some(path);
        self
    }

    /// Pin "now" for timestamp computation (tests and reproducible exports)
    pub fn with_clock(mut self, now: NaiveTime) -> Self {
        self.clock = Some(now);
        self
    }

    /// Use decorative render options (e.g. a random avatar colour)
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Current configuration
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Current conversation text
    pub fn conversation(&self) -> &str {
        &self.conversation
    }

    /// Last successful render
    pub fn rendered(&self) -> &Rendered {
        &self.rendered
    }

    /// Notification slot
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Mutable notification slot (for dismissing)
    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    /// Report a notification
    pub fn post(&mut self, notification: Notification) {
        self.notifier.post(notification);
    }

    /// Persisted light/dark preference
    pub fn theme_preference(&self) -> ThemePreference {
        self.settings.theme
    }

    /// Plain-text export of the current chat
    pub fn plain_text(&self) -> String {
        plain_text_export(&self.config.contact_name, &self.conversation)
    }

    fn now(&self) -> NaiveTime {
        self.clock.unwrap_or_else(|| Local::now().time())
    }

    /// Replace the conversation text and re-render
    pub fn set_conversation(&mut self, text: impl Into<String>) {
        self.conversation = text.into();
        self.refresh();
    }

    /// Change the configuration and re-render
    pub fn update_config<F>(&mut self, update_fn: F)
    where
        F: FnOnce(&mut Configuration),
    {
        update_fn(&mut self.config);
        self.refresh();
    }

    /// Run the pipeline silently: parse → render → store
    ///
    /// The slot is only overwritten when the text parses to at least one message or
    /// is blank. Returns whether it was overwritten.
    pub fn refresh(&mut self) -> bool {
        let messages = chat::parse_at(&self.conversation, &self.config.current_user_name, self.now());

        if messages.is_empty() && !self.conversation.trim().is_empty() {
            return false;
        }

        let markup = render::render(&self.config, &messages, &self.render_options);
        self.rendered = Rendered {
            config: self.config.clone(),
            conversation_text: self.conversation.clone(),
            messages,
            markup,
        };
        true
    }

    /// Explicit "generate" action: refresh with input guards and a notification
    pub fn generate(&mut self) {
        if self.conversation.trim().is_empty() {
            self.post(Notification::warning("Please enter a conversation first!"));
            return;
        }

        if !self.refresh() {
            self.post(Notification::warning(
                "No messages found. Use one 'Name: message' per line.",
            ));
            return;
        }

        let count = self.rendered.messages.len();
        self.post(Notification::success(format!(
            "Chat generated with {} message{}!",
            count,
            if count == 1 { "" } else { "s" }
        )));
    }

    /// Append one message line
    ///
    /// Empty or whitespace-only text is refused with a warning and changes nothing,
    /// as is a sender name that is empty or contains `:` (the line would not parse
    /// back to that sender). Returns whether the line was appended.
    pub fn add_message(&mut self, sender: MessageSender, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            self.post(Notification::warning("Please enter a message first!"));
            return false;
        }

        let name = match sender {
            MessageSender::User => self.config.current_user_name.trim().to_string(),
            MessageSender::Contact => self.config.contact_name.trim().to_string(),
        };
        if name.is_empty() || name.contains(':') {
            self.post(Notification::warning("Set a name without ':' first"));
            return false;
        }

        if !self.conversation.is_empty() && !self.conversation.ends_with('\n') {
            self.conversation.push('\n');
        }
        self.conversation.push_str(&format!("{}: {}", name, text));
        self.refresh();

        self.post(Notification::success("Message added"));
        true
    }

    /// Replace the chat with a generated conversation
    pub fn generate_random<R: Rng + ?Sized>(&mut self, category: Option<Category>, rng: &mut R) {
        let generated = generator::generate_random(category, rng);

        self.config.contact_name = generated.contact_name;
        self.config.current_user_name = generated.user_name;
        self.conversation = generated.conversation_text;
        self.refresh();

        self.post(Notification::success(format!(
            "Random {} chat generated!",
            generated.category.name()
        )));
    }

    /// Replace the conversation with a catalog template
    pub fn load_template(&mut self, id: u32) {
        let Some(template) = templates::find(id) else {
            self.post(Notification::error("Template not found"));
            return;
        };

        let Some(text) =
            templates::conversation_for(id, &self.config.contact_name, &self.config.current_user_name)
        else {
            self.post(Notification::error("Template not found"));
            return;
        };

        self.conversation = text;
        self.refresh();
        self.post(Notification::success(format!("\"{}\" template loaded!", template.name)));
    }

    /// Load a chat from a share link
    pub fn import_share_link(&mut self, link: &str) {
        match parse_share_link(link) {
            Ok(shared) => {
                self.config = shared.configuration();
                self.conversation = shared.conversation;
                self.refresh();
                self.post(Notification::success("Shared chat loaded!"));
            }
            Err(e) => self.post(Notification::error(format!("Could not open share link: {}", e))),
        }
    }

    /// Flip the light/dark preference and persist it
    pub fn toggle_theme_preference(&mut self) {
        let theme = self.settings.theme.toggled();
        self.settings.theme = theme;

        let label = match theme {
            ThemePreference::Light => "Light mode enabled",
            ThemePreference::Dark => "Dark mode enabled",
        };

        let saved = match &self.settings_path {
            Some(path) => self.settings.save(path),
            None => Ok(()),
        };

        match saved {
            Ok(()) => self.post(Notification::info(label)),
            Err(e) => {
                tracing::warn!("Failed to persist theme preference: {}", e);
                self.post(Notification::warning(format!("{} (not saved: {})", label, e)));
            }
        }
    }

    /// Freeze the last render into a job that can run anywhere
    pub fn prepare_export(&self, kind: ExportKind) -> ExportJob {
        let snapshot = ExportSnapshot {
            config: self.rendered.config.clone(),
            conversation_text: self.rendered.conversation_text.clone(),
            markup: self.rendered.markup.clone(),
        };
        ExportJob::new(kind, snapshot, self.capabilities.clone())
    }

    /// Report the outcome of a finished export job
    pub fn complete_export(&mut self, notification: Notification) {
        self.post(notification);
    }

    /// Run an export inline
    pub fn export(&mut self, kind: ExportKind) {
        let notification = self.prepare_export(kind).run();
        self.complete_export(notification);
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}
