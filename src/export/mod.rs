//! Exports of a rendered chat
//!
//! - `capability` - Clipboard / share / capture traits and their implementations
//! - `share` - Share links and share payloads
//! - `text` - Plain-text export
//!
//! An `ExportJob` owns a snapshot of the chat taken when it was prepared, so a job
//! started before an edit reports the chat as it was at that moment.

pub mod capability;
pub mod share;
pub mod text;

pub use capability::{
    Capabilities, ClipboardProvider, FileShare, HtmlPageCapture, ScreenshotCapture, ShareProvider,
    SystemClipboard,
};
pub use share::{SharePayload, SharedChat, generate_share_link, parse_share_link};
pub use text::plain_text_export;

use crate::chat::Configuration;
use crate::notify::Notification;

/// Kinds of export the user can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
    /// Copy the rendered HTML fragment
    CopyHtml,
    /// Copy the plain-text export
    CopyText,
    /// Hand the chat to the share capability
    Share,
    /// Capture the rendered chat (screenshot)
    Capture,
}

impl ExportKind {
    /// Short label for logs and key help
    pub fn label(&self) -> &'static str {
        match self {
            Self::CopyHtml => "copy HTML",
            Self::CopyText => "copy text",
            Self::Share => "share",
            Self::Capture => "screenshot",
        }
    }
}

/// Chat state frozen at the moment an export was requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSnapshot {
    /// Configuration in effect
    pub config: Configuration,
    /// Raw conversation text
    pub conversation_text: String,
    /// Rendered HTML fragment
    pub markup: String,
}

impl ExportSnapshot {
    /// Plain-text export of the snapshot
    pub fn plain_text(&self) -> String {
        plain_text_export(&self.config.contact_name, &self.conversation_text)
    }

    fn title(&self) -> String {
        format!("Chat with {}", self.config.contact_name)
    }
}

/// A self-contained export, runnable on any thread
#[derive(Debug, Clone)]
pub struct ExportJob {
    /// What to do
    pub kind: ExportKind,
    /// What to export
    pub snapshot: ExportSnapshot,
    capabilities: Capabilities,
}

impl ExportJob {
    /// Create a job over a snapshot
    pub fn new(kind: ExportKind, snapshot: ExportSnapshot, capabilities: Capabilities) -> Self {
        Self {
            kind,
            snapshot,
            capabilities,
        }
    }

    /// Run the export and describe the outcome
    ///
    /// Failures never escape: each outcome becomes exactly one notification.
    pub fn run(self) -> Notification {
        let notification = match self.kind {
            ExportKind::CopyHtml => self.copy(&self.snapshot.markup, "HTML copied to clipboard!", "Failed to copy HTML"),
            ExportKind::CopyText => self.copy(
                &self.snapshot.plain_text(),
                "Chat text copied to clipboard!",
                "Failed to copy chat text",
            ),
            ExportKind::Share => self.share(),
            ExportKind::Capture => self.capture(),
        };

        tracing::info!(
            "Export '{}' finished ({}): {}",
            self.kind.label(),
            notification.severity.name(),
            notification.message
        );

        notification
    }

    fn copy(&self, text: &str, success: &str, failure: &str) -> Notification {
        let Some(clipboard) = &self.capabilities.clipboard else {
            return Notification::error("Clipboard is not available");
        };

        match clipboard.set_text(text) {
            Ok(()) => Notification::success(success),
            Err(e) => Notification::error(format!("{}: {}", failure, e)),
        }
    }

    /// Plain-text clipboard export used when another capability is missing
    fn fallback_copy(&self) -> bool {
        match &self.capabilities.clipboard {
            Some(clipboard) => match clipboard.set_text(&self.snapshot.plain_text()) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Fallback clipboard export failed: {}", e);
                    false
                }
            },
            None => false,
        }
    }

    fn share(&self) -> Notification {
        let Some(share) = &self.capabilities.share else {
            return if self.fallback_copy() {
                Notification::info("Sharing is not available. Chat text copied to clipboard instead.")
            } else {
                Notification::error("Sharing is not available on this device")
            };
        };

        let link = match generate_share_link(&self.snapshot.config, &self.snapshot.conversation_text) {
            Ok(link) => link,
            Err(e) => return Notification::error(format!("Failed to create share link: {}", e)),
        };

        let payload = SharePayload {
            title: self.snapshot.title(),
            text: self.snapshot.plain_text(),
            link,
        };

        match share.share(&payload) {
            Ok(location) => Notification::success(format!("Chat shared to {}", location)),
            Err(e) => Notification::error(format!("Failed to share chat: {}", e)),
        }
    }

    fn capture(&self) -> Notification {
        let Some(screenshot) = &self.capabilities.screenshot else {
            let mut message =
                "Screenshot library not available. Please check your internet connection.".to_string();
            if self.fallback_copy() {
                message.push_str(" Chat text copied to clipboard instead.");
            }
            return Notification::error(message);
        };

        match screenshot.capture(&self.snapshot.markup, &self.snapshot.title()) {
            Ok(location) => Notification::success(format!("Screenshot saved to {}", location)),
            Err(e) => Notification::error(format!("Failed to capture screenshot: {}", e)),
        }
    }
}
