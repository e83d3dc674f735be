//! External capabilities used by exports
//!
//! Clipboard, share and page capture are injected behind traits so they can be
//! swapped for mocks in tests or left out entirely when unavailable.

use chrono::Local;
use std::path::PathBuf;
use std::sync::Arc;

use crate::export::share::SharePayload;
use crate::render::page::standalone_document;
use crate::{Error, Result};

/// Clipboard write access
pub trait ClipboardProvider: Send + Sync {
    /// Copy text to the clipboard
    fn set_text(&self, text: &str) -> Result<()>;
}

/// Share sheet
pub trait ShareProvider: Send + Sync {
    /// Share a chat; returns where it ended up (a path, URL, or target name)
    fn share(&self, payload: &SharePayload) -> Result<String>;
}

/// Screenshot / page capture
pub trait ScreenshotCapture: Send + Sync {
    /// Capture a rendered fragment; returns where the capture was stored
    fn capture(&self, markup: &str, title: &str) -> Result<String>;
}

/// Set of available capabilities
///
/// `None` means the capability is not available; exports check this before use.
#[derive(Clone, Default)]
pub struct Capabilities {
    /// Clipboard access
    pub clipboard: Option<Arc<dyn ClipboardProvider>>,
    /// Share sheet
    pub share: Option<Arc<dyn ShareProvider>>,
    /// Page capture
    pub screenshot: Option<Arc<dyn ScreenshotCapture>>,
}

impl Capabilities {
    /// No capabilities at all
    pub fn none() -> Self {
        Self::default()
    }

    /// System clipboard plus file-based share and page capture under `export_dir`
    pub fn system<P: Into<PathBuf>>(export_dir: P) -> Self {
        let export_dir = export_dir.into();
        Self {
            clipboard: Some(Arc::new(SystemClipboard)),
            share: Some(Arc::new(FileShare::new(export_dir.clone()))),
            screenshot: Some(Arc::new(HtmlPageCapture::new(export_dir))),
        }
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities")
            .field("clipboard", &self.clipboard.is_some())
            .field("share", &self.share.is_some())
            .field("screenshot", &self.screenshot.is_some())
            .finish()
    }
}

/// System clipboard via arboard
///
/// A clipboard handle is opened per call so the provider stays `Send + Sync`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| Error::Clipboard(format!("Clipboard init failed: {}", e)))?;
        clipboard
            .set_text(text)
            .map_err(|e| Error::Clipboard(format!("Clipboard operation failed: {}", e)))
    }
}

fn timestamped_path(dir: &std::path::Path, prefix: &str, extension: &str) -> PathBuf {
    dir.join(format!(
        "{}_{}.{}",
        prefix,
        Local::now().format("%Y%m%d_%H%M%S%3f"),
        extension
    ))
}

/// Shares a chat by writing the text and link into a file
#[derive(Debug, Clone)]
pub struct FileShare {
    dir: PathBuf,
}

impl FileShare {
    /// Share into `dir` (created on demand)
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }
}

impl ShareProvider for FileShare {
    fn share(&self, payload: &SharePayload) -> Result<String> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| Error::Share(format!("Failed to create share directory: {}", e)))?;

        let path = timestamped_path(&self.dir, "chat_share", "txt");
        let contents = format!("{}\n\n{}\n\n{}\n", payload.title, payload.text, payload.link);
        std::fs::write(&path, contents)
            .map_err(|e| Error::Share(format!("Failed to write share file: {}", e)))?;

        Ok(path.display().to_string())
    }
}

/// Captures a chat as a standalone HTML page on disk
#[derive(Debug, Clone)]
pub struct HtmlPageCapture {
    dir: PathBuf,
}

impl HtmlPageCapture {
    /// Capture into `dir` (created on demand)
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }
}

impl ScreenshotCapture for HtmlPageCapture {
    fn capture(&self, markup: &str, title: &str) -> Result<String> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| Error::Capture(format!("Failed to create capture directory: {}", e)))?;

        let path = timestamped_path(&self.dir, "chat_capture", "html");
        std::fs::write(&path, standalone_document(markup, title))
            .map_err(|e| Error::Capture(format!("Failed to write capture: {}", e)))?;

        Ok(path.display().to_string())
    }
}
