//! Mockify - chat mockup generator
//!
//! This library turns a plain-text conversation script (`Name: message` per line)
//! into a platform-styled chat rendering (WhatsApp, Instagram, generic skins) and
//! provides the export, notification and persistence plumbing around it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chat;
pub mod export;
pub mod generator;
pub mod notify;
pub mod render;
pub mod storage;
pub mod studio;
pub mod templates;
pub mod tui;

use std::path::Path;

/// Result type alias for Mockify operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Mockify operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Settings / preference storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Clipboard capability error
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Share capability error
    #[error("Share error: {0}")]
    Share(String),

    /// Page capture (screenshot) capability error
    #[error("Capture error: {0}")]
    Capture(String),

    /// Share link could not be decoded
    #[error("Invalid share link: {0}")]
    ShareLink(String),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// CBOR serialization error
    #[error("CBOR serialization error: {0}")]
    CborSerialization(String),
}

/// Initialize the Mockify library with logging to stdout
pub fn init() {
    tracing_subscriber::fmt::init();
}

/// Initialize logging into a file
///
/// Used by the terminal UI so log lines never land on the alternate screen.
pub fn init_file_logging<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .try_init()
        .map_err(|e| Error::Storage(format!("Failed to install log subscriber: {}", e)))
}

#[cfg(test)]
mod tests;
