//! Local storage module
//!
//! Handles the few things Mockify keeps on disk:
//! - `settings` - The persisted theme preference
//! - data directory layout (settings file, exports, log file)

pub mod settings;

use std::path::PathBuf;

// Re-export commonly used types
pub use settings::{Settings, THEME_KEY, ThemePreference};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "MOCKIFY_DATA_DIR";

/// Default data directory
pub const DEFAULT_DATA_DIR: &str = "./app_data";

/// Data directory (`$MOCKIFY_DATA_DIR` or `./app_data`)
pub fn data_dir() -> PathBuf {
    std::env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Settings file inside the data directory
pub fn settings_path() -> PathBuf {
    data_dir().join("settings.json")
}

/// Directory for share files and page captures
pub fn export_dir() -> PathBuf {
    data_dir().join("exports")
}

/// Log file written by the terminal UI
pub fn log_path() -> PathBuf {
    data_dir().join("mockify.log")
}
