//! Persisted preferences

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Key the theme preference is stored under
pub const THEME_KEY: &str = "mockify.theme";

/// Light or dark application theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemePreference {
    /// The other theme
    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stored value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Application settings
///
/// Stored as JSON. The only persisted value is the theme preference, kept under the
/// `"mockify.theme"` key.
///
/// # Example
/// ```rust,no_run
/// use mockify::storage::{Settings, ThemePreference};
///
/// // Load settings (returns default if file doesn't exist)
/// let mut settings = Settings::load("settings.json").expect("Failed to load");
///
/// // Flip the theme and auto-save
/// settings.update_theme(ThemePreference::Dark, "settings.json").expect("Failed to update");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Light/dark preference
    #[serde(rename = "mockify.theme", default)]
    pub theme: ThemePreference,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to the settings file
    ///
    /// # Returns
    /// The loaded settings, or default settings if file doesn't exist
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Storage(format!("Failed to read settings: {}", e)))?;

        // Handle empty file (return defaults)
        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self = serde_json::from_str(&data)
            .map_err(|e| Error::Storage(format!("Failed to parse settings: {}", e)))?;

        tracing::info!("Loaded settings from {} (theme: {})", path.display(), settings.theme.as_str());

        Ok(settings)
    }

    /// Save settings to a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to save the settings file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Storage(format!("Failed to create settings directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Storage(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, json)
            .map_err(|e| Error::Storage(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }

    /// Update the theme preference and auto-save
    pub fn update_theme<P: AsRef<std::path::Path>>(&mut self, theme: ThemePreference, save_path: P) -> Result<()> {
        self.theme = theme;
        self.save(save_path)
    }
}
