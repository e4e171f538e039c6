//! Menu settings stored as JSON in the application data directory.
//!
//! # Data Directory Locations
//!
//! - **macOS**: `~/Library/Application Support/chat.lantern.Lantern`
//! - **Windows**: `%APPDATA%\lantern\Lantern`
//! - **Linux**: `~/.local/share/lantern`
//! - **Debug builds**: `./lantern_data` in current directory

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LanternError;
use crate::menu::overflow::DEFAULT_OVERFLOW_THRESHOLD;
use crate::models::StyleProperties;

/// File name of the menu settings inside the data directory.
pub const CONFIG_FILE_NAME: &str = "menu.json";

/// Get the default data directory for the application.
pub fn default_data_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from("./lantern_data")
    }

    #[cfg(not(debug_assertions))]
    {
        dirs::data_dir()
            .map(|d| {
                #[cfg(target_os = "macos")]
                {
                    d.join("chat.lantern.Lantern")
                }
                #[cfg(target_os = "windows")]
                {
                    d.join("lantern").join("Lantern")
                }
                #[cfg(not(any(target_os = "macos", target_os = "windows")))]
                {
                    d.join("lantern")
                }
            })
            .unwrap_or_else(|| PathBuf::from("./lantern_data"))
    }
}

/// Context menu settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Labels longer than this many characters are assumed to wrap.
    pub overflow_threshold: usize,
    /// Custom properties applied over the theme's menu style.
    pub style_overrides: StyleProperties,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            overflow_threshold: DEFAULT_OVERFLOW_THRESHOLD,
            style_overrides: StyleProperties::new(),
        }
    }
}

impl MenuConfig {
    /// Load settings from `path`.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is
    /// an error.
    pub fn load(path: &Path) -> Result<Self, LanternError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No menu settings file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            threshold = config.overflow_threshold,
            "Loaded menu settings"
        );
        Ok(config)
    }

    /// Load settings from the default data directory.
    pub fn load_default() -> Result<Self, LanternError> {
        Self::load(&default_data_dir().join(CONFIG_FILE_NAME))
    }

    /// Write settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), LanternError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Check settings that serde cannot express.
    pub fn validate(&self) -> Result<(), LanternError> {
        if self.overflow_threshold == 0 {
            return Err(LanternError::config("overflow_threshold must be at least 1"));
        }
        Ok(())
    }

    /// Theme style with this configuration's overrides applied.
    pub fn style(&self, theme: &StyleProperties) -> StyleProperties {
        theme.merged(&self.style_overrides)
    }
}

#[cfg(feature = "gpui")]
impl gpui::Global for MenuConfig {}
