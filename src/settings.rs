//! User settings loaded from `<config_dir>/dragboard/settings.json`.
//!
//! Every field has a default, so a partial file only overrides what it
//! names. A missing file is not an error; a broken one is logged and
//! replaced by defaults at startup.

use crate::constants::{CONTAINER_HEIGHT, CONTAINER_WIDTH, WINDOW_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while reading or writing settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Width of the box container in pixels
    pub container_width: f32,
    /// Height of the box container in pixels
    pub container_height: f32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            container_width: CONTAINER_WIDTH,
            container_height: CONTAINER_HEIGHT,
            window_width: WINDOW_SIZE.0,
            window_height: WINDOW_SIZE.1,
        }
    }
}

/// Default settings file location, if the platform has a config dir
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dragboard").join("settings.json"))
}

impl Settings {
    /// Load from the default location, falling back to defaults on any problem.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => {
                info!(path = %path.display(), "Loaded settings");
                settings
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring settings file");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Container and window sizes must be finite and positive
    pub fn validate(&self) -> SettingsResult<()> {
        let sizes = [
            ("container_width", self.container_width),
            ("container_height", self.container_height),
            ("window_width", self.window_width),
            ("window_height", self.window_height),
        ];
        for (field, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("expected a positive size, got {value}"),
                });
            }
        }
        Ok(())
    }
}
