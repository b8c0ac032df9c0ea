//! Style configuration (persistent)
//!
//! Themes are stored as pretty JSON. Every field falls back to its default,
//! so a config file only needs the values it overrides.

use crate::error::{ConfigError, Result};
use crate::theme::FrameTheme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "style.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    pub theme: FrameTheme,
}

impl StyleConfig {
    /// Parse a config from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StyleConfig = serde_json::from_str(json)?;
        config.theme.check();
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load config from the standard location
    /// Returns default config if file doesn't exist or is malformed
    pub fn load() -> Self {
        match Self::config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load style config: {}", e);
                log::warn!("Using default style");
                Self::default()
            }
        }
    }

    /// Load config from a file; a missing file yields the default config
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No style config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&contents)?;
        log::debug!("Loaded style config from {:?}", path);
        Ok(config)
    }

    /// Save config to the standard location
    /// Logs error but doesn't block if save fails
    pub fn save(&self) {
        if let Err(e) = Self::config_path().and_then(|path| self.save_to(&path)) {
            log::warn!("Failed to save style config: {}", e);
        }
    }

    /// Save config atomically (write to temp, then rename)
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_error = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let json = self.to_json()?;

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, json).map_err(io_error)?;
        std::fs::rename(&temp_path, path).map_err(io_error)?;

        Ok(())
    }

    /// Get cross-platform config file path
    pub fn config_path() -> Result<PathBuf> {
        use directories::ProjectDirs;

        let proj_dirs = ProjectDirs::from("", "", "nodeframe").ok_or(ConfigError::NoConfigDir)?;

        Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
