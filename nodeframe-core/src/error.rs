//! Error types for style configuration

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or saving a style config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid style config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to determine config directory")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
