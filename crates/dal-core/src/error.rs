//! Error types for configuration loading

use std::path::PathBuf;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read configuration {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration content is not valid JSON for `DalConfig`
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
