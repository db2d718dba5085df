//! Error types for the tweet sentiment library

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// The export file could not be created or written
    #[error("cannot write results to '{}': {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to the interactive streams failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// Whether the menu loop can report this error and keep running
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Export { .. })
    }
}
