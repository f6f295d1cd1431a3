//! Error types for affinity-cli

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for affinity-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in affinity-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from affinity-poet
    #[error("Poet error: {0}")]
    Poet(#[from] affinity_poet::Error),

    /// Missing or malformed configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong
        message: String,
    },

    /// I/O failure on a known path
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// I/O failure on a standard stream
    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an I/O error for `path`.
    pub fn io_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
