//! CLI error types.

use std::path::PathBuf;

use calagenda_core::{ConfigError, FeedError};
use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A feed file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A feed file is not a calendar response.
    #[error("{path}: {source}")]
    Feed {
        path: PathBuf,
        #[source]
        source: FeedError,
    },

    /// The output location does not exist.
    #[error("output target not found: {path}")]
    MissingOutputTarget { path: PathBuf },

    /// JSON encoding failed.
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    /// Creates an IO error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
