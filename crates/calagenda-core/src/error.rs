//! Error types for the agenda core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving a calendar time.
///
/// These never escape the merge or presentation stages: an unresolvable time
/// drops the event from ordering or falls back to a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeError {
    /// The value carries neither a timestamp nor a calendar date.
    #[error("calendar time has neither a dateTime nor a date")]
    InvalidTimeValue,
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::AgendaConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors that can occur while decoding a calendar response.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The response body is not a valid calendar events response.
    #[error("invalid calendar response: {0}")]
    Json(#[from] serde_json::Error),
}
