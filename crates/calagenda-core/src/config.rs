//! Agenda configuration.
//!
//! Settings live in a single TOML file:
//!
//! ```toml
//! max_results = 10
//! title_format = "[STARTTIME - ][TITLE]"
//! calendars = ["team@example.com, holidays@example.com", "me@example.com"]
//!
//! [labels]
//! all_day = "All Day"
//! all_day_event = "All Day Event"
//! ```
//!
//! Each `calendars` entry may list several calendar ids separated by commas.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::format::{DEFAULT_TITLE_FORMAT, Labels};

/// Configuration for building an agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgendaConfig {
    /// Maximum number of events in the merged agenda.
    pub max_results: usize,

    /// Title template.
    pub title_format: String,

    /// Calendar id lists, each possibly comma-separated.
    pub calendars: Vec<String>,

    /// Debug logging.
    pub debug: bool,

    /// Localized labels.
    pub labels: Labels,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            title_format: DEFAULT_TITLE_FORMAT.to_string(),
            calendars: Vec::new(),
            debug: false,
            labels: Labels::default(),
        }
    }
}

impl AgendaConfig {
    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the content is not valid.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Returns every configured calendar id, trimmed, blanks skipped.
    pub fn calendar_ids(&self) -> Vec<String> {
        parse_calendar_ids(&self.calendars)
    }
}

/// Splits comma-separated calendar id lists into individual ids.
pub fn parse_calendar_ids<S: AsRef<str>>(lists: &[S]) -> Vec<String> {
    lists
        .iter()
        .flat_map(|list| list.as_ref().split(','))
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let config = AgendaConfig::default();
        assert_eq!(config.max_results, 10);
        assert_eq!(config.title_format, "[TITLE]");
        assert!(config.calendars.is_empty());
        assert!(!config.debug);
        assert_eq!(config.labels, Labels::default());
    }

    #[test]
    fn parses_full_config() {
        let config = AgendaConfig::from_toml_str(
            r#"
            max_results = 5
            title_format = "[STARTTIME - ][TITLE]"
            calendars = ["a@example.com, b@example.com", "c@example.com"]
            debug = true

            [labels]
            all_day = "Journée"
            "#,
        )
        .unwrap();

        assert_eq!(config.max_results, 5);
        assert_eq!(config.title_format, "[STARTTIME - ][TITLE]");
        assert!(config.debug);
        assert_eq!(config.labels.all_day, "Journée");
        assert_eq!(config.labels.all_day_event, "All Day Event");
        assert_eq!(
            config.calendar_ids(),
            vec!["a@example.com", "b@example.com", "c@example.com"]
        );
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = AgendaConfig::from_toml_str("").unwrap();
        assert_eq!(config, AgendaConfig::default());
    }

    #[test]
    fn invalid_config_is_parse_error() {
        let err = AgendaConfig::from_toml_str("max_results = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_results = 3").unwrap();
        let config = AgendaConfig::load_from(file.path()).unwrap();
        assert_eq!(config.max_results, 3);
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AgendaConfig::load_from(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn calendar_ids_skip_blanks() {
        let ids = parse_calendar_ids(&["", " , a ,,b", "  "]);
        assert_eq!(ids, vec!["a", "b"]);
    }
}
