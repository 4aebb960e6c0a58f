//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use calagenda_core::TracingOutputFormat;

/// calagenda - merge calendar feeds into one agenda
#[derive(Debug, Parser)]
#[command(name = "calagenda")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "CALAGENDA_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v', global = true)]
    pub debug: bool,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

impl From<LogFormat> for TracingOutputFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Compact => TracingOutputFormat::Compact,
            LogFormat::Json => TracingOutputFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge calendar response files and render the agenda
    Render(RenderArgs),

    /// List the calendar ids from the configuration
    Calendars,
}

#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Calendar response files (Google Calendar events JSON), one per calendar
    #[arg(required = true)]
    pub feeds: Vec<PathBuf>,

    /// Maximum number of events (overrides config)
    #[arg(long, short = 'n')]
    pub max_results: Option<usize>,

    /// Title template, e.g. "[STARTTIME - ][TITLE]" (overrides config)
    #[arg(long)]
    pub title_format: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Render times in UTC instead of the local timezone
    #[arg(long)]
    pub utc: bool,

    /// Write the agenda to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_render() {
        let cli = Cli::try_parse_from([
            "calagenda",
            "--debug",
            "render",
            "-n",
            "5",
            "--title-format",
            "[TITLE]",
            "--json",
            "a.json",
            "b.json",
        ])
        .unwrap();

        assert!(cli.debug);
        assert_eq!(cli.log_format, LogFormat::Compact);
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.max_results, Some(5));
        assert_eq!(args.title_format.as_deref(), Some("[TITLE]"));
        assert!(args.json);
        assert!(!args.utc);
        assert_eq!(args.feeds.len(), 2);
    }

    #[test]
    fn render_requires_feeds() {
        assert!(Cli::try_parse_from(["calagenda", "render"]).is_err());
    }

    #[test]
    fn parses_json_log_format() {
        let cli = Cli::try_parse_from(["calagenda", "calendars", "--log-format", "json"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
        assert_eq!(
            TracingOutputFormat::from(cli.log_format),
            TracingOutputFormat::Json
        );
        assert!(Cli::try_parse_from(["calagenda", "calendars", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn parses_calendars() {
        let cli = Cli::try_parse_from(["calagenda", "calendars", "--config", "x.toml"]).unwrap();
        assert!(matches!(cli.command, Command::Calendars));
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
