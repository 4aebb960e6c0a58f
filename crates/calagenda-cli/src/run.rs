//! Command implementations.

use std::path::Path;

use calagenda_core::{
    AgendaConfig, CalendarResponse, EventPresenter, FeedMerger, TimeResolver, build_agenda,
    collect_feeds, parse_response,
};
use chrono::{Local, TimeZone, Utc};
use tracing::{debug, error, info};

use crate::cli::{Cli, Command, RenderArgs};
use crate::error::{CliError, CliResult};
use crate::output;

/// Loads the configuration named on the command line, or the defaults.
pub fn load_config(cli: &Cli) -> CliResult<AgendaConfig> {
    match cli.config {
        Some(ref path) => Ok(AgendaConfig::load_from(path)?),
        None => Ok(AgendaConfig::default()),
    }
}

/// Runs the parsed command.
pub fn run(cli: &Cli, config: &AgendaConfig) -> CliResult<()> {
    match cli.command {
        Command::Render(ref args) => {
            let rendered = if args.utc {
                render(args, config, TimeResolver::new(Utc))?
            } else {
                render(args, config, TimeResolver::new(Local))?
            };
            output::write_output(args.output.as_deref(), &rendered)
        }
        Command::Calendars => {
            for id in config.calendar_ids() {
                println!("{}", id);
            }
            Ok(())
        }
    }
}

/// Reads the feed files, merges them and renders the agenda.
///
/// Files that cannot be read or decoded are logged and skipped.
pub fn render<Tz: TimeZone>(
    args: &RenderArgs,
    config: &AgendaConfig,
    resolver: TimeResolver<Tz>,
) -> CliResult<String> {
    let responses = args
        .feeds
        .iter()
        .filter_map(|path| match read_response(path) {
            Ok(response) => Some((path.display().to_string(), response)),
            Err(e) => {
                error!(error = %e, "skipping calendar feed");
                None
            }
        })
        .collect::<Vec<_>>();

    let cap = args.max_results.unwrap_or(config.max_results);
    let title_format = args
        .title_format
        .as_deref()
        .unwrap_or(&config.title_format);

    let feeds = collect_feeds(responses);
    info!(feeds = feeds.len(), cap, "merging {} feeds into {} results", feeds.len(), cap);

    let merged = FeedMerger::new(resolver.clone()).merge(feeds, cap);
    let presenter = EventPresenter::new(resolver, config.labels.clone());
    let agenda = build_agenda(&merged, &presenter, title_format);
    debug!(events = agenda.len(), days = agenda.groups.len(), "agenda built");

    if args.json {
        output::format_json(&agenda)
    } else {
        Ok(output::format_text(&agenda))
    }
}

fn read_response(path: &Path) -> CliResult<CalendarResponse> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    parse_response(&content).map_err(|source| CliError::Feed {
        path: path.to_path_buf(),
        source,
    })
}
