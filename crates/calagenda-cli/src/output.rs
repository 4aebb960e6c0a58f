//! Agenda rendering for the terminal and files.

use std::path::Path;

use calagenda_core::{Agenda, NO_EVENTS_TEXT};

use crate::error::{CliError, CliResult};

/// Renders an agenda as indented plain text.
///
/// Day headings are flush left; each event shows its title, then its date
/// label, location and description indented beneath it.
pub fn format_text(agenda: &Agenda) -> String {
    if agenda.is_empty() {
        return format!("{}\n", NO_EVENTS_TEXT);
    }

    let mut out = String::new();
    for group in &agenda.groups {
        out.push_str(&format!("{}\n", group.heading));
        for item in &group.items {
            out.push_str(&format!("  {}\n", item.title_text));
            out.push_str(&format!("    {}\n", item.date_label));
            if let Some(ref location) = item.location {
                out.push_str(&format!("    {}\n", location));
            }
            if let Some(ref description) = item.description {
                for line in description.lines() {
                    out.push_str(&format!("    {}\n", line));
                }
            }
        }
    }
    out
}

/// Renders an agenda as pretty-printed JSON.
pub fn format_json(agenda: &Agenda) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(agenda)?)
}

/// Writes rendered output to a file, or stdout when no path is given.
///
/// A path whose parent directory does not exist is reported as
/// [`CliError::MissingOutputTarget`].
pub fn write_output(target: Option<&Path>, content: &str) -> CliResult<()> {
    let Some(path) = target else {
        print!("{}", content);
        return Ok(());
    };

    let parent_missing = path
        .parent()
        .is_some_and(|parent| !parent.as_os_str().is_empty() && !parent.is_dir());
    if parent_missing {
        return Err(CliError::MissingOutputTarget {
            path: path.to_path_buf(),
        });
    }

    std::fs::write(path, content).map_err(|e| CliError::io(path, e))
}
