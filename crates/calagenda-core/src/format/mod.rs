//! Presentation of calendar events.
//!
//! [`EventPresenter`] turns an [`Event`] into the two strings an agenda shows:
//! a date label that depends on the event's shape (single all-day, timed
//! within one day, or spanning days) and a title rendered from a user
//! template.
//!
//! # Title templates
//!
//! A template may contain `[TITLE]`, `[STARTTIME]` and `[ENDTIME]`. Text
//! inside the brackets around the keyword is kept only when the value
//! exists, so `[ENDTIME - ]` yields `"10:00 AM - "` for a timed event and
//! nothing for an all-day one.
//!
//! ```rust
//! use calagenda_core::{CalendarTime, Event, EventPresenter, Labels, TimeResolver};
//! use chrono::{TimeZone, Utc};
//!
//! let presenter = EventPresenter::new(TimeResolver::new(Utc), Labels::default());
//! let start = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
//! let event = Event::new(
//!     "e1",
//!     "Standup",
//!     CalendarTime::from_datetime(start),
//!     CalendarTime::default(),
//! );
//! assert_eq!(presenter.format_title("[TITLE] ([STARTTIME])", &event), "Standup (9:00 AM)");
//! ```

use std::sync::LazyLock;

use chrono::{Days, Local, NaiveDateTime, TimeZone};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::event::{Event, RenderedEvent};
use crate::time::TimeResolver;


/// Default title template.
pub const DEFAULT_TITLE_FORMAT: &str = "[TITLE]";

const DATE_FORMAT: &str = "%a, %b %-d, %Y";
const TIME_FORMAT: &str = "%-I:%M %p";
const DATE_TIME_FORMAT: &str = "%a, %b %-d, %Y %-I:%M %p";
const DAY_HEADING_FORMAT: &str = "%b %d";

static TITLE_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*)TITLE([^\]]*)\]").expect("Invalid TITLE placeholder regex")
});

static STARTTIME_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*)STARTTIME([^\]]*)\]").expect("Invalid STARTTIME placeholder regex")
});

static ENDTIME_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*)ENDTIME([^\]]*)\]").expect("Invalid ENDTIME placeholder regex")
});

/// Localized labels used when an event has no time to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Substituted for `[STARTTIME]` on date-only events.
    pub all_day: String,
    /// Date label for single-day all-day events and unresolvable times.
    pub all_day_event: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            all_day: "All Day".to_string(),
            all_day_event: "All Day Event".to_string(),
        }
    }
}

impl Labels {
    /// Replaces empty labels with their defaults.
    pub fn or_defaults(self) -> Self {
        let defaults = Self::default();
        Self {
            all_day: non_empty(&self.all_day).unwrap_or(defaults.all_day),
            all_day_event: non_empty(&self.all_day_event).unwrap_or(defaults.all_day_event),
        }
    }
}

/// The date shape of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateClass {
    /// Date-only start and end covering exactly one day.
    AllDay,
    /// Starts and ends on the same local day.
    SameDayTimed,
    /// Spans more than one local day.
    MultiDayTimed,
    /// Start or end could not be resolved.
    Unresolved,
}

/// Local wall-clock span of an event, end already made inclusive.
struct DateSpan {
    class: DateClass,
    start: NaiveDateTime,
    end: NaiveDateTime,
    start_date_only: bool,
    end_date_only: bool,
}

/// Values available to a title template.
#[derive(Debug, Default)]
struct TitleValues {
    title: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
}

/// Renders date labels and titles for events.
#[derive(Debug, Clone)]
pub struct EventPresenter<Tz: TimeZone = Local> {
    resolver: TimeResolver<Tz>,
    labels: Labels,
}

impl EventPresenter<Local> {
    /// Creates a presenter rendering in the host timezone with default labels.
    pub fn with_defaults() -> Self {
        Self::new(TimeResolver::local(), Labels::default())
    }
}

impl<Tz: TimeZone> EventPresenter<Tz> {
    /// Creates a presenter with the given resolver and labels.
    ///
    /// Empty labels fall back to the defaults.
    pub fn new(resolver: TimeResolver<Tz>, labels: Labels) -> Self {
        Self {
            resolver,
            labels: labels.or_defaults(),
        }
    }

    /// Returns the labels in use.
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Returns the resolver in use.
    pub fn resolver(&self) -> &TimeResolver<Tz> {
        &self.resolver
    }

    /// Classifies the date shape of an event.
    pub fn classify(&self, event: &Event) -> DateClass {
        self.date_span(event)
            .map_or(DateClass::Unresolved, |span| span.class)
    }

    /// Builds the date label shown in an event's details.
    pub fn date_label(&self, event: &Event) -> String {
        let Some(span) = self.date_span(event) else {
            return self.labels.all_day_event.clone();
        };

        match span.class {
            DateClass::AllDay | DateClass::Unresolved => self.labels.all_day_event.clone(),
            DateClass::SameDayTimed => format!(
                "{}, {} - {}",
                span.start.format(DATE_FORMAT),
                span.start.format(TIME_FORMAT),
                span.end.format(TIME_FORMAT)
            ),
            DateClass::MultiDayTimed => format!(
                "{} - {}",
                format_side(&span.start, span.start_date_only),
                format_side(&span.end, span.end_date_only)
            ),
        }
    }

    /// Renders a title template for an event.
    ///
    /// Placeholders are substituted in the order TITLE, STARTTIME, ENDTIME.
    /// A placeholder whose value is missing is removed together with the
    /// literal text inside its brackets.
    pub fn format_title(&self, template: &str, event: &Event) -> String {
        let values = self.title_values(event);

        let output = substitute(template, &TITLE_PLACEHOLDER, values.title.as_deref());
        let output = substitute(&output, &STARTTIME_PLACEHOLDER, values.start_time.as_deref());
        substitute(&output, &ENDTIME_PLACEHOLDER, values.end_time.as_deref())
    }

    /// Renders both display strings for an event.
    pub fn render(&self, template: &str, event: &Event) -> RenderedEvent {
        RenderedEvent {
            date_label: self.date_label(event),
            title_text: self.format_title(template, event),
        }
    }

    /// Returns the agenda day heading for an event, if its start resolves.
    pub fn day_heading(&self, event: &Event) -> Option<String> {
        let start = self.resolver.resolve(&event.start).ok()?;
        Some(
            self.resolver
                .to_local(&start)
                .format(DAY_HEADING_FORMAT)
                .to_string(),
        )
    }

    fn date_span(&self, event: &Event) -> Option<DateSpan> {
        let start = self.resolver.resolve(&event.start).ok()?;
        let end = self.resolver.resolve(&event.end).ok()?;

        let start_local = self.resolver.to_local(&start);
        let mut end_local = self.resolver.to_local(&end);

        let mut class = None;
        if start.date_only && end.date_only {
            // Date-only ends are exclusive.
            end_local = end_local
                .checked_sub_days(Days::new(1))
                .unwrap_or(end_local);
            if end_local == start_local {
                class = Some(DateClass::AllDay);
            }
        }

        let class = class.unwrap_or(if start_local.date() == end_local.date() {
            DateClass::SameDayTimed
        } else {
            DateClass::MultiDayTimed
        });

        Some(DateSpan {
            class,
            start: start_local,
            end: end_local,
            start_date_only: start.date_only,
            end_date_only: end.date_only,
        })
    }

    fn title_values(&self, event: &Event) -> TitleValues {
        let mut values = TitleValues {
            title: non_empty(&event.title),
            ..TitleValues::default()
        };

        let Ok(start) = self.resolver.resolve(&event.start) else {
            return values;
        };

        if start.date_only {
            values.start_time = Some(self.labels.all_day.clone());
        } else {
            values.start_time = Some(format_time(&self.resolver.to_local(&start)));
            if let Ok(end) = self.resolver.resolve(&event.end) {
                values.end_time = Some(format_time(&self.resolver.to_local(&end)));
            }
        }

        values
    }
}

/// Formats a date as e.g. `Sun, Jun 1, 2025`.
pub fn format_date(dt: &NaiveDateTime) -> String {
    dt.format(DATE_FORMAT).to_string()
}

/// Formats a time as e.g. `9:00 AM`.
pub fn format_time(dt: &NaiveDateTime) -> String {
    dt.format(TIME_FORMAT).to_string()
}

/// Formats a date and time as e.g. `Sun, Jun 1, 2025 9:00 AM`.
pub fn format_date_time(dt: &NaiveDateTime) -> String {
    dt.format(DATE_TIME_FORMAT).to_string()
}

fn format_side(dt: &NaiveDateTime, date_only: bool) -> String {
    if date_only {
        format_date(dt)
    } else {
        format_date_time(dt)
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

fn substitute(template: &str, placeholder: &Regex, value: Option<&str>) -> String {
    placeholder
        .replace_all(template, |caps: &Captures<'_>| match value {
            Some(value) => format!("{}{}{}", &caps[1], value, &caps[2]),
            None => String::new(),
        })
        .into_owned()
}
