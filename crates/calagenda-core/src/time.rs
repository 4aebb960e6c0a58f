//! Time types for calendar events.
//!
//! [`CalendarTime`] is the time value as a calendar source supplies it: either
//! an absolute timestamp or a bare calendar date. [`TimeResolver`] turns it
//! into a [`ResolvedTime`], an absolute instant plus a `date_only` flag.

use chrono::{
    DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
    Utc,
};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::error::TimeError;

/// A time value as supplied by a calendar feed.
///
/// Mirrors the Google Calendar API shape: `dateTime` for timed events,
/// `date` for all-day events, and an optional IANA `timeZone` name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarTime {
    /// An absolute timestamp with its offset.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_date_time"
    )]
    pub date_time: Option<DateTime<FixedOffset>>,
    /// A calendar date without time of day or zone.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_date"
    )]
    pub date: Option<NaiveDate>,
    /// The zone the source attached to the value, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl CalendarTime {
    /// Creates a timestamp value from a datetime in any timezone.
    pub fn from_datetime<Tz: TimeZone>(dt: DateTime<Tz>) -> Self {
        let offset = dt.offset().fix();
        Self {
            date_time: Some(dt.with_timezone(&offset)),
            date: None,
            time_zone: None,
        }
    }

    /// Creates a date-only value.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date_time: None,
            date: Some(date),
            time_zone: None,
        }
    }

    /// Builder method to attach a zone name.
    pub fn with_time_zone(mut self, tz: impl Into<String>) -> Self {
        self.time_zone = Some(tz.into());
        self
    }

    /// Returns `true` if the value carries only a calendar date.
    pub fn is_date_only(&self) -> bool {
        self.date_time.is_none() && self.date.is_some()
    }
}

/// Reads a field as text, treating any other shape as missing.
fn lenient_text<'de, D>(deserializer: D, field: &str) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(other) => {
            warn!(field, value = %other, "ignoring non-text time value");
            None
        }
    })
}

/// Unparsable timestamps become `None` so one bad event cannot fail its feed.
fn lenient_date_time<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = lenient_text(deserializer, "dateTime")? else {
        return Ok(None);
    };
    match DateTime::parse_from_rfc3339(&text) {
        Ok(dt) => Ok(Some(dt)),
        Err(err) => {
            warn!(value = %text, %err, "ignoring unparsable dateTime");
            Ok(None)
        }
    }
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = lenient_text(deserializer, "date")? else {
        return Ok(None);
    };
    match NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
        Ok(date) => Ok(Some(date)),
        Err(err) => {
            warn!(value = %text, %err, "ignoring unparsable date");
            Ok(None)
        }
    }
}

/// A calendar time resolved to an absolute instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTime {
    /// The absolute point in time.
    pub instant: DateTime<Utc>,
    /// Whether the source value was a bare date.
    pub date_only: bool,
}

/// Resolves [`CalendarTime`] values against a local timezone.
///
/// The zone only matters for date-only values, whose instant is shifted so
/// that it falls on the intended day in that zone.
#[derive(Debug, Clone)]
pub struct TimeResolver<Tz: TimeZone = Local> {
    tz: Tz,
}

impl TimeResolver<Local> {
    /// Creates a resolver for the host timezone.
    pub fn local() -> Self {
        Self::new(Local)
    }
}

impl Default for TimeResolver<Local> {
    fn default() -> Self {
        Self::local()
    }
}

impl<Tz: TimeZone> TimeResolver<Tz> {
    /// Creates a resolver for the given timezone.
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Returns the timezone used for local rendering.
    pub fn zone(&self) -> &Tz {
        &self.tz
    }

    /// Resolves a calendar time to an absolute instant.
    ///
    /// A timestamp is used verbatim. A bare date is read as midnight UTC and
    /// then moved by the local offset at that instant, so it renders as
    /// local midnight of the same date.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::InvalidTimeValue`] when the value carries neither.
    pub fn resolve(&self, value: &CalendarTime) -> Result<ResolvedTime, TimeError> {
        if let Some(dt) = value.date_time {
            return Ok(ResolvedTime {
                instant: dt.with_timezone(&Utc),
                date_only: false,
            });
        }

        let date = value.date.ok_or(TimeError::InvalidTimeValue)?;
        let midnight = date.and_time(NaiveTime::MIN);
        let offset = self.tz.offset_from_utc_datetime(&midnight).fix();
        let instant = midnight.and_utc() - Duration::seconds(i64::from(offset.local_minus_utc()));

        Ok(ResolvedTime {
            instant,
            date_only: true,
        })
    }

    /// Returns the wall-clock datetime of a resolved time in the local zone.
    pub fn to_local(&self, resolved: &ResolvedTime) -> NaiveDateTime {
        resolved.instant.with_timezone(&self.tz).naive_local()
    }
}
