//! Event types for calendar feeds.
//!
//! - [`Event`]: one calendar entry as received from a source
//! - [`Feed`]: one source's events, pre-sorted by start
//! - [`RenderedEvent`]: the display strings produced for an event

use serde::{Deserialize, Serialize};

use crate::time::CalendarTime;

/// A calendar event as received from a feed.
///
/// Deserializes from a Google Calendar API event resource, where the title is
/// carried by `summary`. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier for the event (source-specific).
    pub id: String,
    /// The event title.
    #[serde(rename = "summary", default)]
    pub title: String,
    /// The event description (may contain markup).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The event location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// When the event starts.
    #[serde(default)]
    pub start: CalendarTime,
    /// When the event ends (exclusive for date-only values).
    #[serde(default)]
    pub end: CalendarTime,
}

impl Event {
    /// Creates a new event with required fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: CalendarTime,
        end: CalendarTime,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            location: None,
            start,
            end,
        }
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// One source's events, ordered by non-decreasing start.
pub type Feed = Vec<Event>;

/// The display strings for a single event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedEvent {
    /// The date/time line, or the all-day label.
    pub date_label: String,
    /// The title after template substitution.
    pub title_text: String,
}
