//! Calendar responses and feed collection.
//!
//! Each calendar source answers with a [`CalendarResponse`]: a list of events
//! already ordered by start, or an error. [`collect_feeds`] keeps the
//! successful ones, in source order, for merging.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::FeedError;
use crate::event::{Event, Feed};

/// An error reported by a calendar source in place of events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Status code, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
}

/// One calendar's response to an events listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarResponse {
    /// The events, ordered by start.
    #[serde(default)]
    pub items: Vec<Event>,
    /// Set when the calendar could not be listed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl CalendarResponse {
    /// Creates a successful response.
    pub fn with_items(items: Vec<Event>) -> Self {
        Self { items, error: None }
    }

    /// Creates a failed response.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            error: Some(ApiError {
                code: None,
                message: message.into(),
            }),
        }
    }
}

/// Decodes a calendar events response from JSON.
///
/// # Errors
///
/// Returns [`FeedError::Json`] when the body is not a valid response.
pub fn parse_response(json: &str) -> Result<CalendarResponse, FeedError> {
    Ok(serde_json::from_str(json)?)
}

/// Collects the feeds of all successful responses, preserving order.
///
/// Responses carrying an error are logged and skipped.
pub fn collect_feeds<K, I>(responses: I) -> Vec<Feed>
where
    K: fmt::Display,
    I: IntoIterator<Item = (K, CalendarResponse)>,
{
    let mut feeds = Vec::new();

    for (key, response) in responses {
        if let Some(err) = response.error {
            error!(calendar = %key, message = %err.message, "error downloading calendar");
            continue;
        }
        debug!(calendar = %key, entries = response.items.len(), "feed collected");
        feeds.push(response.items);
    }

    feeds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::CalendarTime;

    fn event(id: &str) -> Event {
        Event::new(id, id, CalendarTime::default(), CalendarTime::default())
    }

    #[test]
    fn parses_items() {
        let json = r#"{
            "kind": "calendar#events",
            "summary": "Team",
            "items": [
                {"id": "a", "summary": "Standup", "start": {"dateTime": "2025-06-01T09:00:00Z"}, "end": {"dateTime": "2025-06-01T09:15:00Z"}},
                {"id": "b", "summary": "Holiday", "start": {"date": "2025-06-02"}, "end": {"date": "2025-06-03"}}
            ]
        }"#;
        let response = parse_response(json).unwrap();
        assert!(response.error.is_none());
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[1].title, "Holiday");
        assert!(response.items[1].start.is_date_only());
    }

    #[test]
    fn parses_error() {
        let json = r#"{"error": {"code": 404, "message": "Not Found", "errors": []}}"#;
        let response = parse_response(json).unwrap();
        assert!(response.items.is_empty());
        let err = response.error.unwrap();
        assert_eq!(err.code, Some(404));
        assert_eq!(err.message, "Not Found");
    }

    #[test]
    fn bad_time_value_keeps_the_rest_of_the_feed() {
        let json = r#"{"items": [
            {"id": "good", "summary": "Standup", "start": {"dateTime": "2025-06-01T09:00:00Z"}},
            {"id": "bad", "summary": "Lunch", "start": {"dateTime": "2025-06-01T11:00:00"}}
        ]}"#;
        let response = parse_response(json).unwrap();
        assert_eq!(response.items.len(), 2);
        assert!(response.items[1].start.date_time.is_none());

        let merged = crate::merge::FeedMerger::new(crate::time::TimeResolver::new(chrono::Utc))
            .merge(collect_feeds(vec![("team", response)]), 10);
        let ids: Vec<&str> = merged.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["good"]);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse_response("{not json"), Err(FeedError::Json(_))));
    }

    #[test]
    fn collect_skips_failed_responses() {
        let feeds = collect_feeds(vec![
            ("first", CalendarResponse::with_items(vec![event("a1")])),
            ("broken", CalendarResponse::failed("forbidden")),
            ("second", CalendarResponse::with_items(vec![event("b1"), event("b2")])),
        ]);
        assert_eq!(feeds.len(), 2);
        assert_eq!(feeds[0][0].id, "a1");
        assert_eq!(feeds[1].len(), 2);
    }

    #[test]
    fn collect_keeps_empty_feeds() {
        let feeds = collect_feeds(vec![("empty", CalendarResponse::default())]);
        assert_eq!(feeds, vec![Vec::<Event>::new()]);
    }
}
