//! Agenda view model.
//!
//! Groups a merged feed into day sections, each item carrying the strings
//! the rendering layer needs. Events whose start cannot be resolved are left
//! out.

use chrono::TimeZone;
use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::format::EventPresenter;

/// Text shown when the agenda has no events.
pub const NO_EVENTS_TEXT: &str = "No upcoming events found.";

/// A single agenda entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItem {
    /// The event ID.
    pub id: String,
    /// Title after template substitution.
    pub title_text: String,
    /// Date/time label for the details section.
    pub date_label: String,
    /// The event location, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// The event description, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Consecutive agenda items starting on the same day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayGroup {
    /// Day heading, e.g. `Jun 01`.
    pub heading: String,
    /// Items in start order.
    pub items: Vec<AgendaItem>,
}

/// An agenda grouped by start day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agenda {
    /// Day groups in start order.
    pub groups: Vec<DayGroup>,
}

impl Agenda {
    /// Returns `true` if the agenda has no items.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.items.is_empty())
    }

    /// Returns the number of items across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}

/// Builds the agenda for an already merged feed.
///
/// A new group starts whenever an event's day heading differs from the
/// previous one.
pub fn build_agenda<Tz: TimeZone>(
    events: &[Event],
    presenter: &EventPresenter<Tz>,
    title_format: &str,
) -> Agenda {
    let mut agenda = Agenda::default();

    for event in events {
        let Some(heading) = presenter.day_heading(event) else {
            continue;
        };

        let rendered = presenter.render(title_format, event);
        let item = AgendaItem {
            id: event.id.clone(),
            title_text: rendered.title_text,
            date_label: rendered.date_label,
            location: event.location.clone(),
            description: event.description.clone(),
        };

        match agenda.groups.last_mut() {
            Some(group) if group.heading == heading => group.items.push(item),
            _ => agenda.groups.push(DayGroup {
                heading,
                items: vec![item],
            }),
        }
    }

    agenda
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Labels;
    use crate::time::{CalendarTime, TimeResolver};
    use chrono::{NaiveDate, Utc};

    fn at(d: u32, h: u32) -> CalendarTime {
        CalendarTime::from_datetime(Utc.with_ymd_and_hms(2025, 6, d, h, 0, 0).unwrap())
    }

    fn day(d: u32) -> CalendarTime {
        CalendarTime::from_date(NaiveDate::from_ymd_opt(2025, 6, d).unwrap())
    }

    fn presenter() -> EventPresenter<Utc> {
        EventPresenter::new(TimeResolver::new(Utc), Labels::default())
    }

    #[test]
    fn groups_by_start_day() {
        let events = vec![
            Event::new("a", "Holiday", day(1), day(2)),
            Event::new("b", "Standup", at(1, 9), at(1, 10)).with_location("Room 4"),
            Event::new("c", "Review", at(2, 14), at(2, 15)).with_description("Q2 numbers"),
        ];

        let agenda = build_agenda(&events, &presenter(), "[STARTTIME] [TITLE]");

        assert_eq!(agenda.len(), 3);
        assert_eq!(agenda.groups.len(), 2);
        assert_eq!(agenda.groups[0].heading, "Jun 01");
        assert_eq!(agenda.groups[1].heading, "Jun 02");
        assert_eq!(agenda.groups[0].items[0].title_text, "All Day Holiday");
        assert_eq!(agenda.groups[0].items[0].date_label, "All Day Event");
        assert_eq!(agenda.groups[0].items[1].location.as_deref(), Some("Room 4"));
        assert_eq!(
            agenda.groups[1].items[0].description.as_deref(),
            Some("Q2 numbers")
        );
    }

    #[test]
    fn skips_unresolvable_start() {
        let events = vec![
            Event::new("bad", "Broken", CalendarTime::default(), at(1, 10)),
            Event::new("ok", "Standup", at(1, 9), at(1, 10)),
        ];
        let agenda = build_agenda(&events, &presenter(), "[TITLE]");
        assert_eq!(agenda.len(), 1);
        assert_eq!(agenda.groups[0].items[0].id, "ok");
    }

    #[test]
    fn empty_feed_gives_empty_agenda() {
        let agenda = build_agenda(&[], &presenter(), "[TITLE]");
        assert!(agenda.is_empty());
        assert_eq!(agenda.len(), 0);
    }

    #[test]
    fn serializes_without_missing_fields() {
        let events = vec![Event::new("b", "Standup", at(1, 9), at(1, 10))];
        let agenda = build_agenda(&events, &presenter(), "[TITLE]");
        let json = serde_json::to_value(&agenda).unwrap();
        let item = &json["groups"][0]["items"][0];
        assert_eq!(item["title_text"], "Standup");
        assert!(item.get("location").is_none());
    }
}
