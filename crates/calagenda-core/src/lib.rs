//! Core types: calendar time resolution, feed merging, event presentation

pub mod agenda;
pub mod config;
pub mod error;
pub mod event;
pub mod feed;
pub mod format;
pub mod merge;
pub mod time;
pub mod tracing;

pub use agenda::{Agenda, AgendaItem, DayGroup, NO_EVENTS_TEXT, build_agenda};
pub use config::{AgendaConfig, parse_calendar_ids};
pub use error::{ConfigError, FeedError, TimeError};
pub use event::{Event, Feed, RenderedEvent};
pub use feed::{ApiError, CalendarResponse, collect_feeds, parse_response};
pub use format::{
    DEFAULT_TITLE_FORMAT, DateClass, EventPresenter, Labels, format_date, format_date_time,
    format_time,
};
pub use merge::{FeedMerger, merge_feeds};
pub use time::{CalendarTime, ResolvedTime, TimeResolver};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
