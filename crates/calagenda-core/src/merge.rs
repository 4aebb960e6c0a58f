//! Merging of pre-sorted calendar feeds.
//!
//! [`FeedMerger`] interleaves several feeds, each already ordered by start,
//! into a single agenda by repeatedly taking the earliest head across all
//! feeds. The output is capped, and an event that repeats the id and start
//! of the previously emitted event is dropped.

use std::collections::VecDeque;

use chrono::{DateTime, Local, TimeZone, Utc};
use tracing::{debug, warn};

use crate::event::{Event, Feed};
use crate::time::TimeResolver;

/// Merges sorted feeds into one ordered, deduplicated, capped sequence.
#[derive(Debug, Clone)]
pub struct FeedMerger<Tz: TimeZone = Local> {
    resolver: TimeResolver<Tz>,
}

impl FeedMerger<Local> {
    /// Creates a merger resolving date-only values in the host timezone.
    pub fn local() -> Self {
        Self::new(TimeResolver::local())
    }
}

impl<Tz: TimeZone> FeedMerger<Tz> {
    /// Creates a merger using the given resolver for start times.
    pub fn new(resolver: TimeResolver<Tz>) -> Self {
        Self { resolver }
    }

    /// Merges `feeds` into at most `cap` events ordered by start.
    ///
    /// Ties go to the feed listed first. Only the last emitted event is
    /// checked for duplicates. Events whose start cannot be resolved are
    /// dropped. Feeds are trusted to be sorted; no re-sort happens.
    pub fn merge<I>(&self, feeds: I, cap: usize) -> Vec<Event>
    where
        I: IntoIterator<Item = Feed>,
    {
        let mut queues: Vec<VecDeque<Event>> = feeds.into_iter().map(VecDeque::from).collect();
        let total: usize = queues.iter().map(VecDeque::len).sum();
        debug!(feeds = queues.len(), total, cap, "merging feeds");

        let mut output: Vec<Event> = Vec::with_capacity(cap.min(total));
        let mut last_start: Option<DateTime<Utc>> = None;

        while output.len() < cap {
            let Some((index, start)) = self.next_frontier(&mut queues) else {
                break;
            };
            let Some(candidate) = queues[index].pop_front() else {
                break;
            };

            let duplicate = match (last_start, output.last()) {
                (Some(prev_start), Some(prev)) => prev_start == start && prev.id == candidate.id,
                _ => false,
            };
            if duplicate {
                debug!(id = %candidate.id, %start, "duplicate event");
                continue;
            }

            debug!(id = %candidate.id, %start, feed = index, "pushing event");
            last_start = Some(start);
            output.push(candidate);
        }

        output
    }

    /// Finds the feed whose head starts earliest, with that start.
    fn next_frontier(&self, queues: &mut [VecDeque<Event>]) -> Option<(usize, DateTime<Utc>)> {
        let mut first: Option<(usize, DateTime<Utc>)> = None;

        for (index, queue) in queues.iter_mut().enumerate() {
            let Some(start) = self.head_start(queue) else {
                continue;
            };
            if first.is_none_or(|(_, earliest)| start < earliest) {
                first = Some((index, start));
            }
        }

        first
    }

    /// Resolves the start of the queue head, discarding unresolvable heads.
    fn head_start(&self, queue: &mut VecDeque<Event>) -> Option<DateTime<Utc>> {
        while let Some(head) = queue.front() {
            match self.resolver.resolve(&head.start) {
                Ok(resolved) => return Some(resolved.instant),
                Err(err) => {
                    warn!(id = %head.id, %err, "dropping event with unresolvable start");
                    queue.pop_front();
                }
            }
        }
        None
    }
}

/// Merges feeds using the host timezone for date-only starts.
pub fn merge_feeds<I>(feeds: I, cap: usize) -> Vec<Event>
where
    I: IntoIterator<Item = Feed>,
{
    FeedMerger::local().merge(feeds, cap)
}
