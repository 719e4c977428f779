//! Append-only event storage for replay and incremental polling.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use skirmish_core::events::Event;

/// One page of events and the offset to resume from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPage {
    pub events: Vec<Event>,
    pub next_offset: u64,
}

/// Offsets start at 0 and never change. Nothing is ever evicted.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append in order and return the offsets the new events occupy.
    pub fn append_many(&mut self, events: Vec<Event>) -> Range<u64> {
        let start = self.events.len() as u64;
        self.events.extend(events);
        start..self.events.len() as u64
    }

    /// Up to `limit` events starting at `max(0, offset)`.
    ///
    /// `next_offset` is the start offset plus the number returned, so an
    /// offset past the end yields an empty page that resumes in place.
    pub fn since(&self, offset: i64, limit: usize) -> EventPage {
        let start = offset.max(0) as u64;
        let from = usize::try_from(start).map_or(self.events.len(), |s| s.min(self.events.len()));
        let to = from.saturating_add(limit).min(self.events.len());
        let events = self.events[from..to].to_vec();
        EventPage {
            next_offset: start + events.len() as u64,
            events,
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
