//! # Calendar View State

use opsdeck_types::{CalendarEvent, CalendarStats, EventReply};

use crate::store::{Entity, InsertOrder, Slice};

impl Entity for CalendarEvent {
    const INSERT_ORDER: InsertOrder = InsertOrder::Append;

    fn entity_id(&self) -> i64 {
        self.id
    }
}

/// Calendar domain state: the event list plus the reply thread of the
/// event currently opened, and dashboard extras.
#[derive(Debug, Clone, Default)]
pub struct CalendarState {
    /// The event list slice
    pub events: Slice<CalendarEvent>,
    replies_event_id: Option<i64>,
    replies: Vec<EventReply>,
    replies_loading: bool,
    replies_error: Option<String>,
    stats: Option<CalendarStats>,
    upcoming: Vec<CalendarEvent>,
    today: Vec<CalendarEvent>,
}

impl CalendarState {
    /// Create an empty calendar state.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Replies (scoped to one event at a time)
    // =========================================================================

    /// Pending: a reply fetch for `event_id` is in flight.
    ///
    /// Switching to another event discards the previous thread, so a late
    /// response for the old event cannot land in the new one.
    pub fn begin_replies_fetch(&mut self, event_id: i64) {
        if self.replies_event_id != Some(event_id) {
            self.replies.clear();
        }
        self.replies_event_id = Some(event_id);
        self.replies_loading = true;
        self.replies_error = None;
    }

    /// Fulfilled: commit the thread if it is still the one on screen.
    pub fn finish_replies_fetch(&mut self, event_id: i64, replies: Vec<EventReply>) -> bool {
        if self.replies_event_id != Some(event_id) {
            return false;
        }
        self.replies = replies;
        self.replies_loading = false;
        true
    }

    /// Rejected: record the failure if the thread is still on screen.
    pub fn fail_replies_fetch(&mut self, event_id: i64, message: impl Into<String>) -> bool {
        if self.replies_event_id != Some(event_id) {
            return false;
        }
        self.replies_error = Some(message.into());
        self.replies_loading = false;
        true
    }

    /// The reply thread currently loaded.
    pub fn replies(&self) -> &[EventReply] {
        &self.replies
    }

    /// The event whose replies are loaded, if any.
    pub fn replies_event_id(&self) -> Option<i64> {
        self.replies_event_id
    }

    /// Whether a reply fetch is in flight.
    pub fn replies_loading(&self) -> bool {
        self.replies_loading
    }

    /// Last reply-fetch failure, if any.
    pub fn replies_error(&self) -> Option<&str> {
        self.replies_error.as_deref()
    }

    // =========================================================================
    // Dashboard Extras
    // =========================================================================

    /// Store the stats payload.
    pub fn set_stats(&mut self, stats: CalendarStats) {
        self.stats = Some(stats);
    }

    /// Last fetched stats, if any.
    pub fn stats(&self) -> Option<&CalendarStats> {
        self.stats.as_ref()
    }

    /// Store the upcoming-events widget list.
    pub fn set_upcoming(&mut self, events: Vec<CalendarEvent>) {
        self.upcoming = events;
    }

    /// Upcoming events for the dashboard widget.
    pub fn upcoming(&self) -> &[CalendarEvent] {
        &self.upcoming
    }

    /// Store the today widget list.
    pub fn set_today(&mut self, events: Vec<CalendarEvent>) {
        self.today = events;
    }

    /// Today's events for the dashboard widget.
    pub fn today(&self) -> &[CalendarEvent] {
        &self.today
    }
}
