//! # Realtime Channel Vocabulary
//!
//! Message types for the calendar realtime channel. The event names form a
//! closed vocabulary shared with the backend; the serde renames below are
//! the wire contract and must not drift.
//!
//! Wire form: `{ "event": <name>, "payload": { ... } }`.

use serde::{Deserialize, Serialize};

use crate::calendar::{
    CalendarEvent, CreateCalendarEventRequest, CreateReplyRequest, EventReply,
    UpdateCalendarEventRequest,
};

/// Commands sent from the console to the channel backend.
///
/// The create/update/delete commands exist for backend compatibility, but
/// REST remains the authoritative write path; `join_calendar` and
/// `leave_calendar` are the only commands the views use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum ChannelCommand {
    /// Authenticate and join the calendar channel
    JoinCalendar {
        /// Session token for the authenticated user
        token: String,
    },
    /// Leave the calendar channel
    LeaveCalendar,
    /// Create an event through the channel
    CreateEvent {
        /// The event to create
        event: CreateCalendarEventRequest,
    },
    /// Update an event through the channel
    UpdateEvent {
        /// Target event id
        id: i64,
        /// Fields to change
        event: UpdateCalendarEventRequest,
    },
    /// Delete an event through the channel
    DeleteEvent {
        /// Target event id
        id: i64,
    },
    /// Post a reply through the channel
    CreateReply {
        /// Event the reply belongs to
        event_id: i64,
        /// The reply to post
        reply: CreateReplyRequest,
    },
}

/// Notifications pushed from the channel backend to the console.
///
/// Push payloads are never patched into the store directly; each event
/// triggers a refetch of the affected aggregate so the REST schema stays
/// the single source of entity shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum ChannelEvent {
    /// An event was created
    EventCreated {
        /// The created event, as the push schema renders it
        event: CalendarEvent,
    },
    /// An event was updated
    EventUpdated {
        /// The updated event
        event: CalendarEvent,
    },
    /// An event was deleted
    EventDeleted {
        /// Id of the deleted event
        id: i64,
    },
    /// A reply was posted
    ReplyCreated {
        /// The created reply
        reply: EventReply,
    },
    /// A reply was edited
    ReplyUpdated {
        /// The updated reply
        reply: EventReply,
    },
    /// A reply was deleted
    ReplyDeleted {
        /// Id of the deleted reply
        id: i64,
        /// Event the reply belonged to
        event_id: i64,
    },
}

impl ChannelEvent {
    /// The event id whose replies are affected, for reply events.
    pub fn reply_event_id(&self) -> Option<i64> {
        match self {
            Self::ReplyCreated { reply } | Self::ReplyUpdated { reply } => Some(reply.event_id),
            Self::ReplyDeleted { event_id, .. } => Some(*event_id),
            _ => None,
        }
    }
}
