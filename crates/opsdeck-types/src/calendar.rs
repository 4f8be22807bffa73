//! # Calendar Domain Types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// =============================================================================
// Entities
// =============================================================================

/// A scheduled calendar event.
///
/// `start_time <= end_time` is a server-side invariant; the client trusts
/// whatever the server returns and does not re-validate it on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Server-assigned identifier
    pub id: i64,
    /// Event title
    pub title: String,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Start of the event (server-local naive timestamp)
    pub start_time: NaiveDateTime,
    /// End of the event
    pub end_time: NaiveDateTime,
    /// Event category (free text: "meeting", "deadline", ...)
    pub event_type: String,
    /// Lifecycle status (free text: "scheduled", "cancelled", ...)
    pub status: String,
    /// Optional location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Whether the event spans the whole day
    #[serde(default)]
    pub all_day: bool,
}

/// A reply posted under a calendar event.
///
/// Replies are stored flat; any visual threading is a presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventReply {
    /// Server-assigned identifier
    pub id: i64,
    /// Event this reply belongs to
    pub event_id: i64,
    /// Display name of the author
    pub author: String,
    /// Reply body
    pub body: String,
    /// Creation timestamp
    pub created_at: NaiveDateTime,
}

/// Aggregate counters returned by `GET /calendar/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalendarStats {
    /// Total number of events
    pub total_events: u64,
    /// Events starting after now
    pub upcoming: u64,
    /// Events starting today
    pub today: u64,
}

// =============================================================================
// Request Payloads
// =============================================================================

/// Payload for `POST /calendar/events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCalendarEventRequest {
    /// Event title
    pub title: String,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Start of the event
    pub start_time: NaiveDateTime,
    /// End of the event
    pub end_time: NaiveDateTime,
    /// Event category
    pub event_type: String,
    /// Optional location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Whether the event spans the whole day
    #[serde(default)]
    pub all_day: bool,
}

/// Payload for `PUT /calendar/events/:id`.
///
/// Absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCalendarEventRequest {
    /// New title, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New start time, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveDateTime>,
    /// New end time, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveDateTime>,
    /// New event category, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// New status, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// New location, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Payload for `POST /calendar/events/:id/replies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReplyRequest {
    /// Reply body
    pub body: String,
}
