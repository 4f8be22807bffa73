//! # Calendar Realtime Bridge
//!
//! One persistent channel per authenticated session pushes calendar
//! create/update/delete notifications. Each inbound event maps to exactly
//! one action: refetch the affected aggregate (the event list, or one
//! event's reply thread). Push payloads are never patched into the store,
//! so the push schema cannot drift the cached shape away from the REST
//! schema.
//!
//! Subscribers get individual [`Subscription`] handles; dropping one
//! removes only that subscriber, so independently mounted views can attach
//! and tear down without affecting each other.

mod bridge;
mod socket;

pub use bridge::{CalendarBridge, Subscription};
pub use socket::run_channel;

use opsdeck_types::ChannelEvent;

/// Which aggregate an inbound channel event invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefetchScope {
    /// The event list itself
    Events,
    /// The reply thread of one event
    Replies {
        /// The affected event
        event_id: i64,
    },
}

/// Map an inbound event to the aggregate it invalidates.
pub fn refetch_scope(event: &ChannelEvent) -> RefetchScope {
    match event.reply_event_id() {
        Some(event_id) => RefetchScope::Replies { event_id },
        None => RefetchScope::Events,
    }
}
