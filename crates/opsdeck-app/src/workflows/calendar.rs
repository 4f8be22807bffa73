//! Calendar workflows: event CRUD, reply threads, dashboard extras, and
//! the channel-to-refetch wiring.

use std::sync::Arc;

use opsdeck_types::{
    CalendarEvent, CreateCalendarEventRequest, CreateReplyRequest, EventReply,
    UpdateCalendarEventRequest,
};

use crate::core::AppCore;
use crate::errors::AppError;
use crate::realtime::{refetch_scope, CalendarBridge, RefetchScope, Subscription};
use crate::ui::forms;

/// Fetch the event list with the slice's current filters.
pub async fn fetch_events(core: &AppCore) -> Result<(), AppError> {
    let (token, filters) = {
        let mut state = core.calendar.write().await;
        (state.events.begin_fetch(), state.events.filters().clone())
    };
    match core.calendar_api().list_events(&filters).await {
        Ok(events) => {
            let mut state = core.calendar.write().await;
            if !state.events.finish_fetch(token, events) {
                tracing::debug!("dropped stale event list response");
            }
            Ok(())
        }
        Err(err) => {
            let err = AppError::from(err);
            let mut state = core.calendar.write().await;
            state.events.fail_fetch(token, err.user_message());
            Err(err)
        }
    }
}

/// Create an event and append it to the list.
pub async fn create_event(
    core: &AppCore,
    req: CreateCalendarEventRequest,
) -> Result<CalendarEvent, AppError> {
    forms::validate_event(&req).map_err(AppError::validation)?;

    core.calendar.write().await.events.begin_mutation();
    match core.calendar_api().create_event(&req).await {
        Ok(event) => {
            core.calendar.write().await.events.apply_created(event.clone());
            core.toast_success(format!("Event \"{}\" created", event.title)).await;
            Ok(event)
        }
        Err(err) => fail_event_write(core, err, "create event").await,
    }
}

/// Update an event in place.
pub async fn update_event(
    core: &AppCore,
    id: i64,
    req: UpdateCalendarEventRequest,
) -> Result<CalendarEvent, AppError> {
    core.calendar.write().await.events.begin_mutation();
    match core.calendar_api().update_event(id, &req).await {
        Ok(event) => {
            let mut state = core.calendar.write().await;
            if !state.events.apply_updated(event.clone()) {
                tracing::debug!(id, "updated event is not in the cached list");
            }
            drop(state);
            core.toast_success(format!("Event \"{}\" updated", event.title)).await;
            Ok(event)
        }
        Err(err) => fail_event_write(core, err, "update event").await,
    }
}

/// Delete an event and drop it from the list.
pub async fn delete_event(core: &AppCore, id: i64) -> Result<(), AppError> {
    core.calendar.write().await.events.begin_mutation();
    match core.calendar_api().delete_event(id).await {
        Ok(()) => {
            core.calendar.write().await.events.apply_deleted(id);
            core.toast_success("Event deleted").await;
            Ok(())
        }
        Err(err) => {
            fail_event_write::<()>(core, err, "delete event").await
        }
    }
}

async fn fail_event_write<T>(
    core: &AppCore,
    err: opsdeck_api::ApiError,
    action: &str,
) -> Result<T, AppError> {
    let err = AppError::from(err);
    let message = err.user_message();
    tracing::warn!(action, %message, "calendar write failed");
    core.calendar.write().await.events.fail_mutation(message.clone());
    core.toast_error(message).await;
    Err(err)
}

// =============================================================================
// Replies
// =============================================================================

/// Fetch the reply thread for one event.
pub async fn fetch_replies(core: &AppCore, event_id: i64) -> Result<(), AppError> {
    core.calendar.write().await.begin_replies_fetch(event_id);
    match core.calendar_api().list_replies(event_id).await {
        Ok(replies) => {
            let mut state = core.calendar.write().await;
            if !state.finish_replies_fetch(event_id, replies) {
                tracing::debug!(event_id, "dropped reply thread for a closed event");
            }
            Ok(())
        }
        Err(err) => {
            let err = AppError::from(err);
            let mut state = core.calendar.write().await;
            state.fail_replies_fetch(event_id, err.user_message());
            Err(err)
        }
    }
}

/// Post a reply, then refetch the thread so ordering stays server-owned.
pub async fn create_reply(
    core: &AppCore,
    event_id: i64,
    req: CreateReplyRequest,
) -> Result<EventReply, AppError> {
    forms::validate_reply(&req).map_err(AppError::validation)?;

    match core.calendar_api().create_reply(event_id, &req).await {
        Ok(reply) => {
            core.toast_success("Reply posted").await;
            fetch_replies(core, event_id).await?;
            Ok(reply)
        }
        Err(err) => {
            let err = AppError::from(err);
            core.toast_error(err.user_message()).await;
            Err(err)
        }
    }
}

// =============================================================================
// Dashboard Extras
// =============================================================================

/// Fetch the aggregate counters.
pub async fn fetch_stats(core: &AppCore) -> Result<(), AppError> {
    let stats = core.calendar_api().stats().await?;
    core.calendar.write().await.set_stats(stats);
    Ok(())
}

/// Fetch the upcoming-events widget list.
pub async fn fetch_upcoming(core: &AppCore) -> Result<(), AppError> {
    let events = core.calendar_api().upcoming().await?;
    core.calendar.write().await.set_upcoming(events);
    Ok(())
}

/// Fetch the today widget list.
pub async fn fetch_today(core: &AppCore) -> Result<(), AppError> {
    let events = core.calendar_api().today().await?;
    core.calendar.write().await.set_today(events);
    Ok(())
}

// =============================================================================
// Channel Wiring
// =============================================================================

/// Subscribe the core to channel pushes: every inbound event triggers a
/// refetch of the aggregate it invalidates.
///
/// Must be called from within a Tokio runtime; the refetches run as
/// spawned tasks. Dropping the returned handle detaches this core without
/// disturbing other subscribers.
pub fn attach_channel_refetch(core: Arc<AppCore>, bridge: &CalendarBridge) -> Subscription {
    bridge.subscribe(move |event| {
        let core = Arc::clone(&core);
        let scope = refetch_scope(event);
        tokio::spawn(async move {
            let result = match scope {
                RefetchScope::Events => fetch_events(&core).await,
                RefetchScope::Replies { event_id } => fetch_replies(&core, event_id).await,
            };
            if let Err(err) = result {
                tracing::warn!(error = %err, "channel-triggered refetch failed");
            }
        });
    })
}
