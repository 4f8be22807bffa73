//! Listener registry and outbound command queue for the calendar channel.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::mpsc;
use uuid::Uuid;

use opsdeck_types::{ChannelCommand, ChannelEvent};

use crate::errors::AppError;

type Listener = Arc<dyn Fn(&ChannelEvent) + Send + Sync>;

struct BridgeInner {
    listeners: Mutex<HashMap<Uuid, Listener>>,
    outbound: mpsc::UnboundedSender<ChannelCommand>,
}

/// Fan-out point between the socket runner and the views.
///
/// The socket runner calls [`CalendarBridge::dispatch`] for every decoded
/// inbound event; views register callbacks via
/// [`CalendarBridge::subscribe`] and emit outbound commands via
/// [`CalendarBridge::send`].
#[derive(Clone)]
pub struct CalendarBridge {
    inner: Arc<BridgeInner>,
}

impl CalendarBridge {
    /// Create a bridge and the receiving end of its outbound queue.
    ///
    /// The receiver goes to [`super::run_channel`], which forwards queued
    /// commands onto the socket.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ChannelCommand>) {
        let (outbound, rx) = mpsc::unbounded_channel();
        (
            Self {
                inner: Arc::new(BridgeInner {
                    listeners: Mutex::new(HashMap::new()),
                    outbound,
                }),
            },
            rx,
        )
    }

    /// Register a callback for inbound events.
    ///
    /// The returned handle removes exactly this callback when dropped or
    /// explicitly unsubscribed; other subscribers are unaffected.
    pub fn subscribe(&self, callback: impl Fn(&ChannelEvent) + Send + Sync + 'static) -> Subscription {
        let id = Uuid::new_v4();
        self.inner.listeners.lock().insert(id, Arc::new(callback));
        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver an inbound event to every current subscriber.
    pub fn dispatch(&self, event: &ChannelEvent) {
        // Snapshot under the lock, invoke outside it, so a callback may
        // subscribe or unsubscribe without deadlocking.
        let listeners: Vec<Listener> = self.inner.listeners.lock().values().cloned().collect();
        tracing::debug!(subscribers = listeners.len(), "dispatching channel event");
        for listener in listeners {
            listener(event);
        }
    }

    /// Queue an outbound command for the socket runner.
    pub fn send(&self, command: ChannelCommand) -> Result<(), AppError> {
        self.inner
            .outbound
            .send(command)
            .map_err(|_| AppError::channel("channel is closed"))
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }
}

/// Handle owning one subscription on a [`CalendarBridge`].
pub struct Subscription {
    id: Uuid,
    inner: Weak<BridgeInner>,
}

impl Subscription {
    /// Remove this subscription now instead of at drop.
    pub fn unsubscribe(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.listeners.lock().remove(&self.id);
        }
    }
}
