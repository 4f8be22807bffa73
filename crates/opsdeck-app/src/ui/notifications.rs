//! Toast notification state.
//!
//! Every write operation pushes a success or failure toast here; list
//! failures surface through the slice's inline error instead.

use std::collections::VecDeque;

/// Oldest toasts are dropped past this depth.
const MAX_TOASTS: usize = 8;

/// Severity of a toast, driving its visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastLevel {
    /// Neutral information
    Info,
    /// A write operation succeeded
    Success,
    /// Something degraded but recoverable
    Warning,
    /// An operation failed
    Error,
}

/// One queued notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic id for dismissal
    pub id: u64,
    /// Severity
    pub level: ToastLevel,
    /// Display text
    pub message: String,
}

/// FIFO queue of pending toasts.
///
/// Display and expiry are the frontend's job; this state only orders and
/// caps the queue.
#[derive(Debug, Clone, Default)]
pub struct NotificationsState {
    toasts: VecDeque<Toast>,
    next_id: u64,
}

impl NotificationsState {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast, returning its id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push_back(Toast {
            id,
            level,
            message: message.into(),
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
        id
    }

    /// Queue a success toast.
    pub fn push_success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Success, message)
    }

    /// Queue an error toast.
    pub fn push_error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Error, message)
    }

    /// Remove a toast once displayed or dismissed.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Pending toasts, oldest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Number of pending toasts.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
