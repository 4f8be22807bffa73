//! Categorized application errors
//!
//! Structured error types that enable:
//! - Categorized handling (validation vs request vs channel failures)
//! - Appropriate toast severity routing
//! - Inline field reporting for validation failures

use std::fmt;

use opsdeck_api::ApiError;

use crate::ui::forms::ValidationErrors;

// Re-export ToastLevel from ui/notifications (single source of truth)
pub use crate::ui::notifications::ToastLevel;

/// Categorized application errors.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Form-level validation failed; no network call was made
    Validation {
        /// Per-field messages for inline display
        errors: ValidationErrors,
    },
    /// A resource-client call failed (network or non-2xx response)
    Request {
        /// User-facing message extracted from the failure
        message: String,
        /// HTTP status, when the server answered
        status: Option<u16>,
    },
    /// The realtime channel failed (connect, send, or protocol)
    Channel {
        /// Description of the failure
        message: String,
    },
    /// Unexpected internal condition
    Internal {
        /// Description of the failure
        message: String,
    },
}

impl AppError {
    /// Create a validation error from collected field messages.
    pub fn validation(errors: ValidationErrors) -> Self {
        Self::Validation { errors }
    }

    /// Create a channel error.
    pub fn channel(message: impl Into<String>) -> Self {
        Self::Channel {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the appropriate toast severity for this error.
    ///
    /// Validation errors are reported inline next to their fields, so they
    /// rate only an informational toast if one is shown at all.
    pub fn toast_level(&self) -> ToastLevel {
        match self {
            Self::Validation { .. } => ToastLevel::Info,
            Self::Request { .. } => ToastLevel::Error,
            Self::Channel { .. } => ToastLevel::Warning,
            Self::Internal { .. } => ToastLevel::Error,
        }
    }

    /// The message a view should surface for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { errors } => errors.summary(),
            Self::Request { message, .. } => message.clone(),
            Self::Channel { message } => format!("Realtime connection problem: {message}"),
            Self::Internal { message } => message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation { errors } => write!(f, "validation failed: {}", errors.summary()),
            Self::Request { message, status } => match status {
                Some(status) => write!(f, "request failed ({status}): {message}"),
                None => write!(f, "request failed: {message}"),
            },
            Self::Channel { message } => write!(f, "channel error: {message}"),
            Self::Internal { message } => write!(f, "internal error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        Self::Request {
            message: err.user_message(),
            status: err.status(),
        }
    }
}
