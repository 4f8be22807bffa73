//! Error types for the resource-client layer.

use thiserror::Error;

/// Result alias for resource-client calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single resource-client call.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout, ...)
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("{message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response envelope, or a status-line
        /// fallback when the body carried none
        message: String,
    },

    /// The response body did not match the expected envelope shape
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The request could not be built (bad base url, oversized part, ...)
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// The message a view should surface for this failure.
    ///
    /// Server-provided envelope messages and transport messages pass
    /// through verbatim; decode failures get a generic fallback since
    /// their details mean nothing to a user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(message)
            | Self::Status { message, .. }
            | Self::InvalidRequest(message) => message.clone(),
            Self::Decode(_) => "Received an unexpected response from the server".into(),
        }
    }

    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
