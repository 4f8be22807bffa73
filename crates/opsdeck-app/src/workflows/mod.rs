//! # Workflows
//!
//! The async operations behind every user action: each one walks the same
//! `pending → fulfilled | rejected` path through a domain slice, calling
//! exactly one resource-client operation in the middle.
//!
//! Conventions, uniform across domains:
//!
//! - Fetches carry a slice token; a stale response is dropped, never
//!   committed (last-issued wins, not last-resolved).
//! - Writes patch the in-memory list from the server's response instead of
//!   refetching, and push a success or failure toast.
//! - Create forms validate before any network call; a validation failure
//!   returns [`AppError::Validation`] with per-field messages and touches
//!   neither the network nor the slice.
//! - Failures are recorded in the slice and returned; callers may ignore
//!   the `Err` since the store already reflects it.

pub mod calendar;
pub mod contracts;
pub mod documents;
pub mod rbac;
