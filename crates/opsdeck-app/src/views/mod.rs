//! # View State Module
//!
//! One state container per resource domain. Each wraps the shared
//! [`crate::store::Slice`] for its primary entity list and adds the
//! domain's side collections (replies, templates, audit logs, stats).
//!
//! There is no cross-domain referential integrity here; relations arrive
//! denormalized from the server and are stored as-is.

pub mod calendar;
pub mod contracts;
pub mod documents;
pub mod rbac;

pub use calendar::CalendarState;
pub use contracts::ContractsState;
pub use documents::DocumentsState;
pub use rbac::RbacState;
