//! # View/Form Contract Layer
//!
//! The pieces of the view layer that are state, not markup: form modes,
//! field validation, filter drafts, and toast notifications. Rendering
//! frontends consume these; they never mutate domain slices directly.

pub mod filters;
pub mod forms;
pub mod notifications;

pub use filters::FilterDraft;
pub use forms::{FormMode, ValidationErrors};
pub use notifications::{NotificationsState, Toast, ToastLevel};
