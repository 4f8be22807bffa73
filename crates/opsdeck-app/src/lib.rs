//! # Opsdeck Application Core
//!
//! Portable headless core for the Opsdeck operations console. Frontends
//! (web, terminal) render from this crate's state and call into its
//! workflows; nothing here draws pixels.
//!
//! ## Architecture
//!
//! ```text
//! View mounts → workflow issues fetch → slice goes loading
//!             → resource client resolves/rejects
//!             → slice commits items / records error → view re-renders
//! ```
//!
//! - [`store`]: the generic slice every domain replicates (items, selection,
//!   loading/error flags, filters, fetch sequence tokens)
//! - [`views`]: one state container per resource domain
//! - [`workflows`]: async operations driving the api traits and applying
//!   store transitions; the only writers of domain state
//! - [`realtime`]: the calendar channel bridge (push events → refetches)
//! - [`ui`]: the view/form contract (form modes, validation, filter drafts,
//!   toasts)
//! - [`core`]: [`AppCore`], the application root that owns every store
//!   instance; tests construct isolated instances instead of sharing
//!   globals
//!
//! ## Error Policy
//!
//! Request failures are recovered at the store boundary: the slice keeps
//! its stale items, records a message string, and the workflow pushes a
//! toast. Nothing here panics or propagates a failure past the workflow
//! that produced it.

pub mod core;
pub mod errors;
pub mod realtime;
pub mod store;
pub mod ui;
pub mod views;
pub mod workflows;

pub use crate::core::{AppConfig, AppCore};
pub use errors::AppError;
