//! # Core Application Module
//!
//! [`AppCore`] is the application root: it owns one instance of every
//! domain store and the configured resource clients. Stores are explicit
//! instances constructed at startup and passed by reference to views,
//! never module-scope globals, so tests run against isolated cores.

mod app;

pub use app::{AppConfig, AppCore};
