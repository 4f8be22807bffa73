//! # Opsdeck Resource Clients
//!
//! One typed client per resource domain, each translating a domain
//! operation into exactly one HTTP call and returning the decoded envelope.
//!
//! ## Design Constraints
//!
//! - Every call is a pure function of (operation, parameters); there is no
//!   retry, caching, or request deduplication at this layer.
//! - List responses are normalized at this boundary: flat and nested
//!   paginated shapes both decode to the same collection form, so the
//!   stores never see the backend's envelope inconsistency.
//! - Failures reject with [`ApiError`]; the caller extracts a user-facing
//!   message via [`ApiError::user_message`].
//!
//! Each domain exposes a trait (`CalendarApi`, `ContractApi`,
//! `DocumentApi`, `RbacApi`) so the application core can be exercised
//! against in-memory fakes in tests, with the `Http*` implementations used
//! in production.

pub mod calendar;
pub mod contracts;
pub mod documents;
pub mod error;
pub mod http;
pub mod rbac;

pub use calendar::{CalendarApi, HttpCalendarApi};
pub use contracts::{ContractApi, HttpContractApi};
pub use documents::{DocumentApi, HttpDocumentApi};
pub use error::{ApiError, ApiResult};
pub use http::HttpClient;
pub use rbac::{HttpRbacApi, RbacApi};
