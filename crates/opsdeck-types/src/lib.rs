//! # Opsdeck Wire Types
//!
//! Shared wire-level types for the Opsdeck operations console:
//!
//! - Domain entities and request payloads for the four resource domains
//!   (calendar, contracts, documents, RBAC)
//! - The REST response envelope and its list-payload normalization
//! - The realtime channel vocabulary (exact event-name strings)
//!
//! ## What Belongs Here
//!
//! Types that cross the process boundary: everything in this crate is
//! `serde`-round-trippable and matches the backend schema exactly.
//!
//! ## What Does NOT Belong Here
//!
//! - HTTP plumbing (belongs in `opsdeck-api`)
//! - Store state and transitions (belong in `opsdeck-app`)

pub mod calendar;
pub mod channel;
pub mod contract;
pub mod document;
pub mod envelope;
pub mod rbac;

pub use calendar::{
    CalendarEvent, CalendarStats, CreateCalendarEventRequest, CreateReplyRequest, EventReply,
    UpdateCalendarEventRequest,
};
pub use channel::{ChannelCommand, ChannelEvent};
pub use contract::{
    Contract, ContractStats, ContractTemplate, CreateContractRequest, GeneratedPdf,
    UpdateContractRequest,
};
pub use document::{
    CreateDocumentRequest, Document, DocumentStats, UpdateDocumentRequest,
};
pub use envelope::{Envelope, ListPayload, Pagination};
pub use rbac::{
    AssignRolesRequest, AuditLog, CreatePermissionRequest, CreateRoleRequest, Permission, Role,
    UpdatePermissionRequest, UpdateRoleRequest,
};
