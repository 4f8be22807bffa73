//! # REST Response Envelope
//!
//! Every REST response wraps its payload as `{ "data": ..., "message": ... }`.
//! List endpoints are inconsistent at the backend: some return the
//! collection directly under `data`, others nest a pagination object so the
//! collection sits at `data.data`. [`ListPayload`] absorbs both shapes at
//! the decode boundary so the stores always receive one normalized form.

use serde::{Deserialize, Deserializer, Serialize};

/// The standard response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped payload
    pub data: T,
    /// Optional human-readable message
    #[serde(default)]
    pub message: Option<String>,
}

/// Pagination metadata attached to nested list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page (1-based)
    pub page: u32,
    /// Page size
    pub per_page: u32,
    /// Total item count across all pages
    pub total: u64,
    /// Total page count
    pub total_pages: u32,
}

/// A normalized list payload.
///
/// Decodes from either the flat shape (`"data": [...]`) or the nested
/// paginated shape (`"data": { "data": [...], "pagination": {...} }`).
#[derive(Debug, Clone, PartialEq)]
pub struct ListPayload<T> {
    /// The returned collection, in server order
    pub items: Vec<T>,
    /// Pagination metadata, present only for nested responses
    pub pagination: Option<Pagination>,
}

impl<'de, T> Deserialize<'de> for ListPayload<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<T> {
            Nested {
                data: Vec<T>,
                #[serde(default)]
                pagination: Option<Pagination>,
            },
            Flat(Vec<T>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Nested { data, pagination } => Self {
                items: data,
                pagination,
            },
            Repr::Flat(items) => Self {
                items,
                pagination: None,
            },
        })
    }
}
