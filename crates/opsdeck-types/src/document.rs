//! # Document Domain Types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// =============================================================================
// Entities
// =============================================================================

/// A stored document.
///
/// `tags` carries set semantics by convention only; the server does not
/// deduplicate and neither does the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Server-assigned identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Original upload file name
    pub file_name: String,
    /// MIME type reported at upload
    pub mime_type: String,
    /// File size in bytes
    pub size_bytes: u64,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Version number, starting at 1 and bumped on re-upload
    #[serde(default = "default_version")]
    pub version: u32,
    /// Display name of the uploader
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<String>,
    /// Upload timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

fn default_version() -> u32 {
    1
}

/// Aggregate counters returned by `GET /documents/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Total number of documents
    pub total_documents: u64,
    /// Total stored bytes across all documents
    pub total_size_bytes: u64,
}

// =============================================================================
// Request Payloads
// =============================================================================

/// Payload for `POST /documents`.
///
/// This is the one file-bearing create in the console: the api layer
/// serializes it as a multipart form (metadata fields plus a `file` part)
/// rather than a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDocumentRequest {
    /// Display name
    pub name: String,
    /// Original file name of the upload
    pub file_name: String,
    /// MIME type of the upload
    pub mime_type: String,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

/// Payload for `PUT /documents/:id` (metadata only; content is immutable
/// per version).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDocumentRequest {
    /// New display name, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement tag list, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
