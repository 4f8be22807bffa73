//! Form modes and client-side validation.
//!
//! A form is explicitly in create or edit mode; the mode is passed as a
//! tagged value rather than inferred from the presence of an initial
//! entity. Validation runs before submission and blocks the network call;
//! messages are keyed by field name for inline display.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use opsdeck_types::{
    CreateCalendarEventRequest, CreateContractRequest, CreateDocumentRequest,
    CreatePermissionRequest, CreateReplyRequest, CreateRoleRequest,
};

/// Whether a form creates a new entity or edits an existing one.
///
/// Submission funnels through the same workflow either way; the mode picks
/// the HTTP verb and target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Creating a new entity
    Create,
    /// Editing the entity with this id
    Edit {
        /// Target entity id
        id: i64,
    },
}

impl FormMode {
    /// The entity id being edited, if any.
    pub fn edit_id(&self) -> Option<i64> {
        match self {
            Self::Create => None,
            Self::Edit { id } => Some(*id),
        }
    }
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field. The first message per field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Message for one field, for inline display.
    pub fn field(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Whether any field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// All messages joined, for logs and fallback display.
    pub fn summary(&self) -> String {
        self.errors
            .values()
            .cloned()
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

// =============================================================================
// Field Checks
// =============================================================================

fn require_non_empty(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{field} is required"));
    }
}

fn require_max_len(errors: &mut ValidationErrors, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.add(field, format!("{field} must be at most {max} characters"));
    }
}

fn require_time_order(
    errors: &mut ValidationErrors,
    field: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) {
    if start > end {
        errors.add(field, "end time must not be before start time");
    }
}

// =============================================================================
// Per-Domain Form Validation
// =============================================================================

/// Validate a calendar event create form.
pub fn validate_event(req: &CreateCalendarEventRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    require_non_empty(&mut errors, "title", &req.title);
    require_max_len(&mut errors, "title", &req.title, 200);
    require_non_empty(&mut errors, "event_type", &req.event_type);
    require_time_order(&mut errors, "end_time", req.start_time, req.end_time);
    errors.into_result()
}

/// Validate an event reply form.
pub fn validate_reply(req: &CreateReplyRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    require_non_empty(&mut errors, "body", &req.body);
    require_max_len(&mut errors, "body", &req.body, 2000);
    errors.into_result()
}

/// Validate a contract create form.
pub fn validate_contract(req: &CreateContractRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    require_non_empty(&mut errors, "title", &req.title);
    require_max_len(&mut errors, "title", &req.title, 200);
    require_non_empty(&mut errors, "type", &req.contract_type);
    require_non_empty(&mut errors, "status", &req.status);
    if let Some(end) = req.end_date {
        if end < req.start_date {
            errors.add("end_date", "end date must not be before start date");
        }
    }
    errors.into_result()
}

/// Validate a document upload form.
pub fn validate_document(req: &CreateDocumentRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    require_non_empty(&mut errors, "name", &req.name);
    require_max_len(&mut errors, "name", &req.name, 120);
    require_non_empty(&mut errors, "file_name", &req.file_name);
    if req.bytes.is_empty() {
        errors.add("file", "a file is required");
    }
    errors.into_result()
}

/// Validate a role form.
pub fn validate_role(req: &CreateRoleRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    require_non_empty(&mut errors, "name", &req.name);
    require_max_len(&mut errors, "name", &req.name, 80);
    errors.into_result()
}

/// Validate a permission form.
pub fn validate_permission(req: &CreatePermissionRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    require_non_empty(&mut errors, "name", &req.name);
    require_non_empty(&mut errors, "module", &req.module);
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        s.parse().unwrap()
    }

    fn event_req() -> CreateCalendarEventRequest {
        CreateCalendarEventRequest {
            title: "Standup".into(),
            description: None,
            start_time: ts("2024-01-15T09:00:00"),
            end_time: ts("2024-01-15T09:30:00"),
            event_type: "meeting".into(),
            location: None,
            all_day: false,
        }
    }

    #[test]
    fn test_valid_event_passes() {
        assert!(validate_event(&event_req()).is_ok());
    }

    #[test]
    fn test_empty_title_is_reported_inline() {
        let mut req = event_req();
        req.title = "   ".into();
        let errors = validate_event(&req).unwrap_err();
        assert_eq!(errors.field("title"), Some("title is required"));
    }

    #[test]
    fn test_reversed_times_are_rejected() {
        let mut req = event_req();
        req.end_time = ts("2024-01-15T08:00:00");
        let errors = validate_event(&req).unwrap_err();
        assert!(errors.field("end_time").is_some());
    }

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("title", "first");
        errors.add("title", "second");
        assert_eq!(errors.field("title"), Some("first"));
    }

    #[test]
    fn test_form_mode_edit_id() {
        assert_eq!(FormMode::Create.edit_id(), None);
        assert_eq!(FormMode::Edit { id: 5 }.edit_id(), Some(5));
    }

    #[test]
    fn test_empty_upload_is_rejected() {
        let req = CreateDocumentRequest {
            name: "report".into(),
            file_name: "report.pdf".into(),
            mime_type: "application/pdf".into(),
            tags: vec![],
            bytes: vec![],
        };
        let errors = validate_document(&req).unwrap_err();
        assert!(errors.field("file").is_some());
    }
}
