//! # RBAC Domain Types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// =============================================================================
// Entities
// =============================================================================

/// A role holding zero or more permissions by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Server-assigned identifier
    pub id: i64,
    /// Role name
    pub name: String,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ids of the permissions granted by this role
    #[serde(default)]
    pub permission_ids: Vec<i64>,
}

/// A single permission.
///
/// `module` is free text, not an enum; the backend owns the vocabulary and
/// exposes the known values via `GET /rbac/modules`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Server-assigned identifier
    pub id: i64,
    /// Permission name
    pub name: String,
    /// Module the permission belongs to
    pub module: String,
    /// Optional action verb ("read", "write", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// One entry from `GET /rbac/audit-logs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLog {
    /// Server-assigned identifier
    pub id: i64,
    /// Acting user
    pub user: String,
    /// Action performed
    pub action: String,
    /// Module the action touched
    pub module: String,
    /// Free-form detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// When the action happened
    pub created_at: NaiveDateTime,
}

// =============================================================================
// Request Payloads
// =============================================================================

/// Payload for `POST /rbac/roles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoleRequest {
    /// Role name
    pub name: String,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ids of the permissions to grant
    #[serde(default)]
    pub permission_ids: Vec<i64>,
}

/// Payload for `PUT /rbac/roles/:id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    /// New name, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement permission id list, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission_ids: Option<Vec<i64>>,
}

/// Payload for `POST /rbac/permissions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePermissionRequest {
    /// Permission name
    pub name: String,
    /// Module the permission belongs to
    pub module: String,
    /// Optional action verb
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Payload for `PUT /rbac/permissions/:id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePermissionRequest {
    /// New name, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New module, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// New action, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Payload for `POST /rbac/users/:id/roles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignRolesRequest {
    /// Replacement role id list for the user
    pub role_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_defaults_to_no_permissions() {
        let role: Role = serde_json::from_str(r#"{"id": 1, "name": "viewer"}"#).unwrap();
        assert!(role.permission_ids.is_empty());
        assert_eq!(role.description, None);
    }

    #[test]
    fn test_permission_module_is_free_text() {
        let perm: Permission = serde_json::from_str(
            r#"{"id": 7, "name": "documents.delete", "module": "Document Vault"}"#,
        )
        .unwrap();
        assert_eq!(perm.module, "Document Vault");
    }
}
