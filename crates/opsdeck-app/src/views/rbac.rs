//! # RBAC View State
//!
//! Roles and permissions are two independent slices in one admin screen;
//! audit logs and the module vocabulary are read-only side lists.

use opsdeck_types::{AuditLog, Permission, Role};

use crate::store::{Entity, InsertOrder, Slice};

impl Entity for Role {
    const INSERT_ORDER: InsertOrder = InsertOrder::Append;

    fn entity_id(&self) -> i64 {
        self.id
    }
}

impl Entity for Permission {
    const INSERT_ORDER: InsertOrder = InsertOrder::Append;

    fn entity_id(&self) -> i64 {
        self.id
    }
}

/// RBAC administration state.
#[derive(Debug, Clone, Default)]
pub struct RbacState {
    /// The role list slice
    pub roles: Slice<Role>,
    /// The permission list slice
    pub permissions: Slice<Permission>,
    audit_logs: Vec<AuditLog>,
    audit_loading: bool,
    audit_error: Option<String>,
    modules: Vec<String>,
}

impl RbacState {
    /// Create an empty RBAC state.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Audit Logs
    // =========================================================================

    /// Pending: an audit-log fetch is in flight.
    pub fn begin_audit_fetch(&mut self) {
        self.audit_loading = true;
        self.audit_error = None;
    }

    /// Fulfilled: replace the audit list wholesale.
    pub fn finish_audit_fetch(&mut self, logs: Vec<AuditLog>) {
        self.audit_logs = logs;
        self.audit_loading = false;
    }

    /// Rejected: record the failure, keep the stale list.
    pub fn fail_audit_fetch(&mut self, message: impl Into<String>) {
        self.audit_error = Some(message.into());
        self.audit_loading = false;
    }

    /// Cached audit entries.
    pub fn audit_logs(&self) -> &[AuditLog] {
        &self.audit_logs
    }

    /// Whether an audit-log fetch is in flight.
    pub fn audit_loading(&self) -> bool {
        self.audit_loading
    }

    /// Last audit-log failure, if any.
    pub fn audit_error(&self) -> Option<&str> {
        self.audit_error.as_deref()
    }

    // =========================================================================
    // Modules
    // =========================================================================

    /// Store the backend's module vocabulary for permission forms.
    pub fn set_modules(&mut self, modules: Vec<String>) {
        self.modules = modules;
    }

    /// Known module names.
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// Permissions grouped under one module, for the admin matrix.
    pub fn permissions_in_module(&self, module: &str) -> Vec<&Permission> {
        self.permissions
            .items()
            .iter()
            .filter(|p| p.module == module)
            .collect()
    }
}
