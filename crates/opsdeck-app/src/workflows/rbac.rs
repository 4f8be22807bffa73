//! RBAC workflows: role and permission CRUD, audit logs, module
//! vocabulary, and user role assignment.

use std::collections::BTreeMap;

use opsdeck_types::{
    AssignRolesRequest, CreatePermissionRequest, CreateRoleRequest, Permission, Role,
    UpdatePermissionRequest, UpdateRoleRequest,
};

use crate::core::AppCore;
use crate::errors::AppError;
use crate::ui::forms;

// =============================================================================
// Roles
// =============================================================================

/// Fetch the role list.
pub async fn fetch_roles(core: &AppCore) -> Result<(), AppError> {
    let token = core.rbac.write().await.roles.begin_fetch();
    match core.rbac_api().list_roles().await {
        Ok(roles) => {
            let mut state = core.rbac.write().await;
            if !state.roles.finish_fetch(token, roles) {
                tracing::debug!("dropped stale role list response");
            }
            Ok(())
        }
        Err(err) => {
            let err = AppError::from(err);
            core.rbac.write().await.roles.fail_fetch(token, err.user_message());
            Err(err)
        }
    }
}

/// Create a role and append it to the list.
pub async fn create_role(core: &AppCore, req: CreateRoleRequest) -> Result<Role, AppError> {
    forms::validate_role(&req).map_err(AppError::validation)?;

    core.rbac.write().await.roles.begin_mutation();
    match core.rbac_api().create_role(&req).await {
        Ok(role) => {
            core.rbac.write().await.roles.apply_created(role.clone());
            core.toast_success(format!("Role \"{}\" created", role.name)).await;
            Ok(role)
        }
        Err(err) => fail_role_write(core, err, "create role").await,
    }
}

/// Update a role in place.
pub async fn update_role(
    core: &AppCore,
    id: i64,
    req: UpdateRoleRequest,
) -> Result<Role, AppError> {
    core.rbac.write().await.roles.begin_mutation();
    match core.rbac_api().update_role(id, &req).await {
        Ok(role) => {
            let mut state = core.rbac.write().await;
            if !state.roles.apply_updated(role.clone()) {
                tracing::debug!(id, "updated role is not in the cached list");
            }
            drop(state);
            core.toast_success(format!("Role \"{}\" updated", role.name)).await;
            Ok(role)
        }
        Err(err) => fail_role_write(core, err, "update role").await,
    }
}

/// Delete a role and drop it from the list.
pub async fn delete_role(core: &AppCore, id: i64) -> Result<(), AppError> {
    core.rbac.write().await.roles.begin_mutation();
    match core.rbac_api().delete_role(id).await {
        Ok(()) => {
            core.rbac.write().await.roles.apply_deleted(id);
            core.toast_success("Role deleted").await;
            Ok(())
        }
        Err(err) => fail_role_write::<()>(core, err, "delete role").await,
    }
}

async fn fail_role_write<T>(
    core: &AppCore,
    err: opsdeck_api::ApiError,
    action: &str,
) -> Result<T, AppError> {
    let err = AppError::from(err);
    let message = err.user_message();
    tracing::warn!(action, %message, "role write failed");
    core.rbac.write().await.roles.fail_mutation(message.clone());
    core.toast_error(message).await;
    Err(err)
}

// =============================================================================
// Permissions
// =============================================================================

/// Fetch the permission list.
pub async fn fetch_permissions(core: &AppCore) -> Result<(), AppError> {
    let token = core.rbac.write().await.permissions.begin_fetch();
    match core.rbac_api().list_permissions().await {
        Ok(permissions) => {
            let mut state = core.rbac.write().await;
            if !state.permissions.finish_fetch(token, permissions) {
                tracing::debug!("dropped stale permission list response");
            }
            Ok(())
        }
        Err(err) => {
            let err = AppError::from(err);
            core.rbac
                .write()
                .await
                .permissions
                .fail_fetch(token, err.user_message());
            Err(err)
        }
    }
}

/// Create a permission and append it to the list.
pub async fn create_permission(
    core: &AppCore,
    req: CreatePermissionRequest,
) -> Result<Permission, AppError> {
    forms::validate_permission(&req).map_err(AppError::validation)?;

    core.rbac.write().await.permissions.begin_mutation();
    match core.rbac_api().create_permission(&req).await {
        Ok(permission) => {
            core.rbac.write().await.permissions.apply_created(permission.clone());
            core.toast_success(format!("Permission \"{}\" created", permission.name)).await;
            Ok(permission)
        }
        Err(err) => fail_permission_write(core, err, "create permission").await,
    }
}

/// Update a permission in place.
pub async fn update_permission(
    core: &AppCore,
    id: i64,
    req: UpdatePermissionRequest,
) -> Result<Permission, AppError> {
    core.rbac.write().await.permissions.begin_mutation();
    match core.rbac_api().update_permission(id, &req).await {
        Ok(permission) => {
            let mut state = core.rbac.write().await;
            if !state.permissions.apply_updated(permission.clone()) {
                tracing::debug!(id, "updated permission is not in the cached list");
            }
            drop(state);
            core.toast_success(format!("Permission \"{}\" updated", permission.name)).await;
            Ok(permission)
        }
        Err(err) => fail_permission_write(core, err, "update permission").await,
    }
}

/// Delete a permission and drop it from the list.
pub async fn delete_permission(core: &AppCore, id: i64) -> Result<(), AppError> {
    core.rbac.write().await.permissions.begin_mutation();
    match core.rbac_api().delete_permission(id).await {
        Ok(()) => {
            core.rbac.write().await.permissions.apply_deleted(id);
            core.toast_success("Permission deleted").await;
            Ok(())
        }
        Err(err) => fail_permission_write::<()>(core, err, "delete permission").await,
    }
}

async fn fail_permission_write<T>(
    core: &AppCore,
    err: opsdeck_api::ApiError,
    action: &str,
) -> Result<T, AppError> {
    let err = AppError::from(err);
    let message = err.user_message();
    tracing::warn!(action, %message, "permission write failed");
    core.rbac.write().await.permissions.fail_mutation(message.clone());
    core.toast_error(message).await;
    Err(err)
}

// =============================================================================
// Audit Logs, Modules, Assignments
// =============================================================================

/// Fetch the audit trail, optionally filtered by module/action/user.
pub async fn fetch_audit_logs(
    core: &AppCore,
    filters: &BTreeMap<String, String>,
) -> Result<(), AppError> {
    core.rbac.write().await.begin_audit_fetch();
    match core.rbac_api().list_audit_logs(filters).await {
        Ok(logs) => {
            core.rbac.write().await.finish_audit_fetch(logs);
            Ok(())
        }
        Err(err) => {
            let err = AppError::from(err);
            core.rbac.write().await.fail_audit_fetch(err.user_message());
            Err(err)
        }
    }
}

/// Fetch the module vocabulary used by permission forms.
pub async fn fetch_modules(core: &AppCore) -> Result<(), AppError> {
    let modules = core.rbac_api().list_modules().await?;
    core.rbac.write().await.set_modules(modules);
    Ok(())
}

/// Replace one user's role set.
pub async fn assign_roles(
    core: &AppCore,
    user_id: i64,
    role_ids: Vec<i64>,
) -> Result<(), AppError> {
    let req = AssignRolesRequest { role_ids };
    match core.rbac_api().assign_roles(user_id, &req).await {
        Ok(()) => {
            core.toast_success("Roles updated").await;
            Ok(())
        }
        Err(err) => {
            let err = AppError::from(err);
            core.toast_error(err.user_message()).await;
            Err(err)
        }
    }
}
