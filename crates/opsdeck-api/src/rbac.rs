//! RBAC resource client (roles, permissions, audit logs, assignments).

use std::collections::BTreeMap;

use async_trait::async_trait;

use opsdeck_types::{
    AssignRolesRequest, AuditLog, CreatePermissionRequest, CreateRoleRequest, Permission, Role,
    UpdatePermissionRequest, UpdateRoleRequest,
};

use crate::error::ApiResult;
use crate::http::HttpClient;

/// Operations on `/rbac/*`.
#[async_trait]
pub trait RbacApi: Send + Sync {
    /// `GET /rbac/roles`
    async fn list_roles(&self) -> ApiResult<Vec<Role>>;

    /// `POST /rbac/roles`
    async fn create_role(&self, req: &CreateRoleRequest) -> ApiResult<Role>;

    /// `PUT /rbac/roles/:id`
    async fn update_role(&self, id: i64, req: &UpdateRoleRequest) -> ApiResult<Role>;

    /// `DELETE /rbac/roles/:id`
    async fn delete_role(&self, id: i64) -> ApiResult<()>;

    /// `GET /rbac/permissions`
    async fn list_permissions(&self) -> ApiResult<Vec<Permission>>;

    /// `POST /rbac/permissions`
    async fn create_permission(&self, req: &CreatePermissionRequest) -> ApiResult<Permission>;

    /// `PUT /rbac/permissions/:id`
    async fn update_permission(
        &self,
        id: i64,
        req: &UpdatePermissionRequest,
    ) -> ApiResult<Permission>;

    /// `DELETE /rbac/permissions/:id`
    async fn delete_permission(&self, id: i64) -> ApiResult<()>;

    /// `GET /rbac/audit-logs`
    async fn list_audit_logs(&self, filters: &BTreeMap<String, String>)
        -> ApiResult<Vec<AuditLog>>;

    /// `GET /rbac/modules`
    async fn list_modules(&self) -> ApiResult<Vec<String>>;

    /// `POST /rbac/users/:id/roles`
    async fn assign_roles(&self, user_id: i64, req: &AssignRolesRequest) -> ApiResult<()>;
}

/// HTTP-backed [`RbacApi`].
#[derive(Debug, Clone)]
pub struct HttpRbacApi {
    http: HttpClient,
}

impl HttpRbacApi {
    /// Wrap a configured [`HttpClient`].
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl RbacApi for HttpRbacApi {
    async fn list_roles(&self) -> ApiResult<Vec<Role>> {
        Ok(self.http.get_list("/rbac/roles", &BTreeMap::new()).await?.items)
    }

    async fn create_role(&self, req: &CreateRoleRequest) -> ApiResult<Role> {
        self.http.post("/rbac/roles", req).await
    }

    async fn update_role(&self, id: i64, req: &UpdateRoleRequest) -> ApiResult<Role> {
        self.http.put(&format!("/rbac/roles/{id}"), req).await
    }

    async fn delete_role(&self, id: i64) -> ApiResult<()> {
        self.http.delete(&format!("/rbac/roles/{id}")).await?;
        Ok(())
    }

    async fn list_permissions(&self) -> ApiResult<Vec<Permission>> {
        Ok(self
            .http
            .get_list("/rbac/permissions", &BTreeMap::new())
            .await?
            .items)
    }

    async fn create_permission(&self, req: &CreatePermissionRequest) -> ApiResult<Permission> {
        self.http.post("/rbac/permissions", req).await
    }

    async fn update_permission(
        &self,
        id: i64,
        req: &UpdatePermissionRequest,
    ) -> ApiResult<Permission> {
        self.http.put(&format!("/rbac/permissions/{id}"), req).await
    }

    async fn delete_permission(&self, id: i64) -> ApiResult<()> {
        self.http.delete(&format!("/rbac/permissions/{id}")).await?;
        Ok(())
    }

    async fn list_audit_logs(
        &self,
        filters: &BTreeMap<String, String>,
    ) -> ApiResult<Vec<AuditLog>> {
        Ok(self.http.get_list("/rbac/audit-logs", filters).await?.items)
    }

    async fn list_modules(&self) -> ApiResult<Vec<String>> {
        Ok(self.http.get_list("/rbac/modules", &BTreeMap::new()).await?.items)
    }

    async fn assign_roles(&self, user_id: i64, req: &AssignRolesRequest) -> ApiResult<()> {
        let _: Option<serde_json::Value> = self
            .http
            .post(&format!("/rbac/users/{user_id}/roles"), req)
            .await?;
        Ok(())
    }
}
