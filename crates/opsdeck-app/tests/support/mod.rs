//! In-memory resource-client fakes and entity builders for workflow tests.
//!
//! Each fake serves scripted data, counts calls, and can be armed to fail
//! the next request with a given transport message.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use parking_lot::Mutex;

use opsdeck_api::{ApiError, ApiResult, CalendarApi, ContractApi, DocumentApi, RbacApi};
use opsdeck_app::{AppConfig, AppCore};
use opsdeck_types::{
    AssignRolesRequest, AuditLog, CalendarEvent, CalendarStats, Contract, ContractStats,
    ContractTemplate, CreateCalendarEventRequest, CreateContractRequest, CreateDocumentRequest,
    CreatePermissionRequest, CreateReplyRequest, CreateRoleRequest, Document, DocumentStats,
    EventReply, GeneratedPdf, Permission, Role, UpdateCalendarEventRequest, UpdateContractRequest,
    UpdateDocumentRequest, UpdatePermissionRequest, UpdateRoleRequest,
};

pub fn ts(s: &str) -> NaiveDateTime {
    s.parse().unwrap()
}

pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

pub fn event(id: i64, title: &str) -> CalendarEvent {
    CalendarEvent {
        id,
        title: title.into(),
        description: None,
        start_time: ts("2024-01-15T09:00:00"),
        end_time: ts("2024-01-15T10:00:00"),
        event_type: "meeting".into(),
        status: "scheduled".into(),
        location: None,
        all_day: false,
    }
}

pub fn event_request(title: &str) -> CreateCalendarEventRequest {
    CreateCalendarEventRequest {
        title: title.into(),
        description: None,
        start_time: ts("2024-01-15T09:00:00"),
        end_time: ts("2024-01-15T10:00:00"),
        event_type: "meeting".into(),
        location: None,
        all_day: false,
    }
}

pub fn reply(id: i64, event_id: i64, body: &str) -> EventReply {
    EventReply {
        id,
        event_id,
        author: "ana".into(),
        body: body.into(),
        created_at: ts("2024-01-15T10:05:00"),
    }
}

pub fn contract(id: i64, title: &str) -> Contract {
    Contract {
        id,
        title: title.into(),
        contract_type: "service".into(),
        status: "draft".into(),
        signature_status: None,
        start_date: date("2024-01-01"),
        end_date: None,
        value: None,
        counterparty: None,
    }
}

pub fn contract_request(title: &str) -> CreateContractRequest {
    CreateContractRequest {
        title: title.into(),
        contract_type: "service".into(),
        status: "draft".into(),
        start_date: date("2024-01-01"),
        end_date: None,
        value: None,
        counterparty: None,
    }
}

pub fn document(id: i64, name: &str) -> Document {
    Document {
        id,
        name: name.into(),
        file_name: format!("{name}.pdf"),
        mime_type: "application/pdf".into(),
        size_bytes: 3,
        tags: vec![],
        version: 1,
        uploaded_by: None,
        created_at: None,
    }
}

pub fn permission(id: i64, name: &str, module: &str) -> Permission {
    Permission {
        id,
        name: name.into(),
        module: module.into(),
        action: None,
    }
}

pub fn role(id: i64, name: &str) -> Role {
    Role {
        id,
        name: name.into(),
        description: None,
        permission_ids: vec![],
    }
}

fn take_failure(slot: &Mutex<Option<String>>) -> Option<ApiError> {
    slot.lock().take().map(ApiError::Network)
}

// =============================================================================
// Calendar Fake
// =============================================================================

#[derive(Default)]
pub struct FakeCalendarApi {
    pub events: Mutex<Vec<CalendarEvent>>,
    pub replies: Mutex<Vec<EventReply>>,
    pub next_id: AtomicI64,
    pub list_calls: AtomicUsize,
    pub reply_list_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub last_filters: Mutex<Option<BTreeMap<String, String>>>,
    pub fail_message: Mutex<Option<String>>,
}

impl FakeCalendarApi {
    pub fn with_events(events: Vec<CalendarEvent>) -> Self {
        Self {
            events: Mutex::new(events),
            next_id: AtomicI64::new(100),
            ..Self::default()
        }
    }

    /// Arm the fake so the next call rejects with this transport message.
    pub fn fail_next(&self, message: &str) {
        *self.fail_message.lock() = Some(message.to_string());
    }
}

#[async_trait]
impl CalendarApi for FakeCalendarApi {
    async fn list_events(
        &self,
        filters: &BTreeMap<String, String>,
    ) -> ApiResult<Vec<CalendarEvent>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_filters.lock() = Some(filters.clone());
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        Ok(self.events.lock().clone())
    }

    async fn create_event(&self, req: &CreateCalendarEventRequest) -> ApiResult<CalendarEvent> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        let created = CalendarEvent {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: req.title.clone(),
            description: req.description.clone(),
            start_time: req.start_time,
            end_time: req.end_time,
            event_type: req.event_type.clone(),
            status: "scheduled".into(),
            location: req.location.clone(),
            all_day: req.all_day,
        };
        self.events.lock().push(created.clone());
        Ok(created)
    }

    async fn update_event(
        &self,
        id: i64,
        req: &UpdateCalendarEventRequest,
    ) -> ApiResult<CalendarEvent> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        let events = self.events.lock();
        let base = events
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                message: "Event not found".into(),
            })?;
        Ok(CalendarEvent {
            title: req.title.clone().unwrap_or(base.title),
            status: req.status.clone().unwrap_or(base.status),
            ..base
        })
    }

    async fn delete_event(&self, id: i64) -> ApiResult<()> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        self.events.lock().retain(|e| e.id != id);
        Ok(())
    }

    async fn list_replies(&self, event_id: i64) -> ApiResult<Vec<EventReply>> {
        self.reply_list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        Ok(self
            .replies
            .lock()
            .iter()
            .filter(|r| r.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn create_reply(
        &self,
        event_id: i64,
        req: &CreateReplyRequest,
    ) -> ApiResult<EventReply> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        let created = EventReply {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            event_id,
            author: "me".into(),
            body: req.body.clone(),
            created_at: ts("2024-01-15T10:05:00"),
        };
        self.replies.lock().push(created.clone());
        Ok(created)
    }

    async fn stats(&self) -> ApiResult<CalendarStats> {
        Ok(CalendarStats {
            total_events: self.events.lock().len() as u64,
            upcoming: 0,
            today: 0,
        })
    }

    async fn upcoming(&self) -> ApiResult<Vec<CalendarEvent>> {
        Ok(vec![])
    }

    async fn today(&self) -> ApiResult<Vec<CalendarEvent>> {
        Ok(vec![])
    }
}

// =============================================================================
// Contract Fake
// =============================================================================

#[derive(Default)]
pub struct FakeContractApi {
    pub contracts: Mutex<Vec<Contract>>,
    pub templates: Mutex<Vec<ContractTemplate>>,
    pub next_id: AtomicI64,
    pub fail_message: Mutex<Option<String>>,
}

impl FakeContractApi {
    pub fn with_contracts(contracts: Vec<Contract>, next_id: i64) -> Self {
        Self {
            contracts: Mutex::new(contracts),
            next_id: AtomicI64::new(next_id),
            ..Self::default()
        }
    }

    pub fn fail_next(&self, message: &str) {
        *self.fail_message.lock() = Some(message.to_string());
    }
}

#[async_trait]
impl ContractApi for FakeContractApi {
    async fn list_contracts(
        &self,
        _filters: &BTreeMap<String, String>,
    ) -> ApiResult<Vec<Contract>> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        Ok(self.contracts.lock().clone())
    }

    async fn create_contract(&self, req: &CreateContractRequest) -> ApiResult<Contract> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        let created = Contract {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: req.title.clone(),
            contract_type: req.contract_type.clone(),
            status: req.status.clone(),
            signature_status: None,
            start_date: req.start_date,
            end_date: req.end_date,
            value: req.value,
            counterparty: req.counterparty.clone(),
        };
        self.contracts.lock().push(created.clone());
        Ok(created)
    }

    async fn update_contract(&self, id: i64, req: &UpdateContractRequest) -> ApiResult<Contract> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        let contracts = self.contracts.lock();
        let base = contracts
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                message: "Contract not found".into(),
            })?;
        Ok(Contract {
            title: req.title.clone().unwrap_or(base.title),
            status: req.status.clone().unwrap_or(base.status),
            ..base
        })
    }

    async fn delete_contract(&self, id: i64) -> ApiResult<()> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        self.contracts.lock().retain(|c| c.id != id);
        Ok(())
    }

    async fn stats(&self) -> ApiResult<ContractStats> {
        Ok(ContractStats {
            total: self.contracts.lock().len() as u64,
            ..ContractStats::default()
        })
    }

    async fn list_templates(&self) -> ApiResult<Vec<ContractTemplate>> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        Ok(self.templates.lock().clone())
    }

    async fn generate_pdf(&self, id: i64) -> ApiResult<GeneratedPdf> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        Ok(GeneratedPdf {
            url: format!("/downloads/contract-{id}.pdf"),
        })
    }
}

// =============================================================================
// Document Fake
// =============================================================================

#[derive(Default)]
pub struct FakeDocumentApi {
    pub documents: Mutex<Vec<Document>>,
    pub next_id: AtomicI64,
    pub search_calls: AtomicUsize,
    pub fail_message: Mutex<Option<String>>,
}

impl FakeDocumentApi {
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents: Mutex::new(documents),
            next_id: AtomicI64::new(100),
            ..Self::default()
        }
    }

    pub fn fail_next(&self, message: &str) {
        *self.fail_message.lock() = Some(message.to_string());
    }
}

#[async_trait]
impl DocumentApi for FakeDocumentApi {
    async fn list_documents(
        &self,
        _filters: &BTreeMap<String, String>,
    ) -> ApiResult<Vec<Document>> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        Ok(self.documents.lock().clone())
    }

    async fn create_document(&self, req: &CreateDocumentRequest) -> ApiResult<Document> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        let created = Document {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: req.name.clone(),
            file_name: req.file_name.clone(),
            mime_type: req.mime_type.clone(),
            size_bytes: req.bytes.len() as u64,
            tags: req.tags.clone(),
            version: 1,
            uploaded_by: None,
            created_at: None,
        };
        self.documents.lock().push(created.clone());
        Ok(created)
    }

    async fn update_document(&self, id: i64, req: &UpdateDocumentRequest) -> ApiResult<Document> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        let documents = self.documents.lock();
        let base = documents
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                message: "Document not found".into(),
            })?;
        Ok(Document {
            name: req.name.clone().unwrap_or(base.name),
            tags: req.tags.clone().unwrap_or(base.tags),
            ..base
        })
    }

    async fn delete_document(&self, id: i64) -> ApiResult<()> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        self.documents.lock().retain(|d| d.id != id);
        Ok(())
    }

    async fn download(&self, _id: i64) -> ApiResult<Vec<u8>> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        Ok(vec![0x25, 0x50, 0x44, 0x46])
    }

    async fn stats(&self) -> ApiResult<DocumentStats> {
        let documents = self.documents.lock();
        Ok(DocumentStats {
            total_documents: documents.len() as u64,
            total_size_bytes: documents.iter().map(|d| d.size_bytes).sum(),
        })
    }

    async fn search(&self, query: &str) -> ApiResult<Vec<Document>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        Ok(self
            .documents
            .lock()
            .iter()
            .filter(|d| d.name.contains(query))
            .cloned()
            .collect())
    }
}

// =============================================================================
// RBAC Fake
// =============================================================================

#[derive(Default)]
pub struct FakeRbacApi {
    pub roles: Mutex<Vec<Role>>,
    pub permissions: Mutex<Vec<Permission>>,
    pub audit_logs: Mutex<Vec<AuditLog>>,
    pub next_id: AtomicI64,
    pub assignments: Mutex<Vec<(i64, Vec<i64>)>>,
    pub fail_message: Mutex<Option<String>>,
}

impl FakeRbacApi {
    pub fn with_permissions(permissions: Vec<Permission>) -> Self {
        Self {
            permissions: Mutex::new(permissions),
            next_id: AtomicI64::new(100),
            ..Self::default()
        }
    }

    pub fn fail_next(&self, message: &str) {
        *self.fail_message.lock() = Some(message.to_string());
    }
}

#[async_trait]
impl RbacApi for FakeRbacApi {
    async fn list_roles(&self) -> ApiResult<Vec<Role>> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        Ok(self.roles.lock().clone())
    }

    async fn create_role(&self, req: &CreateRoleRequest) -> ApiResult<Role> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        let created = Role {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: req.name.clone(),
            description: req.description.clone(),
            permission_ids: req.permission_ids.clone(),
        };
        self.roles.lock().push(created.clone());
        Ok(created)
    }

    async fn update_role(&self, id: i64, req: &UpdateRoleRequest) -> ApiResult<Role> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        let roles = self.roles.lock();
        let base = roles
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                message: "Role not found".into(),
            })?;
        Ok(Role {
            name: req.name.clone().unwrap_or(base.name),
            permission_ids: req.permission_ids.clone().unwrap_or(base.permission_ids),
            ..base
        })
    }

    async fn delete_role(&self, id: i64) -> ApiResult<()> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        self.roles.lock().retain(|r| r.id != id);
        Ok(())
    }

    async fn list_permissions(&self) -> ApiResult<Vec<Permission>> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        Ok(self.permissions.lock().clone())
    }

    async fn create_permission(&self, req: &CreatePermissionRequest) -> ApiResult<Permission> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        let created = Permission {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: req.name.clone(),
            module: req.module.clone(),
            action: req.action.clone(),
        };
        self.permissions.lock().push(created.clone());
        Ok(created)
    }

    async fn update_permission(
        &self,
        id: i64,
        req: &UpdatePermissionRequest,
    ) -> ApiResult<Permission> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        let permissions = self.permissions.lock();
        let base = permissions
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                message: "Permission not found".into(),
            })?;
        Ok(Permission {
            name: req.name.clone().unwrap_or(base.name),
            module: req.module.clone().unwrap_or(base.module),
            ..base
        })
    }

    async fn delete_permission(&self, id: i64) -> ApiResult<()> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        self.permissions.lock().retain(|p| p.id != id);
        Ok(())
    }

    async fn list_audit_logs(
        &self,
        _filters: &BTreeMap<String, String>,
    ) -> ApiResult<Vec<AuditLog>> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        Ok(self.audit_logs.lock().clone())
    }

    async fn list_modules(&self) -> ApiResult<Vec<String>> {
        Ok(vec!["calendar".into(), "contracts".into(), "documents".into(), "rbac".into()])
    }

    async fn assign_roles(&self, user_id: i64, req: &AssignRolesRequest) -> ApiResult<()> {
        if let Some(err) = take_failure(&self.fail_message) {
            return Err(err);
        }
        self.assignments.lock().push((user_id, req.role_ids.clone()));
        Ok(())
    }
}

// =============================================================================
// Core Construction
// =============================================================================

pub struct Fakes {
    pub calendar: Arc<FakeCalendarApi>,
    pub contracts: Arc<FakeContractApi>,
    pub documents: Arc<FakeDocumentApi>,
    pub rbac: Arc<FakeRbacApi>,
}

impl Default for Fakes {
    fn default() -> Self {
        Self {
            calendar: Arc::new(FakeCalendarApi::default()),
            contracts: Arc::new(FakeContractApi::default()),
            documents: Arc::new(FakeDocumentApi::default()),
            rbac: Arc::new(FakeRbacApi::default()),
        }
    }
}

impl Fakes {
    /// Build a core wired to these fakes.
    pub fn into_core(self) -> (Arc<AppCore>, FakeHandles) {
        let handles = FakeHandles {
            calendar: Arc::clone(&self.calendar),
            contracts: Arc::clone(&self.contracts),
            documents: Arc::clone(&self.documents),
            rbac: Arc::clone(&self.rbac),
        };
        let core = AppCore::with_apis(
            AppConfig {
                api_base_url: "http://fake".into(),
                channel_url: "ws://fake".into(),
                session_token: Some("test-token".into()),
            },
            self.calendar,
            self.contracts,
            self.documents,
            self.rbac,
        );
        (Arc::new(core), handles)
    }
}

/// Handles the tests keep for scripting and assertions after the core has
/// taken ownership of the trait objects.
pub struct FakeHandles {
    pub calendar: Arc<FakeCalendarApi>,
    pub contracts: Arc<FakeContractApi>,
    pub documents: Arc<FakeDocumentApi>,
    pub rbac: Arc<FakeRbacApi>,
}
