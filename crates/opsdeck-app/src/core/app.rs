//! The application root: configuration plus owned store instances.

use std::sync::Arc;

use async_lock::RwLock;

use opsdeck_api::{
    CalendarApi, ContractApi, DocumentApi, HttpCalendarApi, HttpClient, HttpContractApi,
    HttpDocumentApi, HttpRbacApi, RbacApi,
};

use crate::ui::notifications::{NotificationsState, ToastLevel};
use crate::views::{CalendarState, ContractsState, DocumentsState, RbacState};

/// Startup configuration for the console core.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base url of the REST backend (e.g. `https://ops.example.com/api`)
    pub api_base_url: String,
    /// Url of the realtime channel endpoint (e.g. `wss://ops.example.com/socket`)
    pub channel_url: String,
    /// Session token for authenticated calls and the channel join
    pub session_token: Option<String>,
}

/// The application root.
///
/// Owns one store instance per domain behind an async `RwLock`, plus the
/// resource clients the workflows call. Views hold an `Arc<AppCore>` and
/// read state through the locks; workflows are the only writers.
pub struct AppCore {
    config: AppConfig,
    /// Calendar domain state
    pub calendar: RwLock<CalendarState>,
    /// Contract domain state
    pub contracts: RwLock<ContractsState>,
    /// Document domain state
    pub documents: RwLock<DocumentsState>,
    /// RBAC domain state
    pub rbac: RwLock<RbacState>,
    /// Toast queue shared by all domains
    pub notifications: RwLock<NotificationsState>,
    calendar_api: Arc<dyn CalendarApi>,
    contract_api: Arc<dyn ContractApi>,
    document_api: Arc<dyn DocumentApi>,
    rbac_api: Arc<dyn RbacApi>,
}

impl AppCore {
    /// Create a core wired to the HTTP backend named by `config`.
    pub fn new(config: AppConfig) -> Self {
        let http = HttpClient::new(config.api_base_url.clone(), config.session_token.clone());
        Self::with_apis(
            config,
            Arc::new(HttpCalendarApi::new(http.clone())),
            Arc::new(HttpContractApi::new(http.clone())),
            Arc::new(HttpDocumentApi::new(http.clone())),
            Arc::new(HttpRbacApi::new(http)),
        )
    }

    /// Create a core over explicit api implementations.
    ///
    /// This is how tests inject in-memory fakes; production code goes
    /// through [`AppCore::new`].
    pub fn with_apis(
        config: AppConfig,
        calendar_api: Arc<dyn CalendarApi>,
        contract_api: Arc<dyn ContractApi>,
        document_api: Arc<dyn DocumentApi>,
        rbac_api: Arc<dyn RbacApi>,
    ) -> Self {
        Self {
            config,
            calendar: RwLock::new(CalendarState::new()),
            contracts: RwLock::new(ContractsState::new()),
            documents: RwLock::new(DocumentsState::new()),
            rbac: RwLock::new(RbacState::new()),
            notifications: RwLock::new(NotificationsState::new()),
            calendar_api,
            contract_api,
            document_api,
            rbac_api,
        }
    }

    /// Startup configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub(crate) fn calendar_api(&self) -> &dyn CalendarApi {
        self.calendar_api.as_ref()
    }

    pub(crate) fn contract_api(&self) -> &dyn ContractApi {
        self.contract_api.as_ref()
    }

    pub(crate) fn document_api(&self) -> &dyn DocumentApi {
        self.document_api.as_ref()
    }

    pub(crate) fn rbac_api(&self) -> &dyn RbacApi {
        self.rbac_api.as_ref()
    }

    /// Queue a toast.
    pub async fn toast(&self, level: ToastLevel, message: impl Into<String>) {
        self.notifications.write().await.push(level, message);
    }

    /// Queue a success toast.
    pub async fn toast_success(&self, message: impl Into<String>) {
        self.toast(ToastLevel::Success, message).await;
    }

    /// Queue an error toast.
    pub async fn toast_error(&self, message: impl Into<String>) {
        self.toast(ToastLevel::Error, message).await;
    }
}
