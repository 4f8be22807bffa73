//! Contract resource client.

use std::collections::BTreeMap;

use async_trait::async_trait;

use opsdeck_types::{
    Contract, ContractStats, ContractTemplate, CreateContractRequest, GeneratedPdf,
    UpdateContractRequest,
};

use crate::error::ApiResult;
use crate::http::HttpClient;

/// Operations on `/contracts/*`.
///
/// Contract and template lists come back in the nested paginated envelope
/// shape; the shared list decoder flattens that here so callers only ever
/// see the collection.
#[async_trait]
pub trait ContractApi: Send + Sync {
    /// `GET /contracts`
    async fn list_contracts(&self, filters: &BTreeMap<String, String>)
        -> ApiResult<Vec<Contract>>;

    /// `POST /contracts`
    async fn create_contract(&self, req: &CreateContractRequest) -> ApiResult<Contract>;

    /// `PUT /contracts/:id`
    async fn update_contract(&self, id: i64, req: &UpdateContractRequest) -> ApiResult<Contract>;

    /// `DELETE /contracts/:id`
    async fn delete_contract(&self, id: i64) -> ApiResult<()>;

    /// `GET /contracts/stats`
    async fn stats(&self) -> ApiResult<ContractStats>;

    /// `GET /contracts/templates`
    async fn list_templates(&self) -> ApiResult<Vec<ContractTemplate>>;

    /// `POST /contracts/:id/generate-pdf`
    async fn generate_pdf(&self, id: i64) -> ApiResult<GeneratedPdf>;
}

/// HTTP-backed [`ContractApi`].
#[derive(Debug, Clone)]
pub struct HttpContractApi {
    http: HttpClient,
}

impl HttpContractApi {
    /// Wrap a configured [`HttpClient`].
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ContractApi for HttpContractApi {
    async fn list_contracts(
        &self,
        filters: &BTreeMap<String, String>,
    ) -> ApiResult<Vec<Contract>> {
        Ok(self.http.get_list("/contracts", filters).await?.items)
    }

    async fn create_contract(&self, req: &CreateContractRequest) -> ApiResult<Contract> {
        self.http.post("/contracts", req).await
    }

    async fn update_contract(&self, id: i64, req: &UpdateContractRequest) -> ApiResult<Contract> {
        self.http.put(&format!("/contracts/{id}"), req).await
    }

    async fn delete_contract(&self, id: i64) -> ApiResult<()> {
        self.http.delete(&format!("/contracts/{id}")).await?;
        Ok(())
    }

    async fn stats(&self) -> ApiResult<ContractStats> {
        self.http.get("/contracts/stats", &BTreeMap::new()).await
    }

    async fn list_templates(&self) -> ApiResult<Vec<ContractTemplate>> {
        Ok(self
            .http
            .get_list("/contracts/templates", &BTreeMap::new())
            .await?
            .items)
    }

    async fn generate_pdf(&self, id: i64) -> ApiResult<GeneratedPdf> {
        self.http
            .post(&format!("/contracts/{id}/generate-pdf"), &serde_json::json!({}))
            .await
    }
}
