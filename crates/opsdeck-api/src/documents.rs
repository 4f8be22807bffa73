//! Document resource client.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use opsdeck_types::{CreateDocumentRequest, Document, DocumentStats, UpdateDocumentRequest};

use crate::error::{ApiError, ApiResult};
use crate::http::HttpClient;

/// Operations on `/documents/*`.
#[async_trait]
pub trait DocumentApi: Send + Sync {
    /// `GET /documents`
    async fn list_documents(&self, filters: &BTreeMap<String, String>)
        -> ApiResult<Vec<Document>>;

    /// `POST /documents` (multipart)
    async fn create_document(&self, req: &CreateDocumentRequest) -> ApiResult<Document>;

    /// `PUT /documents/:id`
    async fn update_document(&self, id: i64, req: &UpdateDocumentRequest) -> ApiResult<Document>;

    /// `DELETE /documents/:id`
    async fn delete_document(&self, id: i64) -> ApiResult<()>;

    /// `GET /documents/:id/download`
    async fn download(&self, id: i64) -> ApiResult<Vec<u8>>;

    /// `GET /documents/stats`
    async fn stats(&self) -> ApiResult<DocumentStats>;

    /// `GET /documents/search`
    async fn search(&self, query: &str) -> ApiResult<Vec<Document>>;
}

/// Build the multipart form for a document create.
///
/// Metadata travels as plain text fields (tags repeated as `tags[]`), the
/// payload as a single `file` part carrying the original file name and
/// MIME type.
fn multipart_form(req: &CreateDocumentRequest) -> ApiResult<Form> {
    let file_part = Part::bytes(req.bytes.clone())
        .file_name(req.file_name.clone())
        .mime_str(&req.mime_type)
        .map_err(|e| ApiError::InvalidRequest(format!("bad mime type: {e}")))?;

    let mut form = Form::new()
        .text("name", req.name.clone())
        .part("file", file_part);
    for tag in &req.tags {
        form = form.text("tags[]", tag.clone());
    }
    Ok(form)
}

/// HTTP-backed [`DocumentApi`].
#[derive(Debug, Clone)]
pub struct HttpDocumentApi {
    http: HttpClient,
}

impl HttpDocumentApi {
    /// Wrap a configured [`HttpClient`].
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DocumentApi for HttpDocumentApi {
    async fn list_documents(
        &self,
        filters: &BTreeMap<String, String>,
    ) -> ApiResult<Vec<Document>> {
        Ok(self.http.get_list("/documents", filters).await?.items)
    }

    async fn create_document(&self, req: &CreateDocumentRequest) -> ApiResult<Document> {
        let form = multipart_form(req)?;
        self.http.post_multipart("/documents", form).await
    }

    async fn update_document(&self, id: i64, req: &UpdateDocumentRequest) -> ApiResult<Document> {
        self.http.put(&format!("/documents/{id}"), req).await
    }

    async fn delete_document(&self, id: i64) -> ApiResult<()> {
        self.http.delete(&format!("/documents/{id}")).await?;
        Ok(())
    }

    async fn download(&self, id: i64) -> ApiResult<Vec<u8>> {
        self.http.get_bytes(&format!("/documents/{id}/download")).await
    }

    async fn stats(&self) -> ApiResult<DocumentStats> {
        self.http.get("/documents/stats", &BTreeMap::new()).await
    }

    async fn search(&self, query: &str) -> ApiResult<Vec<Document>> {
        let mut params = BTreeMap::new();
        params.insert("q".to_string(), query.to_string());
        Ok(self.http.get_list("/documents/search", &params).await?.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipart_form_rejects_bad_mime() {
        let req = CreateDocumentRequest {
            name: "report".into(),
            file_name: "report.pdf".into(),
            mime_type: "not a mime".into(),
            tags: vec![],
            bytes: vec![1, 2, 3],
        };
        assert!(matches!(
            multipart_form(&req),
            Err(ApiError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_multipart_form_accepts_pdf() {
        let req = CreateDocumentRequest {
            name: "report".into(),
            file_name: "report.pdf".into(),
            mime_type: "application/pdf".into(),
            tags: vec!["finance".into()],
            bytes: vec![1, 2, 3],
        };
        assert!(multipart_form(&req).is_ok());
    }
}
