//! Shared HTTP plumbing for the per-domain resource clients.
//!
//! One thin wrapper around a [`reqwest::Client`] holding the backend base
//! url and the session token. Every helper performs exactly one request
//! and decodes the standard envelope; there is no retry or caching here.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use opsdeck_types::{Envelope, ListPayload};

use crate::error::{ApiError, ApiResult};

/// Error body shape the backend uses for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// A configured connection to the Opsdeck REST backend.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
    session_token: Option<String>,
}

impl HttpClient {
    /// Create a client for the given base url.
    ///
    /// A trailing slash on `base_url` is tolerated; paths passed to the
    /// helpers always start with `/`.
    pub fn new(base_url: impl Into<String>, session_token: Option<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
            session_token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.session_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn check_status(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| format!("request failed with status {status}"));
        tracing::debug!(status = status.as_u16(), %message, "request rejected");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<Envelope<T>> {
        let response = Self::check_status(response).await?;
        response
            .json::<Envelope<T>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `GET` a single entity or aggregate payload.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &BTreeMap<String, String>,
    ) -> ApiResult<T> {
        tracing::debug!(path, "GET");
        let response = self
            .apply_auth(self.client.get(self.url(path)).query(query))
            .send()
            .await?;
        Ok(Self::decode(response).await?.data)
    }

    /// `GET` a collection, normalizing flat and nested paginated shapes.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &BTreeMap<String, String>,
    ) -> ApiResult<ListPayload<T>> {
        tracing::debug!(path, "GET list");
        let response = self
            .apply_auth(self.client.get(self.url(path)).query(query))
            .send()
            .await?;
        Ok(Self::decode(response).await?.data)
    }

    /// `GET` a raw byte payload (document download).
    pub async fn get_bytes(&self, path: &str) -> ApiResult<Vec<u8>> {
        tracing::debug!(path, "GET bytes");
        let response = self.apply_auth(self.client.get(self.url(path))).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// `POST` a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        tracing::debug!(path, "POST");
        let response = self
            .apply_auth(self.client.post(self.url(path)).json(body))
            .send()
            .await?;
        Ok(Self::decode(response).await?.data)
    }

    /// `POST` a multipart form (file-bearing creates).
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ApiResult<T> {
        tracing::debug!(path, "POST multipart");
        let response = self
            .apply_auth(self.client.post(self.url(path)).multipart(form))
            .send()
            .await?;
        Ok(Self::decode(response).await?.data)
    }

    /// `PUT` a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        tracing::debug!(path, "PUT");
        let response = self
            .apply_auth(self.client.put(self.url(path)).json(body))
            .send()
            .await?;
        Ok(Self::decode(response).await?.data)
    }

    /// `DELETE` a resource. The envelope's `data` is ignored; the optional
    /// message is returned for toast display.
    pub async fn delete(&self, path: &str) -> ApiResult<Option<String>> {
        tracing::debug!(path, "DELETE");
        let response = self.apply_auth(self.client.delete(self.url(path))).send().await?;
        let envelope: Envelope<Option<serde_json::Value>> = Self::decode(response).await?;
        Ok(envelope.message)
    }
}
