//! HTTP client for the catalog API

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::types::{CatalogPage, Topic};

/// Error type for catalog API calls
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Query for one catalog page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub topics: Vec<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl CatalogQuery {
    /// Query string pairs in the order the API documents them.
    ///
    /// `topics` is comma-joined in selection order and left out entirely
    /// when nothing is selected, so an empty selection is an unfiltered
    /// listing.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.topics.is_empty() {
            pairs.push(("topics", self.topics.join(",")));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("perPage", per_page.to_string()));
        }
        pairs
    }
}

/// The two reads a catalog view needs.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_resources(&self, query: &CatalogQuery) -> Result<CatalogPage, ClientError>;

    async fn list_topics(&self) -> Result<Vec<Topic>, ClientError>;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpCatalogClient {
    /// `base_url` is the server origin, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<R, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url).query(query);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!(url = %url, ?query, "Catalog API request");
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            tracing::warn!(status = status.as_u16(), %message, "Catalog API error");
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn list_resources(&self, query: &CatalogQuery) -> Result<CatalogPage, ClientError> {
        self.get("/api/resources", &query.to_query_pairs()).await
    }

    async fn list_topics(&self) -> Result<Vec<Topic>, ClientError> {
        self.get("/api/topics", &[]).await
    }
}
