//! reqwest-based backend client.
//!
//! Implements the application's backend ports against the REST API. One
//! client instance is shared by every page of the UI.

use super::protocol::{AnswerDto, ErrorBody, QueryBody, SourcePassageDto};
use async_trait::async_trait;
use ragview_application::ports::backend_api::{ApiError, CatalogApi, HistoryApi, QueryApi};
use ragview_domain::{
    AnswerResult, DocumentRecord, HistoryEntry, QueryText, SourcePassage, SystemInfo,
};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// HTTP adapter for the document question-answering backend
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client against the given base URL (e.g.
    /// `http://localhost:8000`).
    ///
    /// No request timeout is set unless `timeout_secs` is given: the
    /// orchestrator's contract is that a hung request leaves its phase
    /// loading rather than failing spuriously.
    pub fn new(base_url: impl Into<String>, timeout_secs: Option<u64>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Resolve a response to its JSON body, mapping non-2xx statuses to
    /// [`ApiError::Backend`] when the body carries `{"error": ...}`.
    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let code = status.as_u16();
            return match response.json::<ErrorBody>().await {
                Ok(body) => Err(ApiError::Backend {
                    status: code,
                    message: body.error,
                }),
                Err(_) => Err(ApiError::Status { status: code }),
            };
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!("GET {}", path);
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::read_json(response).await
    }

    async fn post_query<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryText,
    ) -> Result<T, ApiError> {
        debug!("POST {}", path);
        let response = self
            .client
            .post(self.url(path))
            .json(&QueryBody {
                query: query.content(),
            })
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::read_json(response).await
    }
}

#[async_trait]
impl QueryApi for HttpBackend {
    async fn fetch_sources(&self, query: &QueryText) -> Result<Vec<SourcePassage>, ApiError> {
        let dtos: Vec<SourcePassageDto> = self.post_query("/api/query/sources/", query).await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn fetch_answer(&self, query: &QueryText) -> Result<AnswerResult, ApiError> {
        let dto: AnswerDto = self.post_query("/api/query/", query).await?;
        Ok(dto.into())
    }
}

#[async_trait]
impl CatalogApi for HttpBackend {
    async fn list_documents(&self) -> Result<Vec<DocumentRecord>, ApiError> {
        self.get_json("/api/documents/").await
    }

    async fn upload_document(
        &self,
        title: &str,
        path: &Path,
    ) -> Result<DocumentRecord, ApiError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ApiError::Transport(format!("cannot read {}: {}", path.display(), e)))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let form = Form::new()
            .text("title", title.to_string())
            .part("file", Part::bytes(bytes).file_name(file_name));

        debug!("POST /api/documents/upload/ ({})", title);
        let response = self
            .client
            .post(self.url("/api/documents/upload/"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::read_json(response).await
    }

    async fn system_info(&self) -> Result<SystemInfo, ApiError> {
        self.get_json("/api/system/info/").await
    }
}

#[async_trait]
impl HistoryApi for HttpBackend {
    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        self.get_json("/api/query/history/").await
    }
}
