//! Backend API ports
//!
//! Defines the interfaces for talking to the document question-answering
//! backend. The HTTP adapter lives in the infrastructure layer.

use async_trait::async_trait;
use ragview_domain::{
    AnswerResult, DocumentRecord, HistoryEntry, QueryText, SourcePassage, SystemInfo,
};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during backend API calls
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// Non-2xx response with a structured `{"error": ...}` body
    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// Non-2xx response without a usable error body
    #[error("HTTP error: {status}")]
    Status { status: u16 },

    /// Connection-level failure (refused, DNS, closed mid-flight)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// The human-readable message the server supplied, if any.
    ///
    /// Callers fall back to a context-appropriate generic message when
    /// this is `None`.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Backend { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Port for the two-phase query flow
#[async_trait]
pub trait QueryApi: Send + Sync {
    /// Retrieve the supporting passages for a query
    async fn fetch_sources(&self, query: &QueryText) -> Result<Vec<SourcePassage>, ApiError>;

    /// Generate an answer for a query
    async fn fetch_answer(&self, query: &QueryText) -> Result<AnswerResult, ApiError>;
}

/// Port for the document catalog and system info
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_documents(&self) -> Result<Vec<DocumentRecord>, ApiError>;

    /// Upload a document for ingestion. Returns the created record.
    async fn upload_document(&self, title: &str, path: &Path)
    -> Result<DocumentRecord, ApiError>;

    async fn system_info(&self) -> Result<SystemInfo, ApiError>;
}

/// Port for the query history
#[async_trait]
pub trait HistoryApi: Send + Sync {
    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ApiError>;
}
