//! Client controller
//!
//! Command inbox for the presentation layer: the TUI event loop sends
//! [`ClientCommand`]s, the controller dispatches them to the backend
//! ports and emits [`UiEvent`]s for rendering. Query submissions go
//! through the [`QueryOrchestrator`]; the simpler page loads (documents,
//! history, system info) resolve inline.

use crate::ports::backend_api::{ApiError, CatalogApi, HistoryApi, QueryApi};
use crate::ports::ui_event::UiEvent;
use crate::use_cases::submit_query::QueryOrchestrator;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

/// Commands sent from the presentation layer (Actor inbox)
#[derive(Debug)]
pub enum ClientCommand {
    /// User submitted query text from the query page
    SubmitQuery(String),
    /// Refresh the document table
    LoadDocuments,
    /// Refresh the query history table
    LoadHistory,
    /// Refresh the dashboard's system info
    LoadSystemInfo,
    /// Upload a document for ingestion
    UploadDocument { title: String, path: PathBuf },
}

/// Controller wiring commands to use cases and ports
pub struct ClientController {
    orchestrator: QueryOrchestrator,
    catalog: Arc<dyn CatalogApi>,
    history: Arc<dyn HistoryApi>,
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl ClientController {
    pub fn new(
        query_api: Arc<dyn QueryApi>,
        catalog: Arc<dyn CatalogApi>,
        history: Arc<dyn HistoryApi>,
        tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        let orchestrator = QueryOrchestrator::new(query_api, tx.clone());
        Self {
            orchestrator,
            catalog,
            history,
            tx,
        }
    }

    /// Handle one command. Query submissions return immediately (the
    /// session runs in the background); loads resolve before the next
    /// command is processed.
    pub async fn handle_command(&mut self, command: ClientCommand) {
        match command {
            ClientCommand::SubmitQuery(raw) => {
                // Validation failures are already surfaced as
                // QueryRejected events.
                let _ = self.orchestrator.submit(&raw);
            }

            ClientCommand::LoadDocuments => {
                let event = match self.catalog.list_documents().await {
                    Ok(docs) => UiEvent::DocumentsLoaded(docs),
                    Err(err) => UiEvent::DocumentsFailed {
                        message: load_message(&err, "Failed to load documents"),
                    },
                };
                let _ = self.tx.send(event);
            }

            ClientCommand::LoadHistory => {
                let event = match self.history.fetch_history().await {
                    Ok(entries) => UiEvent::HistoryLoaded(entries),
                    Err(err) => UiEvent::HistoryFailed {
                        message: load_message(&err, "Failed to load query history"),
                    },
                };
                let _ = self.tx.send(event);
            }

            ClientCommand::LoadSystemInfo => {
                let event = match self.catalog.system_info().await {
                    Ok(info) => UiEvent::SystemInfoLoaded(info),
                    Err(err) => UiEvent::SystemInfoFailed {
                        message: load_message(&err, "Failed to load system information"),
                    },
                };
                let _ = self.tx.send(event);
            }

            ClientCommand::UploadDocument { title, path } => {
                let event = match self.catalog.upload_document(&title, &path).await {
                    Ok(doc) => UiEvent::DocumentUploaded(doc),
                    Err(err) => {
                        warn!("Upload of '{}' failed: {}", title, err);
                        UiEvent::UploadFailed {
                            message: load_message(&err, "Failed to upload document"),
                        }
                    }
                };
                let _ = self.tx.send(event);
            }
        }
    }
}

fn load_message(err: &ApiError, fallback: &str) -> String {
    err.server_message().unwrap_or(fallback).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ragview_domain::{
        AnswerResult, DocumentRecord, HistoryEntry, QueryText, SourcePassage, SystemInfo,
    };
    use std::path::Path;

    struct StubBackend {
        documents_fail: bool,
    }

    #[async_trait]
    impl QueryApi for StubBackend {
        async fn fetch_sources(
            &self,
            _query: &QueryText,
        ) -> Result<Vec<SourcePassage>, ApiError> {
            Ok(vec![])
        }

        async fn fetch_answer(&self, _query: &QueryText) -> Result<AnswerResult, ApiError> {
            Ok(AnswerResult::new("ok"))
        }
    }

    #[async_trait]
    impl CatalogApi for StubBackend {
        async fn list_documents(&self) -> Result<Vec<DocumentRecord>, ApiError> {
            if self.documents_fail {
                return Err(ApiError::Transport("refused".into()));
            }
            Ok(vec![DocumentRecord {
                id: 1,
                title: "Manual".into(),
                file_name: "manual.pdf".into(),
                file_type: "pdf".into(),
                upload_date: "2026-08-01T00:00:00Z".into(),
                chunk_count: 3,
            }])
        }

        async fn upload_document(
            &self,
            title: &str,
            _path: &Path,
        ) -> Result<DocumentRecord, ApiError> {
            Ok(DocumentRecord {
                id: 2,
                title: title.into(),
                file_name: "new.txt".into(),
                file_type: "txt".into(),
                upload_date: "2026-08-02T00:00:00Z".into(),
                chunk_count: 0,
            })
        }

        async fn system_info(&self) -> Result<SystemInfo, ApiError> {
            Err(ApiError::Backend {
                status: 503,
                message: "vector store offline".into(),
            })
        }
    }

    #[async_trait]
    impl HistoryApi for StubBackend {
        async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
            Ok(vec![])
        }
    }

    fn controller(documents_fail: bool) -> (ClientController, mpsc::UnboundedReceiver<UiEvent>) {
        let backend = Arc::new(StubBackend { documents_fail });
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = ClientController::new(
            backend.clone() as Arc<dyn QueryApi>,
            backend.clone() as Arc<dyn CatalogApi>,
            backend as Arc<dyn HistoryApi>,
            tx,
        );
        (controller, rx)
    }

    #[tokio::test]
    async fn test_load_documents_emits_loaded() {
        let (mut controller, mut rx) = controller(false);
        controller.handle_command(ClientCommand::LoadDocuments).await;
        assert!(matches!(
            rx.try_recv().unwrap(),
            UiEvent::DocumentsLoaded(docs) if docs.len() == 1
        ));
    }

    #[tokio::test]
    async fn test_load_documents_failure_uses_generic_message() {
        let (mut controller, mut rx) = controller(true);
        controller.handle_command(ClientCommand::LoadDocuments).await;
        assert!(matches!(
            rx.try_recv().unwrap(),
            UiEvent::DocumentsFailed { message } if message == "Failed to load documents"
        ));
    }

    #[tokio::test]
    async fn test_system_info_failure_prefers_server_message() {
        let (mut controller, mut rx) = controller(false);
        controller
            .handle_command(ClientCommand::LoadSystemInfo)
            .await;
        assert!(matches!(
            rx.try_recv().unwrap(),
            UiEvent::SystemInfoFailed { message } if message == "vector store offline"
        ));
    }

    #[tokio::test]
    async fn test_upload_emits_uploaded() {
        let (mut controller, mut rx) = controller(false);
        controller
            .handle_command(ClientCommand::UploadDocument {
                title: "Notes".into(),
                path: PathBuf::from("/tmp/notes.txt"),
            })
            .await;
        assert!(matches!(
            rx.try_recv().unwrap(),
            UiEvent::DocumentUploaded(doc) if doc.title == "Notes"
        ));
    }

    #[tokio::test]
    async fn test_submit_query_emits_session_started() {
        let (mut controller, mut rx) = controller(false);
        controller
            .handle_command(ClientCommand::SubmitQuery("hello".into()))
            .await;
        assert!(matches!(
            rx.recv().await.unwrap(),
            UiEvent::SessionStarted { query, .. } if query == "hello"
        ));
    }
}
