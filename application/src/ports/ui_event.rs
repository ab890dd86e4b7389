//! UI events emitted by the use cases for the presentation layer.
//!
//! These form the output port from the application layer: the TUI
//! presenter and the one-shot console runner both consume this stream and
//! never see raw errors, only status messages.
//!
//! Query events carry the [`SessionId`] they belong to so receivers can
//! drop anything from a superseded session.

use ragview_domain::{
    AnswerResult, DocumentRecord, HistoryEntry, SessionId, SourcePassage, SystemInfo,
};

/// Events emitted for the presentation layer to render
#[derive(Debug, Clone)]
pub enum UiEvent {
    // === Query lifecycle ===
    /// Submitted text failed validation; no network call was made and any
    /// previous session is left untouched
    QueryRejected { message: String },
    /// A fresh session superseded whatever came before it
    SessionStarted { id: SessionId, query: String },
    /// Sources phase resolved successfully (passages in arrival order)
    SourcesLoaded {
        id: SessionId,
        passages: Vec<SourcePassage>,
    },
    /// Sources phase failed; the answer phase is still attempted
    SourcesFailed { id: SessionId, message: String },
    /// Answer phase resolved successfully
    AnswerLoaded { id: SessionId, result: AnswerResult },
    /// Answer phase failed
    AnswerFailed { id: SessionId, message: String },
    /// Both phases have resolved
    SessionSettled { id: SessionId },

    // === Document catalog ===
    DocumentsLoaded(Vec<DocumentRecord>),
    DocumentsFailed { message: String },
    DocumentUploaded(DocumentRecord),
    UploadFailed { message: String },

    // === Query history ===
    HistoryLoaded(Vec<HistoryEntry>),
    HistoryFailed { message: String },

    // === System info ===
    SystemInfoLoaded(SystemInfo),
    SystemInfoFailed { message: String },
}

impl UiEvent {
    /// The session a query-lifecycle event belongs to, if any
    pub fn session_id(&self) -> Option<SessionId> {
        match self {
            UiEvent::SessionStarted { id, .. }
            | UiEvent::SourcesLoaded { id, .. }
            | UiEvent::SourcesFailed { id, .. }
            | UiEvent::AnswerLoaded { id, .. }
            | UiEvent::AnswerFailed { id, .. }
            | UiEvent::SessionSettled { id } => Some(*id),
            _ => None,
        }
    }
}
