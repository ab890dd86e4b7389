//! TUI presenter - applies application events to TUI state
//!
//! Adapter between the application layer (which emits [`UiEvent`]s) and
//! the TUI layer (which renders [`TuiState`]). Query phase events carry
//! the session id they belong to; events for any session other than the
//! one currently displayed are discarded so a slow earlier session can
//! never overwrite the panes of a newer one.

use ragview_application::UiEvent;
use ragview_domain::{PhaseStatus, QuerySession, QueryText};
use tracing::debug;

use super::state::TuiState;

pub struct TuiPresenter;

impl TuiPresenter {
    /// Apply a single event to the state
    pub fn apply(state: &mut TuiState, event: UiEvent) {
        // Drop phase events from sessions we are no longer showing
        if let Some(id) = event.session_id()
            && !matches!(event, UiEvent::SessionStarted { .. })
            && state.query.session.as_ref().map(|s| s.id()) != Some(id)
        {
            debug!("Discarding event for superseded session {}", id);
            return;
        }

        match event {
            UiEvent::QueryRejected { message } => {
                state.query.validation_error = Some(message);
            }
            UiEvent::SessionStarted { id, query } => {
                // The orchestrator only starts sessions for validated text
                let Ok(query) = QueryText::parse(&query) else {
                    return;
                };
                state.query.validation_error = None;
                state.query.answer_scroll = 0;
                state.query.session = Some(QuerySession::start(id, query));
            }
            UiEvent::SourcesLoaded { passages, .. } => {
                if let Some(session) = &mut state.query.session {
                    session.sources_loaded(passages);
                }
            }
            UiEvent::SourcesFailed { message, .. } => {
                if let Some(session) = &mut state.query.session {
                    session.sources_failed(message);
                }
            }
            UiEvent::AnswerLoaded { result, .. } => {
                if let Some(session) = &mut state.query.session {
                    session.answer_loaded(result);
                }
            }
            UiEvent::AnswerFailed { message, .. } => {
                if let Some(session) = &mut state.query.session {
                    session.answer_failed(message);
                }
            }
            UiEvent::SessionSettled { .. } => {
                // Phase transitions already settled the session
            }

            UiEvent::DocumentsLoaded(documents) => {
                state.documents_selected = 0;
                state.documents = PhaseStatus::Loaded(documents);
            }
            UiEvent::DocumentsFailed { message } => {
                state.documents = PhaseStatus::Failed(message);
            }
            UiEvent::DocumentUploaded(record) => {
                state.set_flash(format!("Uploaded '{}'", record.title));
            }
            UiEvent::UploadFailed { message } => {
                state.set_flash(message);
            }

            UiEvent::HistoryLoaded(entries) => {
                state.history_selected = 0;
                state.history = PhaseStatus::Loaded(entries);
            }
            UiEvent::HistoryFailed { message } => {
                state.history = PhaseStatus::Failed(message);
            }

            UiEvent::SystemInfoLoaded(info) => {
                state.system = PhaseStatus::Loaded(info);
            }
            UiEvent::SystemInfoFailed { message } => {
                state.system = PhaseStatus::Failed(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragview_domain::{AnswerResult, DocumentRecord, SessionId, SourcePassage};

    fn started(state: &mut TuiState, id: u64) {
        TuiPresenter::apply(
            state,
            UiEvent::SessionStarted {
                id: SessionId(id),
                query: format!("query {id}"),
            },
        );
    }

    fn passage(content: &str) -> SourcePassage {
        SourcePassage {
            document_title: Some("guide".into()),
            content: content.into(),
            score: 0.9,
        }
    }

    #[test]
    fn test_rejected_sets_validation_error() {
        let mut state = TuiState::new();
        TuiPresenter::apply(
            &mut state,
            UiEvent::QueryRejected {
                message: "Please enter a query".into(),
            },
        );
        assert_eq!(
            state.query.validation_error.as_deref(),
            Some("Please enter a query")
        );
        assert!(state.query.session.is_none());
    }

    #[test]
    fn test_session_start_clears_validation_error() {
        let mut state = TuiState::new();
        state.query.validation_error = Some("Please enter a query".into());
        started(&mut state, 1);
        assert!(state.query.validation_error.is_none());
        let session = state.query.session.as_ref().unwrap();
        assert_eq!(session.id(), SessionId(1));
        assert!(session.sources().is_loading());
        assert!(session.answer().is_loading());
    }

    #[test]
    fn test_phase_events_update_session() {
        let mut state = TuiState::new();
        started(&mut state, 1);

        TuiPresenter::apply(
            &mut state,
            UiEvent::SourcesLoaded {
                id: SessionId(1),
                passages: vec![passage("rust is fast")],
            },
        );
        TuiPresenter::apply(
            &mut state,
            UiEvent::AnswerLoaded {
                id: SessionId(1),
                result: AnswerResult::new("Rust is a systems language."),
            },
        );

        let session = state.query.session.as_ref().unwrap();
        assert!(matches!(session.sources(), PhaseStatus::Loaded(p) if p.len() == 1));
        assert!(session.is_settled());
    }

    #[test]
    fn test_stale_session_events_discarded() {
        let mut state = TuiState::new();
        started(&mut state, 1);
        started(&mut state, 2);

        // Late events from session 1 must not touch session 2's panes
        TuiPresenter::apply(
            &mut state,
            UiEvent::SourcesFailed {
                id: SessionId(1),
                message: "Failed to process query".into(),
            },
        );
        TuiPresenter::apply(
            &mut state,
            UiEvent::AnswerLoaded {
                id: SessionId(1),
                result: AnswerResult::new("old answer"),
            },
        );

        let session = state.query.session.as_ref().unwrap();
        assert_eq!(session.id(), SessionId(2));
        assert!(session.sources().is_loading());
        assert!(session.answer().is_loading());
    }

    #[test]
    fn test_partial_failure_keeps_other_phase() {
        let mut state = TuiState::new();
        started(&mut state, 1);

        TuiPresenter::apply(
            &mut state,
            UiEvent::SourcesLoaded {
                id: SessionId(1),
                passages: vec![passage("a")],
            },
        );
        TuiPresenter::apply(
            &mut state,
            UiEvent::AnswerFailed {
                id: SessionId(1),
                message: "LLM timeout".into(),
            },
        );

        let session = state.query.session.as_ref().unwrap();
        assert!(matches!(session.sources(), PhaseStatus::Loaded(_)));
        assert_eq!(session.answer().error(), Some("LLM timeout"));
    }

    #[test]
    fn test_documents_loaded_resets_selection() {
        let mut state = TuiState::new();
        state.documents_selected = 7;
        TuiPresenter::apply(&mut state, UiEvent::DocumentsLoaded(vec![]));
        assert_eq!(state.documents_selected, 0);
        assert!(matches!(&state.documents, PhaseStatus::Loaded(d) if d.is_empty()));
    }

    #[test]
    fn test_upload_result_flashes() {
        let mut state = TuiState::new();
        TuiPresenter::apply(
            &mut state,
            UiEvent::DocumentUploaded(DocumentRecord {
                id: 1,
                title: "manual".into(),
                file_name: "manual.pdf".into(),
                file_type: "pdf".into(),
                upload_date: "2026-01-01".into(),
                chunk_count: 12,
            }),
        );
        let (msg, _) = state.flash_message.as_ref().unwrap();
        assert!(msg.contains("manual"));
    }

    #[test]
    fn test_system_info_failure() {
        let mut state = TuiState::new();
        TuiPresenter::apply(
            &mut state,
            UiEvent::SystemInfoFailed {
                message: "Failed to load system information".into(),
            },
        );
        assert!(matches!(&state.system, PhaseStatus::Failed(_)));
    }
}
