//! Submit Query use case: the query orchestrator.
//!
//! Drives one submission from raw input text to a settled session:
//!
//! 1. Validate (trim; empty input never reaches the network).
//! 2. Allocate the next [`SessionId`]: the single transition point that
//!    supersedes any in-flight session.
//! 3. Resolve the sources call fully, then issue the answer call
//!    (sequential dispatch: passages can appear while the slower
//!    generation step is still running).
//! 4. Emit per-phase [`UiEvent`]s; a failure in one phase never blocks
//!    the other.
//!
//! Stale-response protection: before emitting anything after an await,
//! the session checks it is still the current one; late responses from a
//! superseded session are dropped on arrival. There is no retry and no
//! timeout: a hung request leaves its phase `Loading` until the user
//! submits again.

use crate::ports::backend_api::{ApiError, QueryApi};
use crate::ports::ui_event::UiEvent;
use ragview_domain::{DomainError, QueryText, SessionId, truncate_str};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Generic failure message when the server supplies none
const GENERIC_QUERY_ERROR: &str = "Failed to process query";

/// Handle for one accepted submission
#[derive(Debug)]
pub struct SessionTicket {
    pub id: SessionId,
    /// The background task driving the two phases. Awaiting it is only
    /// needed in tests and the one-shot runner; the TUI just consumes
    /// events.
    pub task: JoinHandle<()>,
}

/// Orchestrates query submissions against the backend.
///
/// One instance serves one query view; all observable output goes
/// through the [`UiEvent`] channel.
pub struct QueryOrchestrator {
    api: Arc<dyn QueryApi>,
    events: mpsc::UnboundedSender<UiEvent>,
    /// Id of the most recent submission; 0 means none yet
    current: Arc<AtomicU64>,
}

impl QueryOrchestrator {
    pub fn new(api: Arc<dyn QueryApi>, events: mpsc::UnboundedSender<UiEvent>) -> Self {
        Self {
            api,
            events,
            current: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Submit raw input text.
    ///
    /// On validation failure, emits [`UiEvent::QueryRejected`] and returns
    /// the error; no network call is made and the previous session (if
    /// any) keeps running untouched.
    ///
    /// On valid input, supersedes any in-flight session and spawns the
    /// two-phase retrieval in the background.
    pub fn submit(&self, raw: &str) -> Result<SessionTicket, DomainError> {
        let query = match QueryText::parse(raw) {
            Ok(q) => q,
            Err(err) => {
                let _ = self.events.send(UiEvent::QueryRejected {
                    message: err.to_string(),
                });
                return Err(err);
            }
        };

        // Single transition point: bumping the counter supersedes any
        // in-flight session before its next emission check.
        let id = SessionId(self.current.fetch_add(1, Ordering::SeqCst) + 1);
        info!("Session {} started: {}", id, truncate_str(query.content(), 80));

        let _ = self.events.send(UiEvent::SessionStarted {
            id,
            query: query.content().to_string(),
        });

        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        let current = Arc::clone(&self.current);
        let task = tokio::spawn(run_session(api, events, current, id, query));

        Ok(SessionTicket { id, task })
    }
}

/// Drive both phases of one session.
async fn run_session(
    api: Arc<dyn QueryApi>,
    events: mpsc::UnboundedSender<UiEvent>,
    current: Arc<AtomicU64>,
    id: SessionId,
    query: QueryText,
) {
    let is_current = || current.load(Ordering::SeqCst) == id.0;

    // Phase 1: sources. Resolved fully before the answer call begins, so
    // passages become visible while generation is still in flight.
    let sources = api.fetch_sources(&query).await;
    if !is_current() {
        debug!("Session {} superseded; dropping stale sources response", id);
        return;
    }
    match sources {
        Ok(passages) => {
            let _ = events.send(UiEvent::SourcesLoaded { id, passages });
        }
        Err(err) => {
            warn!("Session {} sources phase failed: {}", id, err);
            let _ = events.send(UiEvent::SourcesFailed {
                id,
                message: phase_message(&err),
            });
        }
    }

    // Phase 2: answer. Attempted even when sources failed.
    let answer = api.fetch_answer(&query).await;
    if !is_current() {
        debug!("Session {} superseded; dropping stale answer response", id);
        return;
    }
    match answer {
        Ok(result) => {
            let _ = events.send(UiEvent::AnswerLoaded { id, result });
        }
        Err(err) => {
            warn!("Session {} answer phase failed: {}", id, err);
            let _ = events.send(UiEvent::AnswerFailed {
                id,
                message: phase_message(&err),
            });
        }
    }

    let _ = events.send(UiEvent::SessionSettled { id });
}

/// Prefer the server-supplied message; fall back to the generic one
fn phase_message(err: &ApiError) -> String {
    err.server_message()
        .unwrap_or(GENERIC_QUERY_ERROR)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ragview_domain::{AnswerResult, SourcePassage};
    use std::sync::Mutex;
    use tokio::sync::Notify;

    // ==================== Test Mocks ====================

    /// Records call order and serves canned per-phase results
    struct MockApi {
        calls: Mutex<Vec<&'static str>>,
        sources: Mutex<Vec<Result<Vec<SourcePassage>, ApiError>>>,
        answers: Mutex<Vec<Result<AnswerResult, ApiError>>>,
    }

    impl MockApi {
        fn new(
            sources: Vec<Result<Vec<SourcePassage>, ApiError>>,
            answers: Vec<Result<AnswerResult, ApiError>>,
        ) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                sources: Mutex::new(sources),
                answers: Mutex::new(answers),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl QueryApi for MockApi {
        async fn fetch_sources(
            &self,
            _query: &QueryText,
        ) -> Result<Vec<SourcePassage>, ApiError> {
            self.calls.lock().unwrap().push("sources");
            self.sources
                .lock()
                .unwrap()
                .pop()
                .expect("unexpected sources call")
        }

        async fn fetch_answer(&self, _query: &QueryText) -> Result<AnswerResult, ApiError> {
            self.calls.lock().unwrap().push("answer");
            self.answers
                .lock()
                .unwrap()
                .pop()
                .expect("unexpected answer call")
        }
    }

    fn passage(content: &str, score: f64) -> SourcePassage {
        SourcePassage {
            document_title: None,
            content: content.into(),
            score,
        }
    }

    fn orchestrator(
        api: MockApi,
    ) -> (
        QueryOrchestrator,
        Arc<MockApi>,
        mpsc::UnboundedReceiver<UiEvent>,
    ) {
        let api = Arc::new(api);
        let (tx, rx) = mpsc::unbounded_channel();
        let orch = QueryOrchestrator::new(api.clone() as Arc<dyn QueryApi>, tx);
        (orch, api, rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<UiEvent>) -> Vec<UiEvent> {
        let mut events = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            events.push(ev);
        }
        events
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_whitespace_input_rejected_with_no_calls() {
        // Scenario A
        let (orch, api, mut rx) = orchestrator(MockApi::new(vec![], vec![]));

        let err = orch.submit("  ").unwrap_err();
        assert_eq!(err, DomainError::EmptyQuery);
        assert!(api.calls().is_empty());

        let events = drain(&mut rx);
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            UiEvent::QueryRejected { message } if message == "Please enter a query"
        ));
    }

    #[tokio::test]
    async fn test_happy_path_both_phases_loaded() {
        // Scenario B
        let api = MockApi::new(
            vec![Ok(vec![passage("...", 0.91)])],
            vec![Ok(AnswerResult::new("X is ..."))],
        );
        let (orch, api, mut rx) = orchestrator(api);

        let ticket = orch.submit("What is X?").unwrap();
        ticket.task.await.unwrap();

        // Exactly one call per phase, sources strictly first
        assert_eq!(api.calls(), vec!["sources", "answer"]);

        let events = drain(&mut rx);
        assert!(matches!(&events[0], UiEvent::SessionStarted { query, .. } if query == "What is X?"));
        assert!(matches!(
            &events[1],
            UiEvent::SourcesLoaded { passages, .. } if passages.len() == 1 && passages[0].score == 0.91
        ));
        assert!(matches!(
            &events[2],
            UiEvent::AnswerLoaded { result, .. } if result.answer == "X is ..."
        ));
        assert!(matches!(&events[3], UiEvent::SessionSettled { .. }));
    }

    #[tokio::test]
    async fn test_answer_failure_carries_server_message() {
        // Scenario C
        let api = MockApi::new(
            vec![Ok(vec![passage("a", 0.5)])],
            vec![Err(ApiError::Backend {
                status: 500,
                message: "LLM timeout".into(),
            })],
        );
        let (orch, _, mut rx) = orchestrator(api);

        orch.submit("What is X?").unwrap().task.await.unwrap();

        let events = drain(&mut rx);
        assert!(matches!(&events[1], UiEvent::SourcesLoaded { .. }));
        assert!(matches!(
            &events[2],
            UiEvent::AnswerFailed { message, .. } if message == "LLM timeout"
        ));
        assert!(matches!(&events[3], UiEvent::SessionSettled { .. }));
    }

    #[tokio::test]
    async fn test_sources_failure_still_attempts_answer() {
        // Scenario D: transport failure with no body → generic message
        let api = MockApi::new(
            vec![Err(ApiError::Transport("connection refused".into()))],
            vec![Ok(AnswerResult::new("answered anyway"))],
        );
        let (orch, api, mut rx) = orchestrator(api);

        orch.submit("What is X?").unwrap().task.await.unwrap();

        assert_eq!(api.calls(), vec!["sources", "answer"]);
        let events = drain(&mut rx);
        assert!(matches!(
            &events[1],
            UiEvent::SourcesFailed { message, .. } if message == "Failed to process query"
        ));
        assert!(matches!(&events[2], UiEvent::AnswerLoaded { .. }));
    }

    #[tokio::test]
    async fn test_passage_order_preserved() {
        let passages = vec![passage("b", 0.2), passage("a", 0.9), passage("c", 0.5)];
        let api = MockApi::new(
            vec![Ok(passages.clone())],
            vec![Ok(AnswerResult::new("ok"))],
        );
        let (orch, _, mut rx) = orchestrator(api);

        orch.submit("q").unwrap().task.await.unwrap();

        let events = drain(&mut rx);
        match &events[1] {
            UiEvent::SourcesLoaded { passages: got, .. } => assert_eq!(*got, passages),
            other => panic!("expected SourcesLoaded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_superseded_session_events_discarded() {
        // First session's sources call hangs on a gate until the second
        // session has fully settled; its late responses must be dropped.
        struct GatedApi {
            gate: Arc<Notify>,
        }

        #[async_trait]
        impl QueryApi for GatedApi {
            async fn fetch_sources(
                &self,
                query: &QueryText,
            ) -> Result<Vec<SourcePassage>, ApiError> {
                if query.content() == "first query" {
                    self.gate.notified().await;
                    Ok(vec![SourcePassage {
                        document_title: None,
                        content: "first".into(),
                        score: 0.1,
                    }])
                } else {
                    Ok(vec![SourcePassage {
                        document_title: None,
                        content: "second".into(),
                        score: 0.9,
                    }])
                }
            }

            async fn fetch_answer(&self, query: &QueryText) -> Result<AnswerResult, ApiError> {
                Ok(AnswerResult::new(format!("answer to {}", query.content())))
            }
        }

        let gate = Arc::new(Notify::new());
        let api: Arc<dyn QueryApi> = Arc::new(GatedApi { gate: gate.clone() });
        let (tx, mut rx) = mpsc::unbounded_channel();
        let orch = QueryOrchestrator::new(api, tx);

        let first = orch.submit("first query").unwrap();
        let second = orch.submit("second query").unwrap();
        assert!(second.id > first.id);

        // Session 2 runs to completion, then session 1's stale response
        // finally arrives
        second.task.await.unwrap();
        gate.notify_one();
        first.task.await.unwrap();

        let events = drain(&mut rx);
        // Two SessionStarted, then only session-2 phase events
        for ev in &events {
            if let Some(id) = ev.session_id() {
                if !matches!(ev, UiEvent::SessionStarted { .. }) {
                    assert_eq!(id, second.id, "stale event leaked: {:?}", ev);
                }
            }
        }
        assert!(events.iter().any(|ev| matches!(
            ev,
            UiEvent::SourcesLoaded { passages, .. } if passages[0].content == "second"
        )));
        assert!(
            events
                .iter()
                .any(|ev| matches!(ev, UiEvent::SessionSettled { id } if *id == second.id))
        );
    }

    #[tokio::test]
    async fn test_session_ids_increase_monotonically() {
        let api = MockApi::new(
            vec![Ok(vec![]), Ok(vec![])],
            vec![Ok(AnswerResult::new("a")), Ok(AnswerResult::new("b"))],
        );
        let (orch, _, _rx) = orchestrator(api);

        let t1 = orch.submit("one").unwrap();
        let t2 = orch.submit("two").unwrap();
        assert_eq!(t1.id, SessionId(1));
        assert_eq!(t2.id, SessionId(2));
        t1.task.await.unwrap();
        t2.task.await.unwrap();
    }
}
