//! Query session state machine: one submit-to-settle lifecycle.
//!
//! A session tracks two independent retrieval phases: source passages and
//! the generated answer. Each phase carries its own [`PhaseStatus`] so the
//! presentation layer can show partial progress (sources loaded, answer
//! still generating, one phase failed while the other succeeded).
//!
//! The per-phase booleans of a naive implementation (`loading`,
//! `loading_sources`, `loading_response`) are collapsed into tagged
//! variants: "loaded and loading at the same time" is unrepresentable.

use serde::{Deserialize, Serialize};

use super::passage::{AnswerResult, SourcePassage};
use crate::core::query_text::QueryText;

/// Monotonically increasing identifier for one submitted query.
///
/// Responses arriving for a session other than the current one are stale
/// and must be discarded, never applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Overall lifecycle of a session: `Idle → InFlight → Settled`.
///
/// `Settled` is terminal; a new submission creates a new session rather
/// than transitioning an old one back to `InFlight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Idle,
    InFlight,
    Settled,
}

/// Status of one retrieval phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PhaseStatus<T> {
    NotStarted,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> PhaseStatus<T> {
    /// Whether this phase has reached a terminal state (loaded or failed)
    pub fn is_terminal(&self) -> bool {
        matches!(self, PhaseStatus::Loaded(_) | PhaseStatus::Failed(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PhaseStatus::Loading)
    }

    /// Error message if this phase failed
    pub fn error(&self) -> Option<&str> {
        match self {
            PhaseStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Full state of one submitted query (Entity).
///
/// Created fresh on each submit, replacing the previous session wholesale;
/// results are never merged across submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySession {
    id: SessionId,
    query: QueryText,
    phase: SessionPhase,
    sources: PhaseStatus<Vec<SourcePassage>>,
    answer: PhaseStatus<AnswerResult>,
}

impl QuerySession {
    /// Start a session for a validated query. Both phases enter `Loading`
    /// immediately: this is the single state transition point.
    pub fn start(id: SessionId, query: QueryText) -> Self {
        Self {
            id,
            query,
            phase: SessionPhase::InFlight,
            sources: PhaseStatus::Loading,
            answer: PhaseStatus::Loading,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn query(&self) -> &QueryText {
        &self.query
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn sources(&self) -> &PhaseStatus<Vec<SourcePassage>> {
        &self.sources
    }

    pub fn answer(&self) -> &PhaseStatus<AnswerResult> {
        &self.answer
    }

    /// Record the sources phase result. Passages are stored verbatim in
    /// arrival order.
    pub fn sources_loaded(&mut self, passages: Vec<SourcePassage>) {
        self.sources = PhaseStatus::Loaded(passages);
        self.maybe_settle();
    }

    pub fn sources_failed(&mut self, message: impl Into<String>) {
        self.sources = PhaseStatus::Failed(message.into());
        self.maybe_settle();
    }

    pub fn answer_loaded(&mut self, result: AnswerResult) {
        self.answer = PhaseStatus::Loaded(result);
        self.maybe_settle();
    }

    pub fn answer_failed(&mut self, message: impl Into<String>) {
        self.answer = PhaseStatus::Failed(message.into());
        self.maybe_settle();
    }

    /// Whether both phases have resolved
    pub fn is_settled(&self) -> bool {
        self.phase == SessionPhase::Settled
    }

    fn maybe_settle(&mut self) {
        if self.sources.is_terminal() && self.answer.is_terminal() {
            self.phase = SessionPhase::Settled;
        }
    }
}
