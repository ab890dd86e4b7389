//! Domain layer for ragview
//!
//! Pure types and state machines, no I/O. The interesting part is
//! [`query::QuerySession`], the per-submission state machine that keeps
//! the two retrieval phases (source passages, generated answer)
//! independently observable.

pub mod core;
pub mod document;
pub mod history;
pub mod query;
pub mod system;
pub mod util;

// Re-export commonly used types
pub use core::error::DomainError;
pub use core::query_text::QueryText;
pub use document::DocumentRecord;
pub use history::HistoryEntry;
pub use query::passage::{AnswerResult, SourcePassage};
pub use query::session::{PhaseStatus, QuerySession, SessionId, SessionPhase};
pub use system::SystemInfo;
pub use util::truncate_str;
