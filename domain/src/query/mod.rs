//! Query retrieval domain: passages, answers, and the per-submission
//! session state machine.

pub mod passage;
pub mod session;
