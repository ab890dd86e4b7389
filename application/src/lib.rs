//! Application layer for ragview
//!
//! Use cases and the ports they depend on. The core use case is
//! [`use_cases::submit_query::QueryOrchestrator`], which drives one query
//! submission through its two retrieval phases. Adapters for the ports
//! live in the infrastructure layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::backend_api::{ApiError, CatalogApi, HistoryApi, QueryApi};
pub use ports::ui_event::UiEvent;
pub use use_cases::controller::{ClientCommand, ClientController};
pub use use_cases::submit_query::{QueryOrchestrator, SessionTicket};
