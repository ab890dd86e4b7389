//! Ports: interfaces the application layer depends on.
//!
//! Implementations (adapters) live in the infrastructure and
//! presentation layers.

pub mod backend_api;
pub mod ui_event;
