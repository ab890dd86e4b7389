//! Infrastructure layer for ragview
//!
//! Adapters for the application ports: the reqwest HTTP backend client
//! and figment-based configuration loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{ConfigLoader, FileBackendConfig, FileConfig, FileTuiConfig};
pub use http::HttpBackend;
