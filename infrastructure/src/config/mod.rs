//! Configuration loading

mod file_config;
mod loader;

pub use file_config::{FileBackendConfig, FileConfig, FileTuiConfig};
pub use loader::ConfigLoader;
