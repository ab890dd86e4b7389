//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file
//! and are deserialized directly by figment.

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend connection settings
    pub backend: FileBackendConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
}

/// `[backend]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL of the document QA service
    pub base_url: String,
    /// Optional whole-request timeout in seconds. Unset by default: a
    /// hung request leaves its phase loading rather than failing early.
    pub timeout_secs: Option<u64>,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: None,
        }
    }
}

/// `[tui]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Maximum height for the query input area in text lines
    pub max_input_height: u16,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            max_input_height: 5,
        }
    }
}
