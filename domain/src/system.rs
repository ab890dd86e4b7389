//! Backend system information

use serde::{Deserialize, Serialize};

/// Snapshot of the backend's store and chunking configuration,
/// as served by `GET /api/system/info/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    #[serde(default)]
    pub document_count: u64,
    #[serde(default)]
    pub collection_name: String,
    #[serde(default)]
    pub persist_directory: String,
    #[serde(default)]
    pub chunk_size: u32,
    #[serde(default)]
    pub chunk_overlap: u32,
    #[serde(default)]
    pub top_k_results: u32,
}
