//! Document catalog records

use serde::{Deserialize, Serialize};

/// A document known to the backend's vector store.
///
/// Field names match the backend's JSON serialization; `upload_date` is
/// kept as the ISO-8601 string the server sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: i64,
    pub title: String,
    pub file_name: String,
    pub file_type: String,
    pub upload_date: String,
    #[serde(default)]
    pub chunk_count: u32,
}
