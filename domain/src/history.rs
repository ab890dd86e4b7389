//! Query history records

use serde::{Deserialize, Serialize};

use crate::document::DocumentRecord;

/// One past query with its stored response.
///
/// The response is shown from `response_text` as stored; history never
/// re-runs the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub query_text: String,
    pub response_text: String,
    pub timestamp: String,
    #[serde(default)]
    pub documents_retrieved: Vec<DocumentRecord>,
}

impl HistoryEntry {
    /// Short form of the query for table rows
    pub fn query_preview(&self, max: usize) -> String {
        crate::util::truncate_str(&self.query_text, max)
    }
}
