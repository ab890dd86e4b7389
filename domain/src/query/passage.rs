//! Source passages and generated answers

use serde::{Deserialize, Serialize};

/// One retrieved passage backing an answer.
///
/// Passages arrive in backend relevance order and are kept exactly as
/// received, with no client-side re-sorting, dedup, or filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcePassage {
    /// Title of the document the passage came from, if the backend knows it
    #[serde(default)]
    pub document_title: Option<String>,
    /// The passage text
    pub content: String,
    /// Relevance score, typically in [0, 1] but not bounded
    pub score: f64,
}

impl SourcePassage {
    /// Title to display; the backend may omit one
    pub fn display_title(&self) -> &str {
        self.document_title.as_deref().unwrap_or("Document")
    }

    /// Score formatted for display (2 decimals)
    pub fn display_score(&self) -> String {
        format!("{:.2}", self.score)
    }
}

/// Generated answer for a query. The text is markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub answer: String,
}

impl AnswerResult {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}
