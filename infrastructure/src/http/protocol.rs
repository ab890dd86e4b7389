//! Wire types for the backend REST API.
//!
//! Request and response bodies exactly as the backend serializes them.
//! Domain types are produced at the edge; nothing past this module sees
//! raw JSON.

use ragview_domain::{AnswerResult, SourcePassage};
use serde::{Deserialize, Serialize};

/// Body for both `POST /api/query/sources/` and `POST /api/query/`
#[derive(Debug, Clone, Serialize)]
pub struct QueryBody<'a> {
    pub query: &'a str,
}

/// One element of the sources response
#[derive(Debug, Clone, Deserialize)]
pub struct SourcePassageDto {
    #[serde(default)]
    pub document_title: Option<String>,
    pub content: String,
    pub score: f64,
}

impl From<SourcePassageDto> for SourcePassage {
    fn from(dto: SourcePassageDto) -> Self {
        SourcePassage {
            document_title: dto.document_title,
            content: dto.content,
            score: dto.score,
        }
    }
}

/// Response of `POST /api/query/`
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerDto {
    pub answer: String,
}

impl From<AnswerDto> for AnswerResult {
    fn from(dto: AnswerDto) -> Self {
        AnswerResult::new(dto.answer)
    }
}

/// Optional structured body of a non-2xx response
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_body_shape() {
        let body = serde_json::to_value(QueryBody { query: "what is x" }).unwrap();
        assert_eq!(body, serde_json::json!({"query": "what is x"}));
    }

    #[test]
    fn test_passage_list_parses() {
        let json = r#"[
            {"document_title": "Manual", "content": "a", "score": 0.91},
            {"content": "b", "score": 0.5}
        ]"#;
        let dtos: Vec<SourcePassageDto> = serde_json::from_str(json).unwrap();
        let passages: Vec<SourcePassage> = dtos.into_iter().map(Into::into).collect();
        assert_eq!(passages.len(), 2);
        assert_eq!(passages[0].document_title.as_deref(), Some("Manual"));
        assert_eq!(passages[1].display_title(), "Document");
    }

    #[test]
    fn test_answer_parses() {
        let dto: AnswerDto = serde_json::from_str(r#"{"answer": "X is ..."}"#).unwrap();
        let result: AnswerResult = dto.into();
        assert_eq!(result.answer, "X is ...");
    }

    #[test]
    fn test_error_body_parses() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "LLM timeout"}"#).unwrap();
        assert_eq!(body.error, "LLM timeout");
    }
}
