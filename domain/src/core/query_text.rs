//! Query text value object

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A validated natural-language query (Value Object)
///
/// Construction trims surrounding whitespace and rejects empty input, so
/// any `QueryText` that exists is safe to put on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryText {
    content: String,
}

impl QueryText {
    /// Parse raw user input into a query.
    ///
    /// Trims whitespace; empty or whitespace-only input is rejected with
    /// [`DomainError::EmptyQuery`] before any network call can happen.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyQuery);
        }
        Ok(Self { content: trimmed })
    }

    /// Get the query content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for QueryText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let q = QueryText::parse("What is Rust?").unwrap();
        assert_eq!(q.content(), "What is Rust?");
    }

    #[test]
    fn test_parse_trims() {
        let q = QueryText::parse("  What is X?  \n").unwrap();
        assert_eq!(q.content(), "What is X?");
    }

    #[test]
    fn test_parse_empty_rejected() {
        assert_eq!(QueryText::parse(""), Err(DomainError::EmptyQuery));
        assert_eq!(QueryText::parse("   "), Err(DomainError::EmptyQuery));
        assert_eq!(QueryText::parse("\t\n"), Err(DomainError::EmptyQuery));
    }
}
