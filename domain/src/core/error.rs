//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please enter a query")]
    EmptyQuery,

    #[error("Invalid session transition: {0}")]
    InvalidTransition(String),
}

impl DomainError {
    /// Check if this error is a local validation error (never reaches the network)
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::EmptyQuery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_display() {
        // This exact text is what the query page shows inline
        assert_eq!(DomainError::EmptyQuery.to_string(), "Please enter a query");
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::EmptyQuery.is_validation());
        assert!(!DomainError::InvalidTransition("x".into()).is_validation());
    }
}
