//! Error types for the documentation crate.
//!
//! This module defines errors that can occur while building operations,
//! introspecting validation rules and serializing the Swagger document.

use thiserror::Error;

/// Errors that can occur during documentation generation.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Failed to serialize the Swagger document to JSON.
    #[error("Failed to serialize Swagger document: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A validation rule declaration could not be interpreted.
    #[error("Invalid rule '{rule}' for field '{field}': {reason}")]
    InvalidRule {
        /// The field the rule was declared on.
        field: String,
        /// The offending rule.
        rule: String,
        /// Why the rule was rejected.
        reason: String,
    },

    /// An operation could not be placed in the document.
    #[error("Invalid operation '{operation_id}': {reason}")]
    InvalidOperation {
        /// Operation identifier, or the route URI when it has none.
        operation_id: String,
        /// The reason the operation is invalid.
        reason: String,
    },
}

impl DocsError {
    /// Create a new invalid rule error.
    pub fn invalid_rule(
        field: impl Into<String>,
        rule: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidRule {
            field: field.into(),
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for documentation operations.
pub type DocsResult<T> = Result<T, DocsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_error() {
        let err: DocsError = serde_json::from_str::<String>("invalid")
            .unwrap_err()
            .into();
        assert!(matches!(err, DocsError::SerializationError(_)));
        assert!(err.to_string().contains("serialize"));
    }

    #[test]
    fn test_invalid_rule_error() {
        let err = DocsError::invalid_rule("age", "min:abc", "expected a number");
        assert!(err.to_string().contains("age"));
        assert!(err.to_string().contains("min:abc"));
        assert!(err.to_string().contains("expected a number"));
    }

    #[test]
    fn test_invalid_operation_error() {
        let err = DocsError::InvalidOperation {
            operation_id: "showUser".to_string(),
            reason: "TRACE cannot be documented".to_string(),
        };
        assert!(err.to_string().contains("showUser"));
        assert!(err.to_string().contains("TRACE"));
    }
}
