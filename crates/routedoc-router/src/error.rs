//! Route definition errors.

use thiserror::Error;

/// Errors raised while building route definitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// The action string could not be parsed.
    #[error("invalid route action '{action}': {reason}")]
    InvalidAction {
        /// The offending action string.
        action: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A route was registered without any documentable method.
    #[error("route '{uri}' has no documentable HTTP method")]
    NoMethods {
        /// URI of the route.
        uri: String,
    },
}

impl RouteError {
    /// Create a new invalid action error.
    pub fn invalid_action(action: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAction {
            action: action.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for route operations.
pub type RouteResult<T> = Result<T, RouteError>;
