//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Every variant ends up as the `error` side of a `ToolResult`; none of them
/// escape a tool call.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level validation error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Invalid or missing tool input
    #[error("{0}")]
    Validation(String),

    /// Missing or placeholder configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Credentials were fetched but hold no usable token
    #[error("{0}")]
    Credential(String),

    /// The credential source could not be reached or refused the request
    #[error("{0}")]
    Authentication(String),

    /// The Messaging API rejected the request or could not be reached
    #[error("{0}")]
    ExternalService(String),

    /// Entity not found
    #[error("{0} not found")]
    NotFound(String),
}

impl ApplicationError {
    /// Shorthand for a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
