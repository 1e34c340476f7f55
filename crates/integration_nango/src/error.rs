//! Nango error types

use thiserror::Error;

/// Errors that can occur while resolving credentials through Nango
#[derive(Debug, Error)]
pub enum NangoError {
    /// Required connection settings are missing
    #[error("Missing required Nango environment variables: {}", .0.join(", "))]
    MissingConfiguration(Vec<&'static str>),

    /// HTTP client could not be built
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request never produced a response (connect failure, timeout, ...)
    #[error("Failed to get credentials from Nango: {0}")]
    Request(#[from] reqwest::Error),

    /// Nango answered with a non-success status
    #[error("Failed to get credentials from Nango: HTTP {status}")]
    Status { status: u16 },

    /// The connection document is not valid JSON
    #[error("Failed to get credentials from Nango: invalid response body: {0}")]
    InvalidResponse(String),

    /// None of the known token locations held a value
    #[error("API key is missing from Nango credentials")]
    MissingToken,
}

impl NangoError {
    /// Whether the failure happened while talking to Nango (as opposed to
    /// local configuration or the shape of the returned document)
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Self::Request(_) | Self::Status { .. } | Self::InvalidResponse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_configuration_lists_every_variable() {
        let err = NangoError::MissingConfiguration(vec!["NANGO_CONNECTION_ID", "NANGO_SECRET_KEY"]);
        assert_eq!(
            err.to_string(),
            "Missing required Nango environment variables: NANGO_CONNECTION_ID, NANGO_SECRET_KEY"
        );
    }

    #[test]
    fn status_error_is_auth_failure() {
        assert!(NangoError::Status { status: 401 }.is_auth_failure());
        assert!(!NangoError::MissingToken.is_auth_failure());
        assert!(!NangoError::MissingConfiguration(vec![]).is_auth_failure());
    }

    #[test]
    fn missing_token_message() {
        assert_eq!(
            NangoError::MissingToken.to_string(),
            "API key is missing from Nango credentials"
        );
    }
}
