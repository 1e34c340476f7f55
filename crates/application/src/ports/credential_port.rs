//! Port for access token retrieval

use async_trait::async_trait;
use secrecy::SecretString;

use crate::error::ApplicationError;

/// Source of Messaging API access tokens
///
/// Implementations fetch a fresh token on every call; nothing is cached.
#[async_trait]
pub trait CredentialPort: Send + Sync {
    /// Resolve the current access token
    ///
    /// Fails with `Configuration` when the source is not set up,
    /// `Authentication` when it cannot be reached and `Credential` when it
    /// returns no token.
    async fn access_token(&self) -> Result<SecretString, ApplicationError>;
}
