//! Nango connection client
//!
//! Reads a single connection from the Nango API, asking Nango to refresh the
//! provider token if needed.

use std::{fmt, time::Duration};

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::{error::NangoError, token::extract_access_token};

/// Nango connection settings
#[derive(Clone)]
pub struct NangoConfig {
    /// Nango API base URL (e.g., <https://api.nango.dev>)
    pub base_url: String,
    /// Connection ID of the WhatsApp Business connection
    pub connection_id: String,
    /// Integration (provider config key), usually `whatsapp-business`
    pub integration_id: String,
    /// Nango secret key
    pub secret_key: SecretString,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl fmt::Debug for NangoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NangoConfig")
            .field("base_url", &self.base_url)
            .field("connection_id", &self.connection_id)
            .field("integration_id", &self.integration_id)
            .field("secret_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// HTTP client for the Nango connection endpoint
#[derive(Debug)]
pub struct NangoClient {
    client: Client,
    config: NangoConfig,
}

impl NangoClient {
    /// Create a new Nango client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: NangoConfig) -> Result<Self, NangoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| NangoError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn connection_url(&self) -> String {
        format!(
            "{}/connection/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.connection_id
        )
    }

    /// Fetch the raw connection document
    #[instrument(skip(self), fields(connection_id = %self.config.connection_id))]
    pub async fn fetch_connection(&self) -> Result<Value, NangoError> {
        let response = self
            .client
            .get(self.connection_url())
            .bearer_auth(self.config.secret_key.expose_secret())
            .query(&[
                ("provider_config_key", self.config.integration_id.as_str()),
                ("refresh_token", "true"),
            ])
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "Nango API responded");

        if !status.is_success() {
            warn!(status = status.as_u16(), "Nango rejected the credentials request");
            return Err(NangoError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| NangoError::InvalidResponse(e.to_string()))
    }

    /// Fetch the connection and extract the provider access token
    pub async fn access_token(&self) -> Result<SecretString, NangoError> {
        let document = self.fetch_connection().await?;
        let token = extract_access_token(&document).ok_or(NangoError::MissingToken)?;
        debug!("Retrieved access token from Nango");
        Ok(SecretString::from(token.to_string()))
    }
}
