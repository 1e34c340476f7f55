//! WhatsApp Cloud API client
//!
//! Uses the Meta Graph API to send messages and to read and create message
//! templates. Responses are normalized the same way for every endpoint: a
//! `200` body is returned as-is, anything else becomes [`WhatsAppError::Api`]
//! carrying `error.message` (or the raw body when there is none).

use std::{fmt, time::Duration};

use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// WhatsApp API errors
#[derive(Debug, Error)]
pub enum WhatsAppError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// Non-200 response; the message is passed through verbatim
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    InvalidResponse(String),

    #[error("Missing configuration: {0}")]
    Configuration(String),
}

/// WhatsApp client configuration
#[derive(Clone)]
pub struct WhatsAppClientConfig {
    /// Meta Graph API access token
    pub access_token: SecretString,
    /// Graph API host (default: <https://graph.facebook.com>)
    pub base_url: String,
    /// API version (default: v21.0)
    pub api_version: String,
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
}

impl WhatsAppClientConfig {
    /// Default settings around the given token
    pub fn with_token(access_token: SecretString) -> Self {
        Self {
            access_token,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for WhatsAppClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WhatsAppClientConfig")
            .field("access_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

pub const DEFAULT_BASE_URL: &str = "https://graph.facebook.com";
pub const DEFAULT_API_VERSION: &str = "v21.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// WhatsApp client for the Meta Graph API
#[derive(Debug, Clone)]
pub struct WhatsAppClient {
    client: Client,
    config: WhatsAppClientConfig,
}

impl WhatsAppClient {
    /// Create a new WhatsApp client
    pub fn new(config: WhatsAppClientConfig) -> Result<Self, WhatsAppError> {
        if config.access_token.expose_secret().is_empty() {
            return Err(WhatsAppError::Configuration(
                "access_token is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WhatsAppError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, node_id: &str, edge: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.api_version,
            node_id,
            edge
        )
    }

    /// URL of the messages edge for a business phone number
    pub fn messages_url(&self, phone_number_id: &str) -> String {
        self.endpoint(phone_number_id, "messages")
    }

    /// URL of the templates edge for a business account
    pub fn templates_url(&self, business_account_id: &str) -> String {
        self.endpoint(business_account_id, "message_templates")
    }

    /// Send a message payload from the given business phone number
    #[instrument(skip(self, payload))]
    pub async fn send_message<T: Serialize + ?Sized + Sync>(
        &self,
        phone_number_id: &str,
        payload: &T,
    ) -> Result<Value, WhatsAppError> {
        let request = self
            .client
            .post(self.messages_url(phone_number_id))
            .json(payload);
        let body = self.execute(request).await?;
        debug!("Message sent successfully");
        Ok(body)
    }

    /// Fetch all templates of a business account
    #[instrument(skip(self))]
    pub async fn list_templates(&self, business_account_id: &str) -> Result<Value, WhatsAppError> {
        let request = self.client.get(self.templates_url(business_account_id));
        self.execute(request).await
    }

    /// Submit a new template for review
    #[instrument(skip(self, payload))]
    pub async fn create_template<T: Serialize + ?Sized + Sync>(
        &self,
        business_account_id: &str,
        payload: &T,
    ) -> Result<Value, WhatsAppError> {
        let request = self
            .client
            .post(self.templates_url(business_account_id))
            .json(payload);
        let body = self.execute(request).await?;
        debug!("Template created successfully");
        Ok(body)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Value, WhatsAppError> {
        let response = request
            .bearer_auth(self.config.access_token.expose_secret())
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status == StatusCode::OK {
            return serde_json::from_str(&text)
                .map_err(|e| WhatsAppError::InvalidResponse(e.to_string()));
        }

        let message = api_error_message(&text).unwrap_or(text);
        warn!(status = status.as_u16(), error = %message, "WhatsApp API request failed");
        Err(WhatsAppError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// `error.message` from a Graph API error body, if present
fn api_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .pointer("/error/message")
        .and_then(Value::as_str)
        .map(str::to_string)
}
