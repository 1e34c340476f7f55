//! Nango credential adapter
//!
//! Implements `CredentialPort` by reading the connection from Nango on every
//! call.

use application::{error::ApplicationError, ports::CredentialPort};
use async_trait::async_trait;
use integration_nango::{NangoClient, NangoError};
use secrecy::SecretString;
use tracing::{debug, instrument, warn};

use crate::config::NangoSettings;

/// Adapter that implements `CredentialPort` using `NangoClient`
#[derive(Debug, Clone)]
pub struct NangoCredentialAdapter {
    settings: NangoSettings,
}

impl NangoCredentialAdapter {
    pub const fn new(settings: NangoSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl CredentialPort for NangoCredentialAdapter {
    #[instrument(skip(self))]
    async fn access_token(&self) -> Result<SecretString, ApplicationError> {
        let config = self.settings.client_config().map_err(map_nango_error)?;
        let client = NangoClient::new(config).map_err(map_nango_error)?;

        let token = client.access_token().await.map_err(|e| {
            warn!(error = %e, "Credential lookup failed");
            map_nango_error(e)
        })?;
        debug!("Access token resolved");
        Ok(token)
    }
}

/// Map Nango errors to application errors
fn map_nango_error(err: NangoError) -> ApplicationError {
    match err {
        NangoError::Configuration(message) => ApplicationError::Configuration(message),
        e if e.is_auth_failure() => ApplicationError::Authentication(e.to_string()),
        e @ NangoError::MissingToken => ApplicationError::Credential(e.to_string()),
        e => ApplicationError::Configuration(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path, query_param},
    };

    use super::*;

    fn settings(base_url: &str) -> NangoSettings {
        NangoSettings {
            base_url: Some(base_url.to_string()),
            connection_id: Some("conn-1".into()),
            integration_id: Some("whatsapp-business".into()),
            secret_key: Some(SecretString::from("nango-secret")),
            timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn resolves_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/connection/conn-1"))
            .and(query_param("provider_config_key", "whatsapp-business"))
            .and(header("Authorization", "Bearer nango-secret"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"credentials": {"apiKey": "wa-token"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let adapter = NangoCredentialAdapter::new(settings(&server.uri()));
        let token = adapter.access_token().await.unwrap();
        assert_eq!(token.expose_secret(), "wa-token");
    }

    #[tokio::test]
    async fn missing_settings_are_configuration_errors() {
        let adapter = NangoCredentialAdapter::new(NangoSettings::default());
        let err = adapter.access_token().await.unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
        assert!(err.to_string().contains("NANGO_SECRET_KEY"));
    }

    #[tokio::test]
    async fn rejected_secret_is_authentication_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let adapter = NangoCredentialAdapter::new(settings(&server.uri()));
        let err = adapter.access_token().await.unwrap_err();
        assert!(matches!(err, ApplicationError::Authentication(_)));
        assert!(err.to_string().starts_with("Failed to get credentials from Nango"));
    }

    #[test]
    fn nango_errors_map_by_origin() {
        assert!(matches!(
            map_nango_error(NangoError::InvalidResponse("eof".into())),
            ApplicationError::Authentication(_)
        ));
        assert!(matches!(
            map_nango_error(NangoError::Status { status: 502 }),
            ApplicationError::Authentication(_)
        ));
        assert!(matches!(
            map_nango_error(NangoError::MissingConfiguration(vec!["NANGO_BASE_URL"])),
            ApplicationError::Configuration(_)
        ));
        assert!(matches!(
            map_nango_error(NangoError::MissingToken),
            ApplicationError::Credential(_)
        ));
    }

    #[tokio::test]
    async fn empty_document_is_credential_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"credentials": {}})))
            .mount(&server)
            .await;

        let adapter = NangoCredentialAdapter::new(settings(&server.uri()));
        let err = adapter.access_token().await.unwrap_err();
        assert!(matches!(err, ApplicationError::Credential(_)));
        assert_eq!(err.to_string(), "API key is missing from Nango credentials");
    }
}
