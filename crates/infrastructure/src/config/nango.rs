//! Nango connection settings

use integration_nango::{NangoConfig, NangoError};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::{
    default_timeout_secs,
    placeholder::{is_placeholder, meaningful},
};

/// Where access tokens are fetched from
///
/// Every field is optional at load time. Missing values only fail the tool
/// calls that need a token.
#[derive(Clone, Deserialize)]
pub struct NangoSettings {
    /// Nango API base URL
    #[serde(default)]
    pub base_url: Option<String>,

    /// Connection ID of the WhatsApp Business connection
    #[serde(default)]
    pub connection_id: Option<String>,

    /// Provider config key of the integration
    #[serde(default)]
    pub integration_id: Option<String>,

    /// Nango secret key (sensitive - uses SecretString)
    #[serde(default)]
    pub secret_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for NangoSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            connection_id: None,
            integration_id: None,
            secret_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for NangoSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NangoSettings")
            .field("base_url", &self.base_url)
            .field("connection_id", &self.connection_id)
            .field("integration_id", &self.integration_id)
            .field(
                "secret_key",
                &if self.secret_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl NangoSettings {
    pub(super) fn scrub(&mut self) {
        self.base_url = meaningful(self.base_url.take());
        self.connection_id = meaningful(self.connection_id.take());
        self.integration_id = meaningful(self.integration_id.take());
        self.secret_key = self
            .secret_key
            .take()
            .filter(|key| !is_placeholder(key.expose_secret()));
    }

    /// Names of the environment variables whose values are missing
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("NANGO_CONNECTION_ID", self.connection_id.is_none()),
            ("NANGO_INTEGRATION_ID", self.integration_id.is_none()),
            ("NANGO_BASE_URL", self.base_url.is_none()),
            ("NANGO_SECRET_KEY", self.secret_key.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }

    /// Client configuration, or the list of missing variables
    pub fn client_config(&self) -> Result<NangoConfig, NangoError> {
        match (
            &self.base_url,
            &self.connection_id,
            &self.integration_id,
            &self.secret_key,
        ) {
            (Some(base_url), Some(connection_id), Some(integration_id), Some(secret_key)) => {
                Ok(NangoConfig {
                    base_url: base_url.clone(),
                    connection_id: connection_id.clone(),
                    integration_id: integration_id.clone(),
                    secret_key: secret_key.clone(),
                    timeout_secs: self.timeout_secs,
                })
            },
            _ => Err(NangoError::MissingConfiguration(self.missing())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> NangoSettings {
        NangoSettings {
            base_url: Some("https://api.nango.dev".into()),
            connection_id: Some("conn-1".into()),
            integration_id: Some("whatsapp-business".into()),
            secret_key: Some(SecretString::from("nango-secret")),
            timeout_secs: 5,
        }
    }

    #[test]
    fn complete_settings_build_client_config() {
        let config = complete().client_config().unwrap();
        assert_eq!(config.connection_id, "conn-1");
        assert_eq!(config.secret_key.expose_secret(), "nango-secret");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn missing_values_are_listed() {
        let settings = NangoSettings {
            connection_id: None,
            secret_key: None,
            ..complete()
        };
        let err = settings.client_config().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required Nango environment variables: NANGO_CONNECTION_ID, NANGO_SECRET_KEY"
        );
    }

    #[test]
    fn scrub_removes_placeholders() {
        let mut settings = NangoSettings {
            connection_id: Some("your_connection_id".into()),
            secret_key: Some(SecretString::from("<secret>")),
            ..complete()
        };
        settings.scrub();
        assert!(settings.connection_id.is_none());
        assert!(settings.secret_key.is_none());
        assert_eq!(settings.base_url.as_deref(), Some("https://api.nango.dev"));
    }

    #[test]
    fn debug_redacts_secret() {
        let debug = format!("{:?}", complete());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("nango-secret"));
    }
}
