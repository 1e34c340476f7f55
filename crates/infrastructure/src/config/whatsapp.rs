//! WhatsApp Cloud API settings

use application::DefaultIdentifiers;
use integration_whatsapp::{
    WhatsAppClientConfig,
    client::{DEFAULT_API_VERSION, DEFAULT_BASE_URL},
};
use secrecy::SecretString;
use serde::Deserialize;

use super::{default_timeout_secs, placeholder::meaningful};

/// Graph API endpoint and default account identifiers
#[derive(Debug, Clone, Deserialize)]
pub struct WhatsAppSettings {
    /// Default business phone number ID for outgoing messages
    #[serde(default)]
    pub phone_number_id: Option<String>,

    /// Default WhatsApp Business Account ID for template operations
    #[serde(default)]
    pub business_account_id: Option<String>,

    #[serde(default = "default_base_url")]
    pub api_base_url: String,

    /// API version (default: v21.0)
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

impl Default for WhatsAppSettings {
    fn default() -> Self {
        Self {
            phone_number_id: None,
            business_account_id: None,
            api_base_url: default_base_url(),
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl WhatsAppSettings {
    pub(super) fn scrub(&mut self) {
        self.phone_number_id = meaningful(self.phone_number_id.take());
        self.business_account_id = meaningful(self.business_account_id.take());
        self.api_base_url =
            meaningful(Some(std::mem::take(&mut self.api_base_url))).unwrap_or_else(default_base_url);
        self.api_version = meaningful(Some(std::mem::take(&mut self.api_version)))
            .unwrap_or_else(default_api_version);
    }

    /// Identifiers used when a tool call omits its own
    pub fn defaults(&self) -> DefaultIdentifiers {
        DefaultIdentifiers {
            phone_number_id: self.phone_number_id.clone(),
            business_account_id: self.business_account_id.clone(),
        }
    }

    /// Client configuration for a freshly resolved token
    pub fn client_config(&self, access_token: SecretString) -> WhatsAppClientConfig {
        WhatsAppClientConfig {
            access_token,
            base_url: self.api_base_url.clone(),
            api_version: self.api_version.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn defaults_point_at_graph_api() {
        let settings = WhatsAppSettings::default();
        assert_eq!(settings.api_base_url, "https://graph.facebook.com");
        assert_eq!(settings.api_version, "v21.0");
        assert_eq!(settings.timeout_secs, 10);
    }

    #[test]
    fn scrub_restores_defaults_for_placeholders() {
        let mut settings = WhatsAppSettings {
            phone_number_id: Some("<your phone id>".into()),
            business_account_id: Some("102290129340398".into()),
            api_base_url: String::new(),
            api_version: "v20.0".into(),
            timeout_secs: 3,
        };
        settings.scrub();
        assert!(settings.phone_number_id.is_none());
        assert_eq!(settings.business_account_id.as_deref(), Some("102290129340398"));
        assert_eq!(settings.api_base_url, "https://graph.facebook.com");
        assert_eq!(settings.api_version, "v20.0");
    }

    #[test]
    fn client_config_carries_endpoint() {
        let settings = WhatsAppSettings {
            api_base_url: "http://localhost:9000".into(),
            ..WhatsAppSettings::default()
        };
        let config = settings.client_config(SecretString::from("tok"));
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.access_token.expose_secret(), "tok");
    }
}
