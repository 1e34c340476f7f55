//! Application configuration
//!
//! Split into focused sub-modules:
//! - `nango`: credential source
//! - `whatsapp`: Graph API endpoint and default identifiers
//! - `placeholder`: detection of unfilled example values
//!
//! Values come from an optional TOML file, overridden by the environment
//! variables listed in [`ENV_BINDINGS`]. Nothing here is required for the
//! server to start.

mod nango;
mod placeholder;
mod whatsapp;

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

pub use nango::NangoSettings;
pub use placeholder::is_placeholder;
pub use whatsapp::WhatsAppSettings;

/// Environment variables and the config keys they override
pub const ENV_BINDINGS: [(&str, &str); 8] = [
    ("NANGO_CONNECTION_ID", "nango.connection_id"),
    ("NANGO_INTEGRATION_ID", "nango.integration_id"),
    ("NANGO_BASE_URL", "nango.base_url"),
    ("NANGO_SECRET_KEY", "nango.secret_key"),
    ("WHATSAPP_PHONE_NUMBER_ID", "whatsapp.phone_number_id"),
    ("WHATSAPP_BUSINESS_ACCOUNT_ID", "whatsapp.business_account_id"),
    ("WHATSAPP_API_BASE_URL", "whatsapp.api_base_url"),
    ("WHATSAPP_API_VERSION", "whatsapp.api_version"),
];

/// Shared default for request timeouts across config structs
pub(crate) const fn default_timeout_secs() -> u64 {
    10
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Nango configuration
    #[serde(default)]
    pub nango: NangoSettings,

    /// WhatsApp configuration
    #[serde(default)]
    pub whatsapp: WhatsAppSettings,
}

impl AppConfig {
    /// Load configuration from the process environment and an optional file
    ///
    /// Without `path`, a `config.toml` in the working directory is used if
    /// present.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with(path, |name| std::env::var(name).ok())
    }

    /// Load configuration, reading environment variables through `lookup`
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self, config::ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let mut builder = config::Config::builder().add_source(file);
        for (env_var, key) in ENV_BINDINGS {
            let value = lookup(env_var).filter(|value| !is_placeholder(value));
            if value.is_some() {
                debug!(env_var, key, "Applying environment override");
            }
            builder = builder.set_override_option(key, value)?;
        }

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.nango.scrub();
        config.whatsapp.scrub();

        let missing = config.nango.missing();
        if missing.is_empty() {
            info!("Nango credential source configured");
        } else {
            info!(
                missing = %missing.join(", "),
                "Nango credential source incomplete; tool calls will report configuration errors"
            );
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, io::Write};

    use secrecy::ExposeSecret;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn no_file() -> tempfile::NamedTempFile {
        tempfile::Builder::new().suffix(".toml").tempfile().unwrap()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let file = no_file();
        let config = AppConfig::load_with(Some(file.path()), env(&[])).unwrap();

        assert!(config.nango.base_url.is_none());
        assert_eq!(config.nango.timeout_secs, 10);
        assert_eq!(config.whatsapp.api_version, "v21.0");
        assert_eq!(config.nango.missing().len(), 4);
    }

    #[test]
    fn environment_values_are_bound() {
        let file = no_file();
        let config = AppConfig::load_with(
            Some(file.path()),
            env(&[
                ("NANGO_CONNECTION_ID", "conn-1"),
                ("NANGO_INTEGRATION_ID", "whatsapp-business"),
                ("NANGO_BASE_URL", "https://api.nango.dev"),
                ("NANGO_SECRET_KEY", "nango-secret"),
                ("WHATSAPP_PHONE_NUMBER_ID", "106540352242922"),
                ("WHATSAPP_BUSINESS_ACCOUNT_ID", "102290129340398"),
            ]),
        )
        .unwrap();

        assert_eq!(config.nango.connection_id.as_deref(), Some("conn-1"));
        assert_eq!(
            config.nango.secret_key.as_ref().map(|k| k.expose_secret().to_string()),
            Some("nango-secret".to_string())
        );
        assert_eq!(config.whatsapp.phone_number_id.as_deref(), Some("106540352242922"));
        assert!(config.nango.missing().is_empty());
    }

    #[test]
    fn placeholder_environment_values_are_ignored() {
        let file = no_file();
        let config = AppConfig::load_with(
            Some(file.path()),
            env(&[
                ("NANGO_SECRET_KEY", "your_nango_secret_key"),
                ("WHATSAPP_PHONE_NUMBER_ID", "<phone_number_id>"),
            ]),
        )
        .unwrap();

        assert!(config.nango.secret_key.is_none());
        assert!(config.whatsapp.phone_number_id.is_none());
    }

    #[test]
    fn file_values_are_overridden_by_environment() {
        let mut file = no_file();
        writeln!(
            file,
            r#"
[nango]
base_url = "https://nango.internal"
connection_id = "from-file"
timeout_secs = 3

[whatsapp]
business_account_id = "waba-from-file"
api_version = "v20.0"
"#
        )
        .unwrap();

        let config = AppConfig::load_with(
            Some(file.path()),
            env(&[("NANGO_CONNECTION_ID", "from-env")]),
        )
        .unwrap();

        assert_eq!(config.nango.connection_id.as_deref(), Some("from-env"));
        assert_eq!(config.nango.base_url.as_deref(), Some("https://nango.internal"));
        assert_eq!(config.nango.timeout_secs, 3);
        assert_eq!(config.whatsapp.business_account_id.as_deref(), Some("waba-from-file"));
        assert_eq!(config.whatsapp.api_version, "v20.0");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = AppConfig::load_with(Some(Path::new("/nonexistent/whatsapp-mcp.toml")), env(&[]));
        assert!(result.is_err());
    }
}
