//! WhatsApp Graph API adapter
//!
//! Implements `WhatsAppPort` with a fresh `WhatsAppClient` per call, built
//! around a token resolved through the `CredentialPort`.

use std::sync::Arc;

use application::{
    error::ApplicationError,
    ports::{CredentialPort, WhatsAppPort},
};
use async_trait::async_trait;
use domain::{OutboundMessage, TemplateDefinition};
use integration_whatsapp::{WhatsAppClient, WhatsAppError};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::WhatsAppSettings;

/// Adapter that implements `WhatsAppPort` using `WhatsAppClient`
pub struct WhatsAppGraphAdapter {
    credentials: Arc<dyn CredentialPort>,
    settings: WhatsAppSettings,
}

impl WhatsAppGraphAdapter {
    pub fn new(credentials: Arc<dyn CredentialPort>, settings: WhatsAppSettings) -> Self {
        Self {
            credentials,
            settings,
        }
    }

    async fn client(&self) -> Result<WhatsAppClient, ApplicationError> {
        let token = self.credentials.access_token().await?;
        WhatsAppClient::new(self.settings.client_config(token)).map_err(map_whatsapp_error)
    }
}

impl std::fmt::Debug for WhatsAppGraphAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhatsAppGraphAdapter")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WhatsAppPort for WhatsAppGraphAdapter {
    #[instrument(skip(self, message), fields(kind = message.body().type_tag()))]
    async fn send_message(
        &self,
        phone_number_id: &str,
        message: &OutboundMessage,
    ) -> Result<Value, ApplicationError> {
        let client = self.client().await?;
        let response = client
            .send_message(phone_number_id, message)
            .await
            .map_err(map_whatsapp_error)?;
        debug!("Message accepted");
        Ok(response)
    }

    #[instrument(skip(self))]
    async fn list_templates(&self, business_account_id: &str) -> Result<Value, ApplicationError> {
        self.client()
            .await?
            .list_templates(business_account_id)
            .await
            .map_err(map_whatsapp_error)
    }

    #[instrument(skip(self, definition), fields(template = %definition.name))]
    async fn create_template(
        &self,
        business_account_id: &str,
        definition: &TemplateDefinition,
    ) -> Result<Value, ApplicationError> {
        self.client()
            .await?
            .create_template(business_account_id, definition)
            .await
            .map_err(map_whatsapp_error)
    }
}

/// Map WhatsApp errors to application errors
fn map_whatsapp_error(err: WhatsAppError) -> ApplicationError {
    match err {
        WhatsAppError::Configuration(message) => ApplicationError::Configuration(message),
        e => ApplicationError::ExternalService(e.to_string()),
    }
}
