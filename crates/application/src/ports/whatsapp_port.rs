//! Port for the WhatsApp Messaging and Template APIs

use async_trait::async_trait;
use domain::{OutboundMessage, TemplateDefinition};
#[cfg(test)]
use mockall::automock;
use serde_json::Value;

use crate::error::ApplicationError;

/// Outbound calls against the Messaging API
///
/// Each method is one HTTP request. A `200` body comes back as `Ok`; any
/// other outcome is an error whose message is the upstream `error.message`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WhatsAppPort: Send + Sync {
    /// Post a message from the given business phone number
    async fn send_message(
        &self,
        phone_number_id: &str,
        message: &OutboundMessage,
    ) -> Result<Value, ApplicationError>;

    /// Fetch the template listing document of a business account
    async fn list_templates(&self, business_account_id: &str) -> Result<Value, ApplicationError>;

    /// Submit a new template
    async fn create_template(
        &self,
        business_account_id: &str,
        definition: &TemplateDefinition,
    ) -> Result<Value, ApplicationError>;
}
