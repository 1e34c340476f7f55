//! Default account identifiers

use crate::error::ApplicationError;

/// Identifiers used when a tool call does not name its own
#[derive(Debug, Clone, Default)]
pub struct DefaultIdentifiers {
    /// Business phone number messages are sent from
    pub phone_number_id: Option<String>,
    /// WhatsApp Business Account owning the templates
    pub business_account_id: Option<String>,
}

impl DefaultIdentifiers {
    /// Explicit ID if non-empty, otherwise the configured default
    pub fn phone_number_id(&self, explicit: Option<String>) -> Result<String, ApplicationError> {
        pick(explicit, self.phone_number_id.as_deref()).ok_or_else(|| {
            ApplicationError::Configuration(
                "WhatsApp phone number ID is not configured (set WHATSAPP_PHONE_NUMBER_ID)"
                    .to_string(),
            )
        })
    }

    /// Explicit ID if non-empty, otherwise the configured default
    pub fn business_account_id(
        &self,
        explicit: Option<String>,
    ) -> Result<String, ApplicationError> {
        pick(explicit, self.business_account_id.as_deref()).ok_or_else(|| {
            ApplicationError::Configuration(
                "WhatsApp business account ID is not configured (set WHATSAPP_BUSINESS_ACCOUNT_ID)"
                    .to_string(),
            )
        })
    }
}

fn pick(explicit: Option<String>, fallback: Option<&str>) -> Option<String> {
    explicit
        .filter(|id| !id.trim().is_empty())
        .or_else(|| fallback.filter(|id| !id.trim().is_empty()).map(str::to_string))
}
