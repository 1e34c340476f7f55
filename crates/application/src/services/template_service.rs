//! Template use cases: sending, listing, status lookup and creation

use std::sync::Arc;

use domain::{
    OutboundMessage, PhoneNumber, TemplateCategory, TemplateDefinition, TemplateLanguage,
    TemplateMessage, ToolResult,
};
use serde_json::{Value, json};
use tracing::{debug, info, instrument, warn};

use super::DefaultIdentifiers;
use crate::{
    error::ApplicationError,
    ports::WhatsAppPort,
    requests::{
        CheckTemplateStatusRequest, CreateTemplateRequest, ListTemplatesRequest,
        TemplateMessageRequest,
    },
};

/// Handles the template tools
#[derive(Clone)]
pub struct TemplateService {
    whatsapp: Arc<dyn WhatsAppPort>,
    defaults: DefaultIdentifiers,
}

impl std::fmt::Debug for TemplateService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateService")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl TemplateService {
    pub fn new(whatsapp: Arc<dyn WhatsAppPort>, defaults: DefaultIdentifiers) -> Self {
        Self { whatsapp, defaults }
    }

    /// Send an approved template, filling its body parameters
    #[instrument(skip(self, request), fields(template = %request.template_name))]
    pub async fn send_template(&self, request: TemplateMessageRequest) -> ToolResult {
        self.try_send_template(request)
            .await
            .inspect_err(|e| warn!(error = %e, "send_template_message failed"))
            .into()
    }

    async fn try_send_template(
        &self,
        request: TemplateMessageRequest,
    ) -> Result<Value, ApplicationError> {
        let to = PhoneNumber::new(&request.to)?;

        let (language, fell_back) = TemplateLanguage::resolve(&request.language);
        if fell_back {
            warn!(
                requested = %request.language,
                "Unsupported template language, using {}", language
            );
        }

        let template = TemplateMessage::new(request.template_name, language.code())
            .with_body_parameters(request.parameters);
        info!(to = %to, language = %language, "Sending template message");

        let phone_number_id = self.defaults.phone_number_id(request.phone_number_id)?;
        let message = OutboundMessage::template(to, template);
        self.whatsapp.send_message(&phone_number_id, &message).await
    }

    /// Look up a single template by exact name
    #[instrument(skip(self, request), fields(template = %request.template_name))]
    pub async fn check_status(&self, request: CheckTemplateStatusRequest) -> ToolResult {
        self.try_check_status(request)
            .await
            .inspect_err(|e| debug!(error = %e, "check_template_status failed"))
            .into()
    }

    async fn try_check_status(
        &self,
        request: CheckTemplateStatusRequest,
    ) -> Result<Value, ApplicationError> {
        let waba_id = self.defaults.business_account_id(request.business_account_id)?;
        let listing = self.whatsapp.list_templates(&waba_id).await?;

        templates_of(listing)
            .into_iter()
            .find(|template| {
                template.get("name").and_then(Value::as_str) == Some(request.template_name.as_str())
            })
            .ok_or_else(|| ApplicationError::NotFound("Template".to_string()))
    }

    /// List templates, optionally keeping only one status
    #[instrument(skip(self, request), fields(status_filter = %request.status_filter))]
    pub async fn list(&self, request: ListTemplatesRequest) -> ToolResult {
        self.try_list(request)
            .await
            .inspect_err(|e| warn!(error = %e, "list_templates failed"))
            .into()
    }

    async fn try_list(&self, request: ListTemplatesRequest) -> Result<Value, ApplicationError> {
        let waba_id = self.defaults.business_account_id(request.business_account_id)?;
        let listing = self.whatsapp.list_templates(&waba_id).await?;

        let mut templates = templates_of(listing);
        if !request.status_filter.is_empty() {
            templates.retain(|template| {
                template
                    .get("status")
                    .and_then(Value::as_str)
                    .is_some_and(|status| status.eq_ignore_ascii_case(&request.status_filter))
            });
        }

        debug!(count = templates.len(), "Templates listed");
        Ok(json!({
            "count": templates.len(),
            "templates": templates,
        }))
    }

    /// Submit a new template for approval
    #[instrument(skip(self, request), fields(template = %request.template_name))]
    pub async fn create(&self, request: CreateTemplateRequest) -> ToolResult {
        self.try_create(request)
            .await
            .inspect_err(|e| warn!(error = %e, "create_template failed"))
            .into()
    }

    async fn try_create(&self, request: CreateTemplateRequest) -> Result<Value, ApplicationError> {
        let category: TemplateCategory = request
            .category
            .parse()
            .map_err(|_| ApplicationError::validation(invalid_category_message()))?;

        let definition = TemplateDefinition {
            name: request.template_name,
            language: request.language,
            category,
            components: request.components,
        };

        let waba_id = self.defaults.business_account_id(request.business_account_id)?;
        info!(category = %category, "Creating template");
        self.whatsapp.create_template(&waba_id, &definition).await
    }
}

/// The `data` array of a listing document; missing or malformed means empty
fn templates_of(listing: Value) -> Vec<Value> {
    match listing {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(templates)) => templates,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn invalid_category_message() -> String {
    let names: Vec<&str> = TemplateCategory::all()
        .into_iter()
        .map(TemplateCategory::as_str)
        .collect();
    format!("Invalid category. Must be one of: {}", names.join(", "))
}
