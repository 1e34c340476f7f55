//! Message sending use cases
//!
//! One handler per message tool. Each validates its input before anything
//! touches the network, builds the payload and hands it to the
//! [`WhatsAppPort`]. Failures of any kind come back as the error side of the
//! returned [`ToolResult`].

use std::sync::Arc;

use domain::{Interactive, MediaObject, OutboundMessage, PhoneNumber, TemplateMessage, ToolResult};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::DefaultIdentifiers;
use crate::{
    error::ApplicationError,
    ports::WhatsAppPort,
    requests::{ButtonMessageRequest, ListMessageRequest, MediaMessageRequest, TextMessageRequest},
};

/// Upper bound the API puts on reply buttons
pub const MAX_REPLY_BUTTONS: usize = 3;

/// Sends text, media and interactive messages
#[derive(Clone)]
pub struct MessageService {
    whatsapp: Arc<dyn WhatsAppPort>,
    defaults: DefaultIdentifiers,
}

impl std::fmt::Debug for MessageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageService")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl MessageService {
    pub fn new(whatsapp: Arc<dyn WhatsAppPort>, defaults: DefaultIdentifiers) -> Self {
        Self { whatsapp, defaults }
    }

    /// Send a text message, or a parameterless template if no text is given
    #[instrument(skip(self, request))]
    pub async fn send_text(&self, request: TextMessageRequest) -> ToolResult {
        self.try_send_text(request)
            .await
            .inspect_err(|e| warn!(error = %e, "send_text_message failed"))
            .into()
    }

    async fn try_send_text(&self, request: TextMessageRequest) -> Result<Value, ApplicationError> {
        let to = PhoneNumber::new(&request.to)?;

        let message = if !request.message.is_empty() {
            OutboundMessage::text(to, request.message)
        } else if !request.template_name.is_empty() {
            OutboundMessage::template(
                to,
                TemplateMessage::new(request.template_name, request.language_code),
            )
        } else {
            return Err(ApplicationError::validation(
                "Either 'message' or 'template_name' must be provided",
            ));
        };

        self.deliver(request.phone_number_id, &message).await
    }

    /// Send an image, video, document or audio message by URL
    #[instrument(skip(self, request), fields(kind = %request.kind))]
    pub async fn send_media(&self, request: MediaMessageRequest) -> ToolResult {
        let kind = request.kind;
        self.try_send_media(request)
            .await
            .inspect_err(|e| warn!(error = %e, %kind, "send media message failed"))
            .into()
    }

    async fn try_send_media(&self, request: MediaMessageRequest) -> Result<Value, ApplicationError> {
        let to = PhoneNumber::new(&request.to)?;
        let kind = request.kind;

        if request.url.is_empty() {
            return Err(ApplicationError::validation(format!(
                "{} URL is required",
                kind.label()
            )));
        }

        let media = MediaObject::for_kind(kind, request.url, &request.caption, &request.filename);
        info!(
            to = %to,
            has_caption = media.caption.is_some(),
            has_filename = media.filename.is_some(),
            "Sending {kind} message"
        );

        let message = OutboundMessage::media(to, kind, media);
        self.deliver(request.phone_number_id, &message).await
    }

    /// Send an interactive list message
    #[instrument(skip(self, request))]
    pub async fn send_list(&self, request: ListMessageRequest) -> ToolResult {
        self.try_send_list(request)
            .await
            .inspect_err(|e| warn!(error = %e, "send_list_message failed"))
            .into()
    }

    async fn try_send_list(&self, request: ListMessageRequest) -> Result<Value, ApplicationError> {
        let to = PhoneNumber::new(&request.to)?;

        if request.sections.is_empty() {
            return Err(ApplicationError::validation(
                "Sections are required for list message",
            ));
        }

        info!(
            to = %to,
            sections = request.sections.len(),
            header = %request.header_text,
            "Sending interactive list message"
        );

        let interactive = Interactive::list(
            &request.header_text,
            &request.body_text,
            &request.footer_text,
            request.button_text,
            request.sections,
        );
        let message = OutboundMessage::interactive(to, interactive);
        self.deliver(request.phone_number_id, &message).await
    }

    /// Send an interactive message with one to three reply buttons
    #[instrument(skip(self, request))]
    pub async fn send_buttons(&self, request: ButtonMessageRequest) -> ToolResult {
        self.try_send_buttons(request)
            .await
            .inspect_err(|e| warn!(error = %e, "send_button_message failed"))
            .into()
    }

    async fn try_send_buttons(
        &self,
        request: ButtonMessageRequest,
    ) -> Result<Value, ApplicationError> {
        let to = PhoneNumber::new(&request.to)?;

        if request.buttons.is_empty() || request.buttons.len() > MAX_REPLY_BUTTONS {
            return Err(ApplicationError::validation(
                "Must provide 1-3 buttons for button message",
            ));
        }

        info!(
            to = %to,
            buttons = request.buttons.len(),
            has_header = !request.header_text.is_empty(),
            has_footer = !request.footer_text.is_empty(),
            "Sending interactive button message"
        );

        let interactive = Interactive::buttons(
            &request.header_text,
            request.body_text,
            &request.footer_text,
            request.buttons,
        );
        let message = OutboundMessage::interactive(to, interactive);
        self.deliver(request.phone_number_id, &message).await
    }

    async fn deliver(
        &self,
        phone_number_id: Option<String>,
        message: &OutboundMessage,
    ) -> Result<Value, ApplicationError> {
        let phone_number_id = self.defaults.phone_number_id(phone_number_id)?;
        self.whatsapp.send_message(&phone_number_id, message).await
    }
}
