//! Tool registry and dispatch
//!
//! Maps a tool name to its handler, deserializes the call arguments into the
//! handler's request type and renders the [`ToolResult`] as text.

mod args;
mod definitions;

use std::{fmt, str::FromStr, sync::Arc};

use application::{
    ButtonMessageRequest, CheckTemplateStatusRequest, CreateTemplateRequest, DefaultIdentifiers,
    ListMessageRequest, ListTemplatesRequest, MediaMessageRequest, MessageService,
    TemplateMessageRequest, TemplateService, TextMessageRequest, WhatsAppPort,
};
use domain::ToolResult;
use infrastructure::{AppConfig, NangoCredentialAdapter, WhatsAppGraphAdapter};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

pub use args::{AudioArgs, DocumentArgs, ImageArgs, VideoArgs};
pub use definitions::{ToolDefinition, tool_definitions};

/// Errors raised before a handler runs
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments do not fit the tool's parameters
    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),
}

/// The registered tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    SendTextMessage,
    SendImageMessage,
    SendVideoMessage,
    SendDocumentMessage,
    SendAudioMessage,
    SendListMessage,
    SendButtonMessage,
    SendTemplateMessage,
    CheckTemplateStatus,
    ListTemplates,
    CreateTemplate,
}

impl ToolName {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SendTextMessage => "send_text_message",
            Self::SendImageMessage => "send_image_message",
            Self::SendVideoMessage => "send_video_message",
            Self::SendDocumentMessage => "send_document_message",
            Self::SendAudioMessage => "send_audio_message",
            Self::SendListMessage => "send_list_message",
            Self::SendButtonMessage => "send_button_message",
            Self::SendTemplateMessage => "send_template_message",
            Self::CheckTemplateStatus => "check_template_status",
            Self::ListTemplates => "list_templates",
            Self::CreateTemplate => "create_template",
        }
    }

    pub const fn all() -> [Self; 11] {
        [
            Self::SendTextMessage,
            Self::SendImageMessage,
            Self::SendVideoMessage,
            Self::SendDocumentMessage,
            Self::SendAudioMessage,
            Self::SendListMessage,
            Self::SendButtonMessage,
            Self::SendTemplateMessage,
            Self::CheckTemplateStatus,
            Self::ListTemplates,
            Self::CreateTemplate,
        ]
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| DispatchError::UnknownTool(s.to_string()))
    }
}

/// Rendered outcome of a `tools/call`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Pretty-printed JSON
    pub text: String,
    pub is_error: bool,
}

/// Routes tool calls to the message and template services
#[derive(Debug, Clone)]
pub struct ToolDispatcher {
    messages: MessageService,
    templates: TemplateService,
}

impl ToolDispatcher {
    pub fn new(whatsapp: Arc<dyn WhatsAppPort>, defaults: DefaultIdentifiers) -> Self {
        Self {
            messages: MessageService::new(Arc::clone(&whatsapp), defaults.clone()),
            templates: TemplateService::new(whatsapp, defaults),
        }
    }

    /// Wire the Nango-backed Graph adapter from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let credentials = Arc::new(NangoCredentialAdapter::new(config.nango.clone()));
        let whatsapp = Arc::new(WhatsAppGraphAdapter::new(
            credentials,
            config.whatsapp.clone(),
        ));
        Self::new(whatsapp, config.whatsapp.defaults())
    }

    /// Run a tool and render its result
    ///
    /// Unknown tools and malformed arguments are reported as
    /// `{error, tool, arguments}`; handler failures as the `ToolResult`
    /// error side.
    #[instrument(skip(self, arguments))]
    pub async fn call(&self, name: &str, arguments: Value) -> ToolOutput {
        match self.dispatch(name, arguments.clone()).await {
            Ok(result) => {
                debug!(is_error = result.is_error(), "Tool finished");
                ToolOutput {
                    is_error: result.is_error(),
                    text: pretty(&result),
                }
            },
            Err(e) => {
                warn!(error = %e, "Tool call rejected");
                ToolOutput {
                    text: pretty(&json!({
                        "error": e.to_string(),
                        "tool": name,
                        "arguments": arguments,
                    })),
                    is_error: true,
                }
            },
        }
    }

    /// Run a tool by name
    pub async fn dispatch(&self, name: &str, arguments: Value) -> Result<ToolResult, DispatchError> {
        let tool: ToolName = name.parse()?;
        info!(tool = %tool, "Dispatching tool call");

        let result = match tool {
            ToolName::SendTextMessage => {
                self.messages
                    .send_text(parse::<TextMessageRequest>(arguments)?)
                    .await
            },
            ToolName::SendImageMessage => self.send_media::<ImageArgs>(arguments).await?,
            ToolName::SendVideoMessage => self.send_media::<VideoArgs>(arguments).await?,
            ToolName::SendDocumentMessage => self.send_media::<DocumentArgs>(arguments).await?,
            ToolName::SendAudioMessage => self.send_media::<AudioArgs>(arguments).await?,
            ToolName::SendListMessage => {
                self.messages
                    .send_list(parse::<ListMessageRequest>(arguments)?)
                    .await
            },
            ToolName::SendButtonMessage => {
                self.messages
                    .send_buttons(parse::<ButtonMessageRequest>(arguments)?)
                    .await
            },
            ToolName::SendTemplateMessage => {
                self.templates
                    .send_template(parse::<TemplateMessageRequest>(arguments)?)
                    .await
            },
            ToolName::CheckTemplateStatus => {
                self.templates
                    .check_status(parse::<CheckTemplateStatusRequest>(arguments)?)
                    .await
            },
            ToolName::ListTemplates => {
                self.templates
                    .list(parse::<ListTemplatesRequest>(arguments)?)
                    .await
            },
            ToolName::CreateTemplate => {
                self.templates
                    .create(parse::<CreateTemplateRequest>(arguments)?)
                    .await
            },
        };
        Ok(result)
    }

    async fn send_media<A>(&self, arguments: Value) -> Result<ToolResult, DispatchError>
    where
        A: DeserializeOwned + Into<MediaMessageRequest>,
    {
        let args: A = parse(arguments)?;
        Ok(self.messages.send_media(args.into()).await)
    }
}

/// Deserialize arguments; absent arguments count as an empty object
fn parse<T: DeserializeOwned>(arguments: Value) -> Result<T, DispatchError> {
    let arguments = if arguments.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        arguments
    };
    Ok(serde_json::from_value(arguments)?)
}

fn pretty<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!(r#"{{"result": null, "error": "{e}"}}"#))
}
