//! Tool descriptions and input schemas advertised by `tools/list`

use serde::Serialize;
use serde_json::{Value, json};

use super::ToolName;

/// One entry of the `tools/list` response
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Definitions of every tool, in registry order
pub fn tool_definitions() -> Vec<ToolDefinition> {
    ToolName::all().into_iter().map(definition).collect()
}

fn phone_number_id() -> Value {
    json!({
        "type": "string",
        "description": "WhatsApp Business phone number ID (defaults to WHATSAPP_PHONE_NUMBER_ID)"
    })
}

fn business_account_id() -> Value {
    json!({
        "type": "string",
        "description": "WhatsApp Business Account ID (defaults to WHATSAPP_BUSINESS_ACCOUNT_ID)"
    })
}

fn recipient() -> Value {
    json!({"type": "string", "description": "Recipient phone number with country code"})
}

fn media_schema(url_field: &str, noun: &str, caption: bool, filename: bool) -> Value {
    let mut properties = serde_json::Map::new();
    properties.insert("phone_number_id".into(), phone_number_id());
    properties.insert("to".into(), recipient());
    properties.insert(
        url_field.into(),
        json!({"type": "string", "description": format!("Public URL of the {noun} to send")}),
    );
    if caption {
        properties.insert(
            "caption".into(),
            json!({"type": "string", "description": format!("Optional caption for the {noun}")}),
        );
    }
    if filename {
        properties.insert(
            "filename".into(),
            json!({"type": "string", "description": "Optional filename for the document"}),
        );
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": ["to", url_field],
        "additionalProperties": false
    })
}

fn definition(tool: ToolName) -> ToolDefinition {
    let (description, input_schema) = match tool {
        ToolName::SendTextMessage => (
            "Send a text message or template message via WhatsApp Business API",
            json!({
                "type": "object",
                "properties": {
                    "phone_number_id": phone_number_id(),
                    "to": recipient(),
                    "message": {"type": "string", "description": "Text message to send (optional if template_name is provided)"},
                    "template_name": {"type": "string", "description": "Template name to use (optional if message is provided)"},
                    "language_code": {"type": "string", "default": "en_US", "description": "Language code for template"}
                },
                "required": ["to"],
                "additionalProperties": false
            }),
        ),
        ToolName::SendImageMessage => (
            "Send an image message via WhatsApp Business API",
            media_schema("image_url", "image", true, false),
        ),
        ToolName::SendVideoMessage => (
            "Send a video message via WhatsApp Business API",
            media_schema("video_url", "video", true, false),
        ),
        ToolName::SendDocumentMessage => (
            "Send a document message via WhatsApp Business API",
            media_schema("document_url", "document", true, true),
        ),
        ToolName::SendAudioMessage => (
            "Send an audio/voice message via WhatsApp Business API",
            media_schema("audio_url", "audio file", false, false),
        ),
        ToolName::SendListMessage => (
            "Send an interactive list message via WhatsApp Business API",
            json!({
                "type": "object",
                "properties": {
                    "phone_number_id": phone_number_id(),
                    "to": recipient(),
                    "sections": {
                        "type": "array",
                        "description": "List sections with rows",
                        "items": {
                            "type": "object",
                            "properties": {
                                "title": {"type": "string"},
                                "rows": {
                                    "type": "array",
                                    "items": {
                                        "type": "object",
                                        "properties": {
                                            "id": {"type": "string"},
                                            "title": {"type": "string"},
                                            "description": {"type": "string"}
                                        },
                                        "required": ["id", "title"]
                                    }
                                }
                            }
                        }
                    },
                    "header_text": {"type": "string", "default": "Available Options", "description": "Header text for the message"},
                    "body_text": {"type": "string", "default": "Please select from the following options:", "description": "Body text for the message"},
                    "footer_text": {"type": "string", "default": "Select an option to proceed", "description": "Footer text for the message"},
                    "button_text": {"type": "string", "default": "Options", "description": "Button text for the list"}
                },
                "required": ["to", "sections"],
                "additionalProperties": false
            }),
        ),
        ToolName::SendButtonMessage => (
            "Send an interactive button message via WhatsApp Business API",
            json!({
                "type": "object",
                "properties": {
                    "phone_number_id": phone_number_id(),
                    "to": recipient(),
                    "body_text": {"type": "string", "description": "Main message text"},
                    "buttons": {
                        "type": "array",
                        "description": "Reply buttons (1-3)",
                        "minItems": 1,
                        "maxItems": 3,
                        "items": {
                            "type": "object",
                            "properties": {
                                "type": {"type": "string", "enum": ["reply"]},
                                "reply": {
                                    "type": "object",
                                    "properties": {
                                        "id": {"type": "string"},
                                        "title": {"type": "string"}
                                    },
                                    "required": ["id", "title"]
                                }
                            },
                            "required": ["reply"]
                        }
                    },
                    "header_text": {"type": "string", "description": "Optional header text"},
                    "footer_text": {"type": "string", "description": "Optional footer text"}
                },
                "required": ["to", "body_text", "buttons"],
                "additionalProperties": false
            }),
        ),
        ToolName::SendTemplateMessage => (
            "Send a template message with dynamic parameters via WhatsApp Business API",
            json!({
                "type": "object",
                "properties": {
                    "phone_number_id": phone_number_id(),
                    "to": recipient(),
                    "template_name": {"type": "string", "description": "Name of the approved template"},
                    "parameters": {
                        "type": "array",
                        "description": "Template body parameters; bare strings and numbers are sent as text parameters",
                        "items": {
                            "anyOf": [
                                {
                                    "type": "object",
                                    "properties": {
                                        "type": {"type": "string", "enum": ["text"]},
                                        "text": {"type": "string"}
                                    }
                                },
                                {"type": "string"},
                                {"type": "number"}
                            ]
                        }
                    },
                    "language": {
                        "type": "string",
                        "default": "en",
                        "description": "Template language code (en, es, fr, de, it, pt, ar, hi); other codes fall back to en"
                    }
                },
                "required": ["to", "template_name"],
                "additionalProperties": false
            }),
        ),
        ToolName::CheckTemplateStatus => (
            "Check the approval status of a WhatsApp template",
            json!({
                "type": "object",
                "properties": {
                    "business_account_id": business_account_id(),
                    "template_name": {"type": "string", "description": "Name of the template to check"}
                },
                "required": ["template_name"],
                "additionalProperties": false
            }),
        ),
        ToolName::ListTemplates => (
            "List all templates for a WhatsApp Business Account",
            json!({
                "type": "object",
                "properties": {
                    "business_account_id": business_account_id(),
                    "status_filter": {"type": "string", "description": "Optional status filter (APPROVED, PENDING, REJECTED)"}
                },
                "additionalProperties": false
            }),
        ),
        ToolName::CreateTemplate => (
            "Create a new WhatsApp message template",
            json!({
                "type": "object",
                "properties": {
                    "business_account_id": business_account_id(),
                    "template_name": {"type": "string", "description": "Name for the new template"},
                    "language": {"type": "string", "description": "Language code for the template"},
                    "category": {
                        "type": "string",
                        "description": "Template category: MARKETING, UTILITY or AUTHENTICATION (case-insensitive)"
                    },
                    "components": {
                        "type": "array",
                        "description": "Template components",
                        "items": {
                            "type": "object",
                            "properties": {
                                "type": {"type": "string", "enum": ["HEADER", "BODY", "FOOTER"]},
                                "format": {"type": "string"},
                                "text": {"type": "string"}
                            }
                        }
                    }
                },
                "required": ["template_name", "language", "category", "components"],
                "additionalProperties": false
            }),
        ),
    };

    ToolDefinition {
        name: tool.as_str(),
        description,
        input_schema,
    }
}
