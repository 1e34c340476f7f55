//! Outbound message model
//!
//! Serializes straight into the Cloud API `/messages` request body. The body
//! object always lives under the key named by the `type` tag.

use serde::{
    Deserialize, Serialize, Serializer,
    ser::SerializeMap,
};
use serde_json::Value;

use crate::value_objects::{MediaKind, PhoneNumber};

const MESSAGING_PRODUCT: &str = "whatsapp";

/// A message ready to be posted to the messages endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    to: PhoneNumber,
    individual: bool,
    body: MessageBody,
}

/// The type-specific part of a message
#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    Text(TextBody),
    Media { kind: MediaKind, media: MediaObject },
    Interactive(Interactive),
    Template(TemplateMessage),
}

impl MessageBody {
    /// Value of the `type` field (and the key holding the body)
    #[must_use]
    pub const fn type_tag(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Media { kind, .. } => kind.as_str(),
            Self::Interactive(_) => "interactive",
            Self::Template(_) => "template",
        }
    }
}

impl OutboundMessage {
    /// Plain text message
    pub fn text(to: PhoneNumber, body: impl Into<String>) -> Self {
        Self {
            to,
            individual: false,
            body: MessageBody::Text(TextBody { body: body.into() }),
        }
    }

    /// Link-based media message
    pub fn media(to: PhoneNumber, kind: MediaKind, media: MediaObject) -> Self {
        Self {
            to,
            individual: false,
            body: MessageBody::Media { kind, media },
        }
    }

    /// Interactive list or button message, addressed to an individual
    pub fn interactive(to: PhoneNumber, interactive: Interactive) -> Self {
        Self {
            to,
            individual: true,
            body: MessageBody::Interactive(interactive),
        }
    }

    /// Pre-approved template message
    pub fn template(to: PhoneNumber, template: TemplateMessage) -> Self {
        Self {
            to,
            individual: false,
            body: MessageBody::Template(template),
        }
    }

    pub fn to(&self) -> &PhoneNumber {
        &self.to
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }
}

impl Serialize for OutboundMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("messaging_product", MESSAGING_PRODUCT)?;
        if self.individual {
            map.serialize_entry("recipient_type", "individual")?;
        }
        map.serialize_entry("to", &self.to)?;

        let tag = self.body.type_tag();
        map.serialize_entry("type", tag)?;
        match &self.body {
            MessageBody::Text(text) => map.serialize_entry(tag, text)?,
            MessageBody::Media { media, .. } => map.serialize_entry(tag, media)?,
            MessageBody::Interactive(interactive) => map.serialize_entry(tag, interactive)?,
            MessageBody::Template(template) => map.serialize_entry(tag, template)?,
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBody {
    pub body: String,
}

/// Media referenced by public URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaObject {
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl MediaObject {
    /// Build the media object for `kind`, dropping empty or unsupported
    /// optional fields
    #[must_use]
    pub fn for_kind(kind: MediaKind, link: String, caption: &str, filename: &str) -> Self {
        Self {
            link,
            caption: non_empty(caption).filter(|_| kind.supports_caption()),
            filename: non_empty(filename).filter(|_| kind.supports_filename()),
        }
    }
}

/// Interactive message content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Interactive {
    List {
        #[serde(skip_serializing_if = "Option::is_none")]
        header: Option<InteractiveHeader>,
        body: InteractiveText,
        #[serde(skip_serializing_if = "Option::is_none")]
        footer: Option<InteractiveText>,
        action: ListAction,
    },
    Button {
        #[serde(skip_serializing_if = "Option::is_none")]
        header: Option<InteractiveHeader>,
        body: InteractiveText,
        #[serde(skip_serializing_if = "Option::is_none")]
        footer: Option<InteractiveText>,
        action: ButtonAction,
    },
}

impl Interactive {
    /// List message; empty header or footer text is omitted, the body is always sent
    #[must_use]
    pub fn list(
        header: &str,
        body: &str,
        footer: &str,
        button: impl Into<String>,
        sections: Vec<ListSection>,
    ) -> Self {
        Self::List {
            header: InteractiveHeader::text(header),
            body: InteractiveText { text: body.to_string() },
            footer: InteractiveText::new(footer),
            action: ListAction {
                button: button.into(),
                sections,
            },
        }
    }

    /// Reply-button message; empty header or footer text is omitted
    #[must_use]
    pub fn buttons(header: &str, body: impl Into<String>, footer: &str, buttons: Vec<ReplyButton>) -> Self {
        Self::Button {
            header: InteractiveHeader::text(header),
            body: InteractiveText { text: body.into() },
            footer: InteractiveText::new(footer),
            action: ButtonAction { buttons },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractiveHeader {
    #[serde(rename = "type")]
    kind: &'static str,
    text: String,
}

impl InteractiveHeader {
    fn text(text: &str) -> Option<Self> {
        non_empty(text).map(|text| Self { kind: "text", text })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractiveText {
    pub text: String,
}

impl InteractiveText {
    fn new(text: &str) -> Option<Self> {
        non_empty(text).map(|text| Self { text })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListAction {
    pub button: String,
    pub sections: Vec<ListSection>,
}

/// A titled group of selectable rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub rows: Vec<ListRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRow {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonAction {
    pub buttons: Vec<ReplyButton>,
}

/// Quick-reply button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyButton {
    #[serde(rename = "type", default)]
    pub kind: ButtonKind,
    pub reply: ButtonReply,
}

impl ReplyButton {
    pub fn reply(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind: ButtonKind::Reply,
            reply: ButtonReply {
                id: id.into(),
                title: title.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    #[default]
    Reply,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonReply {
    pub id: String,
    pub title: String,
}

/// Template reference inside a message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateMessage {
    pub name: String,
    pub language: LanguageCode,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<TemplateComponent>,
}

impl TemplateMessage {
    /// Template without parameters
    pub fn new(name: impl Into<String>, language_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: LanguageCode {
                code: language_code.into(),
            },
            components: Vec::new(),
        }
    }

    /// Attach body parameters; nothing is added when `parameters` is empty
    #[must_use]
    pub fn with_body_parameters(mut self, parameters: Vec<Value>) -> Self {
        let parameters: Vec<Value> = parameters.into_iter().map(normalize_parameter).collect();
        if !parameters.is_empty() {
            self.components.push(TemplateComponent {
                kind: "body",
                parameters,
            });
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageCode {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateComponent {
    #[serde(rename = "type")]
    kind: &'static str,
    parameters: Vec<Value>,
}

/// Keep well-formed `{type, text}` parameters, wrap anything else as text
fn normalize_parameter(param: Value) -> Value {
    let well_formed = param
        .as_object()
        .is_some_and(|map| map.contains_key("type") && map.contains_key("text"));
    if well_formed {
        return param;
    }

    let text = match param {
        Value::String(text) => text,
        other => other.to_string(),
    };
    serde_json::json!({ "type": "text", "text": text })
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
