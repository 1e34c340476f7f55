//! Tool input types
//!
//! Field names match the tool argument names, so the dispatcher can
//! deserialize call arguments straight into these. Unknown fields are
//! rejected and optional fields carry the documented defaults.

use domain::{ListSection, MediaKind, ReplyButton};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text message, or a bare template when `message` is empty
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextMessageRequest {
    pub to: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub template_name: String,
    #[serde(default = "default_language_code")]
    pub language_code: String,
    #[serde(default)]
    pub phone_number_id: Option<String>,
}

/// Image, video, document or audio message
#[derive(Debug, Clone)]
pub struct MediaMessageRequest {
    pub kind: MediaKind,
    pub to: String,
    pub url: String,
    pub caption: String,
    pub filename: String,
    pub phone_number_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListMessageRequest {
    pub to: String,
    pub sections: Vec<ListSection>,
    #[serde(default = "default_list_header")]
    pub header_text: String,
    #[serde(default = "default_list_body")]
    pub body_text: String,
    #[serde(default = "default_list_footer")]
    pub footer_text: String,
    #[serde(default = "default_list_button")]
    pub button_text: String,
    #[serde(default)]
    pub phone_number_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ButtonMessageRequest {
    pub to: String,
    pub body_text: String,
    pub buttons: Vec<ReplyButton>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub header_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub footer_text: String,
    #[serde(default)]
    pub phone_number_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateMessageRequest {
    pub to: String,
    pub template_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<Value>,
    #[serde(default = "default_template_language")]
    pub language: String,
    #[serde(default)]
    pub phone_number_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckTemplateStatusRequest {
    pub template_name: String,
    #[serde(default)]
    pub business_account_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListTemplatesRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status_filter: String,
    #[serde(default)]
    pub business_account_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTemplateRequest {
    pub template_name: String,
    pub language: String,
    pub category: String,
    pub components: Vec<Value>,
    #[serde(default)]
    pub business_account_id: Option<String>,
}

pub const DEFAULT_LIST_HEADER: &str = "Available Options";
pub const DEFAULT_LIST_BODY: &str = "Please select from the following options:";
pub const DEFAULT_LIST_FOOTER: &str = "Select an option to proceed";
pub const DEFAULT_LIST_BUTTON: &str = "Options";

/// Treat an explicit JSON `null` like an absent field
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn default_language_code() -> String {
    "en_US".to_string()
}

fn default_template_language() -> String {
    "en".to_string()
}

fn default_list_header() -> String {
    DEFAULT_LIST_HEADER.to_string()
}

fn default_list_body() -> String {
    DEFAULT_LIST_BODY.to_string()
}

fn default_list_footer() -> String {
    DEFAULT_LIST_FOOTER.to_string()
}

fn default_list_button() -> String {
    DEFAULT_LIST_BUTTON.to_string()
}
