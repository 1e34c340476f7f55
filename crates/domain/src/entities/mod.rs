//! Domain entities

mod outbound_message;
mod template_definition;
mod tool_result;

pub use outbound_message::{
    ButtonAction, ButtonKind, ButtonReply, Interactive, InteractiveHeader, InteractiveText,
    LanguageCode, ListAction, ListRow, ListSection, MediaObject, MessageBody, OutboundMessage,
    ReplyButton, TemplateComponent, TemplateMessage, TextBody,
};
pub use template_definition::TemplateDefinition;
pub use tool_result::ToolResult;
