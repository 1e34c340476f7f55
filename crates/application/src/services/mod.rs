//! Application services - tool handlers
//!
//! Every public handler returns a [`domain::ToolResult`]; errors never
//! propagate past this layer.

mod defaults;
mod message_service;
mod template_service;

pub use defaults::DefaultIdentifiers;
pub use message_service::{MAX_REPLY_BUTTONS, MessageService};
pub use template_service::TemplateService;
