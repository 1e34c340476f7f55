//! Value Objects - Immutable, identity-less domain primitives

mod media_kind;
mod phone_number;
mod template_category;
mod template_language;

pub use media_kind::MediaKind;
pub use phone_number::PhoneNumber;
pub use template_category::TemplateCategory;
pub use template_language::TemplateLanguage;
