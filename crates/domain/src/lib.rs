//! Domain layer for the WhatsApp MCP server
//!
//! Contains the message and template model, value objects and domain errors.
//! Nothing in here performs I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
