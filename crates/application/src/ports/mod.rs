//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod credential_port;
mod whatsapp_port;

pub use credential_port::CredentialPort;
#[cfg(test)]
pub use whatsapp_port::MockWhatsAppPort;
pub use whatsapp_port::WhatsAppPort;
