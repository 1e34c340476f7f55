//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod nango_credential_adapter;
mod whatsapp_graph_adapter;

pub use nango_credential_adapter::NangoCredentialAdapter;
pub use whatsapp_graph_adapter::WhatsAppGraphAdapter;
