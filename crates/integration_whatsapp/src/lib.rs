//! WhatsApp integration
//!
//! Sends messages and manages message templates through the Meta Graph API.

pub mod client;

pub use client::{WhatsAppClient, WhatsAppClientConfig, WhatsAppError};
