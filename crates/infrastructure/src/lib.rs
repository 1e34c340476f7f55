//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the Nango and WhatsApp
//! integration crates, and owns configuration loading and log setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, NangoSettings, WhatsAppSettings};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
