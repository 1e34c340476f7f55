//! Application layer - Use cases and orchestration
//!
//! Contains the tool handlers (message and template services), the request
//! types they accept and the port definitions implemented by infrastructure.

pub mod error;
pub mod ports;
pub mod requests;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use requests::*;
pub use services::*;
