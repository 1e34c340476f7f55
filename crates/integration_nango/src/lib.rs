//! Nango integration
//!
//! Fetches connection credentials from a Nango instance and extracts the
//! provider access token from them.

pub mod client;
pub mod error;
pub mod token;

pub use client::{NangoClient, NangoConfig};
pub use error::NangoError;
pub use token::{TOKEN_LOCATIONS, extract_access_token};
