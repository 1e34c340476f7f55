//! MCP presentation layer
//!
//! Serves the WhatsApp tools over newline-delimited JSON-RPC on stdio.

#![recursion_limit = "256"]

pub mod jsonrpc;
pub mod server;
pub mod tools;

pub use server::{McpServer, PROTOCOL_VERSION, SERVER_NAME};
pub use tools::{DispatchError, ToolDispatcher, ToolName};
