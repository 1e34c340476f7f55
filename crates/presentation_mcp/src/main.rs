//! WhatsApp MCP server
//!
//! Exposes WhatsApp Business Cloud API operations as MCP tools on stdio.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use infrastructure::{AppConfig, TelemetryConfig, init_telemetry};
use presentation_mcp::{McpServer, ToolDispatcher};
use tracing::{debug, info};

/// WhatsApp Business MCP server
#[derive(Parser)]
#[command(name = "whatsapp-mcp")]
#[command(author, version, about = "WhatsApp Business Cloud API tools over MCP stdio", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "WHATSAPP_MCP_CONFIG")]
    config: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    init_telemetry(&TelemetryConfig::for_verbosity(cli.verbose, cli.json_logs))?;
    match dotenv {
        Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => tracing::warn!(error = %e, "Failed to read .env file"),
    }

    let config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    debug!(?config, "Configuration loaded");

    let server = McpServer::new(ToolDispatcher::from_config(&config));
    info!(version = env!("CARGO_PKG_VERSION"), "Starting WhatsApp MCP server");

    server.serve_stdio().await.context("stdio transport failed")?;
    Ok(())
}
