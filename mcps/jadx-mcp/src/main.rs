//! Jadx MCP Server
//!
//! Bridges MCP clients to the Jadx MCP plugin's HTTP server.
//!
//! # Usage
//!
//! Run directly (plugin on the default address):
//! ```bash
//! jadx-mcp
//! ```
//!
//! Or point it at another plugin address:
//! ```bash
//! jadx-mcp http://127.0.0.1:8650
//! ```
//!
//! Or configure in `.mcp.json`:
//! ```json
//! {
//!   "mcpServers": {
//!     "jadx": {
//!       "command": "./target/release/jadx-mcp",
//!       "args": ["http://localhost:8085"]
//!     }
//!   }
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser};
use rmcp::{transport::stdio, ServiceExt};

use jadx_mcp::{handlers, init, Config, HttpBackend, JadxBackend, JadxMcpServer};

/// Upper bound on the startup check so a stalled plugin cannot hold up the handshake
const STARTUP_CHECK_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Parser)]
#[command(name = "jadx-mcp")]
#[command(about = "MCP server for the Jadx decompiler plugin")]
#[command(version)]
struct Cli {
    /// Base URL of the Jadx MCP plugin (default: http://localhost:8085)
    server_url: Option<String>,

    /// Increase verbosity (-v debug, -vv trace). Default is info.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init::init_tracing(cli.verbose)?;

    tracing::info!("Starting Jadx MCP Server");

    let config = Config::from_arg(cli.server_url.as_deref())?;
    tracing::info!("Jadx plugin URL: {}", config.server_url());

    let backend = HttpBackend::new(config).context("failed to create HTTP client")?;

    // Optional startup check - Jadx may be started after us
    match handlers::check_plugin(&backend, STARTUP_CHECK_TIMEOUT).await {
        Ok(tools) => {
            let count = tools
                .get("tools")
                .and_then(|t| t.as_array())
                .map(|t| t.len());
            match count {
                Some(count) => tracing::info!("Jadx plugin reachable, {} tools advertised", count),
                None => tracing::info!("Jadx plugin reachable at {}", backend.endpoint()),
            }
        }
        Err(e) => tracing::warn!("Jadx plugin check failed: {}", e),
    }

    let server = JadxMcpServer::new(Arc::new(backend));
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
