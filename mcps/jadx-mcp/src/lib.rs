//! Jadx MCP Library
//!
//! Exposes the Jadx decompiler plugin's HTTP tools over MCP. Every tool call
//! is forwarded as `POST /invoke` to the plugin and its JSON answer relayed
//! back; the plugin's `GET /tools` catalog is served as the `jadx://tools`
//! resource.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jadx_mcp::{Config, HttpBackend, JadxMcpServer};
//!
//! let backend = HttpBackend::new(Config::from_arg(None)?)?;
//! let server = JadxMcpServer::new(Arc::new(backend));
//! let source = server.call("get_class_source", Some(args)).await?;
//! ```
//!
//! # Requirements
//! - Jadx running with the MCP plugin enabled (default `http://localhost:8085`)

pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod init;
pub mod params;
pub mod result;
pub mod server;
pub mod types;

pub use backend::{HttpBackend, JadxBackend};
pub use config::{Config, DEFAULT_SERVER_URL};
pub use error::{JadxError, JadxResult, UNAVAILABLE_MESSAGE};
pub use server::{JadxMcpServer, TOOLS_RESOURCE_URI};
pub use types::ToolRequest;

// Re-export parameter types for direct API usage
pub use params::*;
