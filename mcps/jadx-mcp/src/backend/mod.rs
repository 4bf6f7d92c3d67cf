//! Backends the adapter forwards calls to
//!
//! The MCP server only talks to the [`JadxBackend`] trait. The production
//! implementation is [`http::HttpBackend`], which speaks to the Jadx plugin.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::JadxResult;
use crate::types::ToolRequest;

pub mod http;

pub use http::HttpBackend;

/// A service able to execute Jadx tools
#[async_trait]
pub trait JadxBackend: Send + Sync {
    /// Human-readable location of the backend, for logs
    fn endpoint(&self) -> &str;

    /// Execute one tool and return its unwrapped result
    async fn invoke(&self, request: &ToolRequest) -> JadxResult<Value>;

    /// Fetch the backend's own tool catalog, verbatim
    async fn fetch_tools(&self) -> JadxResult<Value>;
}
