//! HTTP backend
//!
//! Forwards tool calls to the Jadx MCP plugin:
//! - `POST {base}/invoke` with `{"tool": ..., "parameters": {...}}`
//! - `GET {base}/tools` for discovery, relayed without unwrapping
//!
//! One request per call, no retries, and the client's default timeouts.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use super::JadxBackend;
use crate::config::Config;
use crate::error::{JadxError, JadxResult};
use crate::types::{reject_error, unwrap_response, ToolRequest};

/// Backend talking to the Jadx plugin's HTTP server
pub struct HttpBackend {
    client: Client,
    config: Config,
}

impl HttpBackend {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        // The plugin runs next to us; system proxies would only get in the way
        let client = Client::builder()
            .user_agent(concat!("jadx-mcp/", env!("CARGO_PKG_VERSION")))
            .no_proxy()
            .build()?;

        Ok(Self { client, config })
    }

    /// Check the status and parse the body as JSON
    async fn read_json(response: Response) -> JadxResult<Value> {
        let response = response.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl JadxBackend for HttpBackend {
    fn endpoint(&self) -> &str {
        self.config.server_url()
    }

    async fn invoke(&self, request: &ToolRequest) -> JadxResult<Value> {
        tracing::debug!(tool = %request.tool, "Forwarding tool call");

        let response = self
            .client
            .post(self.config.invoke_url())
            .json(request)
            .send()
            .await
            .map_err(JadxError::from)?;

        let body = Self::read_json(response).await?;
        unwrap_response(body)
    }

    async fn fetch_tools(&self) -> JadxResult<Value> {
        tracing::debug!("Fetching tool catalog");

        let response = self
            .client
            .get(self.config.tools_url())
            .send()
            .await
            .map_err(JadxError::from)?;

        let body = Self::read_json(response).await?;
        reject_error(body)
    }
}
