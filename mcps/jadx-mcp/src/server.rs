//! MCP Server implementation for Jadx decompiler queries
//!
//! Tools come from the explicit [`ToolRegistry`] rather than attribute
//! macros, since every tool shares the same forwarding path. The plugin's
//! own catalog is exposed as the `jadx://tools` resource.

use std::sync::Arc;

use rmcp::{
    model::{
        AnnotateAble, CallToolRequestParam, CallToolResult, Implementation, ListResourcesResult,
        ListToolsResult, PaginatedRequestParam, RawResource, ReadResourceRequestParam,
        ReadResourceResult, Resource, ResourceContents, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer, ServerHandler,
};
use serde_json::{json, Map, Value};

use crate::backend::JadxBackend;
use crate::catalog::ToolRegistry;
use crate::error::JadxError;
use crate::result::tool_output;

/// URI of the discovery resource
pub const TOOLS_RESOURCE_URI: &str = "jadx://tools";

/// Name reported in the MCP handshake
pub const SERVER_NAME: &str = "Jadx MCP Server";

/// The Jadx MCP Server
#[derive(Clone)]
pub struct JadxMcpServer {
    backend: Arc<dyn JadxBackend>,
    registry: Arc<ToolRegistry>,
}

impl JadxMcpServer {
    pub fn new(backend: Arc<dyn JadxBackend>) -> Self {
        Self::with_registry(backend, ToolRegistry::new())
    }

    pub fn with_registry(backend: Arc<dyn JadxBackend>, registry: ToolRegistry) -> Self {
        tracing::debug!(
            tools = registry.len(),
            endpoint = backend.endpoint(),
            "Registered Jadx tools"
        );
        Self {
            backend,
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Validate and forward one tool call, returning the plugin's result
    pub async fn call(
        &self,
        name: &str,
        arguments: Option<Map<String, Value>>,
    ) -> Result<Value, McpError> {
        let registered = self
            .registry
            .get(name)
            .ok_or_else(|| McpError::invalid_params(format!("Unknown tool: {name}"), None))?;

        let request = registered.request(arguments).map_err(|e| {
            McpError::invalid_params(format!("Invalid arguments for {name}: {e}"), None)
        })?;

        self.backend.invoke(&request).await.map_err(|e| {
            tracing::warn!(tool = name, kind = e.kind(), "Tool call failed: {}", e);
            McpError::from(e)
        })
    }

    /// Contents of the discovery resource
    pub async fn read_tools_resource(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        if uri != TOOLS_RESOURCE_URI {
            return Err(McpError::resource_not_found(
                format!("Unknown resource: {uri}"),
                Some(json!({ "uri": uri })),
            ));
        }

        let tools = self.backend.fetch_tools().await.map_err(|e: JadxError| {
            tracing::warn!(kind = e.kind(), "Fetching tool catalog failed: {}", e);
            McpError::from(e)
        })?;

        let text = serde_json::to_string_pretty(&tools)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let mut contents = ResourceContents::text(text, uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some("application/json".to_string());
        }

        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }

    /// Descriptor of the discovery resource for `resources/list`
    pub fn tools_resource() -> Resource {
        let mut raw = RawResource::new(TOOLS_RESOURCE_URI, "tools");
        raw.description = Some(
            "List of all tools offered by the Jadx plugin, with their descriptions. \
             Used for dynamic tool discovery."
                .to_string(),
        );
        raw.mime_type = Some("application/json".to_string());
        raw.no_annotation()
    }
}

impl ServerHandler for JadxMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Jadx MCP server for Android reverse engineering. \
                 Browse classes, read decompiled source, methods and fields, \
                 inspect the manifest and resources, and follow cross-references \
                 in the APK currently open in Jadx. Jadx must be running with the \
                 MCP plugin enabled."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.registry.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let value = self.call(&request.name, request.arguments).await?;
        tool_output(value)
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(vec![
            Self::tools_resource(),
        ]))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read_tools_resource(&request.uri).await
    }
}
