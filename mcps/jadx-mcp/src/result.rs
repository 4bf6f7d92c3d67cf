//! Rendering of forwarded values as MCP tool results

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde_json::Value;

/// Turn a plugin result into a `CallToolResult`
///
/// Strings (decompiled source, manifest XML) are passed through as raw text
/// so they are not re-quoted. Everything else is pretty-printed JSON.
pub fn tool_output(value: Value) -> Result<CallToolResult, McpError> {
    match value {
        Value::String(text) => Ok(text_success(text)),
        other => json_success(&other),
    }
}

pub fn json_success(value: &Value) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}
