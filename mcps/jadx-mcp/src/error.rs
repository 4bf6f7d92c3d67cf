//! Error types for forwarded Jadx calls
//!
//! Every failure of a forwarded call collapses into one of three kinds. The
//! kind travels to the MCP caller in the error's `data` field so clients can
//! tell "start Jadx" apart from a bad class name.

use rmcp::ErrorData as McpError;
use serde_json::json;
use thiserror::Error;

/// Message returned whenever the Jadx plugin cannot be reached
pub const UNAVAILABLE_MESSAGE: &str =
    "Jadx MCP server is not running. Please start Jadx and try again.";

/// Errors that can occur while forwarding a call to the Jadx plugin
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JadxError {
    /// The plugin's HTTP server refused the connection or timed out
    #[error("{}", UNAVAILABLE_MESSAGE)]
    Unavailable,

    /// The plugin answered with an explicit `error` payload
    #[error("{0}")]
    Application(String),

    /// Anything else: bad HTTP status, malformed JSON, transport failures
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl JadxError {
    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            JadxError::Unavailable => "unavailable",
            JadxError::Application(_) => "application",
            JadxError::Unexpected(_) => "unexpected",
        }
    }
}

impl From<reqwest::Error> for JadxError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            JadxError::Unavailable
        } else {
            JadxError::Unexpected(err.to_string())
        }
    }
}

impl From<serde_json::Error> for JadxError {
    fn from(err: serde_json::Error) -> Self {
        JadxError::Unexpected(format!("invalid JSON: {err}"))
    }
}

impl From<JadxError> for McpError {
    fn from(err: JadxError) -> Self {
        let data = json!({ "kind": err.kind() });
        McpError::internal_error(err.to_string(), Some(data))
    }
}

/// Result type alias for forwarded calls
pub type JadxResult<T> = Result<T, JadxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_message() {
        assert_eq!(
            JadxError::Unavailable.to_string(),
            "Jadx MCP server is not running. Please start Jadx and try again."
        );
    }

    #[test]
    fn test_application_message_is_verbatim() {
        let err = JadxError::Application("Class not found: a.b.C".to_string());
        assert_eq!(err.to_string(), "Class not found: a.b.C");
    }

    #[test]
    fn test_into_mcp_error_carries_kind() {
        let err: McpError = JadxError::Unexpected("boom".to_string()).into();
        assert_eq!(err.message, "Unexpected error: boom");
        assert_eq!(err.data, Some(json!({ "kind": "unexpected" })));
    }

    #[test]
    fn test_json_error_is_unexpected() {
        let parse_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = JadxError::from(parse_err);
        assert_eq!(err.kind(), "unexpected");
    }
}
