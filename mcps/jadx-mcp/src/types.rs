//! Wire types exchanged with the Jadx plugin
//!
//! Payloads stay as [`serde_json::Value`]: decompiled sources, class names and
//! resource contents are ferried through without being inspected.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{JadxError, JadxResult};

/// Body of a `POST /invoke` request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRequest {
    /// Name of the remote tool
    pub tool: String,
    /// Tool arguments, empty for tools that take none
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

impl ToolRequest {
    pub fn new(tool: impl Into<String>, parameters: Map<String, Value>) -> Self {
        Self {
            tool: tool.into(),
            parameters,
        }
    }

    /// Request for a tool without arguments
    pub fn bare(tool: impl Into<String>) -> Self {
        Self::new(tool, Map::new())
    }

    /// Build a request from any serializable parameter struct
    ///
    /// Absent optional fields are expected to be skipped by the struct's
    /// serde attributes, never sent as `null`.
    pub fn from_params<P: Serialize>(tool: impl Into<String>, params: &P) -> JadxResult<Self> {
        match serde_json::to_value(params)? {
            Value::Object(parameters) => Ok(Self::new(tool, parameters)),
            Value::Null => Ok(Self::bare(tool)),
            other => Err(JadxError::Unexpected(format!(
                "tool parameters must be a JSON object, got {other}"
            ))),
        }
    }
}

/// Unwrap a plugin response body
///
/// An object with an `error` key is an application failure. Otherwise the
/// `result` member is returned, or the whole body when there is none.
pub fn unwrap_response(body: Value) -> JadxResult<Value> {
    match reject_error(body)? {
        Value::Object(mut map) => match map.remove("result") {
            Some(result) => Ok(result),
            None => Ok(Value::Object(map)),
        },
        other => Ok(other),
    }
}

/// Fail with the body's `error` member if it has one, else hand it back untouched
pub fn reject_error(body: Value) -> JadxResult<Value> {
    match body.get("error") {
        Some(Value::String(message)) => Err(JadxError::Application(message.clone())),
        Some(other) => Err(JadxError::Application(other.to_string())),
        None => Ok(body),
    }
}
