//! Typed Jadx operations
//!
//! One function per catalog tool, for callers that use the crate as a library
//! instead of going through MCP. Each one forwards unchanged to the plugin tool
//! of the same name.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::backend::JadxBackend;
use crate::catalog::*;
use crate::error::{JadxError, JadxResult};
use crate::params::*;
use crate::types::ToolRequest;

/// Forward `params` to `tool` and return the unwrapped result
pub async fn forward<P: Serialize>(
    backend: &dyn JadxBackend,
    tool: &str,
    params: &P,
) -> JadxResult<Value> {
    let request = ToolRequest::from_params(tool, params)?;
    backend.invoke(&request).await
}

pub async fn list_all_classes(
    backend: &dyn JadxBackend,
    limit: u32,
    offset: u32,
) -> JadxResult<Value> {
    forward(backend, LIST_ALL_CLASSES, &ListClassesParams { limit, offset }).await
}

pub async fn search_class_by_name(backend: &dyn JadxBackend, query: &str) -> JadxResult<Value> {
    let params = SearchClassParams {
        query: query.to_string(),
    };
    forward(backend, SEARCH_CLASS_BY_NAME, &params).await
}

pub async fn get_class_source(backend: &dyn JadxBackend, class_name: &str) -> JadxResult<Value> {
    forward(backend, GET_CLASS_SOURCE, &class(class_name)).await
}

pub async fn search_method_by_name(
    backend: &dyn JadxBackend,
    method_name: &str,
) -> JadxResult<Value> {
    let params = MethodSearchParams {
        method_name: method_name.to_string(),
    };
    forward(backend, SEARCH_METHOD_BY_NAME, &params).await
}

pub async fn get_methods_of_class(
    backend: &dyn JadxBackend,
    class_name: &str,
) -> JadxResult<Value> {
    forward(backend, GET_METHODS_OF_CLASS, &class(class_name)).await
}

pub async fn get_fields_of_class(backend: &dyn JadxBackend, class_name: &str) -> JadxResult<Value> {
    forward(backend, GET_FIELDS_OF_CLASS, &class(class_name)).await
}

pub async fn get_method_code(
    backend: &dyn JadxBackend,
    class_name: &str,
    method_name: &str,
) -> JadxResult<Value> {
    forward(backend, GET_METHOD_CODE, &method(class_name, method_name)).await
}

pub async fn get_android_manifest(backend: &dyn JadxBackend) -> JadxResult<Value> {
    backend.invoke(&ToolRequest::bare(GET_ANDROID_MANIFEST)).await
}

pub async fn get_all_resource_file_names(
    backend: &dyn JadxBackend,
    params: ResourceListParams,
) -> JadxResult<Value> {
    forward(backend, GET_ALL_RESOURCE_FILE_NAMES, &params).await
}

pub async fn get_resource_file(
    backend: &dyn JadxBackend,
    resource_name: &str,
) -> JadxResult<Value> {
    let params = ResourceParams {
        resource_name: resource_name.to_string(),
    };
    forward(backend, GET_RESOURCE_FILE, &params).await
}

pub async fn get_class_xrefs(backend: &dyn JadxBackend, class_name: &str) -> JadxResult<Value> {
    forward(backend, GET_CLASS_XREFS, &class(class_name)).await
}

pub async fn get_method_xrefs(
    backend: &dyn JadxBackend,
    class_name: &str,
    method_name: &str,
) -> JadxResult<Value> {
    forward(backend, GET_METHOD_XREFS, &method(class_name, method_name)).await
}

pub async fn get_field_xrefs(
    backend: &dyn JadxBackend,
    class_name: &str,
    field_name: &str,
) -> JadxResult<Value> {
    let params = FieldParams {
        class_name: class_name.to_string(),
        field_name: field_name.to_string(),
    };
    forward(backend, GET_FIELD_XREFS, &params).await
}

/// The plugin's tool catalog, verbatim
pub async fn get_tools_resource(backend: &dyn JadxBackend) -> JadxResult<Value> {
    backend.fetch_tools().await
}

/// Fetch the tool catalog, giving up after `limit`
///
/// Used at startup, before the MCP handshake. A plugin that accepts the
/// connection but never answers is reported as unavailable.
pub async fn check_plugin(backend: &dyn JadxBackend, limit: Duration) -> JadxResult<Value> {
    match tokio::time::timeout(limit, backend.fetch_tools()).await {
        Ok(result) => result,
        Err(_) => {
            tracing::debug!(?limit, "Jadx plugin did not answer in time");
            Err(JadxError::Unavailable)
        }
    }
}

fn class(class_name: &str) -> ClassParams {
    ClassParams {
        class_name: class_name.to_string(),
    }
}

fn method(class_name: &str, method_name: &str) -> MethodParams {
    MethodParams {
        class_name: class_name.to_string(),
        method_name: method_name.to_string(),
    }
}
