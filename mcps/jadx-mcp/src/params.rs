//! Parameter types for Jadx MCP tools
//!
//! Each struct is both the JSON Schema advertised in `tools/list` and the
//! exact `parameters` object forwarded to the plugin.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default page size of paginated listings
pub const DEFAULT_LIMIT: u32 = 250;

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct EmptyParams {}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListClassesParams {
    #[schemars(description = "Max number of classes to return (default: 250)")]
    #[serde(default = "default_limit")]
    pub limit: u32,

    #[schemars(description = "Starting index of the class list (default: 0)")]
    #[serde(default)]
    pub offset: u32,
}

impl Default for ListClassesParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchClassParams {
    #[schemars(description = "Substring to look for in class names (case-insensitive)")]
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ClassParams {
    #[schemars(description = "Fully qualified class name, e.g. com.example.MainActivity")]
    pub class_name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MethodSearchParams {
    #[schemars(description = "Method name to search for across all classes")]
    pub method_name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MethodParams {
    #[schemars(description = "Fully qualified name of the declaring class")]
    pub class_name: String,

    #[schemars(description = "Name of the method")]
    pub method_name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct FieldParams {
    #[schemars(description = "Fully qualified name of the declaring class")]
    pub class_name: String,

    #[schemars(description = "Name of the field")]
    pub field_name: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ResourceListParams {
    #[schemars(
        description = "Max number of resource names to return (optional, server default: 250)"
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[schemars(description = "Starting index of the resource list (optional, server default: 0)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ResourceParams {
    #[schemars(description = "Resource file name as listed by get_all_resource_file_names")]
    pub resource_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_classes_defaults() {
        let params: ListClassesParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params.limit, 250);
        assert_eq!(params.offset, 0);
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"limit": 250, "offset": 0})
        );
    }

    #[test]
    fn test_resource_list_omits_absent_fields() {
        let params = ResourceListParams::default();
        assert_eq!(serde_json::to_value(&params).unwrap(), json!({}));

        let params = ResourceListParams {
            limit: Some(10),
            offset: None,
        };
        assert_eq!(serde_json::to_value(&params).unwrap(), json!({"limit": 10}));
    }

    #[test]
    fn test_missing_required_field() {
        let result = serde_json::from_value::<MethodParams>(json!({"class_name": "a.B"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_limit_rejected() {
        let result = serde_json::from_value::<ListClassesParams>(json!({"limit": -1}));
        assert!(result.is_err());
    }
}
