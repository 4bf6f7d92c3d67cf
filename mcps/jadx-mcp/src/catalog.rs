//! Tool catalog and registry
//!
//! [`CATALOG`] is the single list of tools this server exposes. Each entry
//! forwards to the identically named tool of the Jadx plugin. At startup the
//! catalog is turned into a [`ToolRegistry`], the name → handler map consulted
//! by `tools/list` and `tools/call`.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::handler::server::common::schema_for_type;
use rmcp::model::{JsonObject, Tool, ToolAnnotations};
use schemars::JsonSchema;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::params::*;
use crate::types::ToolRequest;

pub const LIST_ALL_CLASSES: &str = "list_all_classes";
pub const SEARCH_CLASS_BY_NAME: &str = "search_class_by_name";
pub const GET_CLASS_SOURCE: &str = "get_class_source";
pub const SEARCH_METHOD_BY_NAME: &str = "search_method_by_name";
pub const GET_METHODS_OF_CLASS: &str = "get_methods_of_class";
pub const GET_FIELDS_OF_CLASS: &str = "get_fields_of_class";
pub const GET_METHOD_CODE: &str = "get_method_code";
pub const GET_ANDROID_MANIFEST: &str = "get_android_manifest";
pub const GET_ALL_RESOURCE_FILE_NAMES: &str = "get_all_resource_file_names";
pub const GET_RESOURCE_FILE: &str = "get_resource_file";
pub const GET_CLASS_XREFS: &str = "get_class_xrefs";
pub const GET_METHOD_XREFS: &str = "get_method_xrefs";
pub const GET_FIELD_XREFS: &str = "get_field_xrefs";

/// Validates raw MCP arguments and packages them as plugin parameters
pub type EncodeFn = fn(JsonObject) -> Result<JsonObject, serde_json::Error>;

/// Produces the JSON Schema advertised for a tool's arguments
pub type SchemaFn = fn() -> Arc<JsonObject>;

/// Static description of one forwarded tool
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub schema: SchemaFn,
    pub encode: EncodeFn,
}

impl ToolSpec {
    const fn new<P>(name: &'static str, description: &'static str) -> Self
    where
        P: JsonSchema + DeserializeOwned + Serialize + 'static,
    {
        Self {
            name,
            description,
            schema: schema_for_type::<P>,
            encode: encode_params::<P>,
        }
    }

    /// MCP tool definition for `tools/list`
    pub fn to_tool(&self) -> Tool {
        Tool::new(self.name, self.description, (self.schema)())
            .annotate(ToolAnnotations::new().read_only(true))
    }
}

/// Round-trip the arguments through `P`: rejects malformed input, fills
/// defaults and drops absent optionals.
fn encode_params<P>(arguments: JsonObject) -> Result<JsonObject, serde_json::Error>
where
    P: DeserializeOwned + Serialize,
{
    let params: P = serde_json::from_value(Value::Object(arguments))?;
    match serde_json::to_value(params)? {
        Value::Object(parameters) => Ok(parameters),
        _ => Ok(JsonObject::new()),
    }
}

/// Every tool exposed by the server, in listing order
pub static CATALOG: &[ToolSpec] = &[
    ToolSpec::new::<ListClassesParams>(
        LIST_ALL_CLASSES,
        "Returns a paginated list of class names (limit default 250, offset default 0).",
    ),
    ToolSpec::new::<SearchClassParams>(
        SEARCH_CLASS_BY_NAME,
        "Search for class names that contain the given query string (case-insensitive).",
    ),
    ToolSpec::new::<ClassParams>(
        GET_CLASS_SOURCE,
        "Returns the full decompiled source code of a given class.",
    ),
    ToolSpec::new::<MethodSearchParams>(
        SEARCH_METHOD_BY_NAME,
        "Searches for all methods matching the provided name. Returns class and method pairs.",
    ),
    ToolSpec::new::<ClassParams>(
        GET_METHODS_OF_CLASS,
        "Returns all method names declared in the specified class.",
    ),
    ToolSpec::new::<ClassParams>(
        GET_FIELDS_OF_CLASS,
        "Returns all field names declared in the specified class.",
    ),
    ToolSpec::new::<MethodParams>(
        GET_METHOD_CODE,
        "Returns only the source code block of a specific method within a class.",
    ),
    ToolSpec::new::<EmptyParams>(
        GET_ANDROID_MANIFEST,
        "Returns the content of AndroidManifest.xml.",
    ),
    ToolSpec::new::<ResourceListParams>(
        GET_ALL_RESOURCE_FILE_NAMES,
        "Returns a list of all resource file names in the APK (optionally paginated).",
    ),
    ToolSpec::new::<ResourceParams>(
        GET_RESOURCE_FILE,
        "Returns the content of a specific resource file.",
    ),
    ToolSpec::new::<ClassParams>(GET_CLASS_XREFS, "Returns all references to a class."),
    ToolSpec::new::<MethodParams>(GET_METHOD_XREFS, "Returns all references to a method."),
    ToolSpec::new::<FieldParams>(GET_FIELD_XREFS, "Returns all references to a field."),
];

/// A catalog entry together with its prebuilt MCP definition
pub struct RegisteredTool {
    pub spec: &'static ToolSpec,
    pub tool: Tool,
}

impl RegisteredTool {
    /// Validate MCP arguments and build the request forwarded to the plugin
    pub fn request(&self, arguments: Option<JsonObject>) -> Result<ToolRequest, serde_json::Error> {
        let parameters = (self.spec.encode)(arguments.unwrap_or_default())?;
        Ok(ToolRequest::new(self.spec.name, parameters))
    }
}

/// Name → tool map built once at startup
pub struct ToolRegistry {
    order: Vec<&'static str>,
    tools: HashMap<&'static str, RegisteredTool>,
}

impl ToolRegistry {
    /// Registry holding the full [`CATALOG`]
    pub fn new() -> Self {
        Self::from_specs(CATALOG)
    }

    pub fn from_specs(specs: &'static [ToolSpec]) -> Self {
        let mut order = Vec::with_capacity(specs.len());
        let mut tools = HashMap::with_capacity(specs.len());

        for spec in specs {
            let registered = RegisteredTool {
                spec,
                tool: spec.to_tool(),
            };
            if tools.insert(spec.name, registered).is_none() {
                order.push(spec.name);
            } else {
                tracing::warn!(tool = spec.name, "Duplicate tool in catalog, keeping the last");
            }
        }

        Self { order, tools }
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.get(name)
    }

    /// MCP definitions in catalog order
    pub fn tools(&self) -> Vec<Tool> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|registered| registered.tool.clone())
            .collect()
    }

    pub fn names(&self) -> &[&'static str] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Option<JsonObject> {
        match value {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    #[test]
    fn test_registry_has_all_tools() {
        let registry = ToolRegistry::new();
        assert_eq!(registry.len(), 13);
        assert_eq!(registry.names()[0], LIST_ALL_CLASSES);
        assert!(registry.get(GET_FIELD_XREFS).is_some());
        assert!(registry.get("get_tools").is_none());
    }

    #[test]
    fn test_tool_names_unique() {
        let mut names: Vec<_> = CATALOG.iter().map(|spec| spec.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn test_schemas_are_objects() {
        for tool in ToolRegistry::new().tools() {
            assert_eq!(
                tool.input_schema.get("type"),
                Some(&json!("object")),
                "schema of {} is not an object",
                tool.name
            );
            assert!(tool.description.is_some());
        }
    }

    #[test]
    fn test_list_classes_request_applies_defaults() {
        let registry = ToolRegistry::new();
        let request = registry.get(LIST_ALL_CLASSES).unwrap().request(None).unwrap();
        assert_eq!(request.tool, "list_all_classes");
        assert_eq!(
            Value::Object(request.parameters),
            json!({"limit": 250, "offset": 0})
        );
    }

    #[test]
    fn test_manifest_request_is_empty() {
        let registry = ToolRegistry::new();
        let request = registry
            .get(GET_ANDROID_MANIFEST)
            .unwrap()
            .request(args(json!({})))
            .unwrap();
        assert!(request.parameters.is_empty());
    }

    #[test]
    fn test_resource_names_pagination_is_optional() {
        let registry = ToolRegistry::new();
        let tool = registry.get(GET_ALL_RESOURCE_FILE_NAMES).unwrap();

        let request = tool.request(None).unwrap();
        assert!(request.parameters.is_empty());

        let request = tool.request(args(json!({"offset": 20}))).unwrap();
        assert_eq!(Value::Object(request.parameters), json!({"offset": 20}));
    }

    #[test]
    fn test_missing_argument_is_rejected() {
        let registry = ToolRegistry::new();
        let result = registry
            .get(GET_FIELD_XREFS)
            .unwrap()
            .request(args(json!({"class_name": "a.B"})));
        assert!(result.is_err());
    }
}
