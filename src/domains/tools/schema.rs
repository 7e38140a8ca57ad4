//! Parameter schemas for table-driven tools.
//!
//! Tools are rows in a data table rather than types, so their MCP input
//! schemas are assembled from [`ParamSpec`] declarations instead of being
//! derived. The output is a plain JSON Schema object suitable for
//! `Tool::input_schema`.

use rmcp::model::JsonObject;
use serde_json::{Value, json};

/// The JSON shape of a single tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Number,
    Boolean,
    StringArray,
    /// Nested-array filter expression (see `filters`).
    Filters,
    /// Array of `"field,direction"` strings (see `ordering`).
    OrderBy,
}

/// Declaration of one tool parameter.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub default: Option<Value>,
    pub description: &'static str,
}

impl ParamSpec {
    /// Declare a required parameter.
    pub fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
            description,
        }
    }

    /// Declare an optional parameter.
    pub fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
            description,
        }
    }

    /// Attach a default value, used when the caller omits the parameter.
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// JSON Schema fragment for this parameter.
    fn schema(&self) -> Value {
        let mut fragment = match self.kind {
            ParamKind::String => json!({ "type": "string" }),
            ParamKind::Integer => json!({ "type": "integer" }),
            ParamKind::Number => json!({ "type": "number" }),
            ParamKind::Boolean => json!({ "type": "boolean" }),
            ParamKind::StringArray => json!({ "type": "array", "items": { "type": "string" } }),
            // Filter conditions nest arbitrarily; leave item types open.
            ParamKind::Filters => json!({ "type": "array" }),
            ParamKind::OrderBy => json!({ "type": "array", "items": { "type": "string" } }),
        };

        let obj = fragment.as_object_mut().unwrap();
        obj.insert("description".to_string(), json!(self.description));
        if let Some(default) = &self.default {
            obj.insert("default".to_string(), default.clone());
        }
        fragment
    }
}

/// Build the MCP input schema object for a parameter list.
pub fn input_schema(params: &[ParamSpec]) -> JsonObject {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();

    for param in params {
        properties.insert(param.name.to_string(), param.schema());
        if param.required {
            required.push(Value::String(param.name.to_string()));
        }
    }

    let mut schema = serde_json::Map::new();
    schema.insert("type".to_string(), json!("object"));
    schema.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".to_string(), Value::Array(required));
    }
    schema
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_schema_shape() {
        let params = vec![
            ParamSpec::required("keyword", ParamKind::String, "Search keyword"),
            ParamSpec::optional("depth", ParamKind::Integer, "Parsing depth")
                .with_default(json!(10)),
            ParamSpec::optional("filters", ParamKind::Filters, "Filter conditions"),
        ];

        let schema = input_schema(&params);
        assert_eq!(schema.get("type"), Some(&json!("object")));

        let properties = schema.get("properties").unwrap().as_object().unwrap();
        assert_eq!(properties.len(), 3);
        assert_eq!(
            properties.get("keyword").unwrap().get("type"),
            Some(&json!("string"))
        );
        assert_eq!(
            properties.get("depth").unwrap().get("default"),
            Some(&json!(10))
        );

        assert_eq!(schema.get("required"), Some(&json!(["keyword"])));
    }

    #[test]
    fn test_no_required_key_when_all_optional() {
        let params = vec![ParamSpec::optional(
            "device",
            ParamKind::String,
            "Device type",
        )];
        let schema = input_schema(&params);
        assert!(schema.get("required").is_none());
    }
}
