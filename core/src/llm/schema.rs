//! Translation of tool specs into provider function declarations

use crate::tools::{ParamType, ToolSpec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Provider schema type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

/// Parameter schema in the provider's OpenAPI subset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

/// A function the model may call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,

    /// Absent for parameterless functions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Schema>,
}

impl From<&ParamType> for SchemaType {
    fn from(param_type: &ParamType) -> Self {
        match param_type {
            ParamType::String => SchemaType::String,
            ParamType::Number => SchemaType::Number,
            ParamType::Integer => SchemaType::Integer,
            ParamType::Boolean => SchemaType::Boolean,
            ParamType::Array => SchemaType::Array,
            ParamType::Object => SchemaType::Object,
            ParamType::Other(name) => {
                debug!("Unsupported parameter type '{}', declaring as STRING", name);
                SchemaType::String
            }
        }
    }
}

/// Build one declaration per spec, preserving order.
///
/// Unknown parameter types degrade to `STRING`. An empty input yields an
/// empty list, which disables tool calling for the session.
pub fn translate<'a, I>(specs: I) -> Vec<FunctionDeclaration>
where
    I: IntoIterator<Item = &'a ToolSpec>,
{
    specs.into_iter().map(declaration_for).collect()
}

fn declaration_for(spec: &ToolSpec) -> FunctionDeclaration {
    let parameters = if spec.parameters.is_empty() {
        None
    } else {
        let properties = spec
            .parameters
            .iter()
            .map(|param| {
                let schema = Schema {
                    schema_type: SchemaType::from(&param.param_type),
                    description: Some(param.description.clone()),
                    properties: BTreeMap::new(),
                    required: Vec::new(),
                };
                (param.name.clone(), schema)
            })
            .collect();

        Some(Schema {
            schema_type: SchemaType::Object,
            description: None,
            properties,
            required: spec
                .required_params()
                .into_iter()
                .map(String::from)
                .collect(),
        })
    };

    FunctionDeclaration {
        name: spec.name.clone(),
        description: spec.description.clone(),
        parameters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_specs_translate_to_nothing() {
        let specs: Vec<ToolSpec> = Vec::new();
        assert!(translate(&specs).is_empty());
    }

    #[test]
    fn test_translate_maps_types_and_required() {
        let spec = ToolSpec::new("lookup", "Look things up")
            .with_param("query", ParamType::String, "What to look up", true)
            .with_param("limit", ParamType::Integer, "Max results", false)
            .with_param("exact", ParamType::Boolean, "Exact match only", false);

        let declarations = translate([&spec]);
        assert_eq!(declarations.len(), 1);

        let encoded = serde_json::to_value(&declarations[0]).unwrap();
        assert_eq!(
            encoded,
            json!({
                "name": "lookup",
                "description": "Look things up",
                "parameters": {
                    "type": "OBJECT",
                    "properties": {
                        "exact": {"type": "BOOLEAN", "description": "Exact match only"},
                        "limit": {"type": "INTEGER", "description": "Max results"},
                        "query": {"type": "STRING", "description": "What to look up"}
                    },
                    "required": ["query"]
                }
            })
        );
    }

    #[test]
    fn test_unknown_type_falls_back_to_string() {
        let spec = ToolSpec::new("when", "Parse a date").with_param(
            "at",
            ParamType::from("date-time"),
            "Timestamp",
            true,
        );

        let declaration = &translate([&spec])[0];
        let params = declaration.parameters.as_ref().unwrap();
        assert_eq!(params.properties["at"].schema_type, SchemaType::String);
    }

    #[test]
    fn test_parameterless_tool_omits_parameters() {
        let spec = ToolSpec::new("get_categories", "List categories");
        let declaration = &translate([&spec])[0];
        assert!(declaration.parameters.is_none());
        assert_eq!(
            serde_json::to_value(declaration).unwrap(),
            json!({"name": "get_categories", "description": "List categories"})
        );
    }
}
