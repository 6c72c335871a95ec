//! Base tool trait and structures

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;

/// Normalized argument map handed to tool handlers
pub type Arguments = Map<String, Value>;

/// Trait for all tools
///
/// Handlers are synchronous: every tool in this crate is a pure read over
/// in-memory data. Argument problems are reported through
/// [`ToolResult::Error`] so the model can see and correct its own call.
pub trait Tool: Send + Sync {
    /// Declared name, description and parameters
    fn spec(&self) -> &ToolSpec;

    /// Run the tool against already-normalized arguments
    fn invoke(&self, arguments: &Arguments) -> ToolResult;

    /// Get the name of the tool
    fn name(&self) -> &str {
        &self.spec().name
    }

    /// Get the description of the tool
    fn description(&self) -> &str {
        &self.spec().description
    }
}

/// Declared type of a tool parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParamType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    /// A type name we do not recognize; kept verbatim
    Other(String),
}

impl ParamType {
    pub fn as_str(&self) -> &str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Integer => "integer",
            ParamType::Boolean => "boolean",
            ParamType::Array => "array",
            ParamType::Object => "object",
            ParamType::Other(name) => name,
        }
    }
}

impl From<&str> for ParamType {
    fn from(name: &str) -> Self {
        match name {
            "string" => ParamType::String,
            "number" => ParamType::Number,
            "integer" => ParamType::Integer,
            "boolean" => ParamType::Boolean,
            "array" => ParamType::Array,
            "object" => ParamType::Object,
            other => ParamType::Other(other.to_string()),
        }
    }
}

impl From<String> for ParamType {
    fn from(name: String) -> Self {
        ParamType::from(name.as_str())
    }
}

impl From<ParamType> for String {
    fn from(param_type: ParamType) -> Self {
        param_type.as_str().to_string()
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single declared parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter name as the model must send it
    pub name: String,

    #[serde(rename = "type")]
    pub param_type: ParamType,

    pub description: String,

    #[serde(default)]
    pub required: bool,
}

/// Name, description and parameter declarations of a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    /// Parameters in declaration order
    #[serde(default)]
    pub parameters: Vec<ParamSpec>,
}

impl ToolSpec {
    /// Create a spec with no parameters
    pub fn new<S: Into<String>>(name: S, description: S) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    /// Add a parameter
    pub fn with_param<S: Into<String>>(
        mut self,
        name: S,
        param_type: ParamType,
        description: S,
        required: bool,
    ) -> Self {
        self.parameters.push(ParamSpec {
            name: name.into(),
            param_type,
            description: description.into(),
            required,
        });
        self
    }

    /// Names of the required parameters, in declaration order
    pub fn required_params(&self) -> Vec<&str> {
        self.parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect()
    }
}

/// A call to a tool, as requested by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub name: String,

    /// Raw arguments; normalized by the dispatcher before use
    #[serde(default)]
    pub arguments: Value,
}

impl ToolCall {
    /// Create a new tool call
    pub fn new<S: Into<String>>(name: S, arguments: Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// Result of a tool invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolResult {
    /// Successful result text
    Text(String),

    /// Error message meant for the model
    Error(String),
}

impl ToolResult {
    /// Create a successful result
    pub fn text<S: Into<String>>(text: S) -> Self {
        ToolResult::Text(text.into())
    }

    /// Create an error result
    pub fn error<S: Into<String>>(message: S) -> Self {
        ToolResult::Error(message.into())
    }

    /// Serialize `value` as pretty-printed JSON into a text result
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_string_pretty(value) {
            Ok(text) => ToolResult::Text(text),
            Err(e) => ToolResult::Error(format!("failed to serialize result: {}", e)),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ToolResult::Error(_))
    }

    /// The text or error message
    pub fn content(&self) -> &str {
        match self {
            ToolResult::Text(text) | ToolResult::Error(text) => text,
        }
    }

    /// Payload sent back to the model as a function response
    pub fn to_payload(&self) -> Value {
        match self {
            ToolResult::Text(text) => json!({ "result": text }),
            ToolResult::Error(message) => json!({ "error": message }),
        }
    }
}

/// Adapter turning a closure into a [`Tool`]
pub struct FnTool<F> {
    spec: ToolSpec,
    handler: F,
}

impl<F> FnTool<F>
where
    F: Fn(&Arguments) -> ToolResult + Send + Sync,
{
    pub fn new(spec: ToolSpec, handler: F) -> Self {
        Self { spec, handler }
    }
}

impl<F> Tool for FnTool<F>
where
    F: Fn(&Arguments) -> ToolResult + Send + Sync,
{
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    fn invoke(&self, arguments: &Arguments) -> ToolResult {
        (self.handler)(arguments)
    }
}

/// Fetch a required string argument, or the error result the model should see
pub fn require_string<'a>(
    arguments: &'a Arguments,
    key: &str,
) -> std::result::Result<&'a str, ToolResult> {
    arguments
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| ToolResult::error(format!("{} must be a string", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_type_round_trips_unknown_names() {
        let parsed: ParamType = serde_json::from_value(json!("date-time")).unwrap();
        assert_eq!(parsed, ParamType::Other("date-time".to_string()));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), json!("date-time"));
    }

    #[test]
    fn test_require_string_reports_type() {
        let mut args = Arguments::new();
        args.insert("keyword".to_string(), json!(42));

        let err = require_string(&args, "keyword").unwrap_err();
        assert_eq!(err, ToolResult::error("keyword must be a string"));

        let missing = require_string(&Arguments::new(), "id").unwrap_err();
        assert_eq!(missing.content(), "id must be a string");
    }

    #[test]
    fn test_payload_shape() {
        assert_eq!(ToolResult::text("[]").to_payload(), json!({"result": "[]"}));
        assert_eq!(
            ToolResult::error("boom").to_payload(),
            json!({"error": "boom"})
        );
    }

    #[test]
    fn test_required_params_keep_declaration_order() {
        let spec = ToolSpec::new("t", "d")
            .with_param("b", ParamType::String, "second", true)
            .with_param("x", ParamType::Number, "optional", false)
            .with_param("a", ParamType::String, "third", true);
        assert_eq!(spec.required_params(), vec!["b", "a"]);
    }
}
