//! Conversation content exchanged with the model
//!
//! The shapes follow the Gemini `Content`/`Part` wire format so they can be
//! sent and received without a separate mapping layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of the content author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// End user input and function responses
    User,

    /// Model output, including function-call requests
    Model,
}

/// A model-issued request to run a function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,

    /// Omitted by the provider for parameterless calls
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub args: Value,
}

/// The result of a function call, sent back to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionResponse {
    pub name: String,
    pub response: Value,
}

/// One part of a [`Content`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    FunctionCall {
        #[serde(rename = "functionCall")]
        function_call: FunctionCall,
    },
    FunctionResponse {
        #[serde(rename = "functionResponse")]
        function_response: FunctionResponse,
    },
    /// Anything else the provider may send (inline data, code execution, ...)
    Other(Value),
}

/// A single message in the conversation history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub role: Role,

    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Part {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn function_call<S: Into<String>>(name: S, args: Value) -> Self {
        Part::FunctionCall {
            function_call: FunctionCall {
                name: name.into(),
                args,
            },
        }
    }

    pub fn function_response<S: Into<String>>(name: S, response: Value) -> Self {
        Part::FunctionResponse {
            function_response: FunctionResponse {
                name: name.into(),
                response,
            },
        }
    }
}

impl Content {
    /// User text message
    pub fn user<S: Into<String>>(text: S) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part::text(text)],
        }
    }

    /// Function response message
    pub fn function_response<S: Into<String>>(name: S, response: Value) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part::function_response(name, response)],
        }
    }

    pub fn first_part(&self) -> Option<&Part> {
        self.parts.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parts_deserialize_by_shape() {
        let content: Content = serde_json::from_value(json!({
            "role": "model",
            "parts": [
                {"functionCall": {"name": "search_faqs", "args": {"keyword": "billing"}}},
                {"text": "Let me check."},
                {"inlineData": {"mimeType": "image/png", "data": "AAAA"}}
            ]
        }))
        .unwrap();

        assert_eq!(
            content.parts[0],
            Part::function_call("search_faqs", json!({"keyword": "billing"}))
        );
        assert_eq!(content.parts[1], Part::text("Let me check."));
        assert!(matches!(content.parts[2], Part::Other(_)));
    }

    #[test]
    fn test_function_call_without_args() {
        let part: Part =
            serde_json::from_value(json!({"functionCall": {"name": "get_categories"}})).unwrap();
        assert_eq!(part, Part::function_call("get_categories", Value::Null));

        // Null args are not echoed back to the provider
        let encoded = serde_json::to_value(&part).unwrap();
        assert_eq!(encoded, json!({"functionCall": {"name": "get_categories"}}));
    }

    #[test]
    fn test_function_response_wire_shape() {
        let content = Content::function_response("get_faq_by_id", json!({"result": "{}"}));
        assert_eq!(
            serde_json::to_value(&content).unwrap(),
            json!({
                "role": "user",
                "parts": [{"functionResponse": {"name": "get_faq_by_id", "response": {"result": "{}"}}}]
            })
        );
    }

    #[test]
    fn test_missing_parts_is_empty() {
        let content: Content = serde_json::from_value(json!({"role": "model"})).unwrap();
        assert!(content.first_part().is_none());
    }
}
