//! Error types and handling for faqbot core

use thiserror::Error;

/// Result type alias for faqbot operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for faqbot core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// LLM provider errors
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// Tool lookup and dispatch errors
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// Conversation loop errors
    #[error("Agent error: {0}")]
    Agent(#[from] AgentError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse classification of an [`Error`], as seen by callers of the chat API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected before the conversation loop started
    InvalidInput,
    /// The model asked for a tool that is not registered
    ToolNotFound,
    /// The model's call arguments could not be normalized
    MalformedArguments,
    /// Network, auth or non-success status talking to the provider
    ProviderTransport,
    /// The provider answered with something we could not interpret
    ProviderProtocol,
    /// Wall-clock deadline or round-trip bound exceeded
    Timeout,
    /// Startup-time failures (configuration, IO, serialization)
    Internal,
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Duplicate FAQ id: {id}")]
    DuplicateFaqId { id: String },
}

/// LLM provider errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Unexpected response: {message}")]
    Protocol { message: String },
}

/// Tool registry and dispatch errors
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Tool not found: {name}")]
    NotFound { name: String },

    #[error("Tool already registered: {name}")]
    AlreadyRegistered { name: String },

    #[error("Malformed arguments for {name}: {message}")]
    MalformedArguments { name: String, message: String },
}

/// Conversation loop errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Turn timed out after {timeout_ms}ms")]
    TurnTimeout { timeout_ms: u64 },

    #[error("Maximum function-call round trips exceeded: {max_round_trips}")]
    MaxRoundTripsExceeded { max_round_trips: usize },
}

impl Error {
    /// Classify this error into one of the caller-visible kinds
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Agent(AgentError::InvalidInput { .. }) => ErrorKind::InvalidInput,
            Error::Agent(AgentError::TurnTimeout { .. })
            | Error::Agent(AgentError::MaxRoundTripsExceeded { .. }) => ErrorKind::Timeout,
            Error::Tool(ToolError::NotFound { .. }) => ErrorKind::ToolNotFound,
            Error::Tool(ToolError::MalformedArguments { .. }) => ErrorKind::MalformedArguments,
            Error::Tool(ToolError::AlreadyRegistered { .. }) => ErrorKind::Internal,
            Error::Llm(LlmError::Protocol { .. }) => ErrorKind::ProviderProtocol,
            Error::Llm(_) => ErrorKind::ProviderTransport,
            Error::Config(_) | Error::Io(_) | Error::Serialization(_) => ErrorKind::Internal,
        }
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::Network {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_limit_is_timeout_class() {
        let err: Error = AgentError::MaxRoundTripsExceeded { max_round_trips: 8 }.into();
        assert_eq!(err.kind(), ErrorKind::Timeout);
    }

    #[test]
    fn test_kind_classification() {
        let not_found: Error = ToolError::NotFound {
            name: "nope".to_string(),
        }
        .into();
        assert_eq!(not_found.kind(), ErrorKind::ToolNotFound);

        let protocol: Error = LlmError::Protocol {
            message: "no candidates field".to_string(),
        }
        .into();
        assert_eq!(protocol.kind(), ErrorKind::ProviderProtocol);

        let status: Error = LlmError::ApiError {
            status: 503,
            message: "overloaded".to_string(),
        }
        .into();
        assert_eq!(status.kind(), ErrorKind::ProviderTransport);

        let input: Error = AgentError::InvalidInput {
            message: "empty".to_string(),
        }
        .into();
        assert_eq!(input.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_display_includes_layer_prefix() {
        let err: Error = ToolError::NotFound {
            name: "delete_everything".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Tool error: Tool not found: delete_everything");
    }
}
