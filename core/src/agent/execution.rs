//! Turn execution result structures

use super::state::TurnState;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Result of one chat turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnExecution {
    /// Answer handed back to the caller
    pub final_answer: String,

    /// Terminal state the turn ended in
    pub state: TurnState,

    /// Number of function-call round trips
    pub round_trips: usize,

    /// Number of requests sent to the model
    pub model_sends: usize,

    /// Total execution time in milliseconds
    pub duration_ms: u64,

    /// Whether `final_answer` is the fixed fallback
    pub used_fallback: bool,
}

/// Caller-facing outcome of `chat`: exactly one of the fields is set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn success<S: Into<String>>(response: S) -> Self {
        Self {
            response: Some(response.into()),
            error: None,
        }
    }

    pub fn failure<S: Into<String>>(error: S) -> Self {
        Self {
            response: None,
            error: Some(error.into()),
        }
    }

    pub fn from_result(result: &Result<String>) -> Self {
        match result {
            Ok(text) => Self::success(text.clone()),
            Err(err) => Self::failure(err.to_string()),
        }
    }
}
