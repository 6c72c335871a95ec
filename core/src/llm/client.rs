//! LLM client trait and request/response structures

use crate::config::ModelParams;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::message::{Content, Part};
use super::schema::FunctionDeclaration;

/// Trait for LLM clients
///
/// Implementations perform exactly one provider call per `generate` and never
/// retry; callers decide what a failure means for the conversation.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send the full conversation and return the model's next reply
    async fn generate(&self, request: &GenerateRequest) -> Result<ModelReply>;

    /// Get the model name
    fn model_name(&self) -> &str;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}

/// Everything the provider needs for one generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    /// Persona and behavioural rules, sent out of band from the history
    pub system_instruction: Option<String>,

    /// Conversation so far, oldest first
    pub contents: Vec<Content>,

    /// Functions the model may call; empty disables tool calling
    pub tools: Vec<FunctionDeclaration>,

    pub generation_config: GenerationConfig,
}

/// Reply from the model
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelReply {
    /// Content of the first candidate, if the provider returned any
    pub content: Option<Content>,

    /// Usage statistics
    pub usage: Option<Usage>,

    /// Finish reason as reported by the provider
    pub finish_reason: Option<String>,
}

impl ModelReply {
    /// Reply consisting of a single part authored by the model
    pub fn from_part(part: Part) -> Self {
        Self {
            content: Some(Content {
                role: super::message::Role::Model,
                parts: vec![part],
            }),
            usage: None,
            finish_reason: None,
        }
    }

    /// First part of the first candidate
    pub fn first_part(&self) -> Option<&Part> {
        self.content.as_ref().and_then(Content::first_part)
    }
}

/// Usage statistics for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Usage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,

    /// Number of tokens in the completion
    pub completion_tokens: u32,

    /// Total number of tokens
    pub total_tokens: u32,
}

/// Sampling parameters sent with every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: Some(0.7),
            top_p: Some(0.95),
            top_k: Some(40),
            max_output_tokens: Some(2048),
            stop_sequences: None,
        }
    }
}

impl From<&ModelParams> for GenerationConfig {
    /// Explicit params win; anything unset keeps the default
    fn from(params: &ModelParams) -> Self {
        let defaults = Self::default();
        Self {
            temperature: params.temperature.or(defaults.temperature),
            top_p: params.top_p.or(defaults.top_p),
            top_k: params.top_k.or(defaults.top_k),
            max_output_tokens: params.max_tokens.or(defaults.max_output_tokens),
            stop_sequences: params.stop_sequences.clone(),
        }
    }
}
