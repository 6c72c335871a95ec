//! Per-turn chat session over an [`LlmClient`]

use crate::error::Result;
use serde_json::Value;
use tracing::debug;

use super::client::{GenerateRequest, GenerationConfig, LlmClient, ModelReply};
use super::message::{Content, Part};
use super::schema::FunctionDeclaration;

/// Growing conversation history bound to one client and one tool set.
///
/// A session lives for a single user turn; nothing is shared between
/// sessions.
pub struct ChatSession<'a> {
    client: &'a dyn LlmClient,
    system_instruction: Option<&'a str>,
    tools: &'a [FunctionDeclaration],
    generation_config: &'a GenerationConfig,
    history: Vec<Content>,
    sends: usize,
}

impl<'a> ChatSession<'a> {
    pub fn new(
        client: &'a dyn LlmClient,
        system_instruction: Option<&'a str>,
        tools: &'a [FunctionDeclaration],
        generation_config: &'a GenerationConfig,
    ) -> Self {
        Self {
            client,
            system_instruction,
            tools,
            generation_config,
            history: Vec::new(),
            sends: 0,
        }
    }

    /// Append a user message and ask the model for its reply
    pub async fn send_message(&mut self, text: &str) -> Result<ModelReply> {
        self.send(Content::user(text)).await
    }

    /// Append a function response and ask the model to continue
    pub async fn send_function_result(&mut self, name: &str, payload: Value) -> Result<ModelReply> {
        self.send(Content::function_response(name, payload)).await
    }

    /// Number of requests sent to the provider
    pub fn sends(&self) -> usize {
        self.sends
    }

    async fn send(&mut self, content: Content) -> Result<ModelReply> {
        self.history.push(content);

        let request = GenerateRequest {
            system_instruction: self.system_instruction.map(str::to_string),
            contents: self.history.clone(),
            tools: self.tools.to_vec(),
            generation_config: self.generation_config.clone(),
        };

        self.sends += 1;
        debug!(
            send = self.sends,
            history_len = self.history.len(),
            model = self.client.model_name(),
            "Sending conversation to model"
        );
        let reply = self.client.generate(&request).await?;

        if let Some(usage) = &reply.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Model usage"
            );
        }

        if let Some(content) = &reply.content {
            self.history.push(recorded_reply(content));
        }

        Ok(reply)
    }
}

/// What goes into history for a model reply.
///
/// A leading function call is recorded alone: every call in a model turn
/// must be answered by its own function response.
fn recorded_reply(content: &Content) -> Content {
    match content.first_part() {
        Some(call @ Part::FunctionCall { .. }) if content.parts.len() > 1 => {
            debug!(
                dropped = content.parts.len() - 1,
                "Keeping only the first function call of the reply"
            );
            Content {
                role: content.role,
                parts: vec![call.clone()],
            }
        }
        _ => content.clone(),
    }
}
