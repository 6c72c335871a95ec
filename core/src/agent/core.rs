//! The chat turn loop

use super::base::ChatAgent;
use super::config::AgentConfig;
use super::execution::TurnExecution;
use super::prompt::{build_system_instruction, FALLBACK_ANSWER, SYSTEM_INSTRUCTION};
use super::state::{StateTracker, TurnState};
use crate::error::{AgentError, Result};
use crate::llm::{translate, ChatSession, FunctionDeclaration, GenerationConfig, LlmClient, Part};
use crate::tools::{ToolCall, ToolDispatcher, ToolRegistry};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

/// FAQ assistant: drives the model through function calls until it answers.
///
/// Everything held here is immutable after construction, so one agent can
/// serve any number of concurrent turns.
pub struct FaqAgent {
    config: AgentConfig,
    client: Arc<dyn LlmClient>,
    dispatcher: ToolDispatcher,
    declarations: Vec<FunctionDeclaration>,
    system_instruction: String,
    generation_config: GenerationConfig,
}

impl FaqAgent {
    pub fn new(
        config: AgentConfig,
        client: Arc<dyn LlmClient>,
        registry: Arc<ToolRegistry>,
        generation_config: GenerationConfig,
    ) -> Self {
        let specs = registry.list_specs();
        let declarations = translate(specs.iter().copied());
        let base = config.system_prompt.as_deref().unwrap_or(SYSTEM_INSTRUCTION);
        let system_instruction = build_system_instruction(base, &specs);

        info!(
            model = client.model_name(),
            provider = client.provider_name(),
            tools = declarations.len(),
            "FAQ agent ready"
        );

        Self {
            config,
            client,
            dispatcher: ToolDispatcher::new(registry),
            declarations,
            system_instruction,
            generation_config,
        }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn generation_config(&self) -> &GenerationConfig {
        &self.generation_config
    }

    pub fn declarations(&self) -> &[FunctionDeclaration] {
        &self.declarations
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// Run one turn and return only the answer
    pub async fn chat(&self, message: &str) -> Result<String> {
        self.execute_turn(message)
            .await
            .map(|execution| execution.final_answer)
    }

    /// Run one turn with a fresh history, bounded by the turn timeout
    pub async fn execute_turn(&self, message: &str) -> Result<TurnExecution> {
        if message.trim().is_empty() {
            return Err(AgentError::InvalidInput {
                message: "Message cannot be empty".to_string(),
            }
            .into());
        }

        let turn_id = Uuid::new_v4();
        let span = info_span!("turn", %turn_id);
        let timeout_ms = self.config.turn_timeout_ms;

        let outcome = tokio::time::timeout(Duration::from_millis(timeout_ms), self.run(message))
            .instrument(span.clone())
            .await;

        match outcome {
            Ok(result) => result,
            Err(_) => {
                span.in_scope(|| warn!(timeout_ms, "Turn timed out"));
                Err(AgentError::TurnTimeout { timeout_ms }.into())
            }
        }
    }

    async fn run(&self, message: &str) -> Result<TurnExecution> {
        let started = Instant::now();
        let mut session = ChatSession::new(
            self.client.as_ref(),
            Some(self.system_instruction.as_str()),
            &self.declarations,
            &self.generation_config,
        );
        let mut tracker = StateTracker::new();

        let result = self.drive(&mut session, &mut tracker, message).await;
        let duration_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok((final_answer, used_fallback)) => {
                info!(
                    round_trips = tracker.round_trips(),
                    model_sends = session.sends(),
                    duration_ms,
                    used_fallback,
                    "Turn completed"
                );
                Ok(TurnExecution {
                    final_answer,
                    state: tracker.state(),
                    round_trips: tracker.round_trips(),
                    model_sends: session.sends(),
                    duration_ms,
                    used_fallback,
                })
            }
            Err(err) => {
                warn!(
                    error = %err,
                    state = %tracker.state(),
                    round_trips = tracker.round_trips(),
                    duration_ms,
                    "Turn failed"
                );
                Err(err)
            }
        }
    }

    /// Returns the answer and whether it is the fallback; leaves `tracker`
    /// in a terminal state either way
    async fn drive(
        &self,
        session: &mut ChatSession<'_>,
        tracker: &mut StateTracker,
        message: &str,
    ) -> Result<(String, bool)> {
        let result = self.converse(session, tracker, message).await;
        if result.is_err() {
            tracker.advance(TurnState::Failed);
        }
        result
    }

    async fn converse(
        &self,
        session: &mut ChatSession<'_>,
        tracker: &mut StateTracker,
        message: &str,
    ) -> Result<(String, bool)> {
        let mut reply = session.send_message(message).await?;

        loop {
            let call = match reply.first_part() {
                Some(Part::FunctionCall { function_call }) => function_call.clone(),
                Some(Part::Text { text }) => {
                    tracker.advance(TurnState::Done);
                    return Ok((text.clone(), false));
                }
                other => {
                    debug!(
                        part = ?other,
                        finish_reason = ?reply.finish_reason,
                        "Reply has no usable part, using fallback"
                    );
                    tracker.advance(TurnState::Done);
                    return Ok((FALLBACK_ANSWER.to_string(), true));
                }
            };

            if tracker.round_trips() >= self.config.max_round_trips {
                return Err(AgentError::MaxRoundTripsExceeded {
                    max_round_trips: self.config.max_round_trips,
                }
                .into());
            }

            tracker.advance(TurnState::AwaitingToolResult);
            debug!(tool = %call.name, args = %call.args, "Model requested function");
            let result = self
                .dispatcher
                .dispatch(&ToolCall::new(call.name.clone(), call.args.clone()))?;

            tracker.advance(TurnState::AwaitingModel);
            reply = session
                .send_function_result(&call.name, result.to_payload())
                .await?;
        }
    }
}

#[async_trait]
impl ChatAgent for FaqAgent {
    async fn chat(&self, message: &str) -> Result<String> {
        FaqAgent::chat(self, message).await
    }

    fn agent_type(&self) -> &str {
        "faq"
    }
}
