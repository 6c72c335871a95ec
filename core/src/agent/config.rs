//! Agent configuration structures

use super::core::FaqAgent;
use crate::config::ResolvedLlmConfig;
use crate::error::{ConfigError, Result};
use crate::llm::{GeminiClient, GenerationConfig, LlmClient};
use crate::tools::ToolRegistry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Configuration for an agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Maximum function-call round trips per turn
    pub max_round_trips: usize,

    /// Wall-clock budget for a whole turn, in milliseconds
    pub turn_timeout_ms: u64,

    /// Custom system instruction (optional)
    /// If not provided, the default FAQ assistant instruction is used
    #[serde(default)]
    pub system_prompt: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_round_trips: 8,
            turn_timeout_ms: 30_000,
            system_prompt: None,
        }
    }
}

/// Builder for creating agents with resolved LLM configuration
pub struct AgentBuilder {
    llm_config: ResolvedLlmConfig,
    agent_config: AgentConfig,
}

impl AgentBuilder {
    /// Create a new agent builder with LLM configuration
    pub fn new(llm_config: ResolvedLlmConfig) -> Self {
        Self {
            llm_config,
            agent_config: AgentConfig::default(),
        }
    }

    /// Set agent configuration
    pub fn with_agent_config(mut self, agent_config: AgentConfig) -> Self {
        self.agent_config = agent_config;
        self
    }

    /// Set system prompt
    pub fn with_system_prompt(mut self, system_prompt: Option<String>) -> Self {
        self.agent_config.system_prompt = system_prompt;
        self
    }

    /// Build the agent against the Gemini API
    pub fn build(self, registry: Arc<ToolRegistry>) -> Result<FaqAgent> {
        self.llm_config
            .validate()
            .map_err(|message| ConfigError::InvalidValue {
                field: "llm".to_string(),
                value: message,
            })?;

        let client: Arc<dyn LlmClient> = Arc::new(GeminiClient::new(&self.llm_config)?);
        Ok(self.build_with_client(client, registry))
    }

    /// Build the agent with an explicit client (for testing or other providers)
    pub fn build_with_client(
        self,
        client: Arc<dyn LlmClient>,
        registry: Arc<ToolRegistry>,
    ) -> FaqAgent {
        let generation_config = GenerationConfig::from(&self.llm_config.params);
        FaqAgent::new(self.agent_config, client, registry, generation_config)
    }
}
