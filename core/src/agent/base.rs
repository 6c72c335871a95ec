//! Base agent trait

use crate::error::Result;
use async_trait::async_trait;

/// Anything that can answer a single user message
#[async_trait]
pub trait ChatAgent: Send + Sync {
    /// Run one turn and return the final answer
    async fn chat(&self, message: &str) -> Result<String>;

    /// Get the agent's name/type
    fn agent_type(&self) -> &str;
}
