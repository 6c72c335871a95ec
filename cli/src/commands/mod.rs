//! CLI command implementations

pub mod ask;
pub mod serve;
pub mod tools;

pub use ask::ask_command;
pub use serve::serve_command;
pub use tools::tools_command;

use crate::config::Settings;
use anyhow::{Context, Result};
use faqbot_core::{faq_tool_registry, AgentBuilder, FaqAgent, FaqTable, ToolRegistry};
use std::sync::Arc;
use tracing::info;

/// Load the FAQ document and wrap it in the lookup tools
pub(crate) async fn load_registry(settings: &Settings) -> Result<Arc<ToolRegistry>> {
    let table = FaqTable::load(&settings.faq_data_path)
        .await
        .with_context(|| {
            format!(
                "Failed to load FAQ data from {}",
                settings.faq_data_path.display()
            )
        })?;

    let registry = faq_tool_registry(Arc::new(table)).context("Failed to register FAQ tools")?;
    Ok(Arc::new(registry))
}

/// Build the Gemini-backed agent from settings
pub(crate) async fn build_agent(settings: &Settings) -> Result<FaqAgent> {
    let registry = load_registry(settings).await?;
    let llm_config = settings.llm_config()?;

    info!("🤖 Using model: {}", llm_config.model);
    info!("⚙️  Configuration: {}", settings.source);

    let agent = AgentBuilder::new(llm_config)
        .with_agent_config(settings.agent.clone())
        .build(registry)?;
    Ok(agent)
}
