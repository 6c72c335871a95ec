//! Example demonstrating how to give the FAQ agent a custom system prompt
//!
//! The agent is built over a small in-memory FAQ table. The system
//! instruction and the function declarations are printed; if
//! `GEMINI_API_KEY` is set, one question is sent to the model.

use faqbot_core::{
    config::{DEFAULT_BASE_URL, DEFAULT_MODEL},
    faq_tool_registry, AgentBuilder, FaqEntry, FaqTable, ResolvedLlmConfig,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== faqbot Custom System Prompt Example ===\n");

    let table = FaqTable::new(vec![
        FaqEntry {
            id: "1".to_string(),
            question: "What are your opening hours?".to_string(),
            answer: "We are open 9am to 5pm, Monday to Friday.".to_string(),
            category: "General".to_string(),
            tags: vec!["hours".to_string()],
        },
        FaqEntry {
            id: "2".to_string(),
            question: "How do I get a refund?".to_string(),
            answer: "Contact support within 30 days of purchase.".to_string(),
            category: "Billing".to_string(),
            tags: vec!["refund".to_string(), "money".to_string()],
        },
    ])?;
    let registry = Arc::new(faq_tool_registry(Arc::new(table))?);

    let api_key = std::env::var("GEMINI_API_KEY").ok();
    let llm_config = ResolvedLlmConfig::new(
        DEFAULT_BASE_URL.to_string(),
        api_key.clone().unwrap_or_else(|| "example-key".to_string()),
        DEFAULT_MODEL.to_string(),
    );

    let agent = AgentBuilder::new(llm_config)
        .with_system_prompt(Some(
            "You are the support desk of a small bookshop. \
             Answer only from the FAQ tools and keep replies to two sentences."
                .to_string(),
        ))
        .build(registry)?;

    println!("System instruction:\n{}\n", agent.system_instruction());
    println!("Function declarations:");
    for declaration in agent.declarations() {
        println!("  - {}", declaration.name);
    }

    if api_key.is_none() {
        println!("\nSet GEMINI_API_KEY to send a question to the model.");
        return Ok(());
    }

    let execution = agent.execute_turn("Can I get my money back?").await?;
    println!(
        "\nAnswer ({} round trips, {} ms):\n{}",
        execution.round_trips, execution.duration_ms, execution.final_answer
    );

    Ok(())
}
