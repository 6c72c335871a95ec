//! Single question command

use crate::config::CliConfigLoader;
use anyhow::Result;
use faqbot_core::ChatResponse;
use tracing::info;

/// Answer one question and exit
pub async fn ask_command(message: String, config_loader: CliConfigLoader, json: bool) -> Result<()> {
    let settings = config_loader.load().await?;
    let agent = super::build_agent(&settings).await?;

    let result = agent.execute_turn(&message).await;

    if json {
        let answer = result.map(|execution| execution.final_answer);
        let response = ChatResponse::from_result(&answer);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return answer.map(|_| ()).map_err(Into::into);
    }

    let execution = result?;
    info!(
        round_trips = execution.round_trips,
        model_sends = execution.model_sends,
        duration_ms = execution.duration_ms,
        "Turn finished"
    );
    println!("{}", execution.final_answer);

    Ok(())
}
