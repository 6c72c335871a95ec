//! HTTP server command

use crate::config::CliConfigLoader;
use crate::server::{self, AppState};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Start the chat API
pub async fn serve_command(config_loader: CliConfigLoader) -> Result<()> {
    let settings = config_loader.load().await?;
    let agent = super::build_agent(&settings).await?;

    info!(
        max_round_trips = agent.config().max_round_trips,
        turn_timeout_ms = agent.config().turn_timeout_ms,
        "Agent limits"
    );

    server::serve(AppState::new(Arc::new(agent)), settings.port).await
}
