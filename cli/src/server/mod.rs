//! HTTP surface of the FAQ assistant

pub mod models;
pub mod routes;
pub mod state;

use anyhow::{Context, Result};
use faqbot_core::ChatAgent;
use std::net::SocketAddr;
use tracing::{info, warn};

pub use routes::router;
pub use state::AppState;

/// Bind `port` on all interfaces and serve until Ctrl-C
pub async fn serve(state: AppState, port: u16) -> Result<()> {
    let agent_type = state.agent.agent_type().to_string();
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(agent = %agent_type, "🚀 FAQ Chatbot API listening on http://{}", addr);
    info!("  GET  /            - API info");
    info!("  GET  /test        - Liveness check");
    info!("  POST /chat        - Ask a question");
    info!("  POST /chat/stream - Not implemented");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Could not listen for Ctrl-C, serving until killed");
            std::future::pending::<()>().await
        }
    }
}
