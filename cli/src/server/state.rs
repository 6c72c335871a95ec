//! Shared server state

use faqbot_core::ChatAgent;
use std::sync::Arc;

/// State handed to every handler; cloning only bumps the `Arc`
#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<dyn ChatAgent>,
}

impl AppState {
    pub fn new(agent: Arc<dyn ChatAgent>) -> Self {
        Self { agent }
    }
}
