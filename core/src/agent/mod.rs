//! Agent core logic and turn execution

pub mod base;
pub mod config;
pub mod core;
pub mod execution;
pub mod prompt;
pub mod state;

pub use base::ChatAgent;
pub use config::{AgentBuilder, AgentConfig};
pub use core::FaqAgent;
pub use execution::{ChatResponse, TurnExecution};
pub use prompt::{build_system_instruction, FALLBACK_ANSWER, SYSTEM_INSTRUCTION};
pub use state::{StateTracker, TurnState};
