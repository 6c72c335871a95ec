//! # faqbot Core
//!
//! Core library for faqbot - an FAQ assistant that answers questions by
//! letting a Gemini model call read-only lookup tools over an FAQ table.
//!
//! The pieces are usable on their own: the [`faq`] table, the [`tools`]
//! registry and dispatcher, the [`llm`] schema translator and client, and the
//! [`agent`] loop that ties them together.

// Core modules
pub mod agent;
pub mod config;
pub mod error;
pub mod faq;
pub mod llm;
pub mod tools;

// Re-export commonly used types
pub use agent::{AgentBuilder, AgentConfig, ChatAgent, ChatResponse, FaqAgent, TurnExecution};
pub use config::{ModelParams, ResolvedLlmConfig};
pub use error::{Error, ErrorKind, Result};
pub use faq::{FaqEntry, FaqTable};
pub use tools::{faq_tool_registry, ToolRegistry};

/// Current version of the faqbot-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

