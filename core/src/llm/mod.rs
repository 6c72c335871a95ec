//! LLM client abstractions and implementations

pub mod client;
pub mod message;
pub mod providers;
pub mod schema;
pub mod session;

pub use client::{GenerateRequest, GenerationConfig, LlmClient, ModelReply, Usage};
pub use message::{Content, FunctionCall, FunctionResponse, Part, Role};
pub use providers::*;
pub use schema::{translate, FunctionDeclaration, Schema, SchemaType};
pub use session::ChatSession;
