//! Tool system and built-in tools

pub mod base;
pub mod builtin;
pub mod dispatcher;
pub mod registry;

pub use base::{
    require_string, Arguments, FnTool, ParamSpec, ParamType, Tool, ToolCall, ToolResult, ToolSpec,
};
pub use builtin::faq_tool_registry;
pub use dispatcher::ToolDispatcher;
pub use registry::ToolRegistry;
