//! Tool registry for managing available tools

use crate::error::{Result, ToolError};
use crate::tools::{Arguments, FnTool, Tool, ToolResult, ToolSpec};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Name-indexed set of tools.
///
/// Populated once at startup, then shared read-only (`Arc<ToolRegistry>`)
/// across every conversation.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    by_name: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool; names must be unique
    pub fn register<T: Tool + 'static>(&mut self, tool: T) -> Result<()> {
        let name = tool.name().to_string();
        if self.by_name.contains_key(&name) {
            return Err(ToolError::AlreadyRegistered { name }.into());
        }

        self.by_name.insert(name.clone(), self.tools.len());
        self.tools.push(Arc::new(tool));
        debug!("Registered tool: {}", name);
        Ok(())
    }

    /// Register a closure under `spec`
    pub fn register_fn<F>(&mut self, spec: ToolSpec, handler: F) -> Result<()>
    where
        F: Fn(&Arguments) -> ToolResult + Send + Sync + 'static,
    {
        self.register(FnTool::new(spec, handler))
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn Tool> {
        self.by_name.get(name).map(|&i| self.tools[i].as_ref())
    }

    /// Specs of all tools, in registration order
    pub fn list_specs(&self) -> Vec<&ToolSpec> {
        self.tools.iter().map(|tool| tool.spec()).collect()
    }

    /// Names of all tools, in registration order
    pub fn list_tools(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Invoke the named tool
    pub fn invoke(&self, name: &str, arguments: &Arguments) -> Result<ToolResult> {
        let tool = self.get_tool(name).ok_or_else(|| ToolError::NotFound {
            name: name.to_string(),
        })?;

        Ok(tool.invoke(arguments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};
    use crate::tools::{require_string, ParamType};
    use serde_json::json;

    fn echo_spec() -> ToolSpec {
        ToolSpec::new("echo", "Echo the text back").with_param(
            "text",
            ParamType::String,
            "Text to echo",
            true,
        )
    }

    fn echo_registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry
            .register_fn(echo_spec(), |args| match require_string(args, "text") {
                Ok(text) => ToolResult::text(text),
                Err(err) => err,
            })
            .unwrap();
        registry
    }

    #[test]
    fn test_invoke_registered_tool() {
        let registry = echo_registry();
        let mut args = Arguments::new();
        args.insert("text".to_string(), json!("hello"));

        let result = registry.invoke("echo", &args).unwrap();
        assert_eq!(result, ToolResult::text("hello"));
    }

    #[test]
    fn test_invoke_unknown_tool() {
        let registry = echo_registry();
        let err = registry.invoke("missing", &Arguments::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ToolNotFound);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = echo_registry();
        let err = registry
            .register_fn(echo_spec(), |_| ToolResult::text(""))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Tool(ToolError::AlreadyRegistered { ref name }) if name == "echo"
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_list_specs_in_registration_order() {
        let mut registry = ToolRegistry::new();
        for name in ["zeta", "alpha", "mid"] {
            registry
                .register_fn(ToolSpec::new(name, "test tool"), |_| ToolResult::text("ok"))
                .unwrap();
        }

        let names: Vec<_> = registry.list_specs().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(registry.list_tools(), names);
    }

    #[test]
    fn test_missing_argument_is_a_result_not_an_error() {
        let registry = echo_registry();
        let result = registry.invoke("echo", &Arguments::new()).unwrap();
        assert_eq!(result, ToolResult::error("text must be a string"));
    }
}
