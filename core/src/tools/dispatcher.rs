//! Dispatches model-issued tool calls to the registry

use crate::error::{Result, ToolError};
use crate::tools::{Arguments, ToolCall, ToolRegistry, ToolResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Normalizes a model's call and routes it to the registered handler
#[derive(Clone)]
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
}

impl ToolDispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Execute a tool call
    ///
    /// Fails with [`ToolError::MalformedArguments`] when the arguments are not
    /// a JSON object and with [`ToolError::NotFound`] for unknown tools.
    /// Argument problems a handler detects itself come back as
    /// [`ToolResult::Error`].
    pub fn dispatch(&self, call: &ToolCall) -> Result<ToolResult> {
        let arguments = normalize_arguments(call)?;

        let start_time = Instant::now();
        let result = self.registry.invoke(&call.name, &arguments)?;
        debug!(
            tool = %call.name,
            is_error = result.is_error(),
            elapsed_us = start_time.elapsed().as_micros() as u64,
            "Tool dispatched"
        );

        Ok(result)
    }
}

/// Round-trip the provider's argument value through JSON text into a map.
///
/// Providers omit the arguments of parameterless calls, so `null` becomes an
/// empty map.
fn normalize_arguments(call: &ToolCall) -> Result<Arguments> {
    if call.arguments.is_null() {
        return Ok(Arguments::new());
    }

    let malformed = |message: String| ToolError::MalformedArguments {
        name: call.name.clone(),
        message,
    };

    let encoded = serde_json::to_string(&call.arguments).map_err(|e| malformed(e.to_string()))?;
    let arguments = serde_json::from_str::<Arguments>(&encoded)
        .map_err(|e| malformed(format!("expected a JSON object: {}", e)))?;

    Ok(arguments)
}
