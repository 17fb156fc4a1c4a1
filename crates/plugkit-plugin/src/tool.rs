//! Tools the plugin exposes to the host

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use plugkit_types::Tool;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// A callable capability the host can hand to the model
#[async_trait]
pub trait ToolFunction: Send + Sync {
    /// Schema the host advertises for this tool
    fn definition(&self) -> Tool;

    /// Run the tool with JSON arguments and return its text output
    async fn execute(&self, args: Value) -> Result<String>;
}

/// Tools keyed by the name in their definition
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn ToolFunction>>,
}

impl ToolRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its definition name, replacing any previous one
    pub fn register(&mut self, tool: impl ToolFunction + 'static) {
        let name = tool.definition().name().to_string();
        debug!(tool = %name, "Registered tool");
        self.tools.insert(name, Arc::new(tool));
    }

    /// Get a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolFunction>> {
        self.tools.get(name).cloned()
    }

    /// Registered tool names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    /// Definitions of every registered tool, sorted by name
    #[must_use]
    pub fn definitions(&self) -> Vec<Tool> {
        self.tools.values().map(|t| t.definition()).collect()
    }

    /// Execute a tool by name
    ///
    /// # Errors
    /// Returns an error if no tool has that name or the tool itself fails.
    pub async fn execute(&self, name: &str, args: Value) -> Result<String> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| anyhow!("Tool '{}' not found", name))?;

        tool.execute(args).await
    }

    /// Number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Example tool that echoes its `message` argument back
pub struct EchoTool;

impl EchoTool {
    /// Name the tool is registered under
    pub const NAME: &'static str = "example_tool";
}

#[async_trait]
impl ToolFunction for EchoTool {
    fn definition(&self) -> Tool {
        Tool::function(
            Self::NAME,
            "An example tool that echoes back the input message",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "message": {
                        "type": "string",
                        "description": "The message to echo"
                    }
                },
                "required": ["message"],
                "additionalProperties": false
            }),
        )
    }

    async fn execute(&self, args: Value) -> Result<String> {
        let message = args
            .get("message")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("Missing 'message' argument"))?;

        Ok(format!("Echo: {message}"))
    }
}
